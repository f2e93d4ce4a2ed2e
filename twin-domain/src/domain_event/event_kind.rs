use serde::{Deserialize, Serialize};

/// 事件作用的资源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventSubject {
    Thing,
    Attributes,
    Attribute,
    Features,
    Feature,
    FeatureDefinition,
    FeatureProperties,
    FeatureProperty,
    FeatureDesiredProperties,
    FeatureDesiredProperty,
}

impl EventSubject {
    pub fn name(&self) -> &'static str {
        match self {
            EventSubject::Thing => "Thing",
            EventSubject::Attributes => "Attributes",
            EventSubject::Attribute => "Attribute",
            EventSubject::Features => "Features",
            EventSubject::Feature => "Feature",
            EventSubject::FeatureDefinition => "FeatureDefinition",
            EventSubject::FeatureProperties => "FeatureProperties",
            EventSubject::FeatureProperty => "FeatureProperty",
            EventSubject::FeatureDesiredProperties => "FeatureDesiredProperties",
            EventSubject::FeatureDesiredProperty => "FeatureDesiredProperty",
        }
    }

    /// 类型字符串中的小驼峰形式
    fn wire(&self) -> &'static str {
        match self {
            EventSubject::Thing => "thing",
            EventSubject::Attributes => "attributes",
            EventSubject::Attribute => "attribute",
            EventSubject::Features => "features",
            EventSubject::Feature => "feature",
            EventSubject::FeatureDefinition => "featureDefinition",
            EventSubject::FeatureProperties => "featureProperties",
            EventSubject::FeatureProperty => "featureProperty",
            EventSubject::FeatureDesiredProperties => "featureDesiredProperties",
            EventSubject::FeatureDesiredProperty => "featureDesiredProperty",
        }
    }
}

/// 资源上发生的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventAction {
    Created,
    Modified,
    Deleted,
    Merged,
}

impl EventAction {
    pub fn name(&self) -> &'static str {
        match self {
            EventAction::Created => "Created",
            EventAction::Modified => "Modified",
            EventAction::Deleted => "Deleted",
            EventAction::Merged => "Merged",
        }
    }

    /// 事件名称，如 `AttributeDeleted`
    pub fn event_name(&self, subject: EventSubject) -> String {
        format!("{}{}", subject.name(), self.name())
    }

    /// 事件类型字符串，如 `things.events:attributeDeleted`
    pub fn event_type(&self, subject: EventSubject) -> String {
        format!("things.events:{}{}", subject.wire(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_combine_subject_and_action() {
        assert_eq!(
            EventAction::Deleted.event_name(EventSubject::Attribute),
            "AttributeDeleted"
        );
        assert_eq!(
            EventAction::Modified.event_type(EventSubject::FeatureDesiredProperty),
            "things.events:featureDesiredPropertyModified"
        );
        assert_eq!(
            EventAction::Merged.event_type(EventSubject::Thing),
            "things.events:thingMerged"
        );
    }
}
