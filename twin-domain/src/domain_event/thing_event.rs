use super::event_kind::{EventAction, EventSubject};
use super::metadata::Metadata;
use crate::headers::Headers;
use crate::pointer::JsonPointer;
use crate::value_object::{Revision, ThingId};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 变更事件
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    subject: EventSubject,
    action: EventAction,
    #[builder(default)]
    resource_path: JsonPointer,
    /// 删除类事件没有载荷
    payload: Option<Value>,
    metadata: Metadata,
    #[builder(default)]
    headers: Headers,
}

impl Event {
    pub fn subject(&self) -> EventSubject {
        self.subject
    }

    pub fn action(&self) -> EventAction {
        self.action
    }

    pub fn name(&self) -> String {
        self.action.event_name(self.subject)
    }

    pub fn event_type(&self) -> String {
        self.action.event_type(self.subject)
    }

    pub fn resource_path(&self) -> &JsonPointer {
        &self.resource_path
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn thing_id(&self) -> &ThingId {
        self.metadata.thing_id()
    }

    pub fn revision(&self) -> Revision {
        self.metadata.revision()
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        self.metadata.occurred_at()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn builder_and_accessors() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let event = Event::builder()
            .subject(EventSubject::FeatureProperty)
            .action(EventAction::Modified)
            .resource_path("/features/lamp/properties/on".parse().unwrap())
            .payload(json!(true))
            .metadata(
                Metadata::builder()
                    .thing_id("ns:thing1".parse().unwrap())
                    .occurred_at(at)
                    .build(),
            )
            .build();

        assert_eq!(event.name(), "FeaturePropertyModified");
        assert_eq!(event.event_type(), "things.events:featurePropertyModified");
        assert_eq!(event.thing_id().to_string(), "ns:thing1");
        assert_eq!(event.revision(), Revision::UNASSIGNED);
        assert_eq!(event.occurred_at(), &at);
        assert_eq!(event.payload(), Some(&json!(true)));
        assert!(event.headers().is_empty());
    }
}
