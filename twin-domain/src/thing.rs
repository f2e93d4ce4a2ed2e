//! Thing 载荷记录
//!
//! 数字孪生的最小数据模型：Thing 由属性（attributes）与特性（features）组成，
//! 每个 Feature 带有定义、属性（properties）与期望属性（desiredProperties）。
//! 字段选择与响应载荷均基于这些记录的 JSON 形态。
//!
use crate::error::{DomainError, DomainResult};
use crate::value_object::ThingId;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Thing 的属性集合（JSON 对象）
pub type Attributes = Map<String, Value>;

/// Feature 的属性集合（JSON 对象）
pub type FeatureProperties = Map<String, Value>;

/// 以 Feature ID 为键的特性集合
pub type Features = BTreeMap<String, Feature>;

/// Feature 定义：一组非空的标识符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureDefinition(Vec<String>);

impl FeatureDefinition {
    pub fn new<I, S>(identifiers: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();
        if identifiers.is_empty() || identifiers.iter().any(|id| id.trim().is_empty()) {
            return Err(DomainError::InvalidValue {
                reason: "feature definition needs at least one non-empty identifier".into(),
            });
        }
        Ok(Self(identifiers))
    }

    pub fn identifiers(&self) -> &[String] {
        &self.0
    }

    pub fn to_json(&self) -> Value {
        json_of(self)
    }
}

impl TryFrom<Vec<String>> for FeatureDefinition {
    type Error = DomainError;

    fn try_from(identifiers: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(identifiers)
    }
}

impl From<FeatureDefinition> for Vec<String> {
    fn from(definition: FeatureDefinition) -> Self {
        definition.0
    }
}

/// 单个 Feature
#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    definition: Option<FeatureDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<FeatureProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    desired_properties: Option<FeatureProperties>,
}

impl Feature {
    pub fn definition(&self) -> Option<&FeatureDefinition> {
        self.definition.as_ref()
    }

    pub fn properties(&self) -> Option<&FeatureProperties> {
        self.properties.as_ref()
    }

    pub fn desired_properties(&self) -> Option<&FeatureProperties> {
        self.desired_properties.as_ref()
    }

    pub fn to_json(&self) -> Value {
        json_of(self)
    }
}

/// 特性集合的 JSON 形态
pub fn features_to_json(features: &Features) -> Value {
    json_of(features)
}

/// 载荷记录只含字符串键，序列化为 `Value` 不会失败
fn json_of<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Thing 记录
#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thing_id: Option<ThingId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    policy_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attributes: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    features: Option<Features>,
}

impl Thing {
    /// 从 JSON 对象解析
    pub fn from_json(value: &Value) -> DomainResult<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn thing_id(&self) -> Option<&ThingId> {
        self.thing_id.as_ref()
    }

    pub fn policy_id(&self) -> Option<&str> {
        self.policy_id.as_deref()
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn features(&self) -> Option<&Features> {
        self.features.as_ref()
    }

    pub fn feature(&self, feature_id: &str) -> Option<&Feature> {
        self.features.as_ref()?.get(feature_id)
    }

    pub fn to_json(&self) -> Value {
        json_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> FeatureProperties {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn thing_to_json_uses_wire_names() {
        let thing = Thing::builder()
            .thing_id("ns:thing1".parse().unwrap())
            .policy_id("ns:policy".to_string())
            .attributes(props(json!({ "location": "kitchen" })))
            .features(Features::from([(
                "lamp".to_string(),
                Feature::builder()
                    .definition(FeatureDefinition::new(["ns:lamp:1.0"]).unwrap())
                    .properties(props(json!({ "on": true })))
                    .build(),
            )]))
            .build();

        let json = thing.to_json();
        assert_eq!(json["thingId"], json!("ns:thing1"));
        assert_eq!(json["policyId"], json!("ns:policy"));
        assert!(json.get("definition").is_none());
        assert_eq!(json["features"]["lamp"]["properties"]["on"], json!(true));
        assert_eq!(json["features"]["lamp"]["definition"], json!(["ns:lamp:1.0"]));
        assert!(json["features"]["lamp"].get("desiredProperties").is_none());
    }

    #[test]
    fn thing_from_json() {
        let thing = Thing::from_json(&json!({
            "thingId": "ns:thing1",
            "features": { "lamp": { "desiredProperties": { "on": false } } }
        }))
        .unwrap();

        assert_eq!(thing.thing_id().map(ToString::to_string).as_deref(), Some("ns:thing1"));
        let lamp = thing.feature("lamp").unwrap();
        assert_eq!(lamp.desired_properties().unwrap()["on"], json!(false));
        assert!(lamp.properties().is_none());
    }

    #[test]
    fn thing_from_json_rejects_bad_id() {
        let err = Thing::from_json(&json!({ "thingId": "no-namespace-separator" })).unwrap_err();
        assert!(matches!(err, DomainError::Serde { .. }));
    }

    #[test]
    fn feature_definition_requires_identifiers() {
        assert!(FeatureDefinition::new(Vec::<String>::new()).is_err());
        assert!(FeatureDefinition::new([" "]).is_err());
        let def = FeatureDefinition::new(["a:b:1", "c:d:2"]).unwrap();
        assert_eq!(def.identifiers().len(), 2);
        assert_eq!(def.to_json(), json!(["a:b:1", "c:d:2"]));
    }

    #[test]
    fn feature_definition_deserialization_validates() {
        assert!(serde_json::from_value::<FeatureDefinition>(json!([])).is_err());
        assert!(serde_json::from_value::<FeatureDefinition>(json!(["", "a:b:1"])).is_err());
        assert!(serde_json::from_value::<Feature>(json!({ "definition": [] })).is_err());

        let def: FeatureDefinition = serde_json::from_value(json!(["ns:lamp:1.0"])).unwrap();
        assert_eq!(def.identifiers(), ["ns:lamp:1.0"]);
    }
}
