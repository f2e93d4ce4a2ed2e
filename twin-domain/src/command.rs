//! 通用命令（Thing Command）
//!
//! 上游传输/反序列化层交付的命令形态：类型字符串、实体 ID、头部与载荷。
//! 载荷为封闭枚举，每种命令形状对应一个变体；类型字符串与载荷形状的一致性
//! 由 Live 命令注册表在转换时检查。
//!
use crate::headers::Headers;
use crate::pointer::{FieldSelector, JsonPointer};
use crate::thing::{Attributes, Feature, FeatureDefinition, FeatureProperties, Features, Thing};
use crate::value_object::ThingId;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 已知命令的类型字符串
pub mod types {
    pub const CREATE_THING: &str = "things.commands:createThing";
    pub const MODIFY_THING: &str = "things.commands:modifyThing";
    pub const DELETE_THING: &str = "things.commands:deleteThing";
    pub const MERGE_THING: &str = "things.commands:mergeThing";
    pub const MODIFY_ATTRIBUTES: &str = "things.commands:modifyAttributes";
    pub const DELETE_ATTRIBUTES: &str = "things.commands:deleteAttributes";
    pub const MODIFY_ATTRIBUTE: &str = "things.commands:modifyAttribute";
    pub const DELETE_ATTRIBUTE: &str = "things.commands:deleteAttribute";
    pub const MODIFY_FEATURES: &str = "things.commands:modifyFeatures";
    pub const DELETE_FEATURES: &str = "things.commands:deleteFeatures";
    pub const MODIFY_FEATURE: &str = "things.commands:modifyFeature";
    pub const DELETE_FEATURE: &str = "things.commands:deleteFeature";
    pub const MODIFY_FEATURE_DEFINITION: &str = "things.commands:modifyFeatureDefinition";
    pub const DELETE_FEATURE_DEFINITION: &str = "things.commands:deleteFeatureDefinition";
    pub const MODIFY_FEATURE_PROPERTIES: &str = "things.commands:modifyFeatureProperties";
    pub const DELETE_FEATURE_PROPERTIES: &str = "things.commands:deleteFeatureProperties";
    pub const MODIFY_FEATURE_PROPERTY: &str = "things.commands:modifyFeatureProperty";
    pub const DELETE_FEATURE_PROPERTY: &str = "things.commands:deleteFeatureProperty";
    pub const DELETE_FEATURE_DESIRED_PROPERTIES: &str =
        "things.commands:deleteFeatureDesiredProperties";
    pub const DELETE_FEATURE_DESIRED_PROPERTY: &str =
        "things.commands:deleteFeatureDesiredProperty";

    pub const RETRIEVE_THING: &str = "things.commands:retrieveThing";
    pub const RETRIEVE_THINGS: &str = "things.commands:retrieveThings";
    pub const RETRIEVE_ATTRIBUTES: &str = "things.commands:retrieveAttributes";
    pub const RETRIEVE_ATTRIBUTE: &str = "things.commands:retrieveAttribute";
    pub const RETRIEVE_FEATURES: &str = "things.commands:retrieveFeatures";
    pub const RETRIEVE_FEATURE: &str = "things.commands:retrieveFeature";
    pub const RETRIEVE_FEATURE_DEFINITION: &str = "things.commands:retrieveFeatureDefinition";
    pub const RETRIEVE_FEATURE_PROPERTIES: &str = "things.commands:retrieveFeatureProperties";
    pub const RETRIEVE_FEATURE_PROPERTY: &str = "things.commands:retrieveFeatureProperty";
    pub const RETRIEVE_FEATURE_DESIRED_PROPERTY: &str =
        "things.commands:retrieveFeatureDesiredProperty";
}

/// 命令载荷（按命令形状区分）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CommandPayload {
    // --- 修改类 ---
    CreateThing {
        thing: Thing,
    },
    ModifyThing {
        thing: Thing,
    },
    DeleteThing,
    MergeThing {
        path: JsonPointer,
        value: Value,
    },
    ModifyAttributes {
        attributes: Attributes,
    },
    DeleteAttributes,
    ModifyAttribute {
        pointer: JsonPointer,
        value: Value,
    },
    DeleteAttribute {
        pointer: JsonPointer,
    },
    ModifyFeatures {
        features: Features,
    },
    DeleteFeatures,
    ModifyFeature {
        feature_id: String,
        feature: Feature,
    },
    DeleteFeature {
        feature_id: String,
    },
    ModifyFeatureDefinition {
        feature_id: String,
        definition: FeatureDefinition,
    },
    DeleteFeatureDefinition {
        feature_id: String,
    },
    ModifyFeatureProperties {
        feature_id: String,
        properties: FeatureProperties,
    },
    DeleteFeatureProperties {
        feature_id: String,
    },
    ModifyFeatureProperty {
        feature_id: String,
        pointer: JsonPointer,
        value: Value,
    },
    DeleteFeatureProperty {
        feature_id: String,
        pointer: JsonPointer,
    },
    DeleteFeatureDesiredProperties {
        feature_id: String,
    },
    DeleteFeatureDesiredProperty {
        feature_id: String,
        pointer: JsonPointer,
    },

    // --- 查询类 ---
    RetrieveThing {
        selected_fields: Option<FieldSelector>,
    },
    RetrieveThings {
        thing_ids: Vec<ThingId>,
        selected_fields: Option<FieldSelector>,
        namespace: Option<String>,
    },
    RetrieveAttributes {
        selected_fields: Option<FieldSelector>,
    },
    RetrieveAttribute {
        pointer: JsonPointer,
    },
    RetrieveFeatures {
        selected_fields: Option<FieldSelector>,
    },
    RetrieveFeature {
        feature_id: String,
        selected_fields: Option<FieldSelector>,
    },
    RetrieveFeatureDefinition {
        feature_id: String,
    },
    RetrieveFeatureProperties {
        feature_id: String,
        selected_fields: Option<FieldSelector>,
    },
    RetrieveFeatureProperty {
        feature_id: String,
        pointer: JsonPointer,
    },
    RetrieveFeatureDesiredProperty {
        feature_id: String,
        pointer: JsonPointer,
    },
}

macro_rules! payload_names {
    ($($variant:ident => $command_type:ident),+ $(,)?) => {
        impl CommandPayload {
            /// 载荷形状名称（如 `DeleteAttribute`）
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant),)+
                }
            }

            /// 与该载荷形状对应的命令类型字符串
            pub fn command_type(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => types::$command_type,)+
                }
            }
        }
    };
}

payload_names! {
    CreateThing => CREATE_THING,
    ModifyThing => MODIFY_THING,
    DeleteThing => DELETE_THING,
    MergeThing => MERGE_THING,
    ModifyAttributes => MODIFY_ATTRIBUTES,
    DeleteAttributes => DELETE_ATTRIBUTES,
    ModifyAttribute => MODIFY_ATTRIBUTE,
    DeleteAttribute => DELETE_ATTRIBUTE,
    ModifyFeatures => MODIFY_FEATURES,
    DeleteFeatures => DELETE_FEATURES,
    ModifyFeature => MODIFY_FEATURE,
    DeleteFeature => DELETE_FEATURE,
    ModifyFeatureDefinition => MODIFY_FEATURE_DEFINITION,
    DeleteFeatureDefinition => DELETE_FEATURE_DEFINITION,
    ModifyFeatureProperties => MODIFY_FEATURE_PROPERTIES,
    DeleteFeatureProperties => DELETE_FEATURE_PROPERTIES,
    ModifyFeatureProperty => MODIFY_FEATURE_PROPERTY,
    DeleteFeatureProperty => DELETE_FEATURE_PROPERTY,
    DeleteFeatureDesiredProperties => DELETE_FEATURE_DESIRED_PROPERTIES,
    DeleteFeatureDesiredProperty => DELETE_FEATURE_DESIRED_PROPERTY,
    RetrieveThing => RETRIEVE_THING,
    RetrieveThings => RETRIEVE_THINGS,
    RetrieveAttributes => RETRIEVE_ATTRIBUTES,
    RetrieveAttribute => RETRIEVE_ATTRIBUTE,
    RetrieveFeatures => RETRIEVE_FEATURES,
    RetrieveFeature => RETRIEVE_FEATURE,
    RetrieveFeatureDefinition => RETRIEVE_FEATURE_DEFINITION,
    RetrieveFeatureProperties => RETRIEVE_FEATURE_PROPERTIES,
    RetrieveFeatureProperty => RETRIEVE_FEATURE_PROPERTY,
    RetrieveFeatureDesiredProperty => RETRIEVE_FEATURE_DESIRED_PROPERTY,
}

/// 通用命令
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingCommand {
    #[builder(into)]
    command_type: String,
    entity_id: ThingId,
    #[builder(default)]
    headers: Headers,
    payload: CommandPayload,
}

impl ThingCommand {
    /// 按载荷形状推导类型字符串创建命令
    pub fn of(entity_id: ThingId, payload: CommandPayload, headers: Headers) -> Self {
        Self {
            command_type: payload.command_type().to_string(),
            entity_id,
            headers,
            payload,
        }
    }

    pub fn command_type(&self) -> &str {
        &self.command_type
    }

    pub fn entity_id(&self) -> &ThingId {
        &self.entity_id
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn payload(&self) -> &CommandPayload {
        &self.payload
    }

    /// 拆分为实体 ID、头部与载荷（类型字符串在路由后不再需要）
    pub fn into_parts(self) -> (ThingId, Headers, CommandPayload) {
        (self.entity_id, self.headers, self.payload)
    }
}
