//! 领域异常（Thing Exception）
//!
//! 错误响应中携带的结构化异常。分类固定为两类：
//! - `NotAccessible`：映射为 404，与“不存在”不可区分，避免向无权限调用方泄露存在性；
//! - `NotModifiable`：映射为 403，资源可见但写入被拒绝。
//!
//! 这些异常是业务结果，作为数据随错误响应流转，而不是以 `Err` 抛出。
//!
use crate::pointer::JsonPointer;
use crate::response::HttpStatus;
use crate::value_object::ThingId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 异常分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorClass {
    NotAccessible,
    NotModifiable,
}

impl ErrorClass {
    pub fn status(&self) -> HttpStatus {
        match self {
            ErrorClass::NotAccessible => HttpStatus::NotFound,
            ErrorClass::NotModifiable => HttpStatus::Forbidden,
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ThingException {
    // --- Thing ---
    #[error(
        "The Thing with ID '{thing_id}' could not be found or requester had insufficient permissions to access it."
    )]
    ThingNotAccessible { thing_id: ThingId },
    #[error(
        "The Thing with ID '{thing_id}' could not be modified as the requester had insufficient permissions to modify it."
    )]
    ThingNotModifiable { thing_id: ThingId },

    // --- Attributes ---
    #[error(
        "The Attributes of the Thing with ID '{thing_id}' do not exist or the requester had insufficient permissions to access them."
    )]
    AttributesNotAccessible { thing_id: ThingId },
    #[error(
        "The Attributes of the Thing with ID '{thing_id}' cannot be modified as the requester had insufficient permissions to modify them."
    )]
    AttributesNotModifiable { thing_id: ThingId },
    #[error(
        "The Attribute with key '{pointer}' on the Thing with ID '{thing_id}' could not be found or the requester had insufficient permissions to access it."
    )]
    AttributeNotAccessible { thing_id: ThingId, pointer: JsonPointer },
    #[error(
        "The Attribute with key '{pointer}' on the Thing with ID '{thing_id}' cannot be modified as the requester had insufficient permissions to modify it."
    )]
    AttributeNotModifiable { thing_id: ThingId, pointer: JsonPointer },

    // --- Features ---
    #[error(
        "The Features on the Thing with ID '{thing_id}' do not exist or the requester had insufficient permissions to access them."
    )]
    FeaturesNotAccessible { thing_id: ThingId },
    #[error(
        "The Features on the Thing with ID '{thing_id}' cannot be modified as the requester had insufficient permissions to modify them."
    )]
    FeaturesNotModifiable { thing_id: ThingId },
    #[error(
        "The Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' could not be found or the requester had insufficient permissions to access it."
    )]
    FeatureNotAccessible { thing_id: ThingId, feature_id: String },
    #[error(
        "The Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' cannot be modified as the requester had insufficient permissions to modify it."
    )]
    FeatureNotModifiable { thing_id: ThingId, feature_id: String },
    #[error(
        "The Definition of the Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' does not exist or the requester had insufficient permissions to access it."
    )]
    FeatureDefinitionNotAccessible { thing_id: ThingId, feature_id: String },
    #[error(
        "The Definition of the Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' cannot be modified as the requester had insufficient permissions to modify it."
    )]
    FeatureDefinitionNotModifiable { thing_id: ThingId, feature_id: String },
    #[error(
        "The Properties of the Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' do not exist or the requester had insufficient permissions to access them."
    )]
    FeaturePropertiesNotAccessible { thing_id: ThingId, feature_id: String },
    #[error(
        "The Properties of the Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' cannot be modified as the requester had insufficient permissions to modify them."
    )]
    FeaturePropertiesNotModifiable { thing_id: ThingId, feature_id: String },
    #[error(
        "The Property with JSON Pointer '{pointer}' of the Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' does not exist or the requester had insufficient permissions to access it."
    )]
    FeaturePropertyNotAccessible {
        thing_id: ThingId,
        feature_id: String,
        pointer: JsonPointer,
    },
    #[error(
        "The Property with JSON Pointer '{pointer}' of the Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' cannot be modified as the requester had insufficient permissions to modify it."
    )]
    FeaturePropertyNotModifiable {
        thing_id: ThingId,
        feature_id: String,
        pointer: JsonPointer,
    },
    #[error(
        "The desired Properties of the Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' do not exist or the requester had insufficient permissions to access them."
    )]
    FeatureDesiredPropertiesNotAccessible { thing_id: ThingId, feature_id: String },
    #[error(
        "The desired Properties of the Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' cannot be modified as the requester had insufficient permissions to modify them."
    )]
    FeatureDesiredPropertiesNotModifiable { thing_id: ThingId, feature_id: String },
    #[error(
        "The desired Property with JSON Pointer '{pointer}' of the Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' does not exist or the requester had insufficient permissions to access it."
    )]
    FeatureDesiredPropertyNotAccessible {
        thing_id: ThingId,
        feature_id: String,
        pointer: JsonPointer,
    },
    #[error(
        "The desired Property with JSON Pointer '{pointer}' of the Feature with ID '{feature_id}' on the Thing with ID '{thing_id}' cannot be modified as the requester had insufficient permissions to modify it."
    )]
    FeatureDesiredPropertyNotModifiable {
        thing_id: ThingId,
        feature_id: String,
        pointer: JsonPointer,
    },
}

/// 按资源与分类构造异常
impl ThingException {
    pub fn thing(class: ErrorClass, thing_id: ThingId) -> Self {
        match class {
            ErrorClass::NotAccessible => Self::ThingNotAccessible { thing_id },
            ErrorClass::NotModifiable => Self::ThingNotModifiable { thing_id },
        }
    }

    pub fn attributes(class: ErrorClass, thing_id: ThingId) -> Self {
        match class {
            ErrorClass::NotAccessible => Self::AttributesNotAccessible { thing_id },
            ErrorClass::NotModifiable => Self::AttributesNotModifiable { thing_id },
        }
    }

    pub fn attribute(class: ErrorClass, thing_id: ThingId, pointer: JsonPointer) -> Self {
        match class {
            ErrorClass::NotAccessible => Self::AttributeNotAccessible { thing_id, pointer },
            ErrorClass::NotModifiable => Self::AttributeNotModifiable { thing_id, pointer },
        }
    }

    pub fn features(class: ErrorClass, thing_id: ThingId) -> Self {
        match class {
            ErrorClass::NotAccessible => Self::FeaturesNotAccessible { thing_id },
            ErrorClass::NotModifiable => Self::FeaturesNotModifiable { thing_id },
        }
    }

    pub fn feature(class: ErrorClass, thing_id: ThingId, feature_id: String) -> Self {
        match class {
            ErrorClass::NotAccessible => Self::FeatureNotAccessible {
                thing_id,
                feature_id,
            },
            ErrorClass::NotModifiable => Self::FeatureNotModifiable {
                thing_id,
                feature_id,
            },
        }
    }

    pub fn feature_definition(class: ErrorClass, thing_id: ThingId, feature_id: String) -> Self {
        match class {
            ErrorClass::NotAccessible => Self::FeatureDefinitionNotAccessible {
                thing_id,
                feature_id,
            },
            ErrorClass::NotModifiable => Self::FeatureDefinitionNotModifiable {
                thing_id,
                feature_id,
            },
        }
    }

    pub fn feature_properties(class: ErrorClass, thing_id: ThingId, feature_id: String) -> Self {
        match class {
            ErrorClass::NotAccessible => Self::FeaturePropertiesNotAccessible {
                thing_id,
                feature_id,
            },
            ErrorClass::NotModifiable => Self::FeaturePropertiesNotModifiable {
                thing_id,
                feature_id,
            },
        }
    }

    pub fn feature_property(
        class: ErrorClass,
        thing_id: ThingId,
        feature_id: String,
        pointer: JsonPointer,
    ) -> Self {
        match class {
            ErrorClass::NotAccessible => Self::FeaturePropertyNotAccessible {
                thing_id,
                feature_id,
                pointer,
            },
            ErrorClass::NotModifiable => Self::FeaturePropertyNotModifiable {
                thing_id,
                feature_id,
                pointer,
            },
        }
    }

    pub fn feature_desired_properties(
        class: ErrorClass,
        thing_id: ThingId,
        feature_id: String,
    ) -> Self {
        match class {
            ErrorClass::NotAccessible => Self::FeatureDesiredPropertiesNotAccessible {
                thing_id,
                feature_id,
            },
            ErrorClass::NotModifiable => Self::FeatureDesiredPropertiesNotModifiable {
                thing_id,
                feature_id,
            },
        }
    }

    pub fn feature_desired_property(
        class: ErrorClass,
        thing_id: ThingId,
        feature_id: String,
        pointer: JsonPointer,
    ) -> Self {
        match class {
            ErrorClass::NotAccessible => Self::FeatureDesiredPropertyNotAccessible {
                thing_id,
                feature_id,
                pointer,
            },
            ErrorClass::NotModifiable => Self::FeatureDesiredPropertyNotModifiable {
                thing_id,
                feature_id,
                pointer,
            },
        }
    }
}

impl ThingException {
    pub fn class(&self) -> ErrorClass {
        use ThingException::*;
        match self {
            ThingNotAccessible { .. }
            | AttributesNotAccessible { .. }
            | AttributeNotAccessible { .. }
            | FeaturesNotAccessible { .. }
            | FeatureNotAccessible { .. }
            | FeatureDefinitionNotAccessible { .. }
            | FeaturePropertiesNotAccessible { .. }
            | FeaturePropertyNotAccessible { .. }
            | FeatureDesiredPropertiesNotAccessible { .. }
            | FeatureDesiredPropertyNotAccessible { .. } => ErrorClass::NotAccessible,
            ThingNotModifiable { .. }
            | AttributesNotModifiable { .. }
            | AttributeNotModifiable { .. }
            | FeaturesNotModifiable { .. }
            | FeatureNotModifiable { .. }
            | FeatureDefinitionNotModifiable { .. }
            | FeaturePropertiesNotModifiable { .. }
            | FeaturePropertyNotModifiable { .. }
            | FeatureDesiredPropertiesNotModifiable { .. }
            | FeatureDesiredPropertyNotModifiable { .. } => ErrorClass::NotModifiable,
        }
    }

    pub fn status(&self) -> HttpStatus {
        self.class().status()
    }

    /// 稳定的错误码（如 `things:attribute.notfound`）
    pub fn error_code(&self) -> &'static str {
        use ThingException::*;
        match self {
            ThingNotAccessible { .. } => "things:thing.notfound",
            ThingNotModifiable { .. } => "things:thing.notmodifiable",
            AttributesNotAccessible { .. } => "things:attributes.notfound",
            AttributesNotModifiable { .. } => "things:attributes.notmodifiable",
            AttributeNotAccessible { .. } => "things:attribute.notfound",
            AttributeNotModifiable { .. } => "things:attribute.notmodifiable",
            FeaturesNotAccessible { .. } => "things:features.notfound",
            FeaturesNotModifiable { .. } => "things:features.notmodifiable",
            FeatureNotAccessible { .. } => "things:feature.notfound",
            FeatureNotModifiable { .. } => "things:feature.notmodifiable",
            FeatureDefinitionNotAccessible { .. } => "things:feature.definition.notfound",
            FeatureDefinitionNotModifiable { .. } => "things:feature.definition.notmodifiable",
            FeaturePropertiesNotAccessible { .. } => "things:feature.properties.notfound",
            FeaturePropertiesNotModifiable { .. } => "things:feature.properties.notmodifiable",
            FeaturePropertyNotAccessible { .. } => "things:feature.property.notfound",
            FeaturePropertyNotModifiable { .. } => "things:feature.property.notmodifiable",
            FeatureDesiredPropertiesNotAccessible { .. } => {
                "things:feature.desiredProperties.notfound"
            }
            FeatureDesiredPropertiesNotModifiable { .. } => {
                "things:feature.desiredProperties.notmodifiable"
            }
            FeatureDesiredPropertyNotAccessible { .. } => "things:feature.desiredProperty.notfound",
            FeatureDesiredPropertyNotModifiable { .. } => {
                "things:feature.desiredProperty.notmodifiable"
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self.class() {
            ErrorClass::NotAccessible => {
                "Check if the ID of the Thing and the addressed resource was correct and you have sufficient permissions."
            }
            ErrorClass::NotModifiable => {
                "Check if the ID of the Thing and the addressed resource was correct and you have sufficient permissions to modify it."
            }
        }
    }

    pub fn thing_id(&self) -> &ThingId {
        use ThingException::*;
        match self {
            ThingNotAccessible { thing_id }
            | ThingNotModifiable { thing_id }
            | AttributesNotAccessible { thing_id }
            | AttributesNotModifiable { thing_id }
            | AttributeNotAccessible { thing_id, .. }
            | AttributeNotModifiable { thing_id, .. }
            | FeaturesNotAccessible { thing_id }
            | FeaturesNotModifiable { thing_id }
            | FeatureNotAccessible { thing_id, .. }
            | FeatureNotModifiable { thing_id, .. }
            | FeatureDefinitionNotAccessible { thing_id, .. }
            | FeatureDefinitionNotModifiable { thing_id, .. }
            | FeaturePropertiesNotAccessible { thing_id, .. }
            | FeaturePropertiesNotModifiable { thing_id, .. }
            | FeaturePropertyNotAccessible { thing_id, .. }
            | FeaturePropertyNotModifiable { thing_id, .. }
            | FeatureDesiredPropertiesNotAccessible { thing_id, .. }
            | FeatureDesiredPropertiesNotModifiable { thing_id, .. }
            | FeatureDesiredPropertyNotAccessible { thing_id, .. }
            | FeatureDesiredPropertyNotModifiable { thing_id, .. } => thing_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thing_id() -> ThingId {
        "ns:thing1".parse().unwrap()
    }

    #[test]
    fn classification_maps_to_status() {
        let hidden = ThingException::AttributeNotAccessible {
            thing_id: thing_id(),
            pointer: "/location".parse().unwrap(),
        };
        let denied = ThingException::AttributeNotModifiable {
            thing_id: thing_id(),
            pointer: "/location".parse().unwrap(),
        };

        assert_eq!(hidden.class(), ErrorClass::NotAccessible);
        assert_eq!(hidden.status(), HttpStatus::NotFound);
        assert_eq!(denied.class(), ErrorClass::NotModifiable);
        assert_eq!(denied.status(), HttpStatus::Forbidden);
    }

    #[test]
    fn message_and_code() {
        let err = ThingException::FeaturePropertyNotModifiable {
            thing_id: thing_id(),
            feature_id: "lamp".into(),
            pointer: "/on".parse().unwrap(),
        };
        assert_eq!(err.error_code(), "things:feature.property.notmodifiable");
        let msg = err.to_string();
        assert!(msg.contains("'/on'"));
        assert!(msg.contains("'lamp'"));
        assert!(msg.contains("'ns:thing1'"));
        assert_eq!(err.thing_id(), &thing_id());
    }

    #[test]
    fn classed_constructors_keep_class() {
        for class in [ErrorClass::NotAccessible, ErrorClass::NotModifiable] {
            let built = [
                ThingException::thing(class, thing_id()),
                ThingException::attribute(class, thing_id(), "/a".parse().unwrap()),
                ThingException::feature_definition(class, thing_id(), "lamp".into()),
                ThingException::feature_desired_property(
                    class,
                    thing_id(),
                    "lamp".into(),
                    "/on".parse().unwrap(),
                ),
            ];
            for exception in built {
                assert_eq!(exception.class(), class);
                assert_eq!(exception.thing_id(), &thing_id());
            }
        }
    }

    #[test]
    fn serializes_with_error_tag() {
        let err = ThingException::ThingNotAccessible { thing_id: thing_id() };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "thingNotAccessible", "thingId": "ns:thing1" })
        );
    }
}
