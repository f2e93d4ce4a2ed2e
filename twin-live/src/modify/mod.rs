//! 修改类 Live 命令
//!
//! 创建、修改、删除与合并。应答可以携带与响应描述同一状态变化的事件。

mod attributes;
mod feature_properties;
mod features;
mod thing;

pub use attributes::{
    DeleteAttributeLiveCommand, DeleteAttributesLiveCommand, ModifyAttributeLiveCommand,
    ModifyAttributesLiveCommand,
};
pub use feature_properties::{
    DeleteFeatureDesiredPropertiesLiveCommand, DeleteFeatureDesiredPropertyLiveCommand,
    DeleteFeaturePropertiesLiveCommand, DeleteFeaturePropertyLiveCommand,
    ModifyFeaturePropertiesLiveCommand, ModifyFeaturePropertyLiveCommand,
};
pub use features::{
    DeleteFeatureDefinitionLiveCommand, DeleteFeatureLiveCommand, DeleteFeaturesLiveCommand,
    ModifyFeatureDefinitionLiveCommand, ModifyFeatureLiveCommand, ModifyFeaturesLiveCommand,
};
pub use thing::{
    CreateThingLiveCommand, DeleteThingLiveCommand, MergeThingLiveCommand,
    ModifyThingLiveCommand,
};
