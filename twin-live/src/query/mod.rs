//! 查询类 Live 命令
//!
//! 查询只有响应轴。`retrieved` 的参数是处理器查到的数据，命令中的字段选择器
//! （若有）在此处应用到响应载荷上。

mod attributes;
mod features;
mod thing;

pub use attributes::{RetrieveAttributeLiveCommand, RetrieveAttributesLiveCommand};
pub use features::{
    RetrieveFeatureDefinitionLiveCommand, RetrieveFeatureDesiredPropertyLiveCommand,
    RetrieveFeatureLiveCommand, RetrieveFeaturePropertiesLiveCommand,
    RetrieveFeaturePropertyLiveCommand, RetrieveFeaturesLiveCommand,
};
pub use thing::{RetrieveThingLiveCommand, RetrieveThingsLiveCommand};

use serde_json::Value;
use twin_domain::pointer::FieldSelector;

/// 按可选的字段选择器裁剪载荷
fn select(selected_fields: Option<&FieldSelector>, value: Value) -> Value {
    match selected_fields {
        Some(selector) => selector.apply(&value),
        None => value,
    }
}
