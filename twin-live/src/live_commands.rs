//! Live 命令的封闭联合（`LiveCommands`）
//!
//! 注册表返回此枚举；通用操作以穷尽匹配分派到具体变体。
//! 变体清单同时生成注册表的构造表，二者不会失配。
//!
use crate::category::Category;
use crate::clock::Clock;
use crate::error::{LiveError, LiveResult};
use crate::live_command::LiveCommand;
use crate::modify::*;
use crate::query::*;
use std::sync::Arc;
use twin_domain::command::ThingCommand;
use twin_domain::headers::Headers;
use twin_domain::value_object::ThingId;

/// 从通用命令构造 Live 命令的函数
pub type Constructor = fn(ThingCommand, Arc<dyn Clock>) -> LiveResult<LiveCommands>;

fn construct<C>(command: ThingCommand, clock: Arc<dyn Clock>) -> LiveResult<LiveCommands>
where
    C: LiveCommand + Into<LiveCommands>,
{
    Ok(C::from_command(command, clock)?.into())
}

macro_rules! live_commands {
    ($($variant:ident($command:ty)),+ $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum LiveCommands {
            $($variant($command),)+
        }

        impl LiveCommands {
            pub fn command_type(&self) -> &'static str {
                match self {
                    $(Self::$variant(c) => c.command_type(),)+
                }
            }

            pub fn category(&self) -> Category {
                match self {
                    $(Self::$variant(c) => c.category(),)+
                }
            }

            pub fn changes_authorization(&self) -> bool {
                match self {
                    $(Self::$variant(c) => c.changes_authorization(),)+
                }
            }

            pub fn entity_id(&self) -> &ThingId {
                match self {
                    $(Self::$variant(c) => c.entity_id(),)+
                }
            }

            pub fn headers(&self) -> &Headers {
                match self {
                    $(Self::$variant(c) => c.headers(),)+
                }
            }

            /// 返回替换了头部的新命令
            pub fn with_headers(&self, headers: Headers) -> Self {
                match self {
                    $(Self::$variant(c) => Self::$variant(c.with_headers(headers)),)+
                }
            }

            /// 全部变体的类型字符串与构造函数
            pub(crate) fn constructors() -> Vec<(&'static str, Constructor)> {
                vec![
                    $((<$command as LiveCommand>::COMMAND_TYPE, construct::<$command> as Constructor),)+
                ]
            }
        }

        $(
            impl From<$command> for LiveCommands {
                fn from(command: $command) -> Self {
                    Self::$variant(command)
                }
            }

            impl TryFrom<LiveCommands> for $command {
                type Error = LiveError;

                fn try_from(command: LiveCommands) -> Result<Self, Self::Error> {
                    match command {
                        LiveCommands::$variant(c) => Ok(c),
                        other => Err(LiveError::TypeMismatch {
                            expected: <$command as LiveCommand>::COMMAND_TYPE,
                            found: other.command_type(),
                        }),
                    }
                }
            }
        )+
    };
}

live_commands! {
    CreateThing(CreateThingLiveCommand),
    ModifyThing(ModifyThingLiveCommand),
    DeleteThing(DeleteThingLiveCommand),
    MergeThing(MergeThingLiveCommand),
    ModifyAttributes(ModifyAttributesLiveCommand),
    DeleteAttributes(DeleteAttributesLiveCommand),
    ModifyAttribute(ModifyAttributeLiveCommand),
    DeleteAttribute(DeleteAttributeLiveCommand),
    ModifyFeatures(ModifyFeaturesLiveCommand),
    DeleteFeatures(DeleteFeaturesLiveCommand),
    ModifyFeature(ModifyFeatureLiveCommand),
    DeleteFeature(DeleteFeatureLiveCommand),
    ModifyFeatureDefinition(ModifyFeatureDefinitionLiveCommand),
    DeleteFeatureDefinition(DeleteFeatureDefinitionLiveCommand),
    ModifyFeatureProperties(ModifyFeaturePropertiesLiveCommand),
    DeleteFeatureProperties(DeleteFeaturePropertiesLiveCommand),
    ModifyFeatureProperty(ModifyFeaturePropertyLiveCommand),
    DeleteFeatureProperty(DeleteFeaturePropertyLiveCommand),
    DeleteFeatureDesiredProperties(DeleteFeatureDesiredPropertiesLiveCommand),
    DeleteFeatureDesiredProperty(DeleteFeatureDesiredPropertyLiveCommand),
    RetrieveThing(RetrieveThingLiveCommand),
    RetrieveThings(RetrieveThingsLiveCommand),
    RetrieveAttributes(RetrieveAttributesLiveCommand),
    RetrieveAttribute(RetrieveAttributeLiveCommand),
    RetrieveFeatures(RetrieveFeaturesLiveCommand),
    RetrieveFeature(RetrieveFeatureLiveCommand),
    RetrieveFeatureDefinition(RetrieveFeatureDefinitionLiveCommand),
    RetrieveFeatureProperties(RetrieveFeaturePropertiesLiveCommand),
    RetrieveFeatureProperty(RetrieveFeaturePropertyLiveCommand),
    RetrieveFeatureDesiredProperty(RetrieveFeatureDesiredPropertyLiveCommand),
}

impl LiveCommands {
    pub fn is_query(&self) -> bool {
        self.category().is_query()
    }

    pub fn is_modify(&self) -> bool {
        self.category().is_modifying()
    }
}
