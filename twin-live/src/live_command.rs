//! Live 命令（Live Command）
//!
//! 每个变体包装恰好一个已知类型的通用命令：
//! - 构造时一次性提取载荷字段，之后不可变；
//! - 分类（`CATEGORY`）与是否变更授权（`CHANGES_AUTHORIZATION`）为关联常量；
//! - `with_headers` 返回替换了头部的新实例。
//!
//! 变体的结构体、`LiveCommand` 实现与 `answer()` 入口由 `live_command!` 生成，
//! 载荷访问器与响应/事件工厂方法在各变体模块中手写。
//!
use crate::category::Category;
use crate::clock::Clock;
use crate::error::LiveResult;
use std::fmt;
use std::sync::Arc;
use twin_domain::command::ThingCommand;
use twin_domain::headers::Headers;
use twin_domain::response::ResponseKind;
use twin_domain::value_object::ThingId;

/// 所有 Live 命令变体的公共能力
pub trait LiveCommand: Clone + fmt::Debug + Send + Sync + Sized {
    /// 命令类型字符串（如 `things.commands:deleteAttribute`）
    const COMMAND_TYPE: &'static str;

    const CATEGORY: Category;

    /// 成功响应的种类
    const RESPONSE_KIND: ResponseKind;

    /// Live 命令从不改变授权信息
    const CHANGES_AUTHORIZATION: bool = false;

    /// 从通用命令构造；载荷形状不符时返回 `TypeMismatch`
    fn from_command(command: ThingCommand, clock: Arc<dyn Clock>) -> LiveResult<Self>;

    fn base(&self) -> &CommandBase;

    /// 返回替换了头部的新命令，载荷与分类不变
    fn with_headers(&self, headers: Headers) -> Self;

    fn command_type(&self) -> &'static str {
        Self::COMMAND_TYPE
    }

    fn category(&self) -> Category {
        Self::CATEGORY
    }

    fn changes_authorization(&self) -> bool {
        Self::CHANGES_AUTHORIZATION
    }

    fn entity_id(&self) -> &ThingId {
        self.base().entity_id()
    }

    fn headers(&self) -> &Headers {
        self.base().headers()
    }
}

/// 各变体共享的命令身份：实体 ID、头部与注入的时钟
#[derive(Clone)]
pub struct CommandBase {
    entity_id: ThingId,
    headers: Headers,
    clock: Arc<dyn Clock>,
}

impl CommandBase {
    pub(crate) fn new(entity_id: ThingId, headers: Headers, clock: Arc<dyn Clock>) -> Self {
        Self {
            entity_id,
            headers,
            clock,
        }
    }

    pub fn entity_id(&self) -> &ThingId {
        &self.entity_id
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub(crate) fn with_headers(&self, headers: Headers) -> Self {
        Self {
            entity_id: self.entity_id.clone(),
            headers,
            clock: Arc::clone(&self.clock),
        }
    }
}

impl fmt::Debug for CommandBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandBase")
            .field("entity_id", &self.entity_id)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

// 时钟不参与相等比较
impl PartialEq for CommandBase {
    fn eq(&self, other: &Self) -> bool {
        self.entity_id == other.entity_id && self.headers == other.headers
    }
}

/// 生成 Live 命令变体
///
/// ```ignore
/// live_command! {
///     /// 删除单个属性
///     modify DeleteAttributeLiveCommand(DeleteAttribute)
///         => types::DELETE_ATTRIBUTE, Category::Delete;
///     { pointer: JsonPointer }
/// }
/// ```
///
/// `modify` 变体的 `answer()` 返回 `ModifyAnswerBuilder`，
/// `query` 变体返回没有事件轴的 `QueryAnswerBuilder`。
macro_rules! live_command {
    (@command
        $(#[$meta:meta])*
        $name:ident($payload:ident) => $command_type:path, $category:expr;
        { $($field:ident : $ty:ty),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            base: $crate::live_command::CommandBase,
            $($field: $ty,)*
        }

        impl $crate::live_command::LiveCommand for $name {
            const COMMAND_TYPE: &'static str = $command_type;
            const CATEGORY: $crate::category::Category = $category;
            const RESPONSE_KIND: ::twin_domain::response::ResponseKind =
                ::twin_domain::response::ResponseKind::$payload;

            fn from_command(
                command: ::twin_domain::command::ThingCommand,
                clock: ::std::sync::Arc<dyn $crate::clock::Clock>,
            ) -> $crate::error::LiveResult<Self> {
                let (entity_id, headers, payload) = command.into_parts();
                match payload {
                    ::twin_domain::command::CommandPayload::$payload { $($field),* } => Ok(Self {
                        base: $crate::live_command::CommandBase::new(entity_id, headers, clock),
                        $($field,)*
                    }),
                    other => Err($crate::error::LiveError::TypeMismatch {
                        expected: $command_type,
                        found: other.command_type(),
                    }),
                }
            }

            fn base(&self) -> &$crate::live_command::CommandBase {
                &self.base
            }

            fn with_headers(&self, headers: ::twin_domain::headers::Headers) -> Self {
                let mut next = self.clone();
                next.base = self.base.with_headers(headers);
                next
            }
        }
    };

    (
        $(#[$meta:meta])*
        modify $name:ident($payload:ident) => $command_type:path, $category:expr;
        { $($fields:tt)* }
    ) => {
        live_command! {
            @command
            $(#[$meta])*
            $name($payload) => $command_type, $category;
            { $($fields)* }
        }

        impl $name {
            /// 创建单次使用的应答构建器（响应轴 + 事件轴）
            pub fn answer(&self) -> $crate::answer::ModifyAnswerBuilder<'_, Self> {
                $crate::answer::ModifyAnswerBuilder::new(self)
            }
        }
    };

    (
        $(#[$meta:meta])*
        query $name:ident($payload:ident) => $command_type:path;
        { $($fields:tt)* }
    ) => {
        live_command! {
            @command
            $(#[$meta])*
            $name($payload) => $command_type, $crate::category::Category::Query;
            { $($fields)* }
        }

        impl $name {
            /// 创建单次使用的应答构建器（仅响应轴）
            pub fn answer(&self) -> $crate::answer::QueryAnswerBuilder<'_, Self> {
                $crate::answer::QueryAnswerBuilder::new(self)
            }
        }
    };
}
