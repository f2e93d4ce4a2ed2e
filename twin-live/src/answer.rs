//! 应答（Answer）与应答构建器
//!
//! 构建器有两条轴：响应轴与事件轴。每条轴必须恰好决定一次（给出结果或明确
//! 放弃），顺序不限；所有轴决定后 `build()` 才会产出不可变的 `Answer`。
//! 违反约束时返回 `LiveError::IllegalBuilderState`。
//!
//! - `ModifyAnswerBuilder`：修改类命令，两条轴；
//! - `QueryAnswerBuilder`：查询类命令，只有响应轴，类型上不提供事件方法。
//!
use crate::error::{LiveError, LiveResult};
use crate::factory::{EventFactory, ResponseFactory};
use crate::live_command::LiveCommand;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use twin_domain::domain_event::Event;
use twin_domain::response::Response;

const ERROR_WITH_EVENT: &str = "error response cannot be paired with an event";

/// 最终应答：可选的响应与可选的事件
///
/// 反序列化与 `build()` 遵守同一约束：错误响应不能伴随事件。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AnswerParts")]
pub struct Answer {
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<Response>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<Event>,
}

#[derive(Deserialize)]
struct AnswerParts {
    #[serde(default)]
    response: Option<Response>,
    #[serde(default)]
    event: Option<Event>,
}

impl TryFrom<AnswerParts> for Answer {
    type Error = &'static str;

    fn try_from(parts: AnswerParts) -> Result<Self, Self::Error> {
        if pairs_error_with_event(parts.response.as_ref(), parts.event.as_ref()) {
            return Err(ERROR_WITH_EVENT);
        }
        Ok(Answer {
            response: parts.response,
            event: parts.event,
        })
    }
}

fn pairs_error_with_event(response: Option<&Response>, event: Option<&Event>) -> bool {
    response.is_some_and(Response::is_error) && event.is_some()
}

impl Answer {
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.response.is_none() && self.event.is_none()
    }

    pub fn into_parts(self) -> (Option<Response>, Option<Event>) {
        (self.response, self.event)
    }
}

/// 单条轴的决定状态
#[derive(Debug, Clone, PartialEq)]
enum Decision<T> {
    Pending,
    Set(T),
    Skipped,
}

impl<T> Decision<T> {
    fn is_pending(&self) -> bool {
        matches!(self, Decision::Pending)
    }

    fn into_option(self) -> Option<T> {
        match self {
            Decision::Set(value) => Some(value),
            Decision::Pending | Decision::Skipped => None,
        }
    }
}

fn illegal(command_type: &'static str, reason: &'static str) -> LiveError {
    warn!(command_type, reason, "illegal answer builder use");
    LiveError::IllegalBuilderState {
        command_type,
        reason,
    }
}

fn ensure_pending<T>(
    decision: &Decision<T>,
    command_type: &'static str,
    reason: &'static str,
) -> LiveResult<()> {
    if decision.is_pending() {
        Ok(())
    } else {
        Err(illegal(command_type, reason))
    }
}

/// 修改类命令的应答构建器
#[derive(Debug)]
pub struct ModifyAnswerBuilder<'a, C> {
    command: &'a C,
    response: Decision<Response>,
    event: Decision<Event>,
}

impl<'a, C: LiveCommand> ModifyAnswerBuilder<'a, C> {
    pub(crate) fn new(command: &'a C) -> Self {
        Self {
            command,
            response: Decision::Pending,
            event: Decision::Pending,
        }
    }

    /// 通过响应工厂决定响应
    pub fn with_response<F>(mut self, f: F) -> LiveResult<Self>
    where
        F: FnOnce(ResponseFactory<'a, C>) -> Response,
    {
        ensure_pending(&self.response, C::COMMAND_TYPE, "response already decided")?;
        self.response = Decision::Set(f(ResponseFactory::new(self.command)));
        Ok(self)
    }

    /// 决定不发送响应
    pub fn without_response(mut self) -> LiveResult<Self> {
        ensure_pending(&self.response, C::COMMAND_TYPE, "response already decided")?;
        self.response = Decision::Skipped;
        Ok(self)
    }

    /// 通过事件工厂决定事件
    pub fn with_event<F>(mut self, f: F) -> LiveResult<Self>
    where
        F: FnOnce(EventFactory<'a, C>) -> Event,
    {
        ensure_pending(&self.event, C::COMMAND_TYPE, "event already decided")?;
        self.event = Decision::Set(f(EventFactory::new(self.command)));
        Ok(self)
    }

    /// 决定不发出事件
    pub fn without_event(mut self) -> LiveResult<Self> {
        ensure_pending(&self.event, C::COMMAND_TYPE, "event already decided")?;
        self.event = Decision::Skipped;
        Ok(self)
    }

    pub fn build(self) -> LiveResult<Answer> {
        ensure_decided(&self.response, C::COMMAND_TYPE, "response not decided")?;
        ensure_decided(&self.event, C::COMMAND_TYPE, "event not decided")?;

        let response = self.response.into_option();
        let event = self.event.into_option();
        if pairs_error_with_event(response.as_ref(), event.as_ref()) {
            return Err(illegal(C::COMMAND_TYPE, ERROR_WITH_EVENT));
        }

        debug!(
            command_type = C::COMMAND_TYPE,
            entity_id = %self.command.entity_id(),
            has_response = response.is_some(),
            has_event = event.is_some(),
            "answer built"
        );
        Ok(Answer { response, event })
    }
}

/// 查询类命令的应答构建器
#[derive(Debug)]
pub struct QueryAnswerBuilder<'a, C> {
    command: &'a C,
    response: Decision<Response>,
}

impl<'a, C: LiveCommand> QueryAnswerBuilder<'a, C> {
    pub(crate) fn new(command: &'a C) -> Self {
        Self {
            command,
            response: Decision::Pending,
        }
    }

    pub fn with_response<F>(mut self, f: F) -> LiveResult<Self>
    where
        F: FnOnce(ResponseFactory<'a, C>) -> Response,
    {
        ensure_pending(&self.response, C::COMMAND_TYPE, "response already decided")?;
        self.response = Decision::Set(f(ResponseFactory::new(self.command)));
        Ok(self)
    }

    pub fn without_response(mut self) -> LiveResult<Self> {
        ensure_pending(&self.response, C::COMMAND_TYPE, "response already decided")?;
        self.response = Decision::Skipped;
        Ok(self)
    }

    pub fn build(self) -> LiveResult<Answer> {
        ensure_decided(&self.response, C::COMMAND_TYPE, "response not decided")?;

        let response = self.response.into_option();
        debug!(
            command_type = C::COMMAND_TYPE,
            entity_id = %self.command.entity_id(),
            has_response = response.is_some(),
            "answer built"
        );
        Ok(Answer {
            response,
            event: None,
        })
    }
}

fn ensure_decided<T>(
    decision: &Decision<T>,
    command_type: &'static str,
    reason: &'static str,
) -> LiveResult<()> {
    if decision.is_pending() {
        Err(illegal(command_type, reason))
    } else {
        Ok(())
    }
}
