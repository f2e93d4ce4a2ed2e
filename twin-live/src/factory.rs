//! 响应/事件工厂
//!
//! 工厂绑定到发起命令的身份与头部。`ResponseFactory<'_, C>` 与
//! `EventFactory<'_, C>` 对所有变体通用，具体的结果方法（`deleted`、
//! `attribute_not_accessible_error` 等）只在对应变体上以固有方法提供，
//! 因此每个变体的结果集合是封闭的。
//!
//! - 响应头部 = 命令头部 + `response-required=false`；
//! - 事件头部 = 命令头部原样；
//! - 事件修订号恒为 `Revision::UNASSIGNED`，时间取自注入的时钟。
//!
use crate::live_command::LiveCommand;
use serde_json::Value;
use twin_domain::domain_event::{Event, EventAction, EventSubject, Metadata};
use twin_domain::exception::ThingException;
use twin_domain::pointer::JsonPointer;
use twin_domain::response::{ErrorResponse, HttpStatus, Response, SuccessResponse};
use twin_domain::value_object::{Revision, ThingId};

/// 响应工厂
#[derive(Debug)]
pub struct ResponseFactory<'a, C> {
    command: &'a C,
}

impl<'a, C: LiveCommand> ResponseFactory<'a, C> {
    pub(crate) fn new(command: &'a C) -> Self {
        Self { command }
    }

    /// 发起本响应的命令
    pub fn command(&self) -> &'a C {
        self.command
    }

    pub(crate) fn respond(
        &self,
        resource_path: JsonPointer,
        status: HttpStatus,
        payload: Option<Value>,
    ) -> Response {
        let base = self.command.base();
        SuccessResponse::builder()
            .kind(C::RESPONSE_KIND)
            .entity_id(base.entity_id().clone())
            .resource_path(resource_path)
            .status(status)
            .maybe_payload(payload)
            .headers(base.headers().for_response())
            .build()
            .into()
    }

    /// 不针对单一实体的成功响应（批量查询），可限定命名空间
    pub(crate) fn respond_without_entity(
        &self,
        resource_path: JsonPointer,
        status: HttpStatus,
        payload: Option<Value>,
        namespace: Option<String>,
    ) -> Response {
        SuccessResponse::builder()
            .kind(C::RESPONSE_KIND)
            .resource_path(resource_path)
            .status(status)
            .maybe_payload(payload)
            .maybe_namespace(namespace)
            .headers(self.command.base().headers().for_response())
            .build()
            .into()
    }

    pub(crate) fn respond_created(&self, resource_path: JsonPointer, payload: Value) -> Response {
        self.respond(resource_path, HttpStatus::Created, Some(payload))
    }

    pub(crate) fn respond_no_content(&self, resource_path: JsonPointer) -> Response {
        self.respond(resource_path, HttpStatus::NoContent, None)
    }

    pub(crate) fn respond_ok(&self, resource_path: JsonPointer, payload: Value) -> Response {
        self.respond(resource_path, HttpStatus::Ok, Some(payload))
    }

    /// 发起命令的实体 ID，用于构造异常
    pub(crate) fn thing_id(&self) -> ThingId {
        self.command.base().entity_id().clone()
    }

    pub(crate) fn respond_error(&self, exception: ThingException) -> Response {
        let base = self.command.base();
        ErrorResponse::new(
            Some(base.entity_id().clone()),
            exception,
            base.headers().for_response(),
        )
        .into()
    }
}

/// 事件工厂，仅修改类变体提供具体方法
#[derive(Debug)]
pub struct EventFactory<'a, C> {
    command: &'a C,
}

impl<'a, C: LiveCommand> EventFactory<'a, C> {
    pub(crate) fn new(command: &'a C) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &'a C {
        self.command
    }

    pub(crate) fn emit(
        &self,
        subject: EventSubject,
        action: EventAction,
        resource_path: JsonPointer,
        payload: Option<Value>,
    ) -> Event {
        let base = self.command.base();
        let metadata = Metadata::builder()
            .thing_id(base.entity_id().clone())
            .revision(Revision::UNASSIGNED)
            .occurred_at(base.clock().now())
            .build();

        Event::builder()
            .subject(subject)
            .action(action)
            .resource_path(resource_path)
            .maybe_payload(payload)
            .metadata(metadata)
            .headers(base.headers().clone())
            .build()
    }
}

// 资源路径

pub(crate) fn thing_path() -> JsonPointer {
    JsonPointer::empty()
}

pub(crate) fn attributes_path() -> JsonPointer {
    JsonPointer::empty().with_segment("attributes")
}

pub(crate) fn attribute_path(pointer: &JsonPointer) -> JsonPointer {
    attributes_path().append(pointer)
}

pub(crate) fn features_path() -> JsonPointer {
    JsonPointer::empty().with_segment("features")
}

pub(crate) fn feature_path(feature_id: &str) -> JsonPointer {
    features_path().with_segment(feature_id)
}

pub(crate) fn feature_definition_path(feature_id: &str) -> JsonPointer {
    feature_path(feature_id).with_segment("definition")
}

pub(crate) fn feature_properties_path(feature_id: &str) -> JsonPointer {
    feature_path(feature_id).with_segment("properties")
}

pub(crate) fn feature_property_path(feature_id: &str, pointer: &JsonPointer) -> JsonPointer {
    feature_properties_path(feature_id).append(pointer)
}

pub(crate) fn feature_desired_properties_path(feature_id: &str) -> JsonPointer {
    feature_path(feature_id).with_segment("desiredProperties")
}

pub(crate) fn feature_desired_property_path(
    feature_id: &str,
    pointer: &JsonPointer,
) -> JsonPointer {
    feature_desired_properties_path(feature_id).append(pointer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_paths() {
        let pointer: JsonPointer = "/location/lat".parse().unwrap();

        assert_eq!(thing_path().to_string(), "/");
        assert_eq!(attributes_path().to_string(), "/attributes");
        assert_eq!(attribute_path(&pointer).to_string(), "/attributes/location/lat");
        assert_eq!(feature_path("lamp").to_string(), "/features/lamp");
        assert_eq!(
            feature_definition_path("lamp").to_string(),
            "/features/lamp/definition"
        );
        assert_eq!(
            feature_property_path("lamp", &pointer).to_string(),
            "/features/lamp/properties/location/lat"
        );
        assert_eq!(
            feature_desired_property_path("lamp", &pointer).to_string(),
            "/features/lamp/desiredProperties/location/lat"
        );
    }
}
