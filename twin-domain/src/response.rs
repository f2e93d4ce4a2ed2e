//! 响应（Response）
//!
//! - 成功响应：按结果区分的类型（`ResponseKind`）、资源路径、状态与可选载荷；
//! - 错误响应：包装结构化的 [`ThingException`](crate::exception::ThingException)。
//!
//! 两者的头部都由原始命令头部派生。
//!
use crate::exception::ThingException;
use crate::headers::Headers;
use crate::pointer::JsonPointer;
use crate::value_object::ThingId;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 响应使用的 HTTP 状态类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum HttpStatus {
    Ok,
    Created,
    NoContent,
    Forbidden,
    NotFound,
}

impl HttpStatus {
    pub fn code(&self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::Created => 201,
            HttpStatus::NoContent => 204,
            HttpStatus::Forbidden => 403,
            HttpStatus::NotFound => 404,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code() < 400
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            HttpStatus::Ok => "OK",
            HttpStatus::Created => "Created",
            HttpStatus::NoContent => "No Content",
            HttpStatus::Forbidden => "Forbidden",
            HttpStatus::NotFound => "Not Found",
        };
        write!(f, "{} {}", self.code(), reason)
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u16> for HttpStatus {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(HttpStatus::Ok),
            201 => Ok(HttpStatus::Created),
            204 => Ok(HttpStatus::NoContent),
            403 => Ok(HttpStatus::Forbidden),
            404 => Ok(HttpStatus::NotFound),
            other => Err(format!("unsupported status code {other}")),
        }
    }
}

macro_rules! response_kinds {
    ($($variant:ident => $wire:literal),+ $(,)?) => {
        /// 成功响应的种类，与命令一一对应
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ResponseKind {
            $($variant,)+
        }

        impl ResponseKind {
            /// 响应名称（如 `DeleteAttributeResponse`）
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => concat!(stringify!($variant), "Response"),)+
                }
            }

            /// 响应类型字符串（如 `things.responses:deleteAttribute`）
            pub fn response_type(&self) -> &'static str {
                match self {
                    $(Self::$variant => concat!("things.responses:", $wire),)+
                }
            }
        }
    };
}

response_kinds! {
    CreateThing => "createThing",
    ModifyThing => "modifyThing",
    DeleteThing => "deleteThing",
    MergeThing => "mergeThing",
    ModifyAttributes => "modifyAttributes",
    DeleteAttributes => "deleteAttributes",
    ModifyAttribute => "modifyAttribute",
    DeleteAttribute => "deleteAttribute",
    ModifyFeatures => "modifyFeatures",
    DeleteFeatures => "deleteFeatures",
    ModifyFeature => "modifyFeature",
    DeleteFeature => "deleteFeature",
    ModifyFeatureDefinition => "modifyFeatureDefinition",
    DeleteFeatureDefinition => "deleteFeatureDefinition",
    ModifyFeatureProperties => "modifyFeatureProperties",
    DeleteFeatureProperties => "deleteFeatureProperties",
    ModifyFeatureProperty => "modifyFeatureProperty",
    DeleteFeatureProperty => "deleteFeatureProperty",
    DeleteFeatureDesiredProperties => "deleteFeatureDesiredProperties",
    DeleteFeatureDesiredProperty => "deleteFeatureDesiredProperty",
    RetrieveThing => "retrieveThing",
    RetrieveThings => "retrieveThings",
    RetrieveAttributes => "retrieveAttributes",
    RetrieveAttribute => "retrieveAttribute",
    RetrieveFeatures => "retrieveFeatures",
    RetrieveFeature => "retrieveFeature",
    RetrieveFeatureDefinition => "retrieveFeatureDefinition",
    RetrieveFeatureProperties => "retrieveFeatureProperties",
    RetrieveFeatureProperty => "retrieveFeatureProperty",
    RetrieveFeatureDesiredProperty => "retrieveFeatureDesiredProperty",
}

/// 成功响应
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    kind: ResponseKind,
    /// 批量查询（RetrieveThings）没有单一实体
    entity_id: Option<ThingId>,
    #[builder(default)]
    resource_path: JsonPointer,
    status: HttpStatus,
    payload: Option<Value>,
    /// 批量查询限定的命名空间
    #[serde(default, skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[builder(default)]
    headers: Headers,
}

impl SuccessResponse {
    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn response_type(&self) -> &'static str {
        self.kind.response_type()
    }

    pub fn entity_id(&self) -> Option<&ThingId> {
        self.entity_id.as_ref()
    }

    pub fn resource_path(&self) -> &JsonPointer {
        &self.resource_path
    }

    pub fn status(&self) -> HttpStatus {
        self.status
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}

/// 错误响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    entity_id: Option<ThingId>,
    exception: ThingException,
    headers: Headers,
}

impl ErrorResponse {
    pub const NAME: &'static str = "ThingErrorResponse";
    pub const TYPE: &'static str = "things.responses:errorResponse";

    pub fn new(entity_id: Option<ThingId>, exception: ThingException, headers: Headers) -> Self {
        Self {
            entity_id,
            exception,
            headers,
        }
    }

    pub fn entity_id(&self) -> Option<&ThingId> {
        self.entity_id.as_ref()
    }

    pub fn exception(&self) -> &ThingException {
        &self.exception
    }

    pub fn status(&self) -> HttpStatus {
        self.exception.status()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}

/// 响应：成功或错误
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "response", rename_all = "camelCase")]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Response::Success(r) => r.name(),
            Response::Error(_) => ErrorResponse::NAME,
        }
    }

    pub fn response_type(&self) -> &'static str {
        match self {
            Response::Success(r) => r.response_type(),
            Response::Error(_) => ErrorResponse::TYPE,
        }
    }

    pub fn status(&self) -> HttpStatus {
        match self {
            Response::Success(r) => r.status(),
            Response::Error(r) => r.status(),
        }
    }

    pub fn entity_id(&self) -> Option<&ThingId> {
        match self {
            Response::Success(r) => r.entity_id(),
            Response::Error(r) => r.entity_id(),
        }
    }

    pub fn headers(&self) -> &Headers {
        match self {
            Response::Success(r) => r.headers(),
            Response::Error(r) => r.headers(),
        }
    }

    pub fn as_success(&self) -> Option<&SuccessResponse> {
        match self {
            Response::Success(r) => Some(r),
            Response::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorResponse> {
        match self {
            Response::Error(r) => Some(r),
            Response::Success(_) => None,
        }
    }
}

impl From<SuccessResponse> for Response {
    fn from(response: SuccessResponse) -> Self {
        Response::Success(response)
    }
}

impl From<ErrorResponse> for Response {
    fn from(response: ErrorResponse) -> Self {
        Response::Error(response)
    }
}
