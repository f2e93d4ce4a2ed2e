//! 领域层统一错误定义
//!
//! 仅覆盖值对象解析与载荷转换的最小必要集合，
//! 上层 crate 通过 `#[from]` 统一转换为各自的错误类型。
//!
use thiserror::Error;

/// 统一错误类型（领域值最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // --- 值对象 ---
    #[error("invalid thing id: {0}")]
    InvalidThingId(String),
    #[error("invalid json pointer: {reason}")]
    InvalidPointer { reason: String },
    #[error("invalid field selector: {reason}")]
    InvalidFieldSelector { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
