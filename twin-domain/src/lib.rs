//! 数字孪生领域基础库（twin-domain）
//!
//! 提供 Live 命令层与外部协作方共享的领域词汇：
//! - 值对象（`value_object`）：`ThingId`、`Revision` 等
//! - JSON 指针与字段选择器（`pointer`）
//! - 头部信息（`headers`）：关联 ID、是否需要响应、授权主体
//! - Thing/Feature 载荷记录（`thing`）
//! - 通用命令（`command`）、响应（`response`）、领域异常（`exception`）
//! - 变更事件（`domain_event`）
//!
//! 本 crate 不涉及传输、序列化格式与持久化，所有值均为不可变值，
//! “修改”总是产生新的值。
//!
pub mod command;
pub mod domain_event;
pub mod error;
pub mod exception;
pub mod headers;
pub mod pointer;
pub mod response;
pub mod thing;
pub mod value_object;
