//! 变更事件（Thing Event）
//!
//! 修改类命令在成功时可以附带一个变更事件，描述“哪个资源发生了什么”：
//! - `EventSubject` × `EventAction` 决定事件名称与类型字符串；
//! - `Metadata` 记录 Thing ID、修订号与发生时间；
//! - `Event` 额外携带资源路径、可选载荷与头部。

mod event_kind;
mod metadata;
mod thing_event;

pub use event_kind::{EventAction, EventSubject};
pub use metadata::Metadata;
pub use thing_event::Event;
