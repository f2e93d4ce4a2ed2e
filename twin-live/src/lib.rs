//! Live 命令层（twin-live）
//!
//! 将上游交付的通用命令转换为强类型的 Live 命令，并为本地处理器提供
//! 构造应答（响应 + 事件）的受约束协议：
//! - 命令注册表（`registry`）：类型字符串 → 构造函数；
//! - Live 命令族（`modify`、`query`，统一为 `LiveCommands`）；
//! - 应答构建器（`answer`）：响应轴与事件轴各恰好决定一次；
//! - 响应/事件工厂（`factory`）：按命令变体封闭的结果构造方法；
//! - 时钟（`clock`）：事件时间戳的注入点。
//!
#[macro_use]
pub mod live_command;

pub mod answer;
pub mod category;
pub mod clock;
pub mod error;
pub mod factory;
pub mod live_commands;
pub mod modify;
pub mod query;
pub mod registry;

pub use answer::{Answer, ModifyAnswerBuilder, QueryAnswerBuilder};
pub use category::Category;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{LiveError, LiveResult};
pub use live_command::{CommandBase, LiveCommand};
pub use live_commands::LiveCommands;
pub use registry::LiveCommandRegistry;
