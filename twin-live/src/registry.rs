//! Live 命令注册表
//!
//! 由组合根显式构造一次，之后只读：
//! - 类型字符串 → 构造函数的封闭映射，覆盖全部支持的命令；
//! - 持有注入的时钟，交给每个构造出的 Live 命令；
//! - 不可变、`Send + Sync`，无需加锁。
//!
use crate::clock::{Clock, SystemClock};
use crate::error::{LiveError, LiveResult};
use crate::live_commands::{Constructor, LiveCommands};
use bon::Builder;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use twin_domain::command::ThingCommand;

#[derive(Builder, Debug)]
pub struct LiveCommandRegistry {
    /// 事件时间戳来源，缺省为系统时钟
    #[builder(default = system_clock())]
    clock: Arc<dyn Clock>,
    #[builder(skip = strategies())]
    strategies: HashMap<&'static str, Constructor>,
}

fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}

fn strategies() -> HashMap<&'static str, Constructor> {
    LiveCommands::constructors().into_iter().collect()
}

impl Default for LiveCommandRegistry {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LiveCommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按命令类型查找构造函数并构造 Live 命令
    pub fn get_live_command(&self, command: ThingCommand) -> LiveResult<LiveCommands> {
        let Some(construct) = self.strategies.get(command.command_type()) else {
            warn!(
                command_type = command.command_type(),
                "no live command registered for type"
            );
            return Err(LiveError::UnknownCommandType(
                command.command_type().to_string(),
            ));
        };

        let live_command = construct(command, Arc::clone(&self.clock))?;
        debug!(
            command_type = live_command.command_type(),
            category = %live_command.category(),
            entity_id = %live_command.entity_id(),
            "live command resolved"
        );
        Ok(live_command)
    }

    /// 已注册的类型字符串（按字典序）
    pub fn supported_types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.strategies.keys().copied().collect();
        types.sort_unstable();
        types
    }

    pub fn contains(&self, command_type: &str) -> bool {
        self.strategies.contains_key(command_type)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
