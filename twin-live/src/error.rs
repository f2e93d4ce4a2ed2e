#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum LiveError {
    #[error("unknown command type: {0}")]
    UnknownCommandType(String),

    /// 两侧均为命令类型字符串（`things.commands:…`）
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("illegal builder state: command={command_type}, {reason}")]
    IllegalBuilderState {
        command_type: &'static str,
        reason: &'static str,
    },
}

pub type LiveResult<T> = Result<T, LiveError>;
