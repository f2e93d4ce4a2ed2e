use serde::{Deserialize, Serialize};
use std::fmt;

/// Live 命令的分类，由变体固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Create,
    Modify,
    Delete,
    Merge,
    Query,
}

impl Category {
    pub fn is_query(&self) -> bool {
        matches!(self, Category::Query)
    }

    /// 是否改变 Thing 状态（即应答可以携带事件）
    pub fn is_modifying(&self) -> bool {
        !self.is_query()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Create => "create",
            Category::Modify => "modify",
            Category::Delete => "delete",
            Category::Merge => "merge",
            Category::Query => "query",
        };
        f.write_str(name)
    }
}
