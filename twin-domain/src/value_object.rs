//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!
use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// Thing 标识，形如 `<namespace>:<name>`
///
/// - 命名空间可以为空（`:my-thing`），仅允许字母、数字、`.`、`_`、`-`；
/// - 名称不能为空，且不能包含空白字符与 `/`。
///
/// # 示例
///
/// ```
/// use twin_domain::value_object::ThingId;
///
/// let id: ThingId = "org.example:sensor-1".parse().unwrap();
/// assert_eq!(id.namespace(), "org.example");
/// assert_eq!(id.name(), "sensor-1");
/// assert_eq!(id.to_string(), "org.example:sensor-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThingId {
    namespace: String,
    name: String,
}

impl ThingId {
    /// 从命名空间与名称创建标识
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let id = Self {
            namespace: namespace.into(),
            name: name.into(),
        };
        id.validate()?;
        Ok(id)
    }

    /// 占位标识，用于不针对单个 Thing 的命令（例如批量查询）
    pub fn placeholder() -> Self {
        Self {
            namespace: String::new(),
            name: "_".to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for ThingId {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        let namespace_ok = self
            .namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !namespace_ok {
            return Err(DomainError::InvalidThingId(self.to_string()));
        }

        let name_ok = !self.name.is_empty()
            && !self.name.chars().any(|c| c.is_whitespace() || c == '/');
        if !name_ok {
            return Err(DomainError::InvalidThingId(self.to_string()));
        }

        Ok(())
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

impl FromStr for ThingId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((namespace, name)) = s.split_once(':') else {
            return Err(DomainError::InvalidThingId(s.to_string()));
        };
        Self::new(namespace, name)
    }
}

impl TryFrom<String> for ThingId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThingId> for String {
    fn from(id: ThingId) -> Self {
        id.to_string()
    }
}

/// 事件修订号（由外部序列器分配）
///
/// 本层只会产生尚未分配的修订号 [`Revision::UNASSIGNED`]，
/// 权威的序号由拥有状态的存储在持久化后赋值。
///
/// # 示例
///
/// ```
/// use twin_domain::value_object::Revision;
///
/// let r = Revision::UNASSIGNED;
/// assert!(!r.is_assigned());
/// assert_eq!(r.value(), -1);
///
/// let r1 = Revision::from_value(7);
/// assert!(r1.is_assigned());
/// assert_eq!(r1.next().value(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(i64);

impl Revision {
    /// 未分配修订号的哨兵值
    pub const UNASSIGNED: Self = Self(-1);

    pub const fn from_value(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }

    /// 是否已由序列器分配
    pub fn is_assigned(&self) -> bool {
        self.0 >= 0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_assigned() {
            write!(f, "r{}", self.0)
        } else {
            f.write_str("unassigned")
        }
    }
}

impl From<i64> for Revision {
    fn from(value: i64) -> Self {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试 ThingId 解析
    #[test]
    fn test_thing_id_parse() {
        let id: ThingId = "ns:thing1".parse().unwrap();
        assert_eq!(id.namespace(), "ns");
        assert_eq!(id.name(), "thing1");
        assert_eq!(id.to_string(), "ns:thing1");
    }

    // 测试空命名空间
    #[test]
    fn test_thing_id_empty_namespace() {
        let id: ThingId = ":foo".parse().unwrap();
        assert_eq!(id.namespace(), "");
        assert_eq!(id.to_string(), ":foo");
    }

    // 测试非法标识
    #[test]
    fn test_thing_id_invalid() {
        assert!("no-colon".parse::<ThingId>().is_err());
        assert!("ns:".parse::<ThingId>().is_err());
        assert!("ns:a/b".parse::<ThingId>().is_err());
        assert!("n s:a".parse::<ThingId>().is_err());
        match "ns:".parse::<ThingId>() {
            Err(DomainError::InvalidThingId(raw)) => assert_eq!(raw, "ns:"),
            other => panic!("unexpected {other:?}"),
        }
    }

    // 测试 ThingId 序列化为字符串
    #[test]
    fn test_thing_id_serde() {
        let id = ThingId::new("ns", "thing1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ns:thing1\"");

        let back: ThingId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<ThingId>("\"broken\"").is_err());
    }

    // 测试未分配修订号
    #[test]
    fn test_revision_unassigned() {
        let r = Revision::default();
        assert_eq!(r, Revision::UNASSIGNED);
        assert!(!r.is_assigned());
        assert_eq!(r.to_string(), "unassigned");
    }

    // 测试修订号递增与显示
    #[test]
    fn test_revision_next() {
        let r = Revision::from_value(41).next();
        assert_eq!(r.value(), 42);
        assert_eq!(format!("{r}"), "r42");
        assert!(Revision::UNASSIGNED < r);
    }

    // 测试修订号序列化
    #[test]
    fn test_revision_serde() {
        let json = serde_json::to_string(&Revision::UNASSIGNED).unwrap();
        assert_eq!(json, "-1");
    }
}
