//! 头部信息（Headers）
//!
//! 伴随命令、响应与事件传递的横切元数据：
//! - 关联 ID（`correlation-id`）：原样透传；
//! - 是否需要响应（`response-required`）：缺省为 `true`；
//! - 授权主体（`authorization-subjects`）：逗号分隔，本层只回显不校验。
//!
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

pub const CORRELATION_ID: &str = "correlation-id";
pub const RESPONSE_REQUIRED: &str = "response-required";
pub const AUTHORIZATION_SUBJECTS: &str = "authorization-subjects";

/// 不可变的头部集合，所有“设置”操作均返回新值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers(BTreeMap<String, String>);

impl Headers {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// 返回设置了 `key` 的新头部
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut inner = self.0.clone();
        inner.insert(key.into(), value.into());
        Self(inner)
    }

    /// 返回移除了 `key` 的新头部
    pub fn without(&self, key: &str) -> Self {
        let mut inner = self.0.clone();
        inner.remove(key);
        Self(inner)
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.get(CORRELATION_ID)
    }

    pub fn with_correlation_id(&self, correlation_id: impl Into<String>) -> Self {
        self.with(CORRELATION_ID, correlation_id)
    }

    pub fn response_required(&self) -> bool {
        self.get(RESPONSE_REQUIRED)
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(true)
    }

    pub fn with_response_required(&self, required: bool) -> Self {
        self.with(RESPONSE_REQUIRED, required.to_string())
    }

    pub fn authorization_subjects(&self) -> Vec<&str> {
        self.get(AUTHORIZATION_SUBJECTS)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn with_authorization_subjects<I, S>(&self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = subjects
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.with(AUTHORIZATION_SUBJECTS, joined)
    }

    /// 响应使用的头部：沿用命令头部，但响应本身不再需要响应
    pub fn for_response(&self) -> Self {
        self.with_response_required(false)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for Headers {
    fn from(inner: BTreeMap<String, String>) -> Self {
        Self(inner)
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_on_empty_headers() {
        let headers = Headers::empty();
        assert!(headers.is_empty());
        assert!(headers.response_required());
        assert_eq!(headers.correlation_id(), None);
        assert!(headers.authorization_subjects().is_empty());
    }

    #[test]
    fn setters_do_not_mutate_original() {
        let original = Headers::empty().with_correlation_id("cor-1");
        let changed = original.with_response_required(false);

        assert_eq!(original.get(RESPONSE_REQUIRED), None);
        assert!(!changed.response_required());
        assert_eq!(changed.correlation_id(), Some("cor-1"));
        assert_eq!(changed.without(CORRELATION_ID).correlation_id(), None);
    }

    #[test]
    fn authorization_subjects_roundtrip() {
        let headers = Headers::empty().with_authorization_subjects(["user:alice", "group:ops"]);
        assert_eq!(headers.get(AUTHORIZATION_SUBJECTS), Some("user:alice,group:ops"));
        assert_eq!(headers.authorization_subjects(), vec!["user:alice", "group:ops"]);
    }

    #[test]
    fn for_response_keeps_correlation_id() {
        let headers: Headers = [(CORRELATION_ID, "cor-7"), (RESPONSE_REQUIRED, "true")]
            .into_iter()
            .collect();
        let response_headers = headers.for_response();

        assert_eq!(response_headers.correlation_id(), Some("cor-7"));
        assert!(!response_headers.response_required());
        assert_eq!(
            Headers::empty().for_response(),
            Headers::empty().with_response_required(false)
        );
    }

    #[test]
    fn unparsable_response_required_defaults_to_true() {
        let headers = Headers::empty().with(RESPONSE_REQUIRED, "maybe");
        assert!(headers.response_required());
    }
}
