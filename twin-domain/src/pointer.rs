//! JSON 指针（JsonPointer）与字段选择器（FieldSelector）
//!
//! 指针用于定位 Thing 内的资源（属性、特性属性等），
//! 字段选择器用于查询时裁剪返回的 JSON 字段。
//!
use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// `/` 分隔的 JSON 指针，空指针表示根
///
/// ```
/// use twin_domain::pointer::JsonPointer;
///
/// let p: JsonPointer = "/location/lat".parse().unwrap();
/// assert_eq!(p.level_count(), 2);
/// assert_eq!(p.to_string(), "/location/lat");
///
/// assert!(JsonPointer::empty().is_empty());
/// assert_eq!(JsonPointer::empty().to_string(), "/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JsonPointer {
    segments: Vec<String>,
}

impl JsonPointer {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 解析指针，前导 `/` 可省略；`""` 与 `"/"` 均为根
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.strip_prefix('/').unwrap_or(raw);
        if trimmed.is_empty() {
            return Ok(Self::empty());
        }

        let segments = trimmed
            .split('/')
            .map(|segment| {
                if segment.is_empty() {
                    Err(DomainError::InvalidPointer {
                        reason: format!("empty segment in '{raw}'"),
                    })
                } else {
                    Ok(segment.to_string())
                }
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self { segments })
    }

    /// 追加单个段，返回新指针
    pub fn with_segment(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// 拼接另一个指针，返回新指针
    pub fn append(&self, other: &JsonPointer) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn level_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// 在给定 JSON 值中按指针取值
    pub fn get<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(value, |current, segment| current.as_object()?.get(segment))
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for JsonPointer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for JsonPointer {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<JsonPointer> for String {
    fn from(pointer: JsonPointer) -> Self {
        pointer.to_string()
    }
}

/// 字段选择器，形如 `thingId,attributes/location`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldSelector {
    pointers: Vec<JsonPointer>,
}

impl FieldSelector {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let pointers = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(JsonPointer::parse)
            .collect::<DomainResult<Vec<_>>>()?;

        if pointers.is_empty() || pointers.iter().any(JsonPointer::is_empty) {
            return Err(DomainError::InvalidFieldSelector {
                reason: format!("no usable field in '{raw}'"),
            });
        }

        Ok(Self { pointers })
    }

    pub fn pointers(&self) -> &[JsonPointer] {
        &self.pointers
    }

    /// 仅保留被选中的字段；非对象值原样返回
    pub fn apply(&self, value: &Value) -> Value {
        if !value.is_object() {
            return value.clone();
        }

        let mut selected = Map::new();
        for pointer in &self.pointers {
            if let Some(found) = pointer.get(value) {
                insert_at(&mut selected, pointer.segments(), found.clone());
            }
        }
        Value::Object(selected)
    }
}

fn insert_at(target: &mut Map<String, Value>, segments: &[String], value: Value) {
    match segments {
        [] => {}
        [last] => {
            target.insert(last.clone(), value);
        }
        [head, rest @ ..] => {
            let child = target
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(child) = child {
                insert_at(child, rest, value);
            }
        }
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .pointers
            .iter()
            .map(|p| p.segments().join("/"))
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

impl FromStr for FieldSelector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FieldSelector {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FieldSelector> for String {
    fn from(selector: FieldSelector) -> Self {
        selector.to_string()
    }
}
