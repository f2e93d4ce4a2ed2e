use crate::value_object::{Revision, ThingId};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 元数据
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    thing_id: ThingId,
    /// 由持久化侧分配，Live 事件恒为 `Revision::UNASSIGNED`
    #[builder(default)]
    revision: Revision,
    occurred_at: DateTime<Utc>,
}

impl Metadata {
    pub fn thing_id(&self) -> &ThingId {
        &self.thing_id
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }
}
