use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Toggl may send `null` for any field; every non-`Option` field falls back
/// to its zero value when the key is missing or null.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub workspace_id: u64,
    pub project_id: Option<u64>,
    pub task_id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub billable: bool,
    pub start: Option<DateTime<FixedOffset>>,
    pub stop: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tag_ids: Vec<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub duronly: bool,
    pub at: Option<DateTime<FixedOffset>>,
    pub server_deleted_at: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub workspace_id: u64,
    pub client_id: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub currency: Option<String>,
    pub billable: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_private: bool,
    pub rate: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
}

impl Project {
    /// Toggl reports "no client" both as `null` and as `0`.
    pub fn client_id(&self) -> Option<u64> {
        self.client_id.filter(|id| *id != 0)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Client {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub wid: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub archived: bool,
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(body)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
