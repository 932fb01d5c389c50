use chrono::NaiveDateTime;
use clap::builder::PossibleValue;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Timestamp layout used both on disk and in `list` output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Eq, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub status: Status,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.id,
            self.description,
            self.status,
            self.created_at.format(TIMESTAMP_FORMAT),
            self.updated_at.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Lifecycle state of a task. The serialized strings keep their historical
/// casing; task files written by older versions of the tool depend on them.
#[derive(Debug, Default, Eq, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum Status {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::ToDo => "To Do",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// The `list` filter argument accepts exactly the strings stored in the task
// file, so a filter value can be pasted straight from `list` output.
impl clap::ValueEnum for Status {
    fn value_variants<'a>() -> &'a [Self] {
        &[Status::ToDo, Status::InProgress, Status::Done]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.as_str()))
    }
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        timestamp: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&timestamp.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}
