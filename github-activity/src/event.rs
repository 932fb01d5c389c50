//! GitHub event records: the wire form returned by the events endpoint and
//! the classified form the formatter renders.
//!
//! Every wire field is optional at the serde layer so that one malformed
//! record cannot fail deserialization of the whole batch; requiredness is
//! enforced per event during classification.

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Layout of `created_at` on the wire (ISO-8601 UTC instant).
const WIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Layout of the timestamp prefix on every rendered line.
const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Why a single event could not be formatted. These are recoverable: the
/// event is skipped and the rest of the batch still renders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The event lacks a field its kind requires.
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    /// `created_at` was present but not an ISO-8601 UTC instant.
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
}

/// One event as returned by `GET /users/{username}/events`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub repo: Option<RawRepo>,
    pub created_at: Option<String>,
    pub payload: Option<RawPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRepo {
    pub name: Option<String>,
}

/// The union of the payload fields the formatter cares about. Each event
/// kind reads its own subset and ignores the rest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPayload {
    pub commits: Option<Vec<serde_json::Value>>,
    pub ref_type: Option<String>,
    pub action: Option<String>,
    pub issue: Option<RawIssue>,
    pub pull_request: Option<RawPullRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIssue {
    pub number: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPullRequest {
    pub number: Option<u64>,
}

/// A classified event, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub repo: String,
    pub created_at: NaiveDateTime,
}

/// The known event kinds plus a fallback carrying the raw type tag.
/// Type tags match case-sensitively; anything unrecognized is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push { commits: usize },
    Create { ref_kind: Option<String> },
    Issues { action: Option<String>, number: Option<u64> },
    PullRequest { action: Option<String>, number: Option<u64> },
    Watch,
    Fork,
    Other(String),
}

impl TryFrom<&RawEvent> for Event {
    type Error = FormatError;

    fn try_from(raw: &RawEvent) -> Result<Self, Self::Error> {
        let event_type = raw
            .event_type
            .as_deref()
            .ok_or(FormatError::MissingField("type"))?;
        let repo = raw
            .repo
            .as_ref()
            .and_then(|repo| repo.name.clone())
            .ok_or(FormatError::MissingField("repo"))?;
        let created_at = raw
            .created_at
            .as_deref()
            .ok_or(FormatError::MissingField("created_at"))?;
        let created_at = NaiveDateTime::parse_from_str(created_at, WIRE_TIMESTAMP_FORMAT)
            .map_err(|_| FormatError::InvalidTimestamp(created_at.to_string()))?;

        let kind = match event_type {
            "PushEvent" => EventKind::Push {
                commits: required_payload(raw)?.commits.as_ref().map_or(0, Vec::len),
            },
            "CreateEvent" => EventKind::Create {
                ref_kind: required_payload(raw)?.ref_type.clone(),
            },
            "IssuesEvent" => {
                let payload = required_payload(raw)?;
                EventKind::Issues {
                    action: payload.action.clone(),
                    number: payload.issue.as_ref().and_then(|issue| issue.number),
                }
            }
            "PullRequestEvent" => {
                let payload = required_payload(raw)?;
                EventKind::PullRequest {
                    action: payload.action.clone(),
                    number: payload.pull_request.as_ref().and_then(|pr| pr.number),
                }
            }
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            other => EventKind::Other(other.to_string()),
        };

        Ok(Event {
            kind,
            repo,
            created_at,
        })
    }
}

fn required_payload(raw: &RawEvent) -> Result<&RawPayload, FormatError> {
    raw.payload
        .as_ref()
        .ok_or(FormatError::MissingField("payload"))
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "- [{}] ",
            self.created_at.format(DISPLAY_TIMESTAMP_FORMAT)
        )?;
        match &self.kind {
            EventKind::Push { commits } => {
                write!(f, "Pushed {} commit(s) to {}", commits, self.repo)
            }
            EventKind::Create { ref_kind } => {
                write!(
                    f,
                    "Created {} in {}",
                    ref_kind.as_deref().unwrap_or("unknown"),
                    self.repo
                )
            }
            EventKind::Issues { action, number } => {
                write!(
                    f,
                    "{} issue #{} in {}",
                    capitalize(action.as_deref().unwrap_or("unknown")),
                    display_number(*number),
                    self.repo
                )
            }
            EventKind::PullRequest { action, number } => {
                write!(
                    f,
                    "{} pull request #{} in {}",
                    capitalize(action.as_deref().unwrap_or("unknown")),
                    display_number(*number),
                    self.repo
                )
            }
            EventKind::Watch => write!(f, "Starred {}", self.repo),
            EventKind::Fork => write!(f, "Forked {}", self.repo),
            EventKind::Other(event_type) => write!(f, "{} on {}", event_type, self.repo),
        }
    }
}

/// First character uppercased, the rest lowercased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn display_number(number: Option<u64>) -> String {
    number.map_or_else(|| "unknown".to_string(), |number| number.to_string())
}
