//! Job domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scraping job on the provider side
///
/// Created from the submission response and updated from each poll response.
/// A single poll loop owns it for the job's whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub status: JobStatus,
}

/// Job status as reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum JobStatus {
    Pending,
    Done,
    Faulted,
    /// Missing or unrecognised status
    #[default]
    Unknown,
}

impl JobStatus {
    /// Map a wire status string, falling back to `Unknown`
    pub fn from_wire(s: &str) -> Self {
        match s {
            "pending" => JobStatus::Pending,
            "done" => JobStatus::Done,
            "faulted" => JobStatus::Faulted,
            _ => JobStatus::Unknown,
        }
    }

    /// Whether no further polling happens after this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Faulted)
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        JobStatus::from_wire(&s)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Done => write!(f, "done"),
            JobStatus::Faulted => write!(f, "faulted"),
            JobStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Fields recovered from a submission or poll response body
///
/// Decoding never fails: anything that is not a JSON object, or fields with
/// an unexpected shape, simply come back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobUpdate {
    pub id: Option<String>,
    pub status: Option<JobStatus>,
}

impl JobUpdate {
    /// Decode a response body permissively
    pub fn decode(body: &[u8]) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };

        let id = match map.get("id") {
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        };
        let status = map
            .get("status")
            .and_then(Value::as_str)
            .map(JobStatus::from_wire);

        Self { id, status }
    }

    /// True when nothing could be recovered from the body
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.status.is_none()
    }
}

impl Job {
    pub fn new(id: impl Into<String>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            status,
        }
    }

    /// Build a job from a submission response; `None` when no id was returned
    pub fn from_update(update: JobUpdate) -> Option<Self> {
        let id = update.id?;
        Some(Self {
            id,
            status: update.status.unwrap_or_default(),
        })
    }

    /// Overwrite the fields present in `update`, keeping the rest
    pub fn apply(&mut self, update: JobUpdate) {
        if let Some(id) = update.id {
            self.id = id;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}
