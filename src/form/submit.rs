//! The seam between the form and whoever consumes the finished record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::data::FormData;

/// Receives the final record once the combined schema has accepted it.
///
/// Called at most once per successful submission. Returning an error keeps
/// the form open so the user can try again.
pub trait SubmitHandler {
    fn submit(&mut self, submission: &Submission) -> anyhow::Result<()>;
}

impl<F> SubmitHandler for F
where
    F: FnMut(&Submission) -> anyhow::Result<()>,
{
    fn submit(&mut self, submission: &Submission) -> anyhow::Result<()> {
        self(submission)
    }
}

/// A record that made it through submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub data: FormData,
}

impl Submission {
    pub fn new(data: FormData) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            data,
        }
    }
}
