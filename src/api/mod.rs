//! Remote catalog seam and the ActiveCollab client behind it.
//!
//! The reconciliation engine only talks to the [`Catalog`] trait. Calls are
//! awaited one after another; nothing here runs concurrently.
//!
//! ## Entities
//!
//! - [`Project`], [`Milestone`]: `id` + `name`
//! - [`Ticket`]: `id` names the ticket resource, `ticket_id` is the number the
//!   time record API expects as parent reference. They are not interchangeable.
//! - [`TimeEntry`]: an already recorded time entry, used to detect loaded days

use anyhow::Result;
use chrono::NaiveDate;
use serde::Deserialize;

pub mod activecollab;

pub use activecollab::{ActiveCollab, ActiveCollabConfig};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub ticket_id: u64,
    pub name: String,
    #[serde(default)]
    pub milestone_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRef {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeEntry {
    pub record_date: String,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub user_id: Option<u64>,
}

impl TimeEntry {
    /// Identity of the user who recorded the entry. The nested `user.id`
    /// wins over a flat `user_id`.
    pub fn owner_id(&self) -> Option<u64> {
        self.user.as_ref().map(|user| user.id).or(self.user_id)
    }
}

/// A time record the engine wants to file: one ticket, one day, some hours.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRecord {
    pub project_id: u64,
    pub project_name: String,
    /// Ticket `ticket_id`, sent as the record's parent reference.
    pub parent_id: u64,
    pub description: String,
    pub date: NaiveDate,
    pub hours: f64,
}

/// Outcome of a write that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Created(u64),
    /// The server answered without an id; carries its field errors.
    Rejected(String),
}

/// Everything the reconciliation engine needs from the remote service.
///
/// Transport failures surface as errors; a response that cannot be decoded
/// is an empty collection, never an error.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Identity of the user owning the API token.
    async fn user_id(&self) -> Result<u64>;

    async fn projects(&self) -> Result<Vec<Project>>;

    async fn milestones(&self, project_id: u64) -> Result<Vec<Milestone>>;

    /// All tickets of a project; callers scope them by `milestone_id`.
    async fn tickets(&self, project_id: u64) -> Result<Vec<Ticket>>;

    async fn time_entries(&self, project_id: u64) -> Result<Vec<TimeEntry>>;

    async fn add_time_record(&self, user_id: u64, record: &TimeRecord) -> Result<Submission>;
}
