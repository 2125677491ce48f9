//! The hours file: which project/milestone/ticket name fragments get how
//! many hours a day.
//!
//! ```json
//! {
//!   "Alpha": {
//!     "Sprint1": { "Fix bug": 2.0, "Write docs": 1.0 }
//!   }
//! }
//! ```
//!
//! Keys are fragments matched case-insensitively against remote names, so a
//! single entry may fan out to several remote entities.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const HOURS_FILE_NAME: &str = "hours.json";

/// Ticket fragment → declared hours.
pub type TicketHours = BTreeMap<String, f64>;

/// Milestone fragment → tickets.
pub type MilestoneHours = BTreeMap<String, TicketHours>;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct HoursTree(BTreeMap<String, MilestoneHours>);

impl HoursTree {
    pub fn new(projects: BTreeMap<String, MilestoneHours>) -> Self {
        Self(projects)
    }

    /// Location of the hours file in the data directory.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(HOURS_FILE_NAME)
    }

    /// Reads the hours file from the data directory.
    pub fn read() -> Result<Self> {
        Self::load(&Self::path()?)
    }

    /// Reads a hours file. A root that is not an object, or a wrongly nested
    /// tree, is reported as an invalid file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| msg_error_anyhow!(Message::HoursFileInvalid(e.to_string())))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Starter content written when the user has no hours file yet.
    pub fn sample() -> Self {
        let mut tickets = TicketHours::new();
        tickets.insert("Code review".to_string(), 2.0);
        tickets.insert("Development".to_string(), 6.0);

        let mut milestones = MilestoneHours::new();
        milestones.insert("Sprint".to_string(), tickets);

        let mut projects = BTreeMap::new();
        projects.insert("Project name fragment".to_string(), milestones);
        Self(projects)
    }

    /// Number of ticket entries across all projects and milestones. The same
    /// fragment under two milestones counts twice.
    pub fn ticket_count(&self) -> usize {
        self.0.values().flat_map(|milestones| milestones.values()).map(|tickets| tickets.len()).sum()
    }

    pub fn projects(&self) -> impl Iterator<Item = (&String, &MilestoneHours)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.ticket_count() == 0
    }
}
