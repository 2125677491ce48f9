use super::hours::HoursTree;
use super::reconcile::{RecordStatus, SyncReport};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Table of every record of a run with its outcome.
    pub fn records(report: &SyncReport) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "PROJECT", "TICKET", "PARENT ID", "HOURS", "STATUS"]);
        for outcome in &report.records {
            let status = match &outcome.status {
                RecordStatus::Planned => "dry run".to_string(),
                RecordStatus::Created(id) => format!("created #{}", id),
                RecordStatus::Rejected(errors) => format!("rejected: {}", errors),
            };
            table.add_row(row![
                outcome.record.date,
                outcome.record.project_name,
                outcome.record.description,
                outcome.record.parent_id,
                outcome.record.hours,
                status
            ]);
        }
        table.add_row(row!["", "", "", "TOTAL", report.total_hours(), ""]);
        table.printstd();

        Ok(())
    }

    /// Table of the hours file, one row per declared ticket.
    pub fn hours(hours: &HoursTree) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PROJECT", "MILESTONE", "TICKET", "HOURS"]);
        for (project, milestones) in hours.projects() {
            for (milestone, tickets) in milestones {
                for (ticket, declared) in tickets {
                    table.add_row(row![project, milestone, ticket, declared]);
                }
            }
        }
        table.printstd();

        Ok(())
    }
}
