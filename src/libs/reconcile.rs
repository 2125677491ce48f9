//! Walks the hours file against the remote catalog and a working week,
//! producing one time record per matched ticket and day.
//!
//! ## Process Flow
//!
//! 1. **Guard**: no declared tickets aborts before any remote call
//! 2. **Identity**: resolve the current user, fetch the project catalog
//! 3. **Projects**: every project fragment fans out to all matching projects;
//!    time entries and milestones are fetched once per project
//! 4. **Days**: a day where the user already has time on the project is
//!    skipped for that project as a whole. Each day's hours are drawn once
//!    before the project loop and shared by every project on that day
//! 5. **Milestones / tickets**: fragments fan out again; tickets are fetched
//!    once per project and scoped by `milestone_id`
//! 6. **Filing**: dry run only reports; commit mode reports, then submits.
//!    A rejected submission is reported and the run goes on
//!
//! The nesting is project × day × milestone × ticket, so the loaded-day check
//! happens once per (project, day) before any matching work.

use crate::api::{Catalog, Project, Submission, Ticket, TimeRecord};
use crate::libs::apportion::{Apportioner, DayShare, Mode};
use crate::libs::config::SyncConfig;
use crate::libs::hours::{HoursTree, MilestoneHours};
use crate::libs::load_status::is_day_loaded;
use crate::libs::messages::Message;
use crate::libs::resolver::resolve;
use crate::libs::week::Week;
use crate::{msg_bail_anyhow, msg_debug, msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Run settings, fixed for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOptions {
    /// Any date inside the target week.
    pub anchor: NaiveDate,
    /// Submit records instead of only reporting them.
    pub commit: bool,
    pub mode: Mode,
    pub sync: SyncConfig,
    /// Fixed seed for the random split, for reproducible runs.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordStatus {
    /// Dry run: reported, not submitted.
    Planned,
    Created(u64),
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    pub record: TimeRecord,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    pub records: Vec<RecordOutcome>,
    /// (project name, day) pairs skipped because time was already recorded.
    pub skipped_days: Vec<(String, NaiveDate)>,
}

impl SyncReport {
    pub fn created(&self) -> usize {
        self.count(|status| matches!(status, RecordStatus::Created(_)))
    }

    pub fn rejected(&self) -> usize {
        self.count(|status| matches!(status, RecordStatus::Rejected(_)))
    }

    fn count(&self, predicate: impl Fn(&RecordStatus) -> bool) -> usize {
        self.records.iter().filter(|outcome| predicate(&outcome.status)).count()
    }

    pub fn total_hours(&self) -> f64 {
        self.records.iter().map(|outcome| outcome.record.hours).sum()
    }
}

pub struct Reconciler<'a, C: Catalog> {
    catalog: &'a C,
    hours: &'a HoursTree,
    options: SyncOptions,
}

impl<'a, C: Catalog> Reconciler<'a, C> {
    pub fn new(catalog: &'a C, hours: &'a HoursTree, options: SyncOptions) -> Self {
        Self { catalog, hours, options }
    }

    pub fn week(&self) -> Week {
        Week::of(self.options.anchor)
    }

    pub async fn run(&self) -> Result<SyncReport> {
        let ticket_count = self.hours.ticket_count();
        if ticket_count == 0 {
            msg_bail_anyhow!(Message::NoTicketsConfigured);
        }

        let mut apportioner = match self.options.seed {
            Some(seed) => Apportioner::with_seed(self.options.mode, ticket_count, &self.options.sync, seed)?,
            None => Apportioner::new(self.options.mode, ticket_count, &self.options.sync)?,
        };

        let user_id = self.catalog.user_id().await?;
        let remote_projects = self.catalog.projects().await?;
        if remote_projects.is_empty() {
            msg_bail_anyhow!(Message::NoRemoteProjects);
        }
        msg_debug!("User {} sees {} project(s)", user_id, remote_projects.len());

        let week = self.week();
        let mut shares: BTreeMap<NaiveDate, DayShare> = week.days().map(|day| (day, apportioner.day_share())).collect();
        let mut report = SyncReport::default();

        for (project_fragment, milestones) in self.hours.projects() {
            if milestones.values().all(|tickets| tickets.is_empty()) {
                continue;
            }
            for project in resolve(project_fragment, &remote_projects) {
                self.sync_project(project, milestones, user_id, &week, &mut shares, &mut report)
                    .await?;
            }
        }

        Ok(report)
    }

    async fn sync_project(
        &self,
        project: &Project,
        milestones: &MilestoneHours,
        user_id: u64,
        week: &Week,
        shares: &mut BTreeMap<NaiveDate, DayShare>,
        report: &mut SyncReport,
    ) -> Result<()> {
        let entries = self.catalog.time_entries(project.id).await?;
        let remote_milestones = self.catalog.milestones(project.id).await?;
        let mut project_tickets: Option<Vec<Ticket>> = None;

        for day in week.days() {
            if is_day_loaded(day, &entries, user_id) {
                msg_info!(Message::DayAlreadyLoaded {
                    project: project.name.clone(),
                    date: day.to_string(),
                });
                report.skipped_days.push((project.name.clone(), day));
                continue;
            }

            let share = match shares.get_mut(&day) {
                Some(share) => share,
                None => continue,
            };

            for (milestone_fragment, tickets) in milestones {
                if tickets.is_empty() {
                    continue;
                }
                for milestone in resolve(milestone_fragment, &remote_milestones) {
                    if project_tickets.is_none() {
                        project_tickets = Some(self.catalog.tickets(project.id).await?);
                    }
                    let milestone_tickets: Vec<Ticket> = project_tickets
                        .iter()
                        .flatten()
                        .filter(|ticket| ticket.milestone_id == Some(milestone.id))
                        .cloned()
                        .collect();

                    for (ticket_fragment, declared) in tickets {
                        for ticket in resolve(ticket_fragment, &milestone_tickets) {
                            let record = match self.record_for(project, ticket, day, *declared, share) {
                                Some(record) => record,
                                None => continue,
                            };
                            let status = self.file(user_id, &record).await?;
                            report.records.push(RecordOutcome { record, status });
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn record_for(&self, project: &Project, ticket: &Ticket, day: NaiveDate, declared: f64, share: &mut DayShare) -> Option<TimeRecord> {
        let hours = match share.take(declared) {
            Some(hours) => hours,
            None => {
                msg_warning!(Message::RandomValuesExhausted {
                    ticket: ticket.name.clone(),
                    date: day.to_string(),
                });
                return None;
            }
        };

        Some(TimeRecord {
            project_id: project.id,
            project_name: project.name.clone(),
            parent_id: ticket.ticket_id,
            description: ticket.name.clone(),
            date: day,
            hours,
        })
    }

    async fn file(&self, user_id: u64, record: &TimeRecord) -> Result<RecordStatus> {
        if !self.options.commit {
            msg_print!(Message::IntentPlanned {
                date: record.date.to_string(),
                project: record.project_name.clone(),
                ticket: record.description.clone(),
                hours: record.hours,
            });
            return Ok(RecordStatus::Planned);
        }

        msg_print!(Message::IntentSubmitting {
            date: record.date.to_string(),
            project: record.project_name.clone(),
            ticket: record.description.clone(),
            hours: record.hours,
        });

        match self.catalog.add_time_record(user_id, record).await? {
            Submission::Created(id) => {
                msg_debug!("{}", Message::TimeRecordCreated(id));
                Ok(RecordStatus::Created(id))
            }
            Submission::Rejected(errors) => {
                msg_error!(Message::TimeRecordRejected {
                    ticket: record.description.clone(),
                    errors: errors.clone(),
                });
                Ok(RecordStatus::Rejected(errors))
            }
        }
    }
}
