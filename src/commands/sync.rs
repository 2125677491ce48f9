//! Week synchronization command.
//!
//! Picks the target week (flag, today, or an interactive prompt), loads the
//! hours file and settings, then runs the reconciliation against ActiveCollab.
//! Without `--commit` nothing is written; every record is only reported.

use super::hours;
use crate::{
    api::{activecollab::TOKEN_FILE, ActiveCollab},
    libs::{
        apportion::Mode,
        config::Config,
        hours::HoursTree,
        messages::Message,
        reconcile::{Reconciler, SyncOptions},
        secret::Secret,
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Use today's date to pick the week instead of asking for one
    #[arg(short, long, conflicts_with = "date")]
    autodate: bool,

    /// Submit the time records to ActiveCollab (default is a dry run)
    #[arg(short, long)]
    commit: bool,

    /// Split the daily total randomly across tickets instead of using declared hours
    #[arg(short, long)]
    random: bool,

    /// Any date within the target week (DD-MM-YYYY)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Seed for a reproducible random split
    #[arg(long, requires = "random")]
    seed: Option<u64>,
}

pub async fn cmd(sync_args: SyncArgs) -> Result<()> {
    if !sync_args.commit {
        msg_warning!(Message::CommitDisabled);
    }

    let anchor = match (sync_args.date, sync_args.autodate) {
        (Some(date), _) => date,
        (None, true) => Local::now().date_naive(),
        (None, false) => prompt_date()?,
    };

    let hours = match load_hours()? {
        Some(hours) => hours,
        None => return Ok(()),
    };

    let config = Config::read()?;
    let activecollab = config
        .activecollab
        .clone()
        .ok_or_else(|| msg_error_anyhow!(Message::ActiveCollabConfigNotFound))?;

    let options = SyncOptions {
        anchor,
        commit: sync_args.commit,
        mode: if sync_args.random { Mode::Random } else { Mode::Static },
        sync: config.sync_or_default(),
        seed: sync_args.seed,
    };

    let token = Secret::new(TOKEN_FILE, &Message::PromptApiToken.to_string())?.get_or_prompt()?;
    let client = ActiveCollab::new(&activecollab, &token);
    let reconciler = Reconciler::new(&client, &hours, options);

    let week = reconciler.week();
    msg_print!(Message::WeekRange {
        start: week.start.to_string(),
        end: week.end.to_string(),
    });

    let report = reconciler.run().await?;

    if report.records.is_empty() {
        msg_info!(Message::SyncNothingToDo);
    } else {
        View::records(&report)?;
    }
    msg_success!(Message::SyncSummary {
        planned: report.records.len(),
        created: report.created(),
        rejected: report.rejected(),
        skipped_days: report.skipped_days.len(),
    });

    Ok(())
}

/// Parses a DD-MM-YYYY date. Empty input means no date was given.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        msg_bail_anyhow!(Message::NoDateSpecified);
    }
    NaiveDate::parse_from_str(input, "%d-%m-%Y").map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(input.to_string())))
}

fn prompt_date() -> Result<NaiveDate> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWeekDate.to_string())
        .allow_empty(true)
        .interact_text()?;
    parse_date(&input)
}

/// Reads the hours file, offering to create it when missing. `None` means
/// the user declined.
fn load_hours() -> Result<Option<HoursTree>> {
    let path = HoursTree::path()?;
    if path.exists() {
        return Ok(Some(HoursTree::load(&path)?));
    }

    let create = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCreateHoursFile.to_string())
        .default(true)
        .interact()?;
    if !create {
        return Ok(None);
    }
    Ok(Some(hours::edit(&path)?))
}
