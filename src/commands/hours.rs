//! Hours file editing command.
//!
//! Seeds the file with a sample tree when it does not exist yet, opens it in
//! the user's editor, then reads it back so mistakes surface right away.

use crate::{
    libs::{hours::HoursTree, messages::Message, view::View},
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::env::{self, consts::OS};
use std::path::Path;
use std::process::Command;

#[derive(Debug, Args)]
pub struct HoursArgs {
    /// Print the current hours file instead of editing it
    #[arg(short, long)]
    show: bool,
}

pub fn cmd(hours_args: HoursArgs) -> Result<()> {
    let path = HoursTree::path()?;

    if hours_args.show {
        if !path.exists() {
            msg_bail_anyhow!(Message::HoursFileNotFound(path.display().to_string()));
        }
        let hours = HoursTree::load(&path)?;
        View::hours(&hours)?;
        msg_info!(Message::HoursFileLoaded(hours.ticket_count()));
        return Ok(());
    }

    edit(&path)?;
    Ok(())
}

/// Opens the hours file in an editor, creating it from the sample first if
/// needed, and returns what was saved.
pub fn edit(path: &Path) -> Result<HoursTree> {
    if !path.exists() {
        HoursTree::sample().save(path)?;
        msg_info!(Message::HoursFileCreated(path.display().to_string()));
    }

    let editor = editor();
    msg_print!(Message::LaunchingEditor(editor.clone()));

    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| msg_error_anyhow!(Message::EditorFailed(e.to_string())))?;
    if !status.success() {
        msg_bail_anyhow!(Message::EditorFailed(status.to_string()));
    }

    let hours = HoursTree::load(path)?;
    if hours.is_empty() {
        msg_warning!(Message::HoursFileEmpty);
    } else {
        msg_info!(Message::HoursFileLoaded(hours.ticket_count()));
    }
    Ok(hours)
}

/// `$VISUAL`, then `$EDITOR`, then the platform default.
pub fn editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .ok()
        .filter(|editor| !editor.trim().is_empty())
        .unwrap_or_else(|| match OS {
            "windows" => "notepad".to_string(),
            _ => "vi".to_string(),
        })
}
