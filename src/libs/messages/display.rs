//! Display implementation for actime application messages.
//!
//! All user-facing text lives here, so the rest of the code only deals with
//! typed `Message` variants and their parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration and stored token removed".to_string(),
            Message::ConfigModuleActiveCollab => "ActiveCollab settings".to_string(),
            Message::ConfigModuleSync => "Sync settings".to_string(),
            Message::ActiveCollabConfigNotFound => "ActiveCollab is not configured. Run `actime init` first".to_string(),

            // === HOURS FILE MESSAGES ===
            Message::HoursFileNotFound(path) => format!("Hours file {} does not exist", path),
            Message::HoursFileInvalid(error) => format!("Hours file is not valid, please re-create it: {}", error),
            Message::HoursFileCreated(path) => format!("Sample hours file written to {}", path),
            Message::HoursFileLoaded(count) => format!("Hours file declares {} ticket(s)", count),
            Message::HoursFileEmpty => "Hours file declares no tickets".to_string(),
            Message::LaunchingEditor(editor) => format!("Attempting to launch file editor ({})...", editor),
            Message::EditorFailed(error) => format!("Failed to launch editor: {}", error),

            // === DATE MESSAGES ===
            Message::NoDateSpecified => "No date specified, bailing out...".to_string(),
            Message::InvalidDateFormat(input) => format!("Provided value '{}' didn't match the DD-MM-YYYY format", input),
            Message::WeekRange { start, end } => {
                format!("Attempting to load time data starting at {} and up to {} ...", start, end)
            }

            // === SYNC MESSAGES ===
            Message::CommitDisabled => {
                "Time records will not be committed onto the ActiveCollab server (commit option is disabled)".to_string()
            }
            Message::UserIdUnresolved => "Could not get the ID of your user!".to_string(),
            Message::NoRemoteProjects => "No remote projects are viewable by you".to_string(),
            Message::NoTicketsConfigured => "No tickets are declared in the hours file, nothing to load".to_string(),
            Message::DayAlreadyLoaded { project, date } => {
                format!("{} already has time recorded on {}, skipping", project, date)
            }
            Message::RandomValuesExhausted { ticket, date } => {
                format!("No random hours left for '{}' on {}, skipping", ticket, date)
            }
            Message::IntentPlanned { date, project, ticket, hours } => {
                format!("[dry run] {} | {} | {} | {}h", date, project, ticket, hours)
            }
            Message::IntentSubmitting { date, project, ticket, hours } => {
                format!("{} | {} | {} | {}h", date, project, ticket, hours)
            }
            Message::TimeRecordCreated(id) => format!("Time record {} created", id),
            Message::TimeRecordRejected { ticket, errors } => {
                format!("Error creating time record for '{}': {}", ticket, errors)
            }
            Message::SyncSummary {
                planned,
                created,
                rejected,
                skipped_days,
            } => format!(
                "{} time record(s): {} created, {} rejected, {} project day(s) already loaded",
                planned, created, rejected, skipped_days
            ),
            Message::SyncNothingToDo => "Nothing matched the hours file for this week".to_string(),

            // === API MESSAGES ===
            Message::ApiRequestFailed(error) => format!("ActiveCollab request failed: {}", error),
            Message::ApiMalformedResponse(path) => format!("Response for '{}' is not valid JSON, treating as empty", path),

            // === TOKEN MESSAGES ===
            Message::TokenStored => "API token stored".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptApiUrl => "Enter the ActiveCollab API URL".to_string(),
            Message::PromptApiToken => "Enter your ActiveCollab API token".to_string(),
            Message::PromptDailyHours => "Enter the daily hours total for random mode".to_string(),
            Message::PromptStep => "Enter the hours increment for random mode".to_string(),
            Message::PromptWeekDate => "Please enter any date within the week you want to load times to (DD-MM-YYYY)".to_string(),
            Message::PromptCreateHoursFile => "Hours file does not exist. Would you like to edit a new one?".to_string(),
        };
        write!(f, "{}", text)
    }
}
