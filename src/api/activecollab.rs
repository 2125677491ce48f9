//! ActiveCollab API client.
//!
//! ActiveCollab 3 exposes a single endpoint (`api.php`); the resource is
//! selected with the `path_info` query parameter and every call carries the
//! user's `token` plus `format=json`. Writes are form-encoded POSTs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use actime::api::{ActiveCollab, ActiveCollabConfig, Catalog};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ActiveCollabConfig {
//!     api_url: "https://ac.example.com/api.php".to_string(),
//! };
//! let client = ActiveCollab::new(&config, "1-XXXXXXXX");
//! let projects = client.projects().await?;
//! # Ok(())
//! # }
//! ```

use super::{Catalog, Milestone, Project, Submission, Ticket, TimeEntry, TimeRecord};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// File (inside the data directory) holding the encrypted API token.
pub const TOKEN_FILE: &str = ".activecollab_token";

const INFO_PATH: &str = "info";
const PROJECTS_PATH: &str = "projects";

#[derive(Debug)]
pub struct ActiveCollab {
    client: Client,
    config: ActiveCollabConfig,
    token: String,
}

impl ActiveCollab {
    pub fn new(config: &ActiveCollabConfig, token: &str) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            token: token.to_owned(),
        }
    }

    /// Performs one API call and decodes the body as JSON.
    ///
    /// A body that is not JSON decodes to an empty array; only transport
    /// failures are returned as errors.
    pub async fn request(&self, path_info: &str, query: &[(&str, String)], form: &[(&str, String)], method: Method) -> Result<Value> {
        let mut params: Vec<(&str, String)> = vec![
            ("token", self.token.clone()),
            ("format", "json".to_string()),
            ("path_info", path_info.to_string()),
        ];
        params.extend(query.iter().cloned());

        let mut builder = self.client.request(method.clone(), &self.config.api_url).query(&params);
        if method != Method::GET {
            builder = builder.form(form);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| msg_error_anyhow!(Message::ApiRequestFailed(e.to_string())))?;
        let body = response
            .text()
            .await
            .map_err(|e| msg_error_anyhow!(Message::ApiRequestFailed(e.to_string())))?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(_) => {
                msg_debug!("{}", Message::ApiMalformedResponse(path_info.to_string()));
                Ok(Value::Array(Vec::new()))
            }
        }
    }

    async fn collection<T: DeserializeOwned>(&self, path_info: &str) -> Result<Vec<T>> {
        let value = self.request(path_info, &[], &[], Method::GET).await?;
        Ok(decode_collection(value))
    }
}

impl Catalog for ActiveCollab {
    async fn user_id(&self) -> Result<u64> {
        let info = self.request(INFO_PATH, &[], &[], Method::GET).await?;
        info.get("logged_user")
            .and_then(Value::as_str)
            .and_then(parse_user_id)
            .ok_or_else(|| msg_error_anyhow!(Message::UserIdUnresolved))
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        self.collection(PROJECTS_PATH).await
    }

    async fn milestones(&self, project_id: u64) -> Result<Vec<Milestone>> {
        self.collection(&format!("projects/{}/milestones", project_id)).await
    }

    async fn tickets(&self, project_id: u64) -> Result<Vec<Ticket>> {
        self.collection(&format!("projects/{}/tickets", project_id)).await
    }

    async fn time_entries(&self, project_id: u64) -> Result<Vec<TimeEntry>> {
        self.collection(&format!("projects/{}/tracking", project_id)).await
    }

    async fn add_time_record(&self, user_id: u64, record: &TimeRecord) -> Result<Submission> {
        let form = [
            ("submitted", "submitted".to_string()),
            ("time[user_id]", user_id.to_string()),
            ("time[value]", record.hours.to_string()),
            ("time[record_date]", record.date.format("%Y-%m-%d").to_string()),
            ("time[body]", record.description.clone()),
            ("time[billable_status]", "1".to_string()),
            ("time[parent_id]", record.parent_id.to_string()),
        ];
        let path_info = format!("projects/{}/time/add", record.project_id);
        let response = self.request(&path_info, &[], &form, Method::POST).await?;

        match response.get("id").and_then(Value::as_u64) {
            Some(id) => Ok(Submission::Created(id)),
            None => Ok(Submission::Rejected(field_errors(&response))),
        }
    }
}

/// Decodes a JSON array entry by entry, dropping entries that do not fit `T`.
/// Anything that is not an array is an empty collection.
pub fn decode_collection<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(entity) => Some(entity),
                Err(e) => {
                    msg_debug!("Dropping malformed entity: {}", e);
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Extracts the user id from the URL-encoded `logged_user` value, whose last
/// path segment is the id (`.../people/1/users/42`).
pub fn parse_user_id(logged_user: &str) -> Option<u64> {
    let decoded = urlencoding::decode(logged_user).ok()?;
    decoded.trim_end_matches('/').rsplit('/').next()?.trim().parse().ok()
}

/// Renders the `field_errors` of a rejected write as one line.
pub fn field_errors(response: &Value) -> String {
    match response.get("field_errors") {
        Some(Value::Object(fields)) => fields
            .iter()
            .map(|(field, error)| match error {
                Value::String(text) => format!("{}: {}", field, text),
                other => format!("{}: {}", field, other),
            })
            .collect::<Vec<_>>()
            .join("; "),
        Some(Value::Array(errors)) => errors
            .iter()
            .map(|error| error.as_str().map(str::to_string).unwrap_or_else(|| error.to_string()))
            .collect::<Vec<_>>()
            .join("; "),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => format!("no id in response {}", response),
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActiveCollabConfig {
    /// Full URL of the API endpoint, e.g. `https://ac.example.com/api.php`.
    pub api_url: String,
}

impl ActiveCollabConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "activecollab".to_string(),
            name: "ActiveCollab".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self { api_url: "".to_string() });
        msg_print!(Message::ConfigModuleActiveCollab);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
