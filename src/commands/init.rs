//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard and, once ActiveCollab is configured,
//! asks for the API token and stores it encrypted.

use crate::{
    api::activecollab::TOKEN_FILE,
    libs::{config::Config, messages::Message, secret::Secret},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration and stored token instead
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let secret = Secret::new(TOKEN_FILE, &Message::PromptApiToken.to_string())?;

    if init_args.delete {
        Config::delete()?;
        secret.delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);

    if config.activecollab.is_some() {
        secret.prompt()?;
        msg_success!(Message::TokenStored);
    }

    Ok(())
}
