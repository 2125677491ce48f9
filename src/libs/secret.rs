//! Encrypted at-rest storage for the ActiveCollab API token.
//!
//! The token is AES-256-CBC encrypted with key material baked in by `build.rs`
//! and stored base64 encoded in the application data directory. It never ends
//! up in `config.json`.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    /// Fails when the data directory cannot be created.
    pub fn new(secret_name: &str, prompt: &str) -> Result<Self> {
        let secret_file_path = DataStorage::new().get_path(secret_name)?;

        Ok(Self {
            prompt: prompt.to_owned(),
            secret_file_path,
            key: APP_METADATA_TOKEN_KEY.to_vec(),
            iv: APP_METADATA_TOKEN_IV.to_vec(),
        })
    }

    /// Returns the stored value, prompting (and storing) when there is none
    /// or it cannot be decrypted.
    pub fn get_or_prompt(&self) -> Result<String> {
        if self.exists() {
            if let Ok(value) = self.decrypt() {
                return Ok(value);
            }
        }
        self.prompt()
    }

    /// Always asks with hidden input and replaces the stored value.
    pub fn prompt(&self) -> Result<String> {
        let value = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.store(&value)?;
        Ok(value)
    }

    pub fn exists(&self) -> bool {
        fs::metadata(&self.secret_file_path).is_ok()
    }

    pub fn store(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let encoded = BASE64_STANDARD.encode(cipher.encrypt_vec(value.as_bytes()));

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&self.secret_file_path)?;
        file.write_all(encoded.as_bytes())?;
        Ok(())
    }

    pub fn decrypt(&self) -> Result<String> {
        let mut encoded = String::new();
        File::open(&self.secret_file_path)?.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        Ok(String::from_utf8(cipher.decrypt_vec(&ciphertext)?)?)
    }

    /// Removes the stored value. A missing file is not an error.
    pub fn delete(&self) -> Result<()> {
        if self.exists() {
            fs::remove_file(&self.secret_file_path)?;
        }
        Ok(())
    }
}
