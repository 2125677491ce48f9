//! Core library modules for the actime application.
//!
//! ## Engine
//!
//! - **`resolver`**: case-insensitive fragment matching with fan-out
//! - **`week`**: Monday to Friday spans
//! - **`load_status`**: days that already carry the user's time
//! - **`apportion`**: static or random hours per ticket and day
//! - **`reconcile`**: the project × day × milestone × ticket walk
//!
//! ## Infrastructure
//!
//! - **`config`**, **`data_storage`**, **`secret`**: settings, data directory, encrypted token
//! - **`hours`**: the project/milestone/ticket hours file
//! - **`messages`**, **`view`**: console output

pub mod apportion;
pub mod config;
pub mod data_storage;
pub mod hours;
pub mod load_status;
pub mod messages;
pub mod reconcile;
pub mod resolver;
pub mod secret;
pub mod view;
pub mod week;
