//! Infermedica API client
//!
//! An async Rust client for the Infermedica medical-diagnosis REST API.
//!
//! # Features
//!
//! - Catalog lookups: conditions, symptoms, lab tests, risk factors, model info
//! - Interview endpoints: diagnosis, triage, explain, suggest, red flags,
//!   search and free-text parsing, including the COVID-19 variants
//! - Catalog models that keep the full JSON payload they were built from
//! - Explicit configuration with `.env` support and per-call overrides
//!
//! # Quick Start
//!
//! Set `INFERMEDICA_APP_ID` and `INFERMEDICA_APP_KEY` (a `.env` file works
//! too), then build a client with [`Api::from_config`]:
//!
//! ```no_run
//! use infermedica_api::config::{ApiOverrides, Config};
//! use infermedica_api::Api;
//!
//! # async fn run() -> Result<(), infermedica_api::Error> {
//! let api = Api::from_config(&Config::from_env()?, &ApiOverrides::new())?;
//! let info = api.get_info().await?;
//! println!("{:?}", info.api_version());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   typed calls   ┌───────┐  Transport  ┌────────────┐   HTTPS
//! │  caller  │────────────────▶│  Api  │────────────▶│ Connection │────────▶ API
//! │          │◀────────────────│       │◀────────────│  (reqwest) │◀────────
//! └──────────┘  models/errors  └───────┘    JSON     └────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod traits;

#[cfg(test)]
mod test_utils;

pub use api::Api;
pub use error::{ApiError, ConfigError, Error};
