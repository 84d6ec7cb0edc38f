//! Rancher API Client Library
//!
//! This file serves as the library root for the rancher-client crate,
//! organizing and exposing the modules that make up the client.
//!
//! The crate talks to a Rancher v1/v2-beta style orchestration API over
//! JSON/HTTP with basic-auth credentials. Every resource method funnels
//! through a single request core that classifies each outcome as either a
//! decoded JSON payload or a structured error.
//!
//! ```no_run
//! use rancher_client::{ClientConfig, RancherClient};
//!
//! # async fn example() -> rancher_client::Result<()> {
//! let config = ClientConfig::new("rancher.local", 8080, "access", "secret");
//! let client = RancherClient::new(config)?;
//!
//! let hosts = client.hosts().await?;
//! println!("{hosts}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{RancherClient, RancherClientBuilder};
pub use config::ClientConfig;
pub use error::{ApiError, RancherError, Result};
