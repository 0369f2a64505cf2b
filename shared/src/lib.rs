//! Shared library for the webservice demo Lambda functions.
//!
//! This crate provides common utilities, types, and the domain logic used
//! across all Lambda functions.

pub mod config;
pub mod devtest;
pub mod error;
pub mod honbasho;
pub mod http;
pub mod models;
pub mod roster;

pub use config::Config;
pub use error::{Error, Result};
pub use honbasho::{Basho, TournamentSchedule};
pub use models::{ScheduleResponse, Worker, WorkerList};
