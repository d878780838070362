//! Terminal client for a personal ledger server.

pub mod app;
pub mod chart;
pub mod client;
pub mod config;
pub mod error;
pub mod local_state;
pub mod ui;
pub mod view_model;
