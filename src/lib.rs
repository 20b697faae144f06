//! Places decision deposits on Substrate governance referenda.
//!
//! Scans the `Referenda.ReferendumInfoFor` storage map of each configured network,
//! selects the ongoing referenda on the target tracks that have no decision deposit,
//! and submits `Referenda.place_decision_deposit` for each of them from one operator
//! account.
//!
//! - `bootstrap`: per-network orchestration
//! - `models`: configuration, chain and report types
//! - `repositories`: network selection and configuration loading
//! - `services`: node access, catalog, filter and submission
//! - `utils`: constants, formatting, logging and test builders

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
