//! Commission travel-order deadline and alert engine.
//!
//! This crate computes, for each commission order, the reintegration date,
//! the legalization deadline, the remaining legalization business days, an
//! urgency alert and an on-time / late status, using a national holiday
//! calendar. It also provides the order workflows that keep those derived
//! fields current in a record store, and an HTTP API over them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;
pub mod store;
