//! Overtime Pay Calculation Engine
//!
//! This crate implements the Indonesian statutory overtime pay rules from
//! Kepmenakertrans No. KEP.102/MEN/VI/2004: a 1/173 monthly-hours hourly
//! rate, tiered multipliers for workday and rest-day overtime, and a tenure
//! allowance feeding into the rate. It also provides the calendar model
//! (weekly rest day and national holiday classification) and a key-value
//! record store for per-day overtime entries.

#![warn(missing_docs)]

pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
