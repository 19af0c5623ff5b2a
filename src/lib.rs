//! Payroll engine for category-based salaries and bonuses.
//!
//! This crate computes base salaries, bonuses and total pay for secretaries,
//! salespeople and managers, and aggregates totals and rankings across a
//! roster for one reporting period.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
