//! Leave Engine for civil-servant (ASN) administration
//!
//! This crate keeps employee, student, leave, holiday and letter records and
//! computes what the paperwork needs from them: effective leave days over
//! business days, a running leave balance per request, and Indonesian number
//! words (terbilang) and long dates for the generated letters.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod document;
pub mod error;
pub mod formatting;
pub mod models;
pub mod store;
