//! Configuration types for the leave engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::Holiday;

/// The office that issues letters.
///
/// Printed in letter headers and used as the default place of issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficeConfig {
    /// Name of the office or school.
    pub name: String,
    /// The parent agency, if any.
    #[serde(default)]
    pub agency: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// City, used as the default place of issue.
    pub city: String,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind, e.g. "127.0.0.1:8080".
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

/// Leave policy settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LeavePolicy {
    /// Days granted each year; the default current-year bucket of a new
    /// balance.
    #[serde(default = "default_annual_allowance")]
    pub annual_allowance: i32,
    /// Position keyword identifying the default signer of leave reports.
    #[serde(default = "default_report_signer_keyword")]
    pub report_signer_keyword: String,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            annual_allowance: default_annual_allowance(),
            report_signer_keyword: default_report_signer_keyword(),
        }
    }
}

fn default_annual_allowance() -> i32 {
    12
}

fn default_report_signer_keyword() -> String {
    "kepala sekolah".to_string()
}

/// Contents of `app.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfigFile {
    /// The issuing office.
    pub office: OfficeConfig,
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Leave policy.
    #[serde(default)]
    pub leave_policy: LeavePolicy,
}

/// Contents of one file in the `holidays/` directory.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// Holidays listed in the file.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// Complete application configuration.
///
/// This struct aggregates all configuration loaded from the YAML files in a
/// configuration directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    office: OfficeConfig,
    server: ServerConfig,
    leave_policy: LeavePolicy,
    /// Seed holidays, sorted by date.
    holidays: Vec<Holiday>,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(file: AppConfigFile, holidays: Vec<Holiday>) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by_key(|h| h.date);
        Self {
            office: file.office,
            server: file.server,
            leave_policy: file.leave_policy,
            holidays: sorted_holidays,
        }
    }

    /// Returns the office metadata.
    pub fn office(&self) -> &OfficeConfig {
        &self.office
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the leave policy.
    pub fn leave_policy(&self) -> &LeavePolicy {
        &self.leave_policy
    }

    /// Returns the seed holidays in date order.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}
