//! Closed value sets for enumerated record fields.
//!
//! Each set is a Rust enum so that membership is total and the allowed values
//! come out in a stable order for error messages.

use crate::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A record field whose value must come from a closed set.
pub trait EnumeratedField: Copy + Sized + 'static {
    /// Record key holding the value.
    const FIELD: &'static str;

    /// Every variant, in the order allowed values are listed.
    const ALL: &'static [Self];

    /// Wire spelling of the variant.
    fn as_str(&self) -> &'static str;

    /// Exact, case-sensitive lookup of a wire value.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    /// Allowed wire values in declaration order.
    fn allowed_values() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.as_str()).collect()
    }

    /// Allowed wire values joined for display, e.g. `YES, NO, SENIOR_ONLY`.
    fn allowed_list() -> String {
        Self::allowed_values().join(", ")
    }
}

/// Whether the company sponsors work visas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisaSponsorship {
    Yes,
    No,
    SeniorOnly,
}

impl EnumeratedField for VisaSponsorship {
    const FIELD: &'static str = "visa_sponsorship";
    const ALL: &'static [Self] = &[Self::Yes, Self::No, Self::SeniorOnly];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::SeniorOnly => "SENIOR_ONLY",
        }
    }
}

/// Where employees may work from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemotePolicy {
    Global,
    EuOnly,
    Hybrid,
    OnSite,
}

impl EnumeratedField for RemotePolicy {
    const FIELD: &'static str = "remote_policy";
    const ALL: &'static [Self] = &[Self::Global, Self::EuOnly, Self::Hybrid, Self::OnSite];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "GLOBAL",
            Self::EuOnly => "EU_ONLY",
            Self::Hybrid => "HYBRID",
            Self::OnSite => "ON_SITE",
        }
    }
}

/// Whether the company is currently hiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HiringStatus {
    Active,
    Freeze,
}

impl EnumeratedField for HiringStatus {
    const FIELD: &'static str = "hiring_status";
    const ALL: &'static [Self] = &[Self::Active, Self::Freeze];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Freeze => "FREEZE",
        }
    }
}

fn parse_variant<T: EnumeratedField>(value: &str) -> Result<T, SchemaError> {
    T::parse(value).ok_or_else(|| SchemaError::unknown_variant(T::FIELD, value, T::allowed_list()))
}

impl FromStr for VisaSponsorship {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s)
    }
}

impl FromStr for RemotePolicy {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s)
    }
}

impl FromStr for HiringStatus {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s)
    }
}

impl fmt::Display for VisaSponsorship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RemotePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HiringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
