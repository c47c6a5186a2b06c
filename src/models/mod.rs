//! Shared types used across all modules.
//!
//! Parameter blocks for the exported functions, the bounded template
//! text they carry, and the small enums the config and CLI layers select
//! behaviour with. Other modules import from here rather than reaching
//! into each other's internals.

pub mod request;
pub mod text;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use request::{LogRequest, PrintRequest};
pub use text::TemplateText;

/// What the logarithm does with an operand `<= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NonPositivePolicy {
    /// Fail with `InvalidArgument`.
    #[default]
    Reject,
    /// Return [`LOG_SENTINEL`](crate::constants::LOG_SENTINEL).
    Sentinel,
}

impl fmt::Display for NonPositivePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonPositivePolicy::Reject => write!(f, "reject"),
            NonPositivePolicy::Sentinel => write!(f, "sentinel"),
        }
    }
}

impl std::str::FromStr for NonPositivePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(NonPositivePolicy::Reject),
            "sentinel" => Ok(NonPositivePolicy::Sentinel),
            other => Err(format!(
                "unknown policy: '{other}'. Supported: reject, sentinel"
            )),
        }
    }
}

/// How the CLI presents a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Function output goes straight to stdout.
    #[default]
    Text,
    /// Function output is captured and reported as a JSON document.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: '{other}'. Supported: text, json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_defaults_to_reject() {
        assert_eq!(NonPositivePolicy::default(), NonPositivePolicy::Reject);
    }

    #[test]
    fn policy_from_str_case_insensitive() {
        assert_eq!("Sentinel".parse::<NonPositivePolicy>(), Ok(NonPositivePolicy::Sentinel));
        assert_eq!(" REJECT ".parse::<NonPositivePolicy>(), Ok(NonPositivePolicy::Reject));
        assert!("clamp".parse::<NonPositivePolicy>().is_err());
    }

    #[test]
    fn policy_display_matches_serde() {
        for policy in [NonPositivePolicy::Reject, NonPositivePolicy::Sentinel] {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{policy}\""));
        }
    }

    #[test]
    fn output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
