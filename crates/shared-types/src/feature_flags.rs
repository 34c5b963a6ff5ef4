use crate::Role;
use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional pages are active.
///
/// Loaded from `config.toml` and exposed to components through context.
/// Every field defaults to `true` so a config that omits a flag keeps the
/// page available.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub survey: bool,
    #[serde(default = "default_true")]
    pub sign_up: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            survey: true,
            sign_up: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Public details of the school shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchoolInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Default for SchoolInfo {
    fn default() -> Self {
        Self {
            name: "DriveWise Driving School".to_string(),
            tagline: "Confident drivers, one lesson at a time.".to_string(),
            phone: None,
            email: None,
        }
    }
}

/// A pre-provisioned account known to the demo authenticator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub display_name: String,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub school: SchoolInfo,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub demo_accounts: Vec<DemoAccount>,
}
