use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` at the workspace root, embedded at compile time so every
/// platform build (web included) ships the same settings.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded config once and return it.
///
/// A config that fails to parse falls back to `AppConfig::default()`.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(CONFIG_TOML);
        tracing::info!(
            school = %config.school.name,
            survey = config.features.survey,
            sign_up = config.features.sign_up,
            demo_accounts = config.demo_accounts.len(),
            "config loaded"
        );
        config
    })
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("failed to parse config.toml: {e}; using defaults");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Role;

    #[test]
    fn embedded_config_parses() {
        let config: AppConfig = toml::from_str(CONFIG_TOML).unwrap();
        assert!(!config.school.name.is_empty());
        assert!(config.demo_accounts.iter().any(|a| a.role == Role::Admin));
        assert!(config.demo_accounts.iter().any(|a| a.role == Role::Employee));
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        assert_eq!(parse_config("[features\nsurvey = "), AppConfig::default());
    }

    #[test]
    fn unknown_role_falls_back_to_defaults() {
        let config = parse_config(
            r#"
            [[demo_accounts]]
            email = "x@example.com"
            password = "password123"
            role = "root"
            "#,
        );
        assert!(config.demo_accounts.is_empty());
    }
}
