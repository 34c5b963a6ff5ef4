use pretty_assertions::assert_eq;
use shared_types::{AppConfig, Role};

const WORKSPACE_CONFIG: &str = include_str!("../../../config.toml");

#[test]
fn test_workspace_config_parses() {
    let config: AppConfig = toml::from_str(WORKSPACE_CONFIG).unwrap();
    assert!(!config.school.name.is_empty());
    for role in [Role::Admin, Role::Employee, Role::Client] {
        assert!(
            config.demo_accounts.iter().any(|a| a.role == role),
            "no demo account for {role}"
        );
    }
}

#[test]
fn test_demo_account_emails_are_unique() {
    let config: AppConfig = toml::from_str(WORKSPACE_CONFIG).unwrap();
    let mut emails: Vec<String> = config
        .demo_accounts
        .iter()
        .map(|a| a.email.to_lowercase())
        .collect();
    emails.sort();
    emails.dedup();
    assert_eq!(emails.len(), config.demo_accounts.len());
}

#[test]
fn test_config_serializes_to_json() {
    let config: AppConfig = toml::from_str(WORKSPACE_CONFIG).unwrap();
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["demo_accounts"][0]["role"], "admin");
}
