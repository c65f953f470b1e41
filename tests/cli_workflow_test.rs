//! Integration tests for the CLI composition root
//!
//! These tests drive `UserRegistryApp` against a JSON store in a temp directory.

use std::fs;

use tempfile::TempDir;
use user_registry::adapter::config::Config;
use user_registry::domain::error::DomainError;
use user_registry::driver::{Command, UserRegistryApp};

fn json_store_config(temp_dir: &TempDir) -> Config {
    let store_path = temp_dir.path().join("data/users.json");
    Config::default().with_store_path(Some(store_path.to_string_lossy().to_string()))
}

async fn execute(app: &UserRegistryApp, command: Command) -> anyhow::Result<String> {
    let mut out = Vec::new();
    app.execute(command, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

#[tokio::test]
async fn test_users_persist_across_app_instances() {
    let temp_dir = TempDir::new().unwrap();
    let config = json_store_config(&temp_dir);

    let first = UserRegistryApp::new(&config);
    execute(
        &first,
        Command::Register {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            mail_address: Some("alice@example.com".to_string()),
        },
    )
    .await
    .unwrap();

    let second = UserRegistryApp::new(&config);
    let output = execute(&second, Command::Get { id: "u1".to_string() })
        .await
        .unwrap();

    assert_eq!(output, "id: u1, name: Alice\n");

    // メールアドレスは保存されない
    let stored = fs::read_to_string(temp_dir.path().join("data/users.json")).unwrap();
    assert!(!stored.contains("alice@example.com"));
}

#[tokio::test]
async fn test_duplicate_register_across_app_instances() {
    let temp_dir = TempDir::new().unwrap();
    let config = json_store_config(&temp_dir);

    let register = |name: &str| Command::Register {
        id: "u1".to_string(),
        name: name.to_string(),
        mail_address: None,
    };

    execute(&UserRegistryApp::new(&config), register("Alice"))
        .await
        .unwrap();
    let err = execute(&UserRegistryApp::new(&config), register("Bob"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DomainError>(),
        Some(DomainError::AlreadyExists(_))
    ));
}

#[tokio::test]
async fn test_update_and_delete_with_json_store() {
    let temp_dir = TempDir::new().unwrap();
    let app = UserRegistryApp::new(&json_store_config(&temp_dir));

    execute(
        &app,
        Command::Register {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            mail_address: None,
        },
    )
    .await
    .unwrap();
    execute(
        &app,
        Command::Update {
            id: "u1".to_string(),
            name: Some("Alicia".to_string()),
        },
    )
    .await
    .unwrap();

    let output = execute(&app, Command::Get { id: "u1".to_string() })
        .await
        .unwrap();
    assert_eq!(output, "id: u1, name: Alicia\n");

    let output = execute(&app, Command::Delete { id: "u1".to_string() })
        .await
        .unwrap();
    assert_eq!(output, "deleted: u1\n");

    let output = execute(&app, Command::Get { id: "u1".to_string() })
        .await
        .unwrap();
    assert_eq!(output, "user not found: u1\n");
}

#[tokio::test]
async fn test_config_file_selects_json_store() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("users.json");
    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        serde_json::json!({ "store_path": store_path.to_string_lossy() }).to_string(),
    )
    .unwrap();

    let config = Config::load_or_default(config_path.to_str().unwrap()).unwrap();
    let app = UserRegistryApp::new(&config);
    execute(
        &app,
        Command::Register {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            mail_address: None,
        },
    )
    .await
    .unwrap();

    assert!(store_path.exists());
}

#[tokio::test]
async fn test_corrupted_store_surfaces_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = json_store_config(&temp_dir);
    fs::create_dir_all(temp_dir.path().join("data")).unwrap();
    fs::write(temp_dir.path().join("data/users.json"), "not json").unwrap();

    let app = UserRegistryApp::new(&config);
    let err = execute(&app, Command::Get { id: "u1".to_string() })
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("Failed to parse user store JSON"));
}
