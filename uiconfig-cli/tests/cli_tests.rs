use clap::{CommandFactory, Parser};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use uiconfig_cli::{
    Cli, Command, LogoAction, PackageAction, ThemeAction, execute, open_storage, read_text_arg,
    resolve_config,
};
use uiconfig_client::MemoryDocumentClient;
use uiconfig_store::{CONFIG_TYPES_KEY, ServicesConfig, UiConfigStorage};

const DEVICE_CONTENT: &str = r#"{"content":{"deviceContent":{"properties.desired.firmware":{"fwVersion":"1.0.1"}}}}"#;
const EDGE_CONTENT: &str = r#"{"content":{"modulesContent":{"$edgeAgent":{}}}}"#;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("uiconfig").chain(args.iter().copied())).unwrap()
}

fn storage() -> UiConfigStorage {
    let config = ServicesConfig {
        azure_maps_key: "cli-key".to_string(),
        ..ServicesConfig::default()
    };
    UiConfigStorage::new(Arc::new(MemoryDocumentClient::new()), &config)
}

async fn run(storage: &UiConfigStorage, args: &[&str]) -> anyhow::Result<serde_json::Value> {
    execute(&parse(args).command, storage).await
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = parse(&["theme", "get", "--in-memory", "--verbose"]);
    assert!(cli.in_memory);
    assert!(cli.verbose);
    assert_eq!(
        cli.command,
        Command::Theme {
            action: ThemeAction::Get
        }
    );
}

#[test]
fn logo_type_defaults_to_svg() {
    let cli = parse(&["logo", "set", "--image", "abc"]);
    assert_eq!(
        cli.command,
        Command::Logo {
            action: LogoAction::Set {
                image: "abc".to_string(),
                image_type: "image/svg+xml".to_string(),
                name: None,
            }
        }
    );
}

#[test]
fn package_list_filters_default_to_blank() {
    let cli = parse(&["packages", "list"]);
    assert_eq!(
        cli.command,
        Command::Packages {
            action: PackageAction::List {
                package_type: String::new(),
                config_type: String::new(),
            }
        }
    );
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["uiconfig"]).is_err());
}

// ── Configuration ────────────────────────────────────────────────

#[test]
fn flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"azure_maps_key": "file-key", "catalog_max_attempts": 9, "storage_adapter": {{"base_url": "http://file/v1"}}}}"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cli = parse(&[
        "--config",
        &path,
        "--adapter-url",
        "http://flag/v1",
        "--maps-key",
        "flag-key",
        "status",
    ]);
    let config = resolve_config(&cli).unwrap();

    assert_eq!(config.storage_adapter.base_url, "http://flag/v1");
    assert_eq!(config.azure_maps_key, "flag-key");
    assert_eq!(config.catalog_max_attempts, 9);
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn resolved_config_log_omits_maps_key() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let cli = parse(&["--maps-key", "secret-maps-key", "--adapter-url", "http://a/v1", "status"]);
    let config = tracing::subscriber::with_default(subscriber, || resolve_config(&cli)).unwrap();
    assert_eq!(config.azure_maps_key, "secret-maps-key");

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("http://a/v1"));
    assert!(output.contains("maps_key_set=true"));
    assert!(!output.contains("secret-maps-key"));
}

#[test]
fn in_memory_help_says_state_is_not_kept() {
    let command = Cli::command();
    let flag = command
        .get_arguments()
        .find(|arg| arg.get_id() == "in_memory")
        .unwrap();
    let help = flag
        .get_long_help()
        .or(flag.get_help())
        .unwrap()
        .to_string();
    assert!(help.contains("starts empty"));
}

#[test]
fn unreadable_config_file_is_an_error() {
    let cli = parse(&["--config", "/nonexistent/uiconfig.json", "status"]);
    assert!(resolve_config(&cli).is_err());
}

#[test]
fn text_args_read_files_with_at_prefix() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", EDGE_CONTENT).unwrap();

    let arg = format!("@{}", file.path().display());
    assert_eq!(read_text_arg(&arg).unwrap(), EDGE_CONTENT);
    assert_eq!(read_text_arg("literal").unwrap(), "literal");
    assert!(read_text_arg("@/nonexistent/file").is_err());
}

// ── Commands ─────────────────────────────────────────────────────

#[tokio::test]
async fn in_memory_storage_reports_healthy() {
    let cli = parse(&["--in-memory", "status"]);
    let storage = open_storage(&cli, &ServicesConfig::default()).unwrap();
    let status = execute(&cli.command, &storage).await.unwrap();
    assert_eq!(status["is_healthy"], json!(true));
}

#[tokio::test]
async fn theme_get_returns_default_with_maps_key() {
    let storage = storage();
    let theme = run(&storage, &["theme", "get"]).await.unwrap();
    assert_eq!(
        theme,
        json!({"Name": "Default", "Description": "Default Theme", "AzureMapsKey": "cli-key"})
    );
}

#[tokio::test]
async fn theme_set_accepts_json() {
    let storage = storage();
    run(&storage, &["theme", "set", r#"{"Name":"Dark"}"#])
        .await
        .unwrap();
    let theme = run(&storage, &["theme", "get"]).await.unwrap();
    assert_eq!(theme["Name"], json!("Dark"));
    assert_eq!(theme["AzureMapsKey"], json!("cli-key"));
}

#[tokio::test]
async fn theme_set_rejects_non_object() {
    let storage = storage();
    assert!(run(&storage, &["theme", "set", "[1]"]).await.is_err());
    assert!(run(&storage, &["theme", "set", "{"]).await.is_err());
}

#[tokio::test]
async fn logo_set_then_rename_keeps_name() {
    let storage = storage();
    run(&storage, &["logo", "set", "--image", "a", "--name", "Contoso"])
        .await
        .unwrap();
    let logo = run(&storage, &["logo", "set", "--image", "b"]).await.unwrap();

    assert_eq!(logo["Name"], json!("Contoso"));
    assert_eq!(logo["Image"], json!("b"));
    assert_eq!(logo["IsDefault"], json!(false));
}

#[tokio::test]
async fn user_setting_round_trip() {
    let storage = storage();
    assert!(run(&storage, &["user-setting", "get", "alice"]).await.is_err());

    run(&storage, &["user-setting", "set", "alice", r#"{"lang":"en"}"#])
        .await
        .unwrap();
    let setting = run(&storage, &["user-setting", "get", "alice"]).await.unwrap();
    assert_eq!(setting, json!({"lang": "en"}));
}

#[tokio::test]
async fn device_groups_list_empty() {
    let storage = storage();
    assert_eq!(run(&storage, &["device-groups", "list"]).await.unwrap(), json!([]));
    assert!(run(&storage, &["device-groups", "get", "g1"]).await.is_err());
    assert_eq!(
        run(&storage, &["device-groups", "delete", "g1"]).await.unwrap(),
        json!({"deleted": "g1"})
    );
}

#[tokio::test]
async fn packages_add_list_and_config_types() {
    let storage = storage();
    let added = run(
        &storage,
        &[
            "packages",
            "add",
            "--name",
            "fw",
            "--type",
            "deviceConfiguration",
            "--config-type",
            "firmware",
            DEVICE_CONTENT,
        ],
    )
    .await
    .unwrap();
    assert_eq!(added["Name"], json!("fw"));
    assert!(added["Id"].as_str().is_some_and(|id| !id.is_empty()));

    run(
        &storage,
        &["packages", "add", "--name", "agent", "--type", "edgemanifest", EDGE_CONTENT],
    )
    .await
    .unwrap();

    let devices = run(
        &storage,
        &["packages", "list", "--package-type", "deviceConfiguration"],
    )
    .await
    .unwrap();
    assert_eq!(devices.as_array().map(Vec::len), Some(1));

    let all = run(&storage, &["packages", "list"]).await.unwrap();
    assert_eq!(all.as_array().map(Vec::len), Some(2));

    let types = run(&storage, &["config-types"]).await.unwrap();
    assert_eq!(types, json!(["firmware"]));
}

#[tokio::test]
async fn packages_add_rejects_unknown_type() {
    let storage = storage();
    let result = run(
        &storage,
        &["packages", "add", "--name", "x", "--type", "bundle", EDGE_CONTENT],
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn packages_delete_refuses_catalog_key() {
    let storage = storage();
    assert!(
        run(&storage, &["packages", "delete", CONFIG_TYPES_KEY])
            .await
            .is_err()
    );
}
