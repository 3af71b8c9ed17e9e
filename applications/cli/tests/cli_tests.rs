/// CLI tests
/// Runs commands against manifests and config files written to temp dirs
use mixtape_cli::{
    execute, CliConfig, CliError, Command, IdGeneratorKind, OutputFormat, PlaylistManifest,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const ROAD_TRIP: &str = r#"
name = "Road Trip"
likes = ["alice"]

[[songs]]
title = "Roadhouse Blues"
artist = "The Doors"
duration_secs = 244

[[songs]]
title = "Born to Run"
artist = "Bruce Springsteen"
duration_secs = 270

[[songs]]
title = "Highway Star"
artist = "Deep Purple"
duration_secs = 370

[[comments]]
user = "alice"
text = "windows down"

[[comments]]
user = "bob"
text = "needs more synth"
"#;

fn write_manifest(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("road_trip.toml");
    fs::write(&path, ROAD_TRIP).unwrap();
    path
}

fn sequential_config() -> CliConfig {
    let mut config = CliConfig::default();
    config.ids.generator = IdGeneratorKind::Sequential;
    config.ids.prefix = "rt".to_string();
    config
}

/// Test the summary reflects manifest contents
#[test]
fn test_show_summary_text() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);

    let output = execute(
        &Command::Show { manifest },
        &sequential_config(),
        OutputFormat::Text,
    )
    .unwrap();

    assert!(output.starts_with("Road Trip (rt-1)"), "got: {}", output);
    assert!(output.contains("songs:    3"));
    assert!(output.contains("duration: 14:44"));
    assert!(output.contains("likes:    1"));
    assert!(output.contains("comments: 2"));
}

/// Test JSON output parses back into the summary fields
#[test]
fn test_show_summary_json() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);

    let output = execute(
        &Command::Show { manifest },
        &sequential_config(),
        OutputFormat::Json,
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["id"], "rt-1");
    assert_eq!(value["total_duration_secs"], 884);
    assert_eq!(value["song_count"], 3);
}

/// Test sorted listing orders by title
#[test]
fn test_songs_sorted() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);

    let output = execute(
        &Command::Songs {
            manifest,
            sorted: true,
        },
        &CliConfig::default(),
        OutputFormat::Text,
    )
    .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Born to Run"));
    assert!(lines[1].contains("Highway Star"));
    assert!(lines[2].contains("Roadhouse Blues"));
}

/// Test sort_on_load applies before the command runs
#[test]
fn test_sort_on_load() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);
    let mut config = CliConfig::default();
    config.output.sort_on_load = true;

    let output = execute(
        &Command::Songs {
            manifest,
            sorted: false,
        },
        &config,
        OutputFormat::Text,
    )
    .unwrap();

    assert!(output.lines().next().unwrap().contains("Born to Run"));
}

/// Test search is case-insensitive over title and artist
#[test]
fn test_search_command() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);

    let output = execute(
        &Command::Search {
            manifest,
            keyword: "ROAD".to_string(),
        },
        &CliConfig::default(),
        OutputFormat::Text,
    )
    .unwrap();

    assert_eq!(output, "  1. The Doors - Roadhouse Blues (4:04)");
}

/// Test per-user comment filtering and unknown users
#[test]
fn test_comments_by_user() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);
    let config = CliConfig::default();

    let bob = execute(
        &Command::Comments {
            manifest: manifest.clone(),
            user: Some("bob".to_string()),
        },
        &config,
        OutputFormat::Text,
    )
    .unwrap();
    assert!(bob.ends_with("bob: needs more synth"));
    assert_eq!(bob.lines().count(), 1);

    let nobody = execute(
        &Command::Comments {
            manifest,
            user: Some("zed".to_string()),
        },
        &config,
        OutputFormat::Text,
    )
    .unwrap();
    assert_eq!(nobody, "(no comments)");
}

/// Test insert clamps negative positions to the head
#[test]
fn test_insert_command() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);

    let output = execute(
        &Command::Insert {
            manifest,
            title: "Opener".to_string(),
            artist: "Band".to_string(),
            duration: 90,
            at: -10,
        },
        &CliConfig::default(),
        OutputFormat::Text,
    )
    .unwrap();

    assert_eq!(output.lines().next(), Some("  1. Band - Opener (1:30)"));
    assert_eq!(output.lines().count(), 4);
}

/// Test empty user ids surface as playlist errors
#[test]
fn test_like_rejects_empty_user() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);

    let err = execute(
        &Command::Like {
            manifest,
            user: String::new(),
        },
        &CliConfig::default(),
        OutputFormat::Text,
    )
    .unwrap_err();

    assert!(matches!(err, CliError::Playlist(_)));
}

/// Test missing manifest files are reported
#[test]
fn test_missing_manifest() {
    let dir = TempDir::new().unwrap();
    let err = PlaylistManifest::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, CliError::Manifest(_)));
}

/// Test configuration file values are loaded
#[test]
fn test_config_file_loading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixtape.toml");
    fs::write(
        &path,
        r#"
[ids]
generator = "sequential"
prefix = "pl"

[output]
format = "json"
"#,
    )
    .unwrap();

    let config = CliConfig::load(Some(path.as_path())).unwrap();

    assert_eq!(config.ids.generator, IdGeneratorKind::Sequential);
    assert_eq!(config.ids.prefix, "pl");
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.sort_on_load);
    assert!(config.validate().is_ok());
}

/// Test an explicit config path must exist
#[test]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = CliConfig::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}
