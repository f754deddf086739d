//! Tests for the per-author fiction conversion.

use book_labels::transform::unescape_field;
use book_labels::{convert_fiction, convert_library, FictionConfig, LibraryConfig};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{create_fiction_db, create_libgen_dump};

fn config_for(dir: &TempDir) -> FictionConfig {
    FictionConfig {
        db_path: dir.path().join("data").join("book_dataset.sqlite"),
        json_output: dir.path().join("data").join("dataset_json.txt"),
        custom_output: dir.path().join("data").join("dataset_custom.txt"),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_writes_both_outputs_per_author() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config_for(&dir);
    create_fiction_db(&config.db_path, &["Doe, Jane;Roe, Richard", "Cher", ""]).await;

    let report = convert_fiction(config.clone()).await.expect("convert");
    assert_eq!(report.counts.orginal, 3);
    assert_eq!(report.counts.total, 4);

    let custom = std::fs::read_to_string(&config.custom_output).expect("custom");
    let custom_lines: Vec<&str> = custom.lines().collect();
    assert_eq!(custom_lines.len(), 4);
    assert_eq!(
        custom_lines[0],
        "{author_family_name=\"Doe\",author_first_name=\"Jane\",language=\"eng\",year=\"2001\",\
         extension=\"epub\",title=\"Title \\\"X\\\"\",publisher=\"Pub Y\",edition=\"1st\"}"
    );
    assert!(custom_lines[2].starts_with("{author_family_name=\"Cher\",author_first_name=\"\","));
    assert!(custom_lines[3].starts_with("{author_family_name=\"\",author_first_name=\"\","));

    let json = std::fs::read_to_string(&config.json_output).expect("json");
    let json_lines: Vec<&str> = json.lines().collect();
    assert_eq!(json_lines.len(), 4);
    for line in &json_lines {
        let value: serde_json::Value = serde_json::from_str(line).expect("json line");
        assert!(value.get("label_pair").is_none());
        assert_eq!(value["label_pairs"].as_array().map(Vec::len), Some(8));
    }

    let second: serde_json::Value = serde_json::from_str(json_lines[1]).expect("json line");
    assert_eq!(second["label_pairs"][0]["val"], "Roe");
    assert_eq!(second["label_pairs"][1]["val"], "Richard");

    // JSON values carry the same escaped text as the custom lines
    let title = second["label_pairs"][5]["val"].as_str().expect("title");
    assert_eq!(title, "Title \\\"X\\\"");
    assert_eq!(unescape_field(title), "Title \"X\"");
}

#[tokio::test]
async fn test_outputs_are_truncated_between_runs() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config_for(&dir);
    create_fiction_db(&config.db_path, &["A;B"]).await;

    convert_fiction(config.clone()).await.expect("first run");
    let report = convert_fiction(config.clone()).await.expect("second run");
    assert_eq!(report.counts.total, 2);

    for path in [&config.json_output, &config.custom_output] {
        let lines = std::fs::read_to_string(path).expect("output").lines().count();
        assert_eq!(lines, 2, "{} was appended to", path.display());
    }
}

#[tokio::test]
async fn test_missing_table_is_fatal() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = FictionConfig {
        table: "fiction_missing".to_string(),
        ..config_for(&dir)
    };
    create_fiction_db(&config.db_path, &["A"]).await;

    let err = convert_fiction(config).await.expect_err("missing table");
    assert!(format!("{:#}", err).contains("fiction_missing"));
}

#[tokio::test]
async fn test_missing_database_is_not_created() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = config_for(&dir);

    let err = convert_fiction(config.clone()).await.expect_err("missing database");
    assert!(format!("{:#}", err).contains("book_dataset.sqlite"));
    assert!(!config.db_path.exists());

    // The library conversion still sees a new database and seeds it
    let dump = dir.path().join("mysqlite3.db");
    create_libgen_dump(&dump, 2).await;
    let report = convert_library(LibraryConfig {
        db_path: config.db_path.clone(),
        seed_db: Some(dump),
        output: dir.path().join("data").join("dataset.txt"),
        ..Default::default()
    })
    .await
    .expect("seeded run");
    assert_eq!(report.seeded, Some(2));
}
