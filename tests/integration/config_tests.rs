use std::fs;
use std::path::PathBuf;

use appsearch::config::{Config, PROJECT_CONFIG_FILE};
use appsearch::schema::FieldType;
use appsearch::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn config_schema_from_fixture() -> Result<(), String> {
    let cases = vec![TestCase {
        name: "catalog",
        input: "tests/fixtures/configs/catalog.toml",
        expected: (
            false,
            4usize,
            FieldType::Number,
            true,
            Some("product_name".to_string()),
            Some("search".to_string()),
            false,
        ),
    }];

    run_table_tests(cases, |relative_path| {
        let content = fs::read_to_string(fixture_path(relative_path)).expect("read fixture");
        let config = Config::from_toml(&content).expect("parse config");
        (
            config.schema.strict,
            config.schema.attributes.len(),
            config.schema.attributes["price"].field_type,
            config.schema.attributes["color"].uses_options,
            config.field_names.aliases.get("name").cloned(),
            config.locator.query_name,
            config.output.pretty,
        )
    })
}

#[test]
fn explicit_path_skips_project_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[field_names.aliases]\nname = \"title\"\n",
    )
    .unwrap();
    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "[schema]\nstrict = true\n").unwrap();

    let config = Config::load(Some(explicit.as_path()), dir.path()).unwrap();
    assert!(config.schema.strict);
    assert!(config.field_names.aliases.is_empty());
}

#[test]
fn invalid_explicit_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let explicit = dir.path().join("broken.toml");
    fs::write(&explicit, "[schema\nstrict = ").unwrap();

    let err = Config::load(Some(explicit.as_path()), dir.path()).unwrap_err();
    assert!(err.to_string().contains("parse config"));
}
