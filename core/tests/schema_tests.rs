use devgen_core::{
    generate_schema_tests, AppError, FileConfig, FileSink, Overrides, SchemaTestSettings,
    TestTemplate, WriterSink,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn make_examples(root: &Path) -> std::path::PathBuf {
    let dir = root.join("schema-examples");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("Contract.json"), "{}").unwrap();
    fs::write(dir.join("Waypoint.json"), "{}").unwrap();
    fs::write(dir.join("notes.txt"), "not an example").unwrap();
    dir
}

#[test]
fn test_stdout_mode_emits_one_line_per_json_file() {
    let root = tempdir().unwrap();
    let dir = make_examples(root.path());

    let mut sink = WriterSink::new(Vec::new());
    let report = generate_schema_tests(&dir, &TestTemplate::default(), "json", &mut sink).unwrap();
    let out = String::from_utf8(sink.into_inner()).unwrap();

    assert_eq!(report.statements, 2);
    assert!(report.degenerate.is_empty());
    assert_eq!(
        out,
        concat!(
            "json_deserialize_test!(test_contract_schema, schemas::Contract, \"schema-examples/Contract.json\");\n",
            "json_deserialize_test!(test_waypoint_schema, schemas::Waypoint, \"schema-examples/Waypoint.json\");\n",
        )
    );
    assert!(!out.contains("notes"));
}

#[test]
fn test_file_mode_is_repeatable() {
    let root = tempdir().unwrap();
    let dir = make_examples(root.path());
    let target = root.path().join("schema.rs");
    fs::write(&target, "stale hand edits\n").unwrap();

    let settings = SchemaTestSettings::resolve(
        FileConfig::default(),
        Overrides {
            schema_dir: Some(dir.clone()),
            target: Some(target.clone()),
            ..Default::default()
        },
    );
    let prefix = settings.prefix().unwrap();

    let run = || {
        let mut sink = FileSink::new(&target, prefix.clone());
        generate_schema_tests(
            &settings.schema_dir,
            &settings.template,
            &settings.extension,
            &mut sink,
        )
        .unwrap();
        fs::read(&target).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);

    let text = String::from_utf8(first).unwrap();
    assert!(text.starts_with("use crate::schemas;\n\nmacro_rules! json_deserialize_test {"));
    assert!(text.contains("}\n\njson_deserialize_test!(test_contract_schema,"));
    assert!(!text.contains("stale hand edits"));
    assert!(text.ends_with("\"schema-examples/Waypoint.json\");\n"));
}

#[test]
fn test_missing_directory_is_fatal() {
    let root = tempdir().unwrap();
    let target = root.path().join("schema.rs");
    let mut sink = FileSink::new(&target, "prefix");

    let err = generate_schema_tests(
        &root.path().join("does-not-exist"),
        &TestTemplate::default(),
        "json",
        &mut sink,
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
    assert!(!target.exists());
}

#[test]
fn test_empty_directory_writes_prefix_only() {
    let root = tempdir().unwrap();
    let dir = root.path().join("empty");
    fs::create_dir(&dir).unwrap();
    let target = root.path().join("schema.rs");

    let mut sink = FileSink::new(&target, "PREFIX");
    let report = generate_schema_tests(&dir, &TestTemplate::default(), "json", &mut sink).unwrap();

    assert_eq!(report.statements, 0);
    assert_eq!(fs::read_to_string(&target).unwrap(), "PREFIX\n\n");
}
