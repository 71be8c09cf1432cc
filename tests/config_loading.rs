use ocr_reflow::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn loads_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "max_regions = 500").unwrap();
    writeln!(file, "[reflow]").unwrap();
    writeln!(file, "line_grouping_ratio = 0.6").unwrap();
    writeln!(file, "skip_empty_regions = true").unwrap();
    writeln!(file, "[parallel]").unwrap();
    writeln!(file, "max_threads = 2").unwrap();

    let config = ConfigLoader::load_from_file(file.path()).unwrap();
    assert_eq!(config.max_regions, Some(500));
    assert_eq!(config.reflow.line_grouping_ratio, 0.6);
    assert_eq!(config.reflow.word_merge_ratio, 0.3);
    assert!(config.reflow.skip_empty_regions);
    assert_eq!(config.parallel.max_threads, Some(2));
    assert_eq!(config.parallel.batch_threshold, 4);

    let reflow = TextReflow::from_pipeline_config(&config).unwrap();
    assert_eq!(reflow.reflow_config(), &config.reflow);
}

#[test]
fn saves_and_reloads_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reflow.json");
    let config = PipelineConfig::new()
        .with_reflow(ReflowConfig::new().with_word_merge_ratio(0.25))
        .with_parallel(ParallelPolicy::new().with_batch_threshold(16));

    ConfigLoader::save_to_file(&config, &path).unwrap();
    let loaded = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn empty_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "").unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config, PipelineConfig::default());
}

#[test]
fn rejects_unknown_extension() {
    let file = NamedTempFile::new().unwrap();
    let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ReflowError::ConfigError { .. }));
}

#[test]
fn rejects_missing_file() {
    let dir = tempdir().unwrap();
    let err = ConfigLoader::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(
        err,
        ReflowError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound
    ));
}

#[test]
fn write_failure_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("reflow.toml");
    let err = ConfigLoader::save_to_file(&PipelineConfig::default(), &path).unwrap_err();
    assert!(matches!(err, ReflowError::Io(_)));
}

#[test]
fn rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[reflow]\nword_space_ratio = -1.0\n").unwrap();

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ReflowError::ConfigValidation(_)));
}
