use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use irscope::{IrscopeError, layout::LayoutMethod};
use irscope_cli::{Args, run};

/// Samples are at workspace root, relative to workspace not the crate
fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

/// Collects all .txt files from a directory
fn collect_dump_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        layout: None,
        seed: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_dump_files(samples_dir());
    assert!(
        !valid_samples.is_empty(),
        "No valid samples found in samples/"
    );

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_filename = format!(
            "{}.toml",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(sample_path, &output_path)) {
            Ok(()) => {
                let report = fs::read_to_string(&output_path).expect("Report was not written");
                assert!(report.contains("layout"), "{}", sample_path.display());
                assert!(report.contains("type_colors"), "{}", sample_path.display());
            }
            Err(e) => failed_samples.push((sample_path.clone(), e)),
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid sample(s) failed unexpectedly",
            failed_samples.len()
        );
    }
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_samples = collect_dump_files(samples_dir().join("errors"));
    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpected = Vec::new();

    for sample_path in &error_samples {
        let output_filename = format!(
            "error_{}.toml",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(sample_path, &output_path)) {
            Err(IrscopeError::Parse { .. }) => {}
            other => unexpected.push((sample_path.clone(), format!("{other:?}"))),
        }
    }

    if !unexpected.is_empty() {
        eprintln!("\nError samples without a parse error:");
        for (path, result) in &unexpected {
            eprintln!("  - {}: {}", path.display(), result);
        }
        panic!("{} error sample(s) did not fail to parse", unexpected.len());
    }
}

#[test]
fn e2e_layout_override_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("grid.toml");

    let mut args = args_for(&samples_dir().join("node_dump.txt"), &output_path);
    args.layout = Some(LayoutMethod::Grid);

    run(&args).expect("Failed to process sample");

    let report = fs::read_to_string(&output_path).expect("Report was not written");
    assert!(report.contains("method = \"grid\""));
    assert!(report.contains("format = \"node_dump\""));
}

#[test]
fn e2e_seeded_runs_write_identical_reports() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let sample = samples_dir().join("jit_log.txt");

    let reports: Vec<String> = ["first.toml", "second.toml"]
        .into_iter()
        .map(|name| {
            let output_path = temp_dir.path().join(name);
            let mut args = args_for(&sample, &output_path);
            args.seed = Some(42);
            run(&args).expect("Failed to process sample");
            fs::read_to_string(&output_path).expect("Report was not written")
        })
        .collect();

    assert_eq!(reports[0], reports[1]);
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = args_for(
        &temp_dir.path().join("missing.txt"),
        &temp_dir.path().join("out.toml"),
    );

    assert!(matches!(run(&args), Err(IrscopeError::Io(_))));
}
