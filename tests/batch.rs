use edge_vision::batch::run;
use edge_vision::config::{load_config, BatchConfig, OnError};
use edge_vision::image::{load_image, save_image};
use edge_vision::synthetic::generate_samples;
use edge_vision::{BatchError, EdgeError, IoError};
use std::fs;
use ndarray::Array2;
use std::path::Path;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config_for(input: &Path, output: &Path, method: &str) -> BatchConfig {
    BatchConfig {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        method: method.to_string(),
        ..Default::default()
    }
}

#[test]
fn every_method_writes_one_gray_map_per_sample() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw");
    let samples = generate_samples(&input).unwrap();

    for method in ["canny", "Sobel", "LAPLACIAN"] {
        let output = dir.path().join(method.to_lowercase());
        let summary = run(&config_for(&input, &output, method)).unwrap();

        assert_eq!(summary.method.name(), method.to_lowercase());
        assert_eq!(summary.processed.len(), samples.len());
        assert!(summary.failed.is_empty());
        for outcome in &summary.processed {
            let name = outcome.input.file_name().unwrap();
            assert_eq!(outcome.output, output.join(name));
            let edges = load_image(&outcome.output, true).unwrap();
            assert_eq!(edges.shape(), &[512, 512]);
            assert!(edges.iter().any(|&v| v > 0), "{} is empty", outcome.output.display());
        }
    }
}

#[test]
fn visualize_and_report_are_written() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw");
    generate_samples(&input).unwrap();
    let output = dir.path().join("edges");
    let report = dir.path().join("reports/run.json");

    let config = BatchConfig {
        visualize: true,
        report: Some(report.clone()),
        ..config_for(&input, &output, "sobel")
    };
    let summary = run(&config).unwrap();

    let composite = load_image(&output.join("grid_compare.png"), false).unwrap();
    assert_eq!(composite.shape(), &[512, 1024, 3]);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["method"], "sobel");
    assert_eq!(
        json["processed"].as_array().map(|a| a.len()),
        Some(summary.processed.len())
    );
    assert_eq!(json["failed"].as_array().map(|a| a.len()), Some(0));
}

#[test]
fn corrupt_image_aborts_or_is_skipped() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw");
    generate_samples(&input).unwrap();
    let broken = input.join("broken.png");
    fs::write(&broken, b"definitely not a png").unwrap();
    let output = dir.path().join("edges");

    let abort = config_for(&input, &output, "canny");
    match run(&abort) {
        Err(BatchError::Image { path, source }) => {
            assert_eq!(path, broken);
            assert!(matches!(*source, BatchError::Io(IoError::Decode { .. })));
        }
        other => panic!("expected image failure, got {other:?}"),
    }

    let skip = BatchConfig {
        on_error: OnError::Skip,
        ..abort
    };
    let summary = run(&skip).unwrap();
    assert_eq!(summary.processed.len(), 5);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].input, broken);
}

#[test]
fn empty_or_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty");
    fs::create_dir_all(&empty).unwrap();
    fs::write(empty.join("notes.txt"), b"no images here").unwrap();

    assert!(matches!(
        run(&config_for(&empty, &dir.path().join("out"), "sobel")),
        Err(BatchError::NoImages(p)) if p == empty
    ));
    assert!(matches!(
        run(&config_for(&dir.path().join("missing"), &dir.path().join("out"), "sobel")),
        Err(BatchError::Io(IoError::NotADirectory(_)))
    ));
}

#[test]
fn invalid_override_surfaces_as_edge_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw");
    generate_samples(&input).unwrap();

    let mut config = config_for(&input, &dir.path().join("out"), "sobel");
    config.overrides.sobel = config.overrides.sobel.with_ksize(4);
    match run(&config) {
        Err(BatchError::Image { source, .. }) => assert!(matches!(
            *source,
            BatchError::Edge(EdgeError::InvalidParameter { name: "ksize", .. })
        )),
        other => panic!("expected parameter failure, got {other:?}"),
    }
}

#[test]
fn json_config_drives_the_run() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw");
    generate_samples(&input).unwrap();
    let output = dir.path().join("edges");

    let path = dir.path().join("batch.json");
    let text = serde_json::json!({
        "input": input,
        "output": output,
        "method": "laplacian",
        "defaults": { "laplacian": { "ksize": 1 } },
        "overrides": { "laplacian": { "scale": 2.0 } }
    });
    fs::write(&path, text.to_string()).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.defaults.laplacian.ksize, 1);
    let summary = run(&config).unwrap();
    assert_eq!(summary.processed.len(), 5);
    assert!(output.join("circles.png").is_file());
}

#[test]
fn recursive_run_mirrors_input_tree() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw");
    let output = dir.path().join("edges");
    let left = Array2::from_shape_fn((16, 16), |(_, x)| if x < 8 { 0u8 } else { 255 });
    let top = Array2::from_shape_fn((16, 16), |(y, _)| if y < 8 { 0u8 } else { 255 });
    save_image(&left, &input.join("a/x.png")).unwrap();
    save_image(&top, &input.join("b/x.png")).unwrap();

    let config = BatchConfig {
        recursive: true,
        visualize: true,
        ..config_for(&input, &output, "sobel")
    };
    let summary = run(&config).unwrap();
    assert_eq!(summary.processed.len(), 2);

    let a = load_image(&output.join("a/x.png"), true).unwrap();
    let b = load_image(&output.join("b/x.png"), true).unwrap();
    assert_ne!(a, b);
    assert_eq!(a[[4, 7]], 255);
    assert_eq!(b[[7, 4]], 255);
    assert!(output.join("a/x_compare.png").is_file());
    assert!(output.join("b/x_compare.png").is_file());
    assert!(!output.join("x.png").exists());
}
