//! End-to-end flow tests: raw plane on disk to PNGs on disk.

mod common;

use common::fixtures::{self, BACKGROUND};
use nirclean::error::CleanError;
use nirclean::models::{AppConfig, ByteOrder};
use nirclean::services::{CleanPipeline, CleanRequest};
use pretty_assertions::assert_eq;
use speck_removal::{Dims, Visualization};

fn config(rows: usize, cols: usize) -> AppConfig {
    AppConfig {
        rows: Some(rows),
        cols: Some(cols),
        ..Default::default()
    }
}

#[test]
fn test_centered_speck_writes_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = fixtures::write_raw(
        dir.path(),
        "scan.raw",
        &fixtures::centered_speck(),
        ByteOrder::Little,
    );
    let request = CleanRequest {
        input,
        output: dir.path().join("clean.png"),
        raw_output: Some(dir.path().join("raw.png")),
        mask_output: Some(dir.path().join("mask.png")),
    };

    let pipeline = CleanPipeline::new(AppConfig {
        kernel_size: 3,
        visualization: Visualization::SaturateCast,
        ..config(9, 9)
    })
    .unwrap();
    let summary = pipeline.run(&request).unwrap();

    assert_eq!(summary.dims, Dims::new(9, 9));
    assert_eq!(summary.specks, 1);
    assert_eq!(summary.degenerate, 0);

    let clean = common::assert_gray_png(&request.output);
    assert_eq!((clean.width, clean.height), (9, 9));
    assert!(clean.data.iter().all(|&v| v == BACKGROUND as u8));

    let raw = common::assert_gray_png(request.raw_output.as_ref().unwrap());
    assert_eq!(raw.data[4 * 9 + 4], 255);
    assert_eq!(raw.data[0], BACKGROUND as u8);

    let mask = common::assert_gray_png(request.mask_output.as_ref().unwrap());
    let expected: Vec<u8> = (0..81).map(|i| if i == 40 { 255 } else { 0 }).collect();
    assert_eq!(mask.data, expected);
}

#[test]
fn test_big_endian_plane_with_several_specks() {
    let dir = tempfile::tempdir().unwrap();
    let (image, specks) = fixtures::speckled(16, 20);
    let input = fixtures::write_raw(dir.path(), "scan.be.raw", &image, ByteOrder::Big);
    let request = CleanRequest {
        input,
        output: dir.path().join("clean.png"),
        mask_output: Some(dir.path().join("mask.png")),
        ..Default::default()
    };

    let pipeline = CleanPipeline::new(AppConfig {
        byte_order: ByteOrder::Big,
        visualization: Visualization::SaturateCast,
        ..config(16, 20)
    })
    .unwrap();
    let summary = pipeline.run(&request).unwrap();
    assert_eq!(summary.specks, specks.len());

    let clean = common::assert_gray_png(&request.output);
    assert_eq!((clean.width, clean.height), (20, 16));
    assert!(clean.data.iter().all(|&v| v == BACKGROUND as u8));

    let mask = common::assert_gray_png(request.mask_output.as_ref().unwrap());
    for (r, c) in specks {
        assert_eq!(mask.data[r * 20 + c], 255, "speck at ({}, {})", r, c);
    }
    assert_eq!(mask.data.iter().filter(|&&v| v == 255).count(), 3);
}

#[test]
fn test_config_file_drives_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nirclean.yaml");
    std::fs::write(
        &config_path,
        "rows: 9\ncols: 9\nkernel_size: 3\nvisualization: normalize-min-max\noptimize_png: true\n",
    )
    .unwrap();
    let input = fixtures::write_raw(
        dir.path(),
        "scan.raw",
        &fixtures::centered_speck(),
        ByteOrder::Little,
    );

    let app_config = AppConfig::load(&config_path).unwrap();
    assert!(app_config.optimize_png);
    let pipeline = CleanPipeline::new(app_config).unwrap();
    let request = CleanRequest {
        input,
        output: dir.path().join("clean.png"),
        ..Default::default()
    };
    let summary = pipeline.run(&request).unwrap();
    assert_eq!(summary.specks, 1);

    // Flat repaired output under min/max normalization is all zero
    let clean = common::decode_gray_samples(&request.output);
    assert_eq!((clean.width, clean.height), (9, 9));
    assert_eq!(clean.data, vec![0u8; 81]);
}

#[test]
fn test_short_plane_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.raw");
    std::fs::write(&input, vec![0u8; 9 * 9 * 2 - 1]).unwrap();

    let pipeline = CleanPipeline::new(config(9, 9)).unwrap();
    let err = pipeline
        .run(&CleanRequest {
            input,
            output: dir.path().join("clean.png"),
            ..Default::default()
        })
        .unwrap_err();

    match err {
        CleanError::ShortRead { expected, actual } => {
            assert_eq!(expected, 162);
            assert_eq!(actual, 161);
        }
        other => panic!("Expected ShortRead, got {:?}", other),
    }
    assert!(!dir.path().join("clean.png").exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = CleanPipeline::new(config(4, 4)).unwrap();
    let err = pipeline
        .run(&CleanRequest {
            input: dir.path().join("absent.raw"),
            output: dir.path().join("clean.png"),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, CleanError::Io(_)));
}
