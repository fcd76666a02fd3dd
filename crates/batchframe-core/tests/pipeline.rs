//! End-to-end pipeline tests against real temp folders.

use std::path::Path;

use batchframe_core::{BatchProcessor, Config};
use image::{GenericImageView, ImageFormat, Rgb, RgbImage};

fn base_config(source: &Path, destination: &Path) -> Config {
    let mut config = Config::default();
    config.folders.source = source.to_path_buf();
    config.folders.destination = destination.to_path_buf();
    config.naming.pattern = "picture-$$.jpg".to_string();
    config.naming.seq_start = 550;
    config
}

fn write_image(path: &Path, width: u32, height: u32, format: ImageFormat) {
    RgbImage::from_pixel(width, height, Rgb([100, 110, 120]))
        .save_with_format(path, format)
        .unwrap();
}

#[tokio::test]
async fn portrait_image_end_to_end() {
    let source = tempfile::tempdir().unwrap();
    let destination = tempfile::tempdir().unwrap();
    write_image(&source.path().join("holiday.jpg"), 1080, 1960, ImageFormat::Jpeg);

    let config = base_config(source.path(), destination.path());
    let summary = BatchProcessor::new(config).run().await.unwrap();

    assert_eq!(summary.discovered, 1);
    assert_eq!(summary.processed, 1);

    let out = destination.path().join("picture-550.jpg");
    assert!(out.exists());
    let written = image::open(&out).unwrap();
    assert_eq!(written.dimensions(), (480, 640));
}

#[tokio::test]
async fn mixed_orientations_with_watermark() {
    let source = tempfile::tempdir().unwrap();
    let destination = tempfile::tempdir().unwrap();
    write_image(&source.path().join("a_landscape.jpg"), 800, 600, ImageFormat::Jpeg);
    write_image(&source.path().join("b_portrait.jpg"), 600, 800, ImageFormat::Jpeg);

    let mut config = base_config(source.path(), destination.path());
    config.watermark.text = "(c) batchframe".to_string();
    config.watermark.alpha = 35;
    let summary = BatchProcessor::new(config).run().await.unwrap();

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.skipped(), 0);

    // Both sequence values were used; which file got which is unspecified
    let first = image::open(destination.path().join("picture-550.jpg")).unwrap();
    let second = image::open(destination.path().join("picture-551.jpg")).unwrap();
    let mut dims = vec![first.dimensions(), second.dimensions()];
    dims.sort();
    assert_eq!(dims, vec![(480, 640), (640, 480)]);
}

#[tokio::test]
async fn source_normalization_feeds_the_pool() {
    let source = tempfile::tempdir().unwrap();
    let destination = tempfile::tempdir().unwrap();
    // A PNG gets converted in place before processing; garbage is deleted
    write_image(&source.path().join("shot.png"), 300, 200, ImageFormat::Png);
    std::fs::write(source.path().join("readme.txt"), b"not an image").unwrap();

    let config = base_config(source.path(), destination.path());
    let summary = BatchProcessor::new(config).run().await.unwrap();

    assert_eq!(summary.discovered, 1);
    assert_eq!(summary.processed, 1);
    assert!(source.path().join("shot.jpg").exists());
    assert!(!source.path().join("shot.png").exists());
    assert!(!source.path().join("readme.txt").exists());
    assert!(destination.path().join("picture-550.jpg").exists());
}

#[tokio::test]
async fn empty_source_returns_zero_summary() {
    let source = tempfile::tempdir().unwrap();
    let destination = tempfile::tempdir().unwrap();

    let config = base_config(source.path(), destination.path());
    let summary = BatchProcessor::new(config).run().await.unwrap();

    assert_eq!(summary.discovered, 0);
    assert_eq!(summary.processed, 0);
}

#[tokio::test]
async fn corrupt_entry_is_skipped_not_fatal() {
    let source = tempfile::tempdir().unwrap();
    let destination = tempfile::tempdir().unwrap();
    write_image(&source.path().join("good.jpg"), 400, 300, ImageFormat::Jpeg);
    // Canonical extension, so the catalog keeps it without a decode check;
    // the worker hits the decode failure instead
    std::fs::write(source.path().join("bad.jpg"), b"garbage bytes").unwrap();

    let config = base_config(source.path(), destination.path());
    let summary = BatchProcessor::new(config).run().await.unwrap();

    assert_eq!(summary.discovered, 2);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.skipped(), 1);
}

#[tokio::test]
async fn rerun_overwrites_prior_outputs() {
    let source = tempfile::tempdir().unwrap();
    let destination = tempfile::tempdir().unwrap();
    write_image(&source.path().join("only.jpg"), 800, 600, ImageFormat::Jpeg);

    let config = base_config(source.path(), destination.path());
    let first = BatchProcessor::new(config.clone()).run().await.unwrap();
    let second = BatchProcessor::new(config).run().await.unwrap();

    // Same start value, no persisted counter: same filename both times
    assert_eq!(first.processed, 1);
    assert_eq!(second.processed, 1);
    assert_eq!(
        std::fs::read_dir(destination.path()).unwrap().count(),
        1,
        "second run overwrites, it does not add"
    );
}

#[tokio::test]
async fn missing_source_folder_is_fatal() {
    let destination = tempfile::tempdir().unwrap();
    let mut config = base_config(Path::new("/does/not/exist"), destination.path());
    config.folders.source = Path::new("/does/not/exist").to_path_buf();

    let err = BatchProcessor::new(config).run().await.unwrap_err();
    assert!(err.to_string().contains("folders.source"));
}
