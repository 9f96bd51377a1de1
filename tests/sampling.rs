mod common;

use std::collections::HashSet;
use std::path::PathBuf;

use common::fixture_dataset;
use iaps::{IapsError, ValenceBand};

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn omitted_n_returns_every_negative_picture() {
    let (_dir, dataset) = fixture_dataset();
    let paths = dataset.sample_negative_images(None, None).unwrap();

    let mut names = file_names(&paths);
    names.sort();
    // 6570.1 is one of the pictures shipped with an uppercase extension.
    assert_eq!(names, ["6570.1.JPG", "9000.jpg", "9290.jpg"]);
}

#[test]
fn omitted_n_returns_every_positive_picture() {
    let (_dir, dataset) = fixture_dataset();
    let paths = dataset.sample_positive_images(None, None).unwrap();

    let mut names = file_names(&paths);
    names.sort();
    assert_eq!(names, ["1710.jpg", "5833.jpg", "8490.jpg"]);
}

#[test]
fn omitted_n_returns_every_neutral_picture() {
    let (_dir, dataset) = fixture_dataset();
    let paths = dataset.sample_neutral_images(None, None).unwrap();

    let mut names = file_names(&paths);
    names.sort();
    assert_eq!(names, ["7010.jpg", "7035.jpg", "7080.jpg"]);
}

#[test]
fn sampled_paths_live_under_the_images_dir() {
    let (_dir, dataset) = fixture_dataset();
    let paths = dataset.sample_neutral_images(None, None).unwrap();
    assert!(!paths.is_empty());
    for path in &paths {
        assert!(path.starts_with(&dataset.config().images_dir), "{}", path.display());
    }
}

#[test]
fn seeded_draws_are_reproducible() {
    let (_dir, dataset) = fixture_dataset();
    let a = dataset.sample_positive_images(Some(2), Some(42)).unwrap();
    let b = dataset.sample_positive_images(Some(2), Some(42)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}

#[test]
fn sized_draw_is_a_distinct_subset_of_the_band() {
    let (_dir, dataset) = fixture_dataset();
    let paths = dataset.sample_neutral_images(Some(2), Some(1)).unwrap();

    let names: HashSet<String> = file_names(&paths).into_iter().collect();
    assert_eq!(names.len(), 2);
    for name in &names {
        assert!(
            ["7010.jpg", "7035.jpg", "7080.jpg"].contains(&name.as_str()),
            "{name} is not a neutral picture"
        );
    }
}

#[test]
fn oversized_request_is_rejected() {
    let (_dir, dataset) = fixture_dataset();
    let err = dataset.sample_positive_images(Some(4), None).unwrap_err();
    assert!(matches!(
        err,
        IapsError::SampleSize {
            requested: 4,
            available: 3,
        }
    ));
}

#[test]
fn custom_band_selects_by_threshold() {
    let (_dir, dataset) = fixture_dataset();
    // Everything at or below mean valence 5.0: the three negatives plus the
    // two milder neutral pictures.
    let paths = dataset
        .sample_images(ValenceBand::AtMost(5.0), None, None)
        .unwrap();
    assert_eq!(paths.len(), 5);
}

#[test]
fn empty_band_yields_no_paths_and_rejects_any_draw() {
    let (_dir, dataset) = fixture_dataset();
    let band = ValenceBand::AtMost(0.5);

    assert!(dataset.sample_images(band, None, None).unwrap().is_empty());

    let err = dataset.sample_images(band, Some(1), None).unwrap_err();
    assert!(matches!(
        err,
        IapsError::SampleSize {
            requested: 1,
            available: 0,
        }
    ));
}

#[test]
fn resolver_preserves_dataset_extension_casing() {
    let (_dir, dataset) = fixture_dataset();
    assert!(dataset.full_filename("6570.1").to_string_lossy().ends_with(".JPG"));
    assert!(dataset.full_filename("1000").to_string_lossy().ends_with(".jpg"));
}
