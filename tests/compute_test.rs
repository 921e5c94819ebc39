//! End-to-end saliency computation through the service layer.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use salmap::error::AppError;
use salmap::models::{NormalizeMode, SaliencyConfig};
use salmap::services::SaliencyService;

fn config() -> SaliencyConfig {
    SaliencyConfig {
        seed: Some(11),
        ..Default::default()
    }
}

#[test]
fn test_output_matches_input_dimensions() {
    let ws = Workspace::with_rgb("object", 24, 18, &centered_object(24, 18));
    let output = ws.path("saliency.png");

    let summary = SaliencyService::new(config())
        .unwrap()
        .run(&ws.input, &output)
        .unwrap();

    assert_eq!((summary.width, summary.height), (24, 18));
    let map = read_gray(&output);
    assert_eq!((map.width, map.height), (24, 18));
    assert_full_range(&map);
}

#[test]
fn test_object_is_more_salient_than_background() {
    let ws = Workspace::with_rgb("object", 24, 24, &centered_object(24, 24));
    let output = ws.path("saliency.png");
    SaliencyService::new(config())
        .unwrap()
        .run(&ws.input, &output)
        .unwrap();

    let map = read_gray(&output);
    let at = |x: usize, y: usize| map.pixels[y * 24 + x];
    assert!(at(12, 12) > at(1, 1), "center {} corner {}", at(12, 12), at(1, 1));
    assert_eq!(at(0, 0), 0);
}

#[test]
fn test_uniform_image_yields_zero_map() {
    let ws = Workspace::with_rgb("flat", 10, 10, &uniform(10, 10, [90, 160, 30]));
    let output = ws.path("saliency.png");

    let summary = SaliencyService::new(config())
        .unwrap()
        .run(&ws.input, &output)
        .unwrap();

    assert_eq!(summary.units, 0);
    assert_eq!(summary.thresholds_per_channel, [0, 0, 0]);
    assert_all_zero(&read_gray(&output));
}

#[test]
fn test_same_seed_same_output_with_border_handling() {
    let ws = Workspace::with_rgb("object", 20, 20, &centered_object(20, 20));
    let service = SaliencyService::new(SaliencyConfig {
        handle_border: true,
        ..config()
    })
    .unwrap();

    service.run(&ws.input, &ws.path("a.png")).unwrap();
    service.run(&ws.input, &ws.path("b.png")).unwrap();

    assert_eq!(
        read_gray(&ws.path("a.png")).pixels,
        read_gray(&ws.path("b.png")).pixels
    );
}

#[test]
fn test_parallel_matches_sequential_without_border_handling() {
    let ws = Workspace::with_rgb("object", 20, 16, &centered_object(20, 16));
    SaliencyService::new(config())
        .unwrap()
        .run(&ws.input, &ws.path("seq.png"))
        .unwrap();
    SaliencyService::new(SaliencyConfig {
        parallel: true,
        ..config()
    })
    .unwrap()
    .run(&ws.input, &ws.path("par.png"))
    .unwrap();

    let seq = read_gray(&ws.path("seq.png")).pixels;
    let par = read_gray(&ws.path("par.png")).pixels;
    for (a, b) in seq.iter().zip(&par) {
        assert!(a.abs_diff(*b) <= 1, "{a} vs {b}");
    }
}

#[test]
fn test_min_max_normalization() {
    let ws = Workspace::with_rgb("object", 16, 16, &centered_object(16, 16));
    let output = ws.path("saliency.png");
    SaliencyService::new(SaliencyConfig {
        normalize: NormalizeMode::MinMax,
        ..config()
    })
    .unwrap()
    .run(&ws.input, &output)
    .unwrap();

    assert_full_range(&read_gray(&output));
}

#[test]
fn test_rgba_input_rejected_without_output() {
    let ws = Workspace::with_rgb("unused", 1, 1, &[[0, 0, 0]]);
    let input = ws.path("alpha.png");
    write_png(&input, png::ColorType::Rgba, 2, 2, &[255; 16]);
    let output = ws.path("saliency.png");

    let err = SaliencyService::new(config())
        .unwrap()
        .run(&input, &output)
        .unwrap_err();

    assert!(matches!(err, AppError::Saliency(_)), "got {err:?}");
    assert!(!output.exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let ws = Workspace::with_rgb("unused", 1, 1, &[[0, 0, 0]]);
    let err = SaliencyService::new(config())
        .unwrap()
        .run(&ws.path("nope.png"), &ws.path("out.png"))
        .unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
