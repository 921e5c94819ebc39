//! Diagnostic artifacts written through the file sink.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use salmap::models::SaliencyConfig;
use salmap::services::SaliencyService;

fn run_with_artifacts(ws: &Workspace) -> salmap::services::ComputeSummary {
    let config = SaliencyConfig {
        seed: Some(3),
        threshold_step: 32.0,
        artifacts_dir: Some(ws.path("artifacts")),
        ..Default::default()
    };
    SaliencyService::new(config)
        .unwrap()
        .run(&ws.input, &ws.path("saliency.png"))
        .unwrap()
}

#[test]
fn test_channel_images_written() {
    let ws = Workspace::with_rgb("scene", 12, 12, &centered_object(12, 12));
    run_with_artifacts(&ws);

    for ch in ["L", "a", "b"] {
        let image = read_gray(&ws.path(&format!("artifacts/scene-{ch}.png")));
        assert_eq!((image.width, image.height), (12, 12));
    }
}

#[test]
fn test_one_log_line_per_attention_map() {
    let ws = Workspace::with_rgb("scene", 12, 12, &centered_object(12, 12));
    let summary = run_with_artifacts(&ws);

    let mut lines = 0;
    for (i, ch) in ["L", "a", "b"].iter().enumerate() {
        let log = std::fs::read_to_string(ws.path(&format!("artifacts/scene-{ch}.log"))).unwrap();
        let count = log.lines().count();
        assert_eq!(count, 2 * summary.thresholds_per_channel[i], "channel {ch}");
        lines += count;

        for line in log.lines() {
            let (path, maximum) = line.rsplit_once(',').expect("path,maximum");
            assert!(path.ends_with("-attention-normal.png"), "{line}");
            assert!(std::path::Path::new(path).exists(), "{path}");
            let maximum: f64 = maximum.parse().expect("numeric maximum");
            assert!((0.0..=1.0).contains(&maximum), "{line}");
        }
    }
    assert_eq!(lines, summary.units);
}

#[test]
fn test_every_stage_written_for_first_unit() {
    let ws = Workspace::with_rgb("scene", 12, 12, &centered_object(12, 12));
    run_with_artifacts(&ws);

    let log = std::fs::read_to_string(ws.path("artifacts/scene-L.log")).unwrap();
    let first = log.lines().next().expect("L channel has thresholds");
    let (normal, _) = first.rsplit_once(',').unwrap();
    let base = normal.trim_end_matches("-attention-normal.png");

    for suffix in [
        ".png",
        "-open.png",
        "-attention.png",
        "-attention-dilated.png",
        "-attention-normal.png",
    ] {
        let path = format!("{base}{suffix}");
        let image = read_gray(std::path::Path::new(&path));
        assert_eq!(image.pixels.len(), 144, "{path}");
    }

    // The matching complement uses the -neg- name
    let negated = base.replace("scene-L-", "scene-L-neg-");
    assert!(std::path::Path::new(&format!("{negated}.png")).exists());
}

#[test]
fn test_masks_are_binary() {
    let ws = Workspace::with_rgb("scene", 12, 12, &centered_object(12, 12));
    run_with_artifacts(&ws);

    let mut checked = 0;
    for entry in std::fs::read_dir(ws.path("artifacts")).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        if name.ends_with("-open.png") || name.ends_with("-attention.png") {
            let image = read_gray(&path);
            assert!(
                image.pixels.iter().all(|&p| p == 0 || p == 255),
                "{name} is not binary"
            );
            checked += 1;
        }
    }
    assert!(checked > 0);
}
