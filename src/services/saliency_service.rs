//! End-to-end saliency computation: PNG in, PNG out.

use std::path::{Path, PathBuf};

use bms_core::{ArtifactSink, NullSink, SaliencyDetector, SaliencyReport, SourceImage};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::artifact_writer::FileArtifactSink;
use crate::error::AppError;
use crate::models::SaliencyConfig;
use crate::rendering::{read_rgb, write_gray};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeSummary {
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub units: usize,
    pub thresholds_per_channel: [usize; 3],
    /// Seed actually used, so a run can be repeated with `--seed`
    pub seed: u64,
}

/// Runs the detector configured by a [`SaliencyConfig`].
pub struct SaliencyService {
    config: SaliencyConfig,
    detector: SaliencyDetector,
}

impl SaliencyService {
    pub fn new(config: SaliencyConfig) -> Result<Self, AppError> {
        let detector = SaliencyDetector::new(config.to_options())?;
        Ok(Self { config, detector })
    }

    /// Read `input`, compute its saliency map and write it to `output`.
    ///
    /// Nothing is written to `output` if any step fails.
    pub fn run(&self, input: &Path, output: &Path) -> Result<ComputeSummary, AppError> {
        let image = read_rgb(input)?;
        tracing::info!(
            input = %input.display(),
            width = image.width(),
            height = image.height(),
            "Loaded image"
        );

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let report = match &self.config.artifacts_dir {
            Some(dir) => {
                let stem = input
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("image");
                let sink = FileArtifactSink::create(dir, stem)?;
                tracing::info!(dir = %sink.dir().display(), "Writing artifacts");
                self.compute(&image, seed, &sink)?
            }
            None => self.compute(&image, seed, &NullSink)?,
        };

        tracing::info!(
            units = report.units,
            thresholds_l = report.thresholds_per_channel[0],
            thresholds_a = report.thresholds_per_channel[1],
            thresholds_b = report.thresholds_per_channel[2],
            seed,
            "Computed saliency"
        );

        write_gray(
            output,
            report.map.pixels(),
            report.map.width(),
            report.map.height(),
        )?;
        tracing::info!(output = %output.display(), "Wrote saliency map");

        Ok(ComputeSummary {
            output: output.to_path_buf(),
            width: report.map.width(),
            height: report.map.height(),
            units: report.units,
            thresholds_per_channel: report.thresholds_per_channel,
            seed,
        })
    }

    /// Compute on an already decoded image.
    pub fn compute<S>(
        &self,
        image: &SourceImage,
        seed: u64,
        sink: &S,
    ) -> Result<SaliencyReport, AppError>
    where
        S: ArtifactSink + ?Sized,
    {
        let report = if self.config.parallel {
            self.detector.compute_par(image, seed, sink)?
        } else {
            let mut rng = StdRng::seed_from_u64(seed);
            self.detector.compute(image, &mut rng, sink)?
        };
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NormalizeMode;

    /// 32x24 image with a 12x8 block far enough from the border that the
    /// default dilation keeps it clear of the edges.
    fn centered_block() -> SourceImage {
        let (w, h) = (32, 24);
        let data: Vec<u8> = (0..w * h)
            .flat_map(|i| {
                let (x, y) = (i % w, i / w);
                let inside = (10..22).contains(&x) && (8..16).contains(&y);
                let v: u8 = if inside { 210 } else { 40 };
                [v, 255 - v, v / 2]
            })
            .collect();
        SourceImage::from_interleaved(&data, w, h, 3).unwrap()
    }

    fn assert_spans_full_range(map: &bms_core::SaliencyMap) {
        let pixels = map.pixels();
        assert_eq!(pixels.iter().copied().min(), Some(0));
        assert_eq!(pixels.iter().copied().max(), Some(255));
    }

    #[test]
    fn test_bad_step_rejected_at_construction() {
        let config = SaliencyConfig {
            threshold_step: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            SaliencyService::new(config),
            Err(AppError::Saliency(_))
        ));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let sequential = SaliencyService::new(SaliencyConfig::default()).unwrap();
        let parallel = SaliencyService::new(SaliencyConfig {
            parallel: true,
            ..Default::default()
        })
        .unwrap();

        let a = sequential.compute(&centered_block(), 5, &NullSink).unwrap();
        let b = parallel.compute(&centered_block(), 5, &NullSink).unwrap();
        assert_spans_full_range(&a.map);
        assert_eq!(a.units, b.units);
        for (x, y) in a.map.pixels().iter().zip(b.map.pixels()) {
            assert!(x.abs_diff(*y) <= 1);
        }
    }

    #[test]
    fn test_min_max_normalization_runs() {
        let service = SaliencyService::new(SaliencyConfig {
            normalize: NormalizeMode::MinMax,
            ..Default::default()
        })
        .unwrap();
        let report = service.compute(&centered_block(), 0, &NullSink).unwrap();
        assert_spans_full_range(&report.map);
        assert_eq!(report.map.get(16, 12), 255);
        assert_eq!(report.map.get(0, 0), 0);
    }
}
