//! Artifact sink that writes every intermediate grid as a PNG file.

use std::fs::File;
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bms_core::{
    ArtifactSink, AttentionMap, BooleanMap, Channel, ChannelMap, MaskStage, Polarity, SinkError,
    UnitKey,
};

use crate::error::AppError;
use crate::rendering::write_gray;

/// Writes diagnostics into `dir`, prefixing every file with the input stem.
///
/// | Artifact | File |
/// |----------|------|
/// | channel | `<stem>-<ch>.png` |
/// | thresholded mask | `<stem>-<ch>-<ttt>.png`, `<stem>-<ch>-neg-<ttt>.png` |
/// | opened mask | `...-open.png` |
/// | foreground | `...-attention.png` |
/// | dilated foreground | `...-attention-dilated.png` |
/// | normalized map, display scaled | `...-attention-normal.png` |
///
/// Each channel also gets `<stem>-<ch>.log` with one
/// `<attention-normal path>,<maximum>` line per attention map.
pub struct FileArtifactSink {
    dir: PathBuf,
    stem: String,
    logs: [Mutex<LineWriter<File>>; 3],
}

impl FileArtifactSink {
    /// Create `dir` if needed and truncate the three channel logs.
    pub fn create(dir: &Path, stem: &str) -> Result<Self, AppError> {
        std::fs::create_dir_all(dir)?;
        let open = |channel: Channel| -> Result<Mutex<LineWriter<File>>, AppError> {
            let path = dir.join(format!("{stem}-{}.log", channel.suffix()));
            Ok(Mutex::new(LineWriter::new(File::create(path)?)))
        };
        let [l, a, b] = Channel::ALL;

        Ok(Self {
            dir: dir.to_path_buf(),
            stem: stem.to_string(),
            logs: [open(l)?, open(a)?, open(b)?],
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the channel log for `channel`.
    pub fn log_path(&self, channel: Channel) -> PathBuf {
        self.dir.join(format!("{}-{}.log", self.stem, channel.suffix()))
    }

    /// Base name shared by all artifacts of one unit, without extension.
    fn unit_base(&self, key: &UnitKey) -> String {
        let threshold = threshold_label(key.threshold);
        match key.polarity {
            Polarity::Above => format!("{}-{}-{threshold}", self.stem, key.channel.suffix()),
            Polarity::AtMost => format!("{}-{}-neg-{threshold}", self.stem, key.channel.suffix()),
        }
    }

    fn mask_path(&self, key: &UnitKey, stage: MaskStage) -> PathBuf {
        let suffix = match stage {
            MaskStage::Thresholded => "",
            MaskStage::Opened => "-open",
            MaskStage::Foreground => "-attention",
            MaskStage::Dilated => "-attention-dilated",
        };
        self.dir.join(format!("{}{suffix}.png", self.unit_base(key)))
    }

    fn attention_path(&self, key: &UnitKey) -> PathBuf {
        self.dir.join(format!("{}-attention-normal.png", self.unit_base(key)))
    }
}

/// Integer part zero-padded to three digits. A fractional threshold keeps
/// its exact digits after a `p` (`10.4` is `010p4`) so distinct thresholds
/// never share a file.
fn threshold_label(threshold: f64) -> String {
    let whole = threshold.trunc();
    let text = threshold.to_string();
    match text.split_once('.') {
        Some((_, fraction)) if threshold != whole => format!("{:03}p{fraction}", whole as i64),
        _ => format!("{:03}", whole as i64),
    }
}

impl ArtifactSink for FileArtifactSink {
    fn channel(&self, map: &ChannelMap) -> Result<(), SinkError> {
        let name = format!("{}-{}.png", self.stem, map.channel().suffix());
        let path = self.dir.join(name);
        write_gray(&path, &map.to_u8(), map.width(), map.height())?;
        tracing::debug!(path = %path.display(), "Wrote channel");
        Ok(())
    }

    fn mask(&self, key: &UnitKey, stage: MaskStage, mask: &BooleanMap) -> Result<(), SinkError> {
        let path = self.mask_path(key, stage);
        write_gray(&path, &mask.to_u8(), mask.width(), mask.height())?;
        tracing::debug!(path = %path.display(), ?stage, "Wrote mask");
        Ok(())
    }

    fn attention(&self, key: &UnitKey, map: &AttentionMap, maximum: f64) -> Result<(), SinkError> {
        let path = self.attention_path(key);
        write_gray(&path, &map.to_display_u8(), map.width(), map.height())?;

        let mut log = self.logs[key.channel.index()]
            .lock()
            .map_err(|_| "artifact log lock poisoned")?;
        writeln!(log, "{},{}", path.display(), maximum)?;

        tracing::debug!(path = %path.display(), maximum, "Wrote attention map");
        Ok(())
    }
}
