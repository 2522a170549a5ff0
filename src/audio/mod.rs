use anyhow::Context;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct WavSummary {
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_secs: f64,
}

/// Reads the header of a rendered WAV file.
pub fn summarize(path: &Path) -> anyhow::Result<WavSummary> {
    let reader = hound::WavReader::open(path)
        .with_context(|| format!("open wav {}", path.display()))?;
    let spec = reader.spec();
    let frames = reader.duration();

    Ok(WavSummary {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        duration_secs: frames as f64 / spec.sample_rate as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_duration_of_written_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 24_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for _ in 0..12_000 {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();

        let summary = summarize(&path).unwrap();
        assert_eq!(summary.sample_rate, 24_000);
        assert_eq!(summary.channels, 1);
        assert!((summary.duration_secs - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not.wav");
        std::fs::write(&path, b"plain text").unwrap();
        assert!(summarize(&path).is_err());
    }
}
