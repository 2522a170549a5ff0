use crate::config::EngineConfig;
use anyhow::bail;
use std::path::Path;

use super::coqui::CoquiCliEngine;

/// The external synthesis engine. Model loading, device placement and audio
/// generation all happen on the other side of this trait.
pub trait SpeechEngine {
    fn name(&self) -> &str;

    /// Renders `text` in the voice of `speaker_wav` and writes the audio to
    /// `file_path`. Blocks until the file is written.
    fn tts_to_file(
        &self,
        text: &str,
        speaker_wav: &Path,
        language: &str,
        file_path: &Path,
    ) -> anyhow::Result<()>;

    fn list_models(&self) -> anyhow::Result<Vec<String>>;
}

pub fn select_engine(config: &EngineConfig) -> anyhow::Result<Box<dyn SpeechEngine>> {
    match config.backend.as_str() {
        "coqui" => Ok(Box::new(CoquiCliEngine::new(config))),
        other => bail!("unknown backend: {other}"),
    }
}
