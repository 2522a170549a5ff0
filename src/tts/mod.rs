pub mod coqui;
pub mod provider;

use crate::reference::{Emotion, Gender, Intensity, ReferenceResolver};
use std::path::PathBuf;

pub use provider::{select_engine, SpeechEngine};

#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub emotion: Emotion,
    pub gender: Gender,
    pub intensity: Intensity,
    pub output_path: PathBuf,
}

/// Picks the reference clip for a request and hands the rest to the engine.
/// The engine handle is owned by the caller and reused across requests.
pub struct Synthesizer<'a> {
    engine: &'a dyn SpeechEngine,
    resolver: &'a ReferenceResolver,
    language: String,
}

impl<'a> Synthesizer<'a> {
    pub fn new(
        engine: &'a dyn SpeechEngine,
        resolver: &'a ReferenceResolver,
        language: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            resolver,
            language: language.into(),
        }
    }

    pub fn speak(&self, request: &SpeechRequest) -> anyhow::Result<()> {
        let reference = self
            .resolver
            .resolve(request.emotion, request.gender, request.intensity)?;

        tracing::info!(
            engine = self.engine.name(),
            emotion = %request.emotion,
            reference = %reference,
            output = %request.output_path.display(),
            "synthesizing"
        );

        self.engine.tts_to_file(
            &request.text,
            reference.as_path(),
            &self.language,
            &request.output_path,
        )
    }
}
