//! Maps an emotion, gender and intensity onto a pre-recorded RAVDESS clip
//! that conditions the synthesized voice.

use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("unknown emotion: {0}")]
    UnknownEmotion(String),
    #[error("unknown gender: {0}")]
    UnknownGender(String),
    #[error("strong intensity is not available for the neutral emotion")]
    StrongNeutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum Emotion {
    #[default]
    Neutral,
    Calm,
    Happy,
    Sad,
    Angry,
    Fearful,
    Disgust,
    Surprised,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Neutral,
        Emotion::Calm,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Fearful,
        Emotion::Disgust,
        Emotion::Surprised,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Emotion::Neutral => "01",
            Emotion::Calm => "02",
            Emotion::Happy => "03",
            Emotion::Sad => "04",
            Emotion::Angry => "05",
            Emotion::Fearful => "06",
            Emotion::Disgust => "07",
            Emotion::Surprised => "08",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Calm => "calm",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Fearful => "fearful",
            Emotion::Disgust => "disgust",
            Emotion::Surprised => "surprised",
        }
    }
}

impl FromStr for Emotion {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.name() == wanted)
            .ok_or_else(|| ReferenceError::UnknownEmotion(s.to_string()))
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    pub fn actor_dir(self) -> &'static str {
        match self {
            Gender::Female => "RAVDESS_Actor_02_(english+female)",
            Gender::Male => "RAVDESS_Actor_21_(english+male)",
        }
    }

    pub fn actor_id(self) -> &'static str {
        match self {
            Gender::Female => "02",
            Gender::Male => "21",
        }
    }
}

impl FromStr for Gender {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            _ => Err(ReferenceError::UnknownGender(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intensity {
    #[default]
    Normal,
    Strong,
}

impl Intensity {
    pub fn code(self) -> &'static str {
        match self {
            Intensity::Normal => "01",
            Intensity::Strong => "02",
        }
    }
}

impl From<bool> for Intensity {
    fn from(strong: bool) -> Self {
        if strong {
            Intensity::Strong
        } else {
            Intensity::Normal
        }
    }
}

/// Location of a reference clip inside the asset bundle. Existence on disk is
/// not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePath(String);

impl ReferencePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ReferencePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    base_dir: PathBuf,
}

impl ReferenceResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn resolve(
        &self,
        emotion: Emotion,
        gender: Gender,
        intensity: Intensity,
    ) -> Result<ReferencePath, ReferenceError> {
        if emotion == Emotion::Neutral && intensity == Intensity::Strong {
            return Err(ReferenceError::StrongNeutral);
        }

        let base = self.base_dir.to_string_lossy();
        let base = base.trim_end_matches('/');
        // RAVDESS: modality-channel-emotion-intensity-statement-repetition-actor
        let file = format!(
            "03-01-{}-{}-01-01-{}.wav",
            emotion.code(),
            intensity.code(),
            gender.actor_id()
        );

        Ok(ReferencePath(format!(
            "{base}/{}//{file}",
            gender.actor_dir()
        )))
    }

    pub fn resolve_named(
        &self,
        emotion: &str,
        gender: &str,
        strong_intensity: bool,
    ) -> Result<ReferencePath, ReferenceError> {
        let emotion = emotion.parse::<Emotion>()?;
        let gender = gender.parse::<Gender>()?;
        self.resolve(emotion, gender, strong_intensity.into())
    }
}
