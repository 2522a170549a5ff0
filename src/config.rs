use anyhow::{bail, Context};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "tts_models/multilingual/multi-dataset/xtts_v2";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tts: EngineConfig,
    #[serde(default)]
    pub references_dir: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_backend")]
    pub backend: String,
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default)]
    pub program_args: Vec<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub agree_to_license: bool,
    #[serde(default)]
    pub timeout_seconds: u64,
}

impl Config {
    /// Loads `explicit` when given, otherwise the first config found in the
    /// working directory or the user config directory, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let project = Self::project_path();
        if project.exists() {
            return Self::load_from_path(&project);
        }

        if let Ok(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        let base = BaseDirs::new().context("unable to resolve home directory")?;
        Ok(base.config_dir().join("emotive-tts").join("config.json"))
    }

    pub fn references_dir(&self) -> PathBuf {
        match &self.references_dir {
            Some(dir) => dir.clone(),
            None => install_dir().join("References"),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => install_dir().join("output"),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match self.tts.backend.as_str() {
            "coqui" => {}
            other => bail!("unsupported backend: {other}"),
        }

        if self.tts.program.trim().is_empty() {
            bail!("tts.program must not be empty");
        }

        if self.tts.model.trim().is_empty() {
            bail!("tts.model must not be empty");
        }

        let language = self.tts.language.as_str();
        let well_formed = !language.is_empty()
            && language.len() <= 8
            && language
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-');
        if !well_formed {
            bail!("tts.language must be a short lowercase code such as \"en\", got {language:?}");
        }

        Ok(())
    }

    fn project_path() -> PathBuf {
        PathBuf::from("emotive-tts.json")
    }
}

/// Directory holding the running executable, so bundled assets resolve the
/// same way regardless of the working directory.
fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_backend() -> String {
    "coqui".to_string()
}

fn default_program() -> String {
    "tts".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            program: default_program(),
            program_args: Vec::new(),
            model: default_model(),
            language: default_language(),
            device: None,
            agree_to_license: false,
            timeout_seconds: 0,
        }
    }
}
