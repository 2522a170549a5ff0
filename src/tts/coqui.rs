use anyhow::{bail, Context};
use regex::Regex;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::EngineConfig;

use super::provider::SpeechEngine;

/// Drives the Coqui `tts` command-line program, one blocking child process
/// per call.
#[derive(Debug, Clone)]
pub struct CoquiCliEngine {
    program: String,
    program_args: Vec<String>,
    model: String,
    device: Option<String>,
    agree_to_license: bool,
    timeout: Option<Duration>,
}

impl CoquiCliEngine {
    pub fn new(config: &EngineConfig) -> Self {
        let timeout = match config.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Self {
            program: config.program.clone(),
            program_args: config.program_args.clone(),
            model: config.model.clone(),
            device: config.device.clone(),
            agree_to_license: config.agree_to_license,
            timeout,
        }
    }

    fn synthesis_args(
        &self,
        text: &str,
        speaker_wav: &Path,
        language: &str,
        file_path: &Path,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.program_args.iter().map(OsString::from).collect();
        args.push("--model_name".into());
        args.push(self.model.clone().into());
        args.push("--text".into());
        args.push(text.into());
        args.push("--speaker_wav".into());
        args.push(speaker_wav.into());
        args.push("--language_idx".into());
        args.push(language.into());
        args.push("--out_path".into());
        args.push(file_path.into());
        if let Some(device) = &self.device {
            args.push("--device".into());
            args.push(device.clone().into());
        }
        args
    }

    fn command(&self, args: &[OsString]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if self.agree_to_license {
            cmd.env("COQUI_TOS_AGREED", "1");
        }
        cmd
    }

    fn run_to_completion(&self, mut cmd: Command) -> anyhow::Result<ExitStatus> {
        let mut child = cmd
            .stdin(Stdio::null())
            .spawn()
            .with_context(|| format!("spawn {}", self.program))?;

        let deadline = match self.timeout {
            Some(deadline) => deadline,
            None => return child.wait().with_context(|| format!("wait for {}", self.program)),
        };

        let start = Instant::now();
        loop {
            if let Some(status) = child.try_wait().context("poll tts process")? {
                return Ok(status);
            }

            if start.elapsed() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                bail!("{} timed out after {}s", self.program, deadline.as_secs());
            }

            thread::sleep(Duration::from_millis(25));
        }
    }
}

impl SpeechEngine for CoquiCliEngine {
    fn name(&self) -> &str {
        "coqui"
    }

    fn tts_to_file(
        &self,
        text: &str,
        speaker_wav: &Path,
        language: &str,
        file_path: &Path,
    ) -> anyhow::Result<()> {
        let args = self.synthesis_args(text, speaker_wav, language, file_path);
        tracing::debug!(program = %self.program, model = %self.model, "starting synthesis");

        let mut cmd = self.command(&args);
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        let status = self.run_to_completion(cmd)?;
        if !status.success() {
            bail!("{} exited with status {status}", self.program);
        }

        Ok(())
    }

    fn list_models(&self) -> anyhow::Result<Vec<String>> {
        let mut args: Vec<OsString> = self.program_args.iter().map(OsString::from).collect();
        args.push("--list_models".into());

        let output = self
            .command(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("run {} --list_models", self.program))?;

        if !output.status.success() {
            bail!("{} exited with status {}", self.program, output.status);
        }

        parse_model_list(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extracts model identifiers from `tts --list_models` output, keeping the
/// order they were printed in.
pub fn parse_model_list(stdout: &str) -> anyhow::Result<Vec<String>> {
    let pattern =
        Regex::new(r"\b(?:tts_models|vocoder_models|voice_conversion_models)/[^\s\[\]]+")
            .context("compile model list pattern")?;

    let mut models: Vec<String> = Vec::new();
    for found in pattern.find_iter(stdout) {
        let name = found.as_str().to_string();
        if !models.contains(&name) {
            models.push(name);
        }
    }
    Ok(models)
}
