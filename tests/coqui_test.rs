#![cfg(unix)]

use emotive_tts::config::EngineConfig;
use emotive_tts::tts::coqui::CoquiCliEngine;
use emotive_tts::tts::SpeechEngine;
use std::fs;
use std::path::Path;

// Stand-in for the Coqui CLI: records its arguments into the --out_path file
// and answers --list_models with a short listing.
const STUB: &str = r#"
out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "--out_path" ]; then out="$arg"; fi
  if [ "$arg" = "--list_models" ]; then
    echo " 1: tts_models/multilingual/multi-dataset/xtts_v2 [already downloaded]"
    echo " 2: tts_models/en/ljspeech/glow-tts"
    exit 0
  fi
  prev="$arg"
done
if [ -n "$STUB_SLEEP" ]; then sleep "$STUB_SLEEP"; fi
if [ -n "$STUB_FAIL" ]; then exit 3; fi
printf '%s\n' "$@" > "$out"
printf 'tos=%s\n' "${COQUI_TOS_AGREED:-unset}" >> "$out"
"#;

fn stub_engine(dir: &Path, configure: impl FnOnce(&mut EngineConfig)) -> CoquiCliEngine {
    let script = dir.join("tts-stub.sh");
    fs::write(&script, STUB).unwrap();

    let mut config = EngineConfig {
        program: "sh".to_string(),
        program_args: vec![script.display().to_string()],
        ..EngineConfig::default()
    };
    configure(&mut config);
    CoquiCliEngine::new(&config)
}

#[test]
fn renders_through_coqui_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let engine = stub_engine(dir.path(), |config| config.agree_to_license = true);
    let out = dir.path().join("out.wav");

    engine
        .tts_to_file("Hello.", Path::new("/refs/ref.wav"), "en", &out)
        .unwrap();

    let recorded = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = recorded.lines().collect();
    assert_eq!(
        lines,
        [
            "--model_name",
            "tts_models/multilingual/multi-dataset/xtts_v2",
            "--text",
            "Hello.",
            "--speaker_wav",
            "/refs/ref.wav",
            "--language_idx",
            "en",
            "--out_path",
            out.to_str().unwrap(),
            "tos=1",
        ]
    );
}

#[test]
fn licence_variable_is_not_set_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let engine = stub_engine(dir.path(), |_| {});
    let out = dir.path().join("out.wav");

    engine
        .tts_to_file("Hi.", Path::new("ref.wav"), "en", &out)
        .unwrap();

    let recorded = fs::read_to_string(&out).unwrap();
    assert!(recorded.ends_with("tos=unset\n"), "{recorded}");
}

#[test]
fn non_zero_exit_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let engine = stub_engine(dir.path(), |config| {
        config.program_args.insert(0, "-c".to_string());
        config.program_args[1] = format!("STUB_FAIL=1; . {}", config.program_args[1]);
    });

    let err = engine
        .tts_to_file("Hi.", Path::new("ref.wav"), "en", &dir.path().join("o.wav"))
        .unwrap_err();
    assert!(err.to_string().contains("exited with status"), "{err}");
}

#[test]
fn slow_engine_is_killed_at_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let engine = stub_engine(dir.path(), |config| {
        config.timeout_seconds = 1;
        config.program_args.insert(0, "-c".to_string());
        config.program_args[1] = format!("STUB_SLEEP=5; . {}", config.program_args[1]);
    });

    let err = engine
        .tts_to_file("Hi.", Path::new("ref.wav"), "en", &dir.path().join("o.wav"))
        .unwrap_err();
    assert_eq!(err.to_string(), "sh timed out after 1s");
}

#[test]
fn missing_program_fails_to_spawn() {
    let config = EngineConfig {
        program: "emotive-tts-no-such-program".to_string(),
        ..EngineConfig::default()
    };
    let engine = CoquiCliEngine::new(&config);

    let err = engine
        .tts_to_file("Hi.", Path::new("ref.wav"), "en", Path::new("o.wav"))
        .unwrap_err();
    assert_eq!(err.to_string(), "spawn emotive-tts-no-such-program");
}

#[test]
fn lists_models_reported_by_engine() {
    let dir = tempfile::tempdir().unwrap();
    let engine = stub_engine(dir.path(), |_| {});

    let models = engine.list_models().unwrap();
    assert_eq!(
        models,
        [
            "tts_models/multilingual/multi-dataset/xtts_v2",
            "tts_models/en/ljspeech/glow-tts",
        ]
    );
}
