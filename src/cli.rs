use clap::Parser;
use std::path::PathBuf;

use crate::reference::{Emotion, Gender};

#[derive(Parser, Debug)]
#[command(
    name = "emotive-tts",
    version,
    about = "Speak text with an emotional reference voice"
)]
pub struct Cli {
    #[arg(
        value_name = "TEXT",
        required_unless_present = "list_models",
        help = "Text to synthesize"
    )]
    pub text: Option<String>,

    #[arg(long, value_enum, default_value_t = Emotion::Neutral, help = "Emotion of the reference voice")]
    pub emotion: Emotion,

    #[arg(long, value_enum, default_value_t = Gender::Female, help = "Gender of the reference voice")]
    pub gender: Gender,

    #[arg(long = "strong_intensity", help = "Use the strong-intensity recording (not available for neutral)")]
    pub strong_intensity: bool,

    #[arg(
        long = "output_path",
        value_name = "FILE",
        default_value = "output.wav",
        help = "Output file, relative to the output directory"
    )]
    pub output_path: PathBuf,

    #[arg(long = "as_command_line_tool", help = "Actually run synthesis")]
    pub as_command_line_tool: bool,

    #[arg(long = "list_models", help = "List the models the engine can load")]
    pub list_models: bool,

    #[arg(long, value_name = "PATH", help = "Config file to load")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
