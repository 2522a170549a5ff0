use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = emotive_tts::cli::Cli::parse();
    emotive_tts::run(cli)
}
