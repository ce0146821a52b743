use anyhow::Context;
use clap::Parser;
use guess_duel::cli::Args;
use guess_duel::Session;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.log_level());

    let config = args.config();
    config.validate().context("invalid game configuration")?;

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    let mut session = Session::setup(config, args.target.as_deref(), stdin, stdout)?;
    let report = session.run()?;

    match report.faster_guesser() {
        Some(guesser) => log::info!("{} needed fewer guesses", guesser),
        None => log::info!("no faster guesser this session"),
    }
    Ok(())
}

/// Terminal logging on stderr so it never mixes with the game transcript.
fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logger unavailable: {}", e);
    }
}
