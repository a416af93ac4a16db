use clap::Parser;
use gridtint::cli::Args;
use gridtint::error::AppResult;
use gridtint::{app, config, logger};

fn main() {
    let args = Args::parse();

    if let Err(e) = try_main(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn try_main(args: &Args) -> AppResult<()> {
    let mut config = app::unwrap_config(config::load_config(args.config.as_deref()))?;
    app::apply_overrides(&mut config, args);

    logger::setup_logger(config.logging())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(args, &config, &mut out)
}
