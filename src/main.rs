use clap::Parser;
use dotenv::dotenv;
use std::process::ExitCode;
use synthvoice::{app, config::Cli};
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenv();
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the output path on success.
    let mut log_fmt = tracing_subscriber::fmt().with_writer(std::io::stderr);
    if let Ok(level) = std::env::var("SYNTHVOICE_LOG") {
        if let Ok(lv) = level.parse::<LevelFilter>() {
            log_fmt = log_fmt.with_max_level(lv);
        }
    }
    log_fmt.try_init().ok();

    match app::run(cli).await {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
