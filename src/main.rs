use clap::Parser;
use sana::core::config;
use sana::{StartTab, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "sana", about = "Terminal wellness companion")]
struct Args {
    /// Tab to open on startup
    #[arg(short, long, value_enum)]
    tab: Option<StartTab>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to sana.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("sana.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("sana: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&config, args.tab.map(Into::into));

    log::info!(
        "Sana starting up (tab: {:?}, thinking delay: {}ms)",
        resolved.default_tab,
        resolved.thinking_delay_ms
    );

    tui::run(resolved)
}
