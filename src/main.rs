use clap::Parser;
use navchrome::core::config::{self, CliOverrides};
use navchrome::{BarStyleKind, ContainerStyleKind, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navchrome", about = "Nested screens with declarative navigation chrome")]
struct Args {
    /// Navigation bar style
    #[arg(short, long, value_enum)]
    bar_style: Option<BarStyleKind>,

    /// Layout of bar and content
    #[arg(short, long, value_enum)]
    container_style: Option<ContainerStyleKind>,

    /// Where to write the log
    #[arg(long, default_value = "navchrome.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::NavChromeConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            bar_style: args.bar_style,
            container_style: args.container_style,
        },
    );

    log::info!(
        "navchrome starting up (bar: {:?}, container: {:?})",
        resolved.bar_style,
        resolved.container_style
    );

    tui::run(resolved)
}
