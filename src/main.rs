use clap::Parser;
use navstack::core::config::{self, CliOverrides, ResolvedConfig};
use navstack::core::sample::SampleData;
use navstack::core::state::App;
use navstack::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navstack", about = "Value-based navigation over sample vehicle records")]
struct Args {
    /// Config file (defaults to ~/.navstack/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Open a record by its row text at startup; repeat to drill deeper
    #[arg(short, long = "open", value_name = "TITLE")]
    open: Vec<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("navstack: {e}; using defaults");
            Default::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level,
            log_file: args.log_file,
        },
    );

    init_logging(&resolved);
    log::info!("navstack starting up");
    for notice in &resolved.notices {
        notice.emit();
    }
    log::debug!("Resolved config: {:?}", resolved);

    let mut app = App::from_config(SampleData::new(), &resolved);
    app.open_titles(&args.open);

    tui::run(app, &resolved)
}

/// File logger; stdout belongs to the TUI.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&config.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "navstack: cannot open log file {}: {e}",
            config.log_file.display()
        ),
    }
}
