use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log_analyzer::{Analyzer, DEFAULT_TOP_LIMIT, OutputFormat, Report, ingest::read_log};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Summarise web-server access logs", long_about = None)]
struct Args {
    /// Log file to analyse; stdin when omitted or `-`
    path: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
    limit: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error analyzing log file: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let content = read_log(args.path.as_deref())?;
    let analyzer = Analyzer::new(&content);
    let mut output = Report::new(&analyzer, args.limit).render(args.format)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
