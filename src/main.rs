// LogsView - main.rs
//
// Command-line front end. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. config.toml loading and logs directory resolution
// 4. Rendering service results as text, JSON or CSV
//
// All log-handling logic lives in the library; this file only maps
// arguments to service calls and results to output.

use clap::{Parser, Subcommand, ValueEnum};
use logsview::app::service::LogsService;
use logsview::core::export;
use logsview::core::filter::FilterSpec;
use logsview::core::model::{ContentResult, DeletionResult, LogFileInfo};
use logsview::platform::config::{self, PlatformPaths};
use logsview::util;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// LogsView - browse, filter and clean up application log files.
#[derive(Parser, Debug)]
#[command(name = "logsview", version, about)]
struct Cli {
    /// Logs directory (overrides LOGS_DIR and config.toml).
    #[arg(short = 'l', long = "logs-dir", global = true)]
    logs_dir: Option<PathBuf>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the logs directory.
    Dir,

    /// List log files, newest first.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show the entries of one log file, newest first.
    Show {
        /// Log file name (directories are ignored).
        file: String,

        /// Only entries with this level (any case).
        #[arg(long)]
        level: Option<String>,

        /// Only entries on or after this date (YYYY-MM-DD).
        #[arg(long = "from")]
        date_from: Option<String>,

        /// Only entries on or before this date (YYYY-MM-DD).
        #[arg(long = "to")]
        date_to: Option<String>,

        /// Only entries whose message contains this text (any case).
        #[arg(short, long)]
        search: Option<String>,

        /// Number of most recent entries to show; 0 shows all.
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Delete a log file, or every log file with "all".
    Delete {
        /// Log file name, or "all".
        file: String,

        /// Print JSON instead of a message.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (app_config, config_warnings) = config::load_config(&config_path);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    tracing::debug!(
        version = util::constants::APP_VERSION,
        config = %config_path.display(),
        "LogsView starting"
    );

    let service = LogsService::from_config(cli.logs_dir.as_deref(), &app_config);

    let outcome = match cli.command {
        Command::Dir => {
            println!("{}", service.logs_dir().display());
            Ok(true)
        }
        Command::List { json } => print_listing(&service.get_log_files(), json),
        Command::Show {
            file,
            level,
            date_from,
            date_to,
            search,
            limit,
            format,
        } => {
            let filters = FilterSpec {
                level,
                date_from,
                date_to,
                search,
            };
            let limit = limit.unwrap_or(app_config.default_limit);
            let result = service.get_log_content(&file, &filters, limit);
            print_content(&result, format)
        }
        Command::Delete { file, json } => print_deletion(&service.delete_log_file(&file), json),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Failed to write output");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Print the listing. Always succeeds from the caller's point of view.
fn print_listing(files: &[LogFileInfo], json: bool) -> util::error::Result<bool> {
    let stdout = io::stdout();
    if json {
        export::write_json(files, stdout.lock())?;
        return Ok(true);
    }

    let mut out = stdout.lock();
    if files.is_empty() {
        writeln!(out, "No log files found.").map_err(io_err)?;
        return Ok(true);
    }
    for f in files {
        writeln!(
            out,
            "{:<40} {:>12}  {}",
            f.name, f.size_formatted, f.modified
        )
        .map_err(io_err)?;
    }
    Ok(true)
}

fn print_content(result: &ContentResult, format: OutputFormat) -> util::error::Result<bool> {
    let stdout = io::stdout();
    match format {
        OutputFormat::Json => export::export_json(result, stdout.lock())?,
        OutputFormat::Csv => {
            export::export_csv(&result.entries, stdout.lock())?;
        }
        OutputFormat::Text => {
            let mut out = stdout.lock();
            if let Some(ref error) = result.error {
                eprintln!("{error}");
            } else {
                for entry in &result.entries {
                    write!(out, "[{}] {:<7} {}", entry.timestamp, entry.level, entry.message)
                        .map_err(io_err)?;
                    if let Some(ref ip) = entry.ip {
                        write!(out, " | IP: {ip}").map_err(io_err)?;
                    }
                    if let (Some(method), Some(url)) = (&entry.method, &entry.url) {
                        write!(out, " | {method} {url}").map_err(io_err)?;
                    }
                    if let Some(ref context) = entry.context {
                        write!(out, " | Context: {context}").map_err(io_err)?;
                    }
                    writeln!(out).map_err(io_err)?;
                }
                writeln!(
                    out,
                    "-- {} of {} entries from {}",
                    result.entries.len(),
                    result.total_lines,
                    result.file.as_deref().unwrap_or("?")
                )
                .map_err(io_err)?;
            }
        }
    }
    Ok(!result.is_error())
}

fn print_deletion(result: &DeletionResult, json: bool) -> util::error::Result<bool> {
    if json {
        export::write_json(result, io::stdout().lock())?;
    } else {
        println!("{}", result.message);
        if let Some(ref errors) = result.errors {
            for name in errors {
                println!("  not deleted: {name}");
            }
        }
    }
    Ok(result.success)
}

fn io_err(source: io::Error) -> util::error::LogsViewError {
    util::error::ExportError::Io { source }.into()
}
