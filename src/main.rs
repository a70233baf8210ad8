use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use taskd::{
    config::ServerConfig,
    storage::Storage,
    tasks::{TaskService, TaskStore},
    AppContext,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "taskd",
    about = "taskd — minimal task-tracking REST daemon",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port
    #[arg(long, env = "TASKD_PORT")]
    port: Option<u16>,

    /// Data directory for config and the SQLite database
    #[arg(long, env = "TASKD_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASKD_LOG")]
    log: Option<String>,

    /// Bind address for the HTTP server (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "TASKD_BIND")]
    bind_address: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "TASKD_LOG_FILE")]
    log_file: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the server (default when no subcommand given).
    ///
    /// Runs taskd in the foreground.
    ///
    /// Examples:
    ///   taskd serve
    ///   taskd
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // ── Logging setup ────────────────────────────────────────────────────────
    // Must run before the first tracing call anywhere in the process.
    let log_level = args.log.as_deref().unwrap_or("info").to_owned();
    let log_format = std::env::var("TASKD_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let _file_guard = setup_logging(&log_level, args.log_file.as_deref(), &log_format);

    match args.command {
        None | Some(Command::Serve) => {
            run_server(args.port, args.data_dir, args.log, args.bind_address).await?;
        }
    }

    Ok(())
}

/// Initialize the tracing subscriber.
/// With `log_file` set, output goes to stdout and a daily-rolling file; the
/// returned `WorkerGuard` must stay alive for the process lifetime or buffered
/// lines are lost on exit.
///
/// `log_format` is `"pretty"` (compact human-readable, the default) or
/// `"json"` (structured output for log aggregators).
///
/// A log directory that cannot be created falls back to stdout-only logging
/// with a warning rather than a panic.
fn setup_logging(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    log_format: &str,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    if let Some(path) = log_file {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let filename = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("taskd.log"));

        // tracing-appender opens the file lazily; the directory must exist first.
        if let Err(e) = std::fs::create_dir_all(dir) {
            // A bad log path degrades to stdout-only, it does not abort startup.
            eprintln!(
                "warn: could not create log directory '{}': {e}; logging to stdout only",
                dir.display()
            );
            if use_json {
                tracing_subscriber::fmt().json().with_env_filter(log_level).init();
            } else {
                tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
            }
            return None;
        }

        let appender = tracing_appender::rolling::daily(dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        if use_json {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().json())
                .with(fmt::layer().json().with_writer(non_blocking))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().compact())
                .with(fmt::layer().with_writer(non_blocking))
                .init();
        }

        Some(guard)
    } else if use_json {
        tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        None
    } else {
        tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        None
    }
}

async fn run_server(
    port: Option<u16>,
    data_dir: Option<std::path::PathBuf>,
    log: Option<String>,
    bind_address: Option<String>,
) -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "taskd starting");

    let config = Arc::new(ServerConfig::new(port, data_dir, log, bind_address));
    info!(
        data_dir = %config.data_dir.display(),
        port = config.port,
        bind = %config.bind_address,
        "config loaded"
    );

    let storage = Arc::new(
        Storage::new_with_slow_query(
            &config.data_dir,
            config.observability.slow_query_threshold_ms,
        )
        .await?,
    );

    let tasks = TaskService::new(TaskStore::new(storage.pool()));

    let ctx = Arc::new(AppContext {
        config,
        storage,
        tasks,
        started_at: std::time::Instant::now(),
    });

    taskd::rest::start_rest_server(ctx).await
}
