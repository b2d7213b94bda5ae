use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use nfrpr_core::model::UserId;
use services::config::{ENV_API_BASE_URL, ENV_HTTP_TIMEOUT_SECS, ENV_USER_ID, parse_timeout};
use services::{
    ApiConfig, AppServices, AssessmentLoopService, ConfigError, LandingService, ReportService,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "app=info,nfrpr_core=info,services=info,gateway=info,ui=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUserId { raw: String },
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUserId { raw } => write!(f, "invalid --user-id value: {raw:?}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn assessment(&self) -> Arc<AssessmentLoopService> {
        self.services.assessment()
    }

    fn reports(&self) -> Arc<ReportService> {
        self.services.reports()
    }

    fn landing(&self) -> Arc<LandingService> {
        self.services.landing()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--api-url <url>] [--user-id <id>] [--timeout-secs <n>]");
    eprintln!("  cargo run -p app -- check [--api-url <url>] [--user-id <id>] [--timeout-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://127.0.0.1:3000");
    eprintln!("  --user-id demo-user");
    eprintln!("  --timeout-secs 0 (no timeout)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_API_BASE_URL}, {ENV_USER_ID}, {ENV_HTTP_TIMEOUT_SECS}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

/// Start from the environment, then apply command-line overrides.
fn parse_config(args: &mut impl Iterator<Item = String>) -> Result<ApiConfig, ArgsError> {
    let mut config = ApiConfig::from_env()?;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api-url" => {
                let value = require_value(args, "--api-url")?;
                config = config.with_base_url(&value)?;
            }
            "--user-id" => {
                let value = require_value(args, "--user-id")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidUserId { raw: value });
                }
                config.user_id = UserId::new(value);
            }
            "--timeout-secs" => {
                let value = require_value(args, "--timeout-secs")?;
                config.timeout = parse_timeout(&value)?;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(config)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Launch the UI when no subcommand is given.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let config = parse_config(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging();
    let services = AppServices::from_config(&config)?;

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window; keep it a normal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("NFRPR Fire Risk Assessment")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            let navigator = services.assessment().start().await?;
            let summary = navigator.summary();
            info!(base_url = %config.base_url, "api reachable");
            println!(
                "{} questions, {} answered ({}%), resume at question {}",
                summary.total,
                summary.answered,
                summary.percent,
                navigator.current_index() + 1
            );
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // Binary glue: report once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
