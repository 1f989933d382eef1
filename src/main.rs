use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use hr_payroll::api::{AppState, create_router};
use hr_payroll::config::ConfigLoader;
use hr_payroll::store::Dataset;

/// Daily salary report server
#[derive(Parser)]
#[command(name = "hr-payroll", version = env!("CARGO_PKG_VERSION"), long_about = None)]
struct Cli {
    /// Directory containing settings.yaml
    #[arg(long = "config", default_value = "./config")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Settings are read before logging exists, so a failure here goes to stderr.
    let config = match ConfigLoader::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let settings = config.settings();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.filter));
    fmt().with_env_filter(filter).init();

    let data_dir = config.data_directory();
    let dataset = match Dataset::load(&data_dir) {
        Ok(dataset) => dataset,
        Err(err) => {
            error!(data_dir = %data_dir.display(), error = %err, "Failed to load dataset");
            return ExitCode::FAILURE;
        }
    };
    info!(
        data_dir = %data_dir.display(),
        attendance = dataset.attendance().len(),
        enrollments = dataset.enrollments().len(),
        "Dataset loaded"
    );

    let router = create_router(AppState::from_dataset(dataset));

    let bind_address = settings.server.bind_address.as_str();
    let listener = match tokio::net::TcpListener::bind(bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(address = %bind_address, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(address = %bind_address, "Server listening");

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
