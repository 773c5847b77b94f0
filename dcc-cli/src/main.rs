mod output;

use clap::{Parser, Subcommand};
use dcc_core::config::Config;
use dcc_core::{basic_token, AdminController, ApiError, SharedCredentials, SubmissionClient};
use tracing::{error, info, warn};

/// dcc-admin - headless access to the submission server's admin operations.
#[derive(Parser)]
#[command(name = "dcc-admin")]
struct Args {
    /// Base URL of the submission server's web services, e.g. https://host/ws
    #[arg(long, env = "DCC_API_URL")]
    api_url: Option<String>,

    /// Admin account name. Used with --password.
    #[arg(long, env = "DCC_USERNAME", requires = "password")]
    username: Option<String>,

    #[arg(long, env = "DCC_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Pre-computed Basic token, instead of --username/--password.
    #[arg(long, env = "DCC_TOKEN", hide_env_values = true, conflicts_with = "username")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the upcoming release, the lock state, SFTP sessions and the queue
    Status,
    /// Prevent uploading and validation on non-admin accounts
    Lock,
    /// Allow uploading and validation on non-admin accounts
    Unlock,
    /// Release the upcoming release and open NEXT_NAME in its place
    Release { next_name: String },
    /// List projects waiting for validation
    Queue,
    /// Empty the validation queue
    ClearQueue,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn credentials(args: &Args) -> SharedCredentials {
    let token = match (&args.token, &args.username, &args.password) {
        (Some(token), _, _) => Some(token.clone()),
        (None, Some(user), Some(pass)) => Some(basic_token(user, pass)),
        _ => None,
    };
    match token {
        Some(token) => SharedCredentials::with_token(token),
        None => {
            warn!("No credentials given; the server will reject admin requests");
            SharedCredentials::new()
        }
    }
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    });
    if let Some(api_url) = &args.api_url {
        config = config.with_api_url(api_url.as_str());
    }
    info!("Using submission server at {}", config.api_url);

    let client = SubmissionClient::new(config, credentials(&args)).unwrap_or_else(|e| {
        error!("Failed to create HTTP client: {e}");
        std::process::exit(1);
    });
    let controller = AdminController::new(client);

    if let Err(e) = run(&controller, args.command).await {
        error!("{e}");
        std::process::exit(1);
    }

    let load_errors = controller.ui_state().load_errors;
    for load_error in &load_errors {
        error!("Could not load {}: {}", load_error.section, load_error.message);
    }
    if !load_errors.is_empty() {
        std::process::exit(1);
    }
}

async fn run(
    controller: &AdminController<SubmissionClient>,
    command: Command,
) -> Result<(), ApiError> {
    let now_ms = chrono::Utc::now().timestamp_millis();

    match command {
        Command::Status => {
            controller.load().await;
            println!("{}", output::release(controller.release.current().as_ref(), now_ms));
            println!("{}", output::systems(&controller.systems.current()));
            println!("{}", output::queue(&controller.queue.current()));
        }
        Command::Lock => {
            controller.set_lock(true).await?;
            println!("{}", output::systems(&controller.systems.current()));
        }
        Command::Unlock => {
            controller.set_lock(false).await?;
            println!("{}", output::systems(&controller.systems.current()));
        }
        Command::Release { next_name } => {
            controller.perform_release(&next_name).await?;
            println!("{}", output::release(controller.release.current().as_ref(), now_ms));
        }
        Command::Queue => {
            let queue = controller.queue.fetch_queue().await?;
            println!("{}", output::queue(&queue));
        }
        Command::ClearQueue => {
            controller.clear_queue().await?;
            println!("{}", output::queue(&controller.queue.current()));
        }
    }
    Ok(())
}
