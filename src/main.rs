use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod auth;
mod cli;
mod config;
mod error;
mod session;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crewdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cli::commands::init().await,
        Commands::Login { username } => cli::commands::login(username).await,
        Commands::Logout => cli::commands::logout().await,
        Commands::Whoami => cli::commands::whoami().await,
        Commands::ForgotPassword { email } => cli::commands::forgot_password(&email).await,
        Commands::ResetPassword { email } => cli::commands::reset_password(&email).await,
        Commands::Attendance { action } => cli::commands::attendance(action).await,
        Commands::Employees { action } => cli::commands::employees(action).await,
        Commands::Projects { action } => cli::commands::projects(action).await,
        Commands::Tasks { action } => cli::commands::tasks(action).await,
        Commands::Blogs { action } => cli::commands::blogs(action).await,
        Commands::Notifications { action } => cli::commands::notifications(action).await,
        Commands::Dashboard => cli::commands::dashboard().await,
        Commands::Settings { action } => cli::commands::settings(action).await,
    }
}
