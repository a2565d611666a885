//! Tenant Landing Service entry point
//!
//! Serves the landing page and contact relay, or runs one-shot fetches for
//! static generation and operator debugging.

use clap::{Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::sync::Arc;
use tenant_landing::config::StoreConfig;
use tenant_landing::{
    create_router, render, AppState, MongoProfileStore, ProfileLookup, ProfileStore,
    ServiceConfig, SmtpRelay, SERVICE_ID, SERVICE_VERSION,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tenant-landing")]
#[command(about = "Per-tenant trades landing page service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "PORT")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Fetch the tenant record and print the rendered page to stdout
    Render,

    /// Fetch the tenant record and print the projected profile
    ShowProfile {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            let config = ServiceConfig::from_env()?;
            let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

            let store = Arc::new(MongoProfileStore::new(config.store.clone()));
            let mailer = Arc::new(SmtpRelay::new(&config.mail)?);
            let state = Arc::new(AppState::new(store, mailer));
            let router = create_router(state);

            tracing::info!(
                service = SERVICE_ID,
                version = SERVICE_VERSION,
                %addr,
                "Starting tenant landing service"
            );

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, router).await?;
        }

        Commands::Render => {
            let profile = fetch_profile().await;
            print!("{}", render::page(profile.as_ref()));
        }

        Commands::ShowProfile { format } => {
            let profile = fetch_profile().await;
            match (format, profile) {
                (OutputFormat::Json, profile) => {
                    println!("{}", serde_json::to_string_pretty(&profile)?);
                }
                (OutputFormat::Text, Some(profile)) => {
                    println!("name:      {}", profile.name);
                    println!("company:   {}", profile.company_name);
                    println!("telephone: {}", profile.telephone);
                    println!("email:     {}", profile.email);
                    println!("address:   {}", profile.address_one);
                    if !profile.address_two.is_empty() {
                        println!("           {}", profile.address_two);
                    }
                    if !profile.skills_list.is_empty() {
                        println!("services:  {}", profile.skills_list.join(", "));
                    }
                }
                (OutputFormat::Text, None) => {
                    println!("profile unavailable");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// One-shot lookup with the same fail-soft policy as the page route.
async fn fetch_profile() -> Option<tenant_landing::TenantProfile> {
    // Store settings are lenient: a misconfigured id or unreachable store
    // prints the unavailable outcome instead of aborting.
    let store = MongoProfileStore::new(StoreConfig::from_env());

    match store.fetch().await {
        ProfileLookup::Found(profile) => Some(profile),
        ProfileLookup::NotFound => {
            tracing::warn!("tenant record not found");
            None
        }
        ProfileLookup::Unavailable(cause) => {
            tracing::error!(%cause, "profile store unavailable");
            None
        }
    }
}
