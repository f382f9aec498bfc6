use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use frage::access::RoleResolver;
use frage::modules::roles::ResolveRoleResponse;
use frage_auth::{Principal, create_access_token};
use frage_config::{AccessConfig, JwtConfig};
use frage_db::{PgTeacherRegistry, init_db_pool};

#[derive(Parser)]
#[command(name = "frage-cli")]
#[command(about = "Frage CLI - Access control tools for the Frage portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign an access token for local testing
    IssueToken {
        /// Auth provider user id (the token subject)
        #[arg(short = 'i', long)]
        id: String,

        /// Email address
        #[arg(short = 'e', long)]
        email: String,

        /// Role to place in the token's application metadata
        #[arg(short = 'r', long)]
        metadata_role: Option<String>,
    },
    /// Resolve a principal's role against the configured teacher registry
    Resolve {
        /// Auth provider user id
        #[arg(short = 'i', long)]
        id: String,

        /// Email address
        #[arg(short = 'e', long)]
        email: String,

        /// Role from the token's application metadata
        #[arg(short = 'r', long)]
        metadata_role: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::IssueToken {
            id,
            email,
            metadata_role,
        } => handle_issue_token(&id, &email, metadata_role.as_deref()),
        Commands::Resolve {
            id,
            email,
            metadata_role,
        } => handle_resolve(id, email, metadata_role).await,
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn handle_issue_token(id: &str, email: &str, metadata_role: Option<&str>) -> anyhow::Result<()> {
    let config = JwtConfig::from_env();
    let token = create_access_token(id, email, metadata_role, &config)
        .map_err(|e| anyhow::anyhow!("failed to sign token: {}", e.error))?;

    println!("{}", token);
    Ok(())
}

async fn handle_resolve(
    id: String,
    email: String,
    metadata_role: Option<String>,
) -> anyhow::Result<()> {
    let pool = init_db_pool()
        .await
        .context("failed to connect to database")?;

    let resolver = RoleResolver::new(
        Arc::new(PgTeacherRegistry::new(pool)),
        AccessConfig::from_env(),
    );
    let resolution = resolver
        .resolve(&Principal::new(id, email, metadata_role))
        .await;

    let response = ResolveRoleResponse::from(resolution);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
