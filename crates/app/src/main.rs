// Gatepass - operator CLI for issuing and verifying staff credentials

use clap::{Parser, Subcommand};
use tracing::error;

use gatepass_app::{create_issuer, Config};

#[derive(Parser, Debug)]
#[command(
    name = "gatepass",
    about = "Issue and verify signed staff credential tokens",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Issue a signed credential token and print it to stdout
    Issue {
        /// Staff member's display name
        #[arg(long)]
        name: String,

        /// Organizational category, e.g. "Central Command"
        #[arg(long)]
        category: String,

        /// Role within the category, e.g. "Managing Director"
        #[arg(long)]
        role: String,
    },

    /// Verify a credential token and print its decoded claims
    Verify {
        /// The token string to check
        token: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().map_err(|e| {
        error!("failed to load configuration: {}", e);
        e
    })?;
    let issuer = create_issuer(&config)?;

    match cli.command {
        Command::Issue {
            name,
            category,
            role,
        } => {
            let token = issuer.issue(&name, &category, &role)?;
            println!("{token}");
        }
        Command::Verify { token } => {
            let claims = issuer.verify(&token)?;
            println!("name:     {}", claims.name);
            println!("category: {}", claims.category);
            println!("role:     {}", claims.role);
            if let (Some(issued), Some(expires)) = (claims.issued_at(), claims.expires_at()) {
                println!("issued:   {issued}");
                println!("expires:  {expires}");
            }
        }
    }

    Ok(())
}
