use std::path::PathBuf;

use clap::{Parser, Subcommand};
use coursebook_cli::{check_data, mint_token, parse_claim};
use coursebook_config::{JwtConfig, ServerConfig};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "coursebook-cli")]
#[command(about = "Coursebook CLI - Operator tools for the Coursebook API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a token signed with JWT_SECRET
    IssueToken {
        /// Value of the `name` claim
        #[arg(short = 'n', long)]
        name: String,

        /// Lifetime in seconds (defaults to JWT_ACCESS_EXPIRY)
        #[arg(short = 'e', long)]
        expires_in: Option<i64>,

        /// Extra claim as key=value, repeatable
        #[arg(short = 'c', long = "claim")]
        claims: Vec<String>,
    },
    /// Load the data files and print record counts
    CheckData {
        /// Data directory (defaults to DATA_DIR)
        #[arg(short = 'd', long)]
        dir: Option<PathBuf>,
    },
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::IssueToken {
            name,
            expires_in,
            claims,
        } => handle_issue_token(&name, expires_in, &claims),
        Commands::CheckData { dir } => handle_check_data(dir),
    }
}

fn handle_issue_token(name: &str, expires_in: Option<i64>, claims: &[String]) {
    let extra = match claims
        .iter()
        .map(|c| parse_claim(c))
        .collect::<anyhow::Result<Vec<_>>>()
    {
        Ok(extra) => extra,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };

    match mint_token(name, extra, expires_in, &JwtConfig::from_env()) {
        Ok(token) => println!("{token}"),
        Err(e) => {
            eprintln!("❌ Error issuing token: {e:#}");
            std::process::exit(1);
        }
    }
}

fn handle_check_data(dir: Option<PathBuf>) {
    let dir = dir.unwrap_or_else(|| ServerConfig::from_env().data_dir);

    match check_data(&dir) {
        Ok(summary) => {
            println!("✅ Data in {} is valid", dir.display());
            println!("   Users: {}", summary.users);
            println!("   Instructors: {}", summary.instructors);
            println!("   Courses: {}", summary.courses);
        }
        Err(e) => {
            eprintln!("❌ Error loading {}: {e:#}", dir.display());
            std::process::exit(1);
        }
    }
}
