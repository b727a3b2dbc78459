//! CLI administration tool for bank-users.
//!
//! Inspects and maintains user records without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all users
//! cargo run --bin admin -- users list
//!
//! # Show one user with its features and news
//! cargo run --bin admin -- users show 42
//!
//! # Delete a user (asks for confirmation unless -y is given)
//! cargo run --bin admin -- users delete 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use bank_users::application::services::UserService;
use bank_users::config::mask_connection_string;
use bank_users::domain::entities::User;
use bank_users::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing bank-users.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and maintain users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Show a user with its features and news
    Show {
        /// User ID
        id: i64,
    },

    /// Delete a user together with its features and news
    Delete {
        /// User ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

type Service = UserService<PgUserRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Users { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

/// Dispatches user commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let service = UserService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))));

    match action {
        UserAction::List => list_users(&service).await?,
        UserAction::Show { id } => show_user(&service, id).await?,
        UserAction::Delete { id, yes } => delete_user(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists users as a table.
///
/// # Output Format
///
/// ```text
/// Users
///
///   ID    Name                           Account              Card
///   ───────────────────────────────────────────────────────────────────────────
///   1     Ana                            00000000-0           xxxx xxxx xxxx 1111
/// ```
async fn list_users(service: &Service) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = service
        .find_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<20} {:<25}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Account".bright_white().bold(),
        "Card".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for user in &users {
        println!(
            "  {:<5} {:<30} {:<20} {:<25}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.account_number,
            user.card_number
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_user(user: &User) {
    println!("  ID:      {}", user.id.to_string().bright_black());
    println!("  Name:    {}", user.name.cyan());
    println!("  Account: {}", user.account_number);
    println!("  Card:    {}", user.card_number);

    println!("  Features:");
    if user.features.is_empty() {
        println!("    {}", "(none)".bright_black());
    }
    for feature in &user.features {
        println!("    - {} {}", feature.icon.bright_yellow(), feature.description);
    }

    println!("  News:");
    if user.news.is_empty() {
        println!("    {}", "(none)".bright_black());
    }
    for item in &user.news {
        println!("    - {} {}", item.icon.bright_yellow(), item.description);
    }
}

/// Prints a single user with its children.
async fn show_user(service: &Service, id: i64) -> Result<()> {
    let user = service
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "User".bright_blue().bold());
    println!();
    print_user(&user);
    println!();

    Ok(())
}

/// Deletes a user after confirmation.
///
/// # Safety
///
/// - Shows the record before deleting
/// - Requires confirmation (default: No) unless `--yes`
async fn delete_user(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete User".bright_blue().bold());
    println!();

    let user = service
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_user(&user);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user and all of its features and news?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "User deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Info".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;
            let features: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM features")
                .fetch_one(pool)
                .await?;
            let news: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
                .fetch_one(pool)
                .await?;

            println!("  URL:      {}", mask_connection_string(database_url));
            println!("  Server:   {}", version.bright_black());
            println!("  Users:    {}", users.to_string().cyan());
            println!("  Features: {}", features.to_string().cyan());
            println!("  News:     {}", news.to_string().cyan());
            println!();
        }
    }

    Ok(())
}
