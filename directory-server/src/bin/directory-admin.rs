//! Maintenance tool for the employee directory database
//!
//! ```text
//! directory-admin seed                      # add the five sample employees
//! directory-admin check                     # schema, row count, incomplete rows
//! directory-admin cleanup --domain mcptest.com
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use directory_server::db::maintenance::{self, IntegrityReport};
use directory_server::db::repository::employee;
use directory_server::{Config, DbService, init_logger};

#[derive(Parser)]
#[command(name = "directory-admin", version, about = "Employee directory maintenance")]
struct Cli {
    /// SQLite database file
    #[arg(long, env = "DATABASE_PATH", default_value = "db.sqlite", global = true)]
    database: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert the sample employees
    Seed,
    /// Report schema and data integrity
    Check,
    /// Delete employees whose email is at the given domain
    Cleanup {
        #[arg(long)]
        domain: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logger("info");

    let config = Config::with_overrides(cli.database, 0);
    let db = DbService::new(&config.database_path, 1, config.busy_timeout())
        .await
        .with_context(|| format!("opening {}", config.database_path))?;
    tracing::info!(path = %config.database_path, "Connected to SQLite database");

    let outcome = run(&db, cli.command).await;
    db.close().await;
    outcome
}

async fn run(db: &DbService, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Seed => {
            let report = maintenance::seed_sample_data(&db.pool).await?;
            println!(
                "Added {} sample employees ({} before, {} now)",
                report.inserted.len(),
                report.existing,
                report.total
            );
        }
        Command::Check => {
            let report = maintenance::check_integrity(&db.pool).await?;
            print_report(&report);
            if !report.is_healthy() {
                anyhow::bail!("integrity check failed");
            }
        }
        Command::Cleanup { domain } => {
            let removed = employee::delete_by_email_domain(&db.pool, &domain).await?;
            println!("Removed {removed} employees at {domain}");
        }
    }
    Ok(())
}

fn print_report(report: &IntegrityReport) {
    if !report.table_exists {
        println!("employees table does not exist");
        return;
    }

    println!("Table schema:");
    for column in &report.columns {
        println!(
            "  - {}: {}{}{}",
            column.name,
            column.column_type,
            if column.primary_key { " (PRIMARY KEY)" } else { "" },
            if column.not_null { " (NOT NULL)" } else { "" },
        );
    }

    println!("Total employee records: {}", report.rows.len());
    if report.rows.is_empty() {
        println!("No employee records found. Run `directory-admin seed` to add sample data.");
    } else {
        println!("ID | Name | Email | Position");
        for e in &report.rows {
            println!("{} | {} | {} | {}", e.id, e.name, e.email, e.position);
        }
    }

    if report.incomplete.is_empty() {
        println!("All records have complete data");
    } else {
        println!("Records with missing fields: {:?}", report.incomplete);
    }
}
