// ABOUTME: Recruitment demo data seeder for Atrio Workspace
// ABOUTME: Runs the Recruitment module seeders sequentially in fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

//! Recruitment module demo data seeder for Atrio Workspace.
//!
//! This binary populates a workspace with demo job openings, candidates,
//! interviews, offers, and onboarding checklists.
//!
//! Usage:
//! ```bash
//! # Seed with default settings (first workspace owner, or a demo owner)
//! cargo run --bin seed-recruitment-data
//!
//! # Reset recruitment data before seeding
//! cargo run --bin seed-recruitment-data -- --reset
//!
//! # Verbose output
//! cargo run --bin seed-recruitment-data -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use std::env;
use tracing::info;

use atrio_demo_seeder::database::{self, Database};
use atrio_demo_seeder::seed::recruitment;

/// Database opened when neither `--database-url` nor `DATABASE_URL` is set
const DEFAULT_DATABASE_URL: &str = "sqlite:./data/atrio.db";

#[derive(Parser)]
#[command(
    name = "seed-recruitment-data",
    about = "Atrio Workspace Recruitment Demo Data Seeder",
    long_about = "Populate a workspace with demo jobs, candidates, interviews, and offers"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Workspace owner email to seed for (uses the first owner if not specified)
    #[arg(long)]
    tenant_email: Option<String>,

    /// Reset recruitment data before seeding
    #[arg(long)]
    reset: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Atrio Workspace Recruitment Demo Data Seeder ===");

    // Load database URL
    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

    info!("Connecting to database: {}", database_url);
    let db = Database::new(&database_url).await?;
    let pool = db.pool();

    // Resolve the workspace the demo data belongs to
    let owner = if let Some(email) = args.tenant_email.as_deref() {
        let Some(owner) = database::find_owner(pool, Some(email)).await? else {
            anyhow::bail!("No workspace owner found for '{email}'.");
        };
        owner
    } else {
        database::ensure_demo_owner(pool).await?
    };
    info!("Using workspace owner: {} ({})", owner.email, owner.id);

    if args.reset {
        info!("Resetting recruitment data...");
        db.reset_recruitment_data().await?;
    }

    let tenant_id = owner.id;

    info!("Step 1: Creating job categories...");
    let categories = recruitment::seed_job_categories(pool, tenant_id).await?;
    info!("  Created {} job categories", categories);

    info!("Step 2: Creating candidate pipeline stages...");
    let stages = recruitment::seed_job_stages(pool, tenant_id).await?;
    info!("  Created {} job stages", stages);

    info!("Step 3: Creating job openings...");
    let jobs = recruitment::seed_jobs(pool, tenant_id).await?;
    info!("  Created {} jobs", jobs);

    info!("Step 4: Creating candidates...");
    let candidates = recruitment::seed_candidates(pool, tenant_id).await?;
    info!("  Created {} candidates", candidates);

    info!("Step 5: Scheduling interviews...");
    let interviews = recruitment::seed_interviews(pool, tenant_id).await?;
    info!("  Created {} interviews", interviews);

    info!("Step 6: Creating offers...");
    let offers = recruitment::seed_offers(pool, tenant_id).await?;
    info!("  Created {} offers", offers);

    info!("Step 7: Creating onboarding checklists...");
    let onboarding = recruitment::seed_onboarding(pool, tenant_id).await?;
    info!("  Created {} onboarding rows", onboarding);

    info!("");
    info!("=== Seeding Complete ===");
    print_summary(pool).await?;

    Ok(())
}

/// Print summary statistics
async fn print_summary(pool: &sqlx::SqlitePool) -> Result<()> {
    let counts = [
        ("Job Categories", "SELECT COUNT(*) FROM job_categories"),
        ("Job Stages", "SELECT COUNT(*) FROM job_stages"),
        ("Jobs", "SELECT COUNT(*) FROM jobs"),
        (
            "  - Open",
            "SELECT COUNT(*) FROM jobs WHERE status = 'open'",
        ),
        ("Candidates", "SELECT COUNT(*) FROM candidates"),
        ("Interviews", "SELECT COUNT(*) FROM interviews"),
        ("Offers", "SELECT COUNT(*) FROM offers"),
        (
            "  - Accepted",
            "SELECT COUNT(*) FROM offers WHERE status = 'accepted'",
        ),
        ("Onboarding Tasks", "SELECT COUNT(*) FROM onboarding_tasks"),
    ];

    for (label, query) in counts {
        let row: (i64,) = sqlx::query_as(query).fetch_one(pool).await?;
        info!("{}: {}", label, row.0);
    }

    info!("");
    info!("Done! Recruitment demo data is ready.");

    Ok(())
}
