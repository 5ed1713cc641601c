// ABOUTME: CRM demo data seeder for Atrio Workspace
// ABOUTME: Runs the Lead module seeders sequentially in fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

//! CRM (Lead) module demo data seeder for Atrio Workspace.
//!
//! This binary populates a workspace with demo pipelines, leads, deals,
//! their activities, and a handful of lead-to-deal conversions.
//!
//! Usage:
//! ```bash
//! # Seed with default settings (first workspace owner, or a demo owner)
//! cargo run --bin seed-crm-data
//!
//! # Seed for a specific workspace owner
//! cargo run --bin seed-crm-data -- --tenant-email owner@example.com
//!
//! # Reset CRM data before seeding
//! cargo run --bin seed-crm-data -- --reset
//!
//! # Verbose output
//! cargo run --bin seed-crm-data -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use std::env;
use tracing::info;

use atrio_demo_seeder::database::{self, Database};
use atrio_demo_seeder::seed::crm;

/// Database opened when neither `--database-url` nor `DATABASE_URL` is set
const DEFAULT_DATABASE_URL: &str = "sqlite:./data/atrio.db";

#[derive(Parser)]
#[command(
    name = "seed-crm-data",
    about = "Atrio Workspace CRM Demo Data Seeder",
    long_about = "Populate a workspace with demo pipelines, leads, deals, and activities"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Workspace owner email to seed for (uses the first owner if not specified)
    #[arg(long)]
    tenant_email: Option<String>,

    /// Reset CRM data before seeding
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

    info!("=== Atrio Workspace CRM Demo Data Seeder ===");

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
        info!("Resetting CRM data...");
        db.reset_crm_data().await?;
    }

    let tenant_id = owner.id;

    info!("Step 1: Creating pipelines and stages...");
    let pipelines = crm::seed_pipelines(pool, tenant_id).await?;
    info!("  Created {} pipelines", pipelines);

    info!("Step 2: Creating lead sources...");
    let sources = crm::seed_sources(pool, tenant_id).await?;
    info!("  Created {} sources", sources);

    info!("Step 3: Creating labels...");
    let labels = crm::seed_labels(pool, tenant_id).await?;
    info!("  Created {} labels", labels);

    info!("Step 4: Creating leads...");
    let leads = crm::seed_leads(pool, tenant_id).await?;
    info!("  Created {} leads", leads);

    info!("Step 5: Creating lead activities...");
    let lead_activities = crm::seed_lead_activities(pool, tenant_id).await?;
    info!("  Created {} lead activity rows", lead_activities);

    info!("Step 6: Creating deals...");
    let deals = crm::seed_deals(pool, tenant_id).await?;
    info!("  Created {} deals", deals);

    info!("Step 7: Creating deal activities...");
    let deal_activities = crm::seed_deal_activities(pool, tenant_id).await?;
    info!("  Created {} deal activity rows", deal_activities);

    info!("Step 8: Converting leads into deals...");
    let conversions = crm::seed_conversions(pool, tenant_id).await?;
    info!("  Converted {} leads", conversions);

    info!("");
    info!("=== Seeding Complete ===");
    print_summary(pool).await?;

    Ok(())
}

/// Print summary statistics
async fn print_summary(pool: &sqlx::SqlitePool) -> Result<()> {
    let counts = [
        ("Pipelines", "SELECT COUNT(*) FROM pipelines"),
        ("Lead Stages", "SELECT COUNT(*) FROM lead_stages"),
        ("Deal Stages", "SELECT COUNT(*) FROM deal_stages"),
        ("Sources", "SELECT COUNT(*) FROM lead_sources"),
        ("Labels", "SELECT COUNT(*) FROM labels"),
        ("Leads", "SELECT COUNT(*) FROM leads"),
        (
            "  - Converted",
            "SELECT COUNT(*) FROM leads WHERE converted_deal_id IS NOT NULL",
        ),
        ("Deals", "SELECT COUNT(*) FROM deals"),
        ("Tasks", "SELECT COUNT(*) FROM crm_tasks"),
        ("Calls", "SELECT COUNT(*) FROM crm_calls"),
        ("Emails", "SELECT COUNT(*) FROM crm_emails"),
        ("Discussions", "SELECT COUNT(*) FROM crm_discussions"),
        ("Files", "SELECT COUNT(*) FROM crm_files"),
    ];

    for (label, query) in counts {
        let row: (i64,) = sqlx::query_as(query).fetch_one(pool).await?;
        info!("{}: {}", label, row.0);
    }

    info!("");
    info!("Done! CRM demo data is ready.");

    Ok(())
}
