// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, tenant, and orchestrator-order helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Atrio Labs
#![allow(dead_code, missing_docs, clippy::unwrap_used)]

//! Shared test utilities for `atrio_demo_seeder`
//!
//! Provides common setup functions to reduce duplication across the
//! integration tests, including helpers that replay the fixed seeder order
//! of the two orchestrator binaries.

use anyhow::Result;
use atrio_demo_seeder::database::Database;
use atrio_demo_seeder::seed::{crm, recruitment};
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// Insert a workspace owner account and return its id
pub async fn create_test_tenant(pool: &SqlitePool, email: &str) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO users (id, email, display_name, is_owner, created_at) VALUES (?, ?, ?, 1, ?)",
    )
    .bind(id.to_string())
    .bind(email)
    .bind("Test Owner")
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;
    Ok(id)
}

/// Run the CRM seeders in the same fixed order as the seed-crm-data binary
pub async fn run_crm_seeders(pool: &SqlitePool, tenant_id: Uuid) -> Result<()> {
    crm::seed_pipelines(pool, tenant_id).await?;
    crm::seed_sources(pool, tenant_id).await?;
    crm::seed_labels(pool, tenant_id).await?;
    crm::seed_leads(pool, tenant_id).await?;
    crm::seed_lead_activities(pool, tenant_id).await?;
    crm::seed_deals(pool, tenant_id).await?;
    crm::seed_deal_activities(pool, tenant_id).await?;
    crm::seed_conversions(pool, tenant_id).await?;
    Ok(())
}

/// Run the recruitment seeders in the same fixed order as the
/// seed-recruitment-data binary
pub async fn run_recruitment_seeders(pool: &SqlitePool, tenant_id: Uuid) -> Result<()> {
    recruitment::seed_job_categories(pool, tenant_id).await?;
    recruitment::seed_job_stages(pool, tenant_id).await?;
    recruitment::seed_jobs(pool, tenant_id).await?;
    recruitment::seed_candidates(pool, tenant_id).await?;
    recruitment::seed_interviews(pool, tenant_id).await?;
    recruitment::seed_offers(pool, tenant_id).await?;
    recruitment::seed_onboarding(pool, tenant_id).await?;
    Ok(())
}

/// Run a zero-bind COUNT query
pub async fn count(pool: &SqlitePool, sql: &str) -> i64 {
    sqlx::query_scalar(sql).fetch_one(pool).await.unwrap()
}

/// Run a COUNT query bound to one tenant id
pub async fn count_for(pool: &SqlitePool, sql: &str, tenant_id: Uuid) -> i64 {
    sqlx::query_scalar(sql)
        .bind(tenant_id.to_string())
        .fetch_one(pool)
        .await
        .unwrap()
}
