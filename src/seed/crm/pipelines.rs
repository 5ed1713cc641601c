// ABOUTME: Seeds the default pipelines with their lead and deal stages
// ABOUTME: First CRM seeder; everything downstream references these rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::seed::tenant_count;

/// Default pipelines created for every demo workspace
const DEFAULT_PIPELINES: &[&str] = &["Sales", "Marketing"];

/// Lead stages of each pipeline, front to back
const LEAD_STAGES: &[&str] = &["Prospect", "Qualified", "Proposal", "Won"];

/// Deal stages of each pipeline, front to back
const DEAL_STAGES: &[&str] = &["Initial Contact", "Negotiation", "Contract Sent", "Closed"];

/// Seed the default pipelines and their stages for the tenant.
///
/// No-op when the tenant already has pipelines. Returns the number of
/// pipelines created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_pipelines(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let existing = tenant_count(
        pool,
        "SELECT COUNT(*) FROM pipelines WHERE tenant_id = ?",
        tenant_id,
    )
    .await?;
    if existing > 0 {
        return Ok(0);
    }

    let now = Utc::now().to_rfc3339();
    let mut created: u32 = 0;

    for name in DEFAULT_PIPELINES {
        let pipeline_id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO pipelines (id, tenant_id, name, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(pipeline_id.to_string())
        .bind(tenant_id.to_string())
        .bind(name)
        .bind(&now)
        .execute(pool)
        .await?;

        insert_stages(pool, tenant_id, pipeline_id, "lead_stages", LEAD_STAGES).await?;
        insert_stages(pool, tenant_id, pipeline_id, "deal_stages", DEAL_STAGES).await?;

        info!("  Created pipeline: {}", name);
        created += 1;
    }

    Ok(created)
}

async fn insert_stages(
    pool: &SqlitePool,
    tenant_id: Uuid,
    pipeline_id: Uuid,
    table: &str,
    names: &[&str],
) -> Result<()> {
    let sql = format!(
        "INSERT INTO {table} (id, tenant_id, pipeline_id, name, position) VALUES (?, ?, ?, ?, ?)"
    );

    for (index, name) in names.iter().enumerate() {
        sqlx::query(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(tenant_id.to_string())
            .bind(pipeline_id.to_string())
            .bind(name)
            .bind((index + 1) as i64)
            .execute(pool)
            .await?;
    }

    Ok(())
}
