// ABOUTME: CRM (Lead) module seeders and their shared read helpers
// ABOUTME: Execution order is fixed by the seed-crm-data binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

//! Seeders for the CRM (Lead) module.
//!
//! Fixed execution order: pipelines, sources, labels, leads, lead activities,
//! deals, deal activities, conversions. Later seeders read rows written by
//! earlier ones and silently no-op when those rows are missing.

mod activities;
mod conversion;
mod deals;
mod leads;
mod pipelines;
mod taxonomy;

pub use activities::{seed_deal_activities, seed_lead_activities};
pub use conversion::seed_conversions;
pub use deals::seed_deals;
pub use leads::seed_leads;
pub use pipelines::seed_pipelines;
pub use taxonomy::{seed_labels, seed_sources};

use anyhow::Result;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::models::crm::{Pipeline, Stage};

/// All pipelines owned by the tenant, oldest first
pub(crate) async fn pipelines_for(pool: &SqlitePool, tenant_id: Uuid) -> Result<Vec<Pipeline>> {
    let rows = sqlx::query("SELECT id, name FROM pipelines WHERE tenant_id = ? ORDER BY created_at")
        .bind(tenant_id.to_string())
        .fetch_all(pool)
        .await?;

    let mut pipelines = Vec::with_capacity(rows.len());
    for row in rows {
        let id_str: String = row.get("id");
        pipelines.push(Pipeline {
            id: Uuid::parse_str(&id_str)?,
            name: row.get("name"),
        });
    }

    Ok(pipelines)
}

/// Ordered lead stages of one pipeline
pub(crate) async fn lead_stages_for(
    pool: &SqlitePool,
    tenant_id: Uuid,
    pipeline_id: Uuid,
) -> Result<Vec<Stage>> {
    stages_for(
        pool,
        "SELECT id, name, position FROM lead_stages \
         WHERE tenant_id = ? AND pipeline_id = ? ORDER BY position",
        tenant_id,
        pipeline_id,
    )
    .await
}

/// Ordered deal stages of one pipeline
pub(crate) async fn deal_stages_for(
    pool: &SqlitePool,
    tenant_id: Uuid,
    pipeline_id: Uuid,
) -> Result<Vec<Stage>> {
    stages_for(
        pool,
        "SELECT id, name, position FROM deal_stages \
         WHERE tenant_id = ? AND pipeline_id = ? ORDER BY position",
        tenant_id,
        pipeline_id,
    )
    .await
}

async fn stages_for(
    pool: &SqlitePool,
    sql: &str,
    tenant_id: Uuid,
    pipeline_id: Uuid,
) -> Result<Vec<Stage>> {
    let rows = sqlx::query(sql)
        .bind(tenant_id.to_string())
        .bind(pipeline_id.to_string())
        .fetch_all(pool)
        .await?;

    let mut stages = Vec::with_capacity(rows.len());
    for row in rows {
        let id_str: String = row.get("id");
        stages.push(Stage {
            id: Uuid::parse_str(&id_str)?,
            name: row.get("name"),
            position: row.get("position"),
        });
    }

    Ok(stages)
}

/// Ids of the tenant's lead sources
pub(crate) async fn source_ids_for(pool: &SqlitePool, tenant_id: Uuid) -> Result<Vec<Uuid>> {
    id_column(pool, "SELECT id FROM lead_sources WHERE tenant_id = ?", tenant_id).await
}

/// Ids of the tenant's labels
pub(crate) async fn label_ids_for(pool: &SqlitePool, tenant_id: Uuid) -> Result<Vec<Uuid>> {
    id_column(pool, "SELECT id FROM labels WHERE tenant_id = ?", tenant_id).await
}

async fn id_column(pool: &SqlitePool, sql: &str, tenant_id: Uuid) -> Result<Vec<Uuid>> {
    let ids: Vec<String> = sqlx::query_scalar(sql)
        .bind(tenant_id.to_string())
        .fetch_all(pool)
        .await?;

    let mut parsed = Vec::with_capacity(ids.len());
    for id in &ids {
        parsed.push(Uuid::parse_str(id)?);
    }

    Ok(parsed)
}
