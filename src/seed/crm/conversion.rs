// ABOUTME: Converts a share of seeded leads into deals
// ABOUTME: Copies the lead's tasks, calls, emails, discussions, and files onto the deal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sqlx::{Row, SqlitePool};
use tracing::info;
use uuid::Uuid;

use crate::models::crm::Lead;
use crate::seed::tenant_count;

/// Share of unconverted leads turned into deals, in percent
const CONVERSION_PERCENT: usize = 30;

/// Convert roughly [`CONVERSION_PERCENT`] of the tenant's leads into deals.
///
/// Each conversion creates a deal in the first deal stage of the lead's
/// pipeline, copies every activity row (tasks, calls, emails, discussions,
/// files) onto the deal with fresh ids, and marks the lead with the new
/// deal's id. No-op when any lead of the tenant is already converted.
/// Returns the number of leads converted.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_conversions(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let converted = tenant_count(
        pool,
        "SELECT COUNT(*) FROM leads WHERE tenant_id = ? AND converted_deal_id IS NOT NULL",
        tenant_id,
    )
    .await?;
    if converted > 0 {
        return Ok(0);
    }

    let mut leads = unconverted_leads(pool, tenant_id).await?;
    if leads.is_empty() {
        return Ok(0);
    }

    let mut rng = StdRng::from_entropy();
    leads.shuffle(&mut rng);

    // Fixed share, not per-lead rolls: the first run must convert at least
    // one lead or the already-converted guard above never engages
    let target = (leads.len() * CONVERSION_PERCENT).div_ceil(100).max(1);
    let mut created: u32 = 0;

    for lead in leads.iter().take(target) {
        let Some(stage_id) = first_deal_stage(pool, tenant_id, lead.pipeline_id).await? else {
            continue;
        };

        let deal_id = Uuid::new_v4();
        let price: i64 = rng.gen_range(1_000..=90_000);
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO deals (id, tenant_id, pipeline_id, stage_id, name, price, phone, \
             label_ids, source_id, notes, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'open', ?)",
        )
        .bind(deal_id.to_string())
        .bind(tenant_id.to_string())
        .bind(lead.pipeline_id.to_string())
        .bind(stage_id.to_string())
        .bind(&lead.subject)
        .bind(price)
        .bind(&lead.phone)
        .bind(&lead.label_ids)
        .bind(lead.source_id.map(|id| id.to_string()))
        .bind(&lead.notes)
        .bind(&now)
        .execute(pool)
        .await?;

        let copied = copy_activities(pool, tenant_id, lead.id, deal_id).await?;

        sqlx::query("UPDATE leads SET converted_deal_id = ? WHERE id = ?")
            .bind(deal_id.to_string())
            .bind(lead.id.to_string())
            .execute(pool)
            .await?;

        info!(
            "  Converted lead '{}' ({} activity rows carried over)",
            lead.name, copied
        );
        created += 1;
    }

    Ok(created)
}

async fn unconverted_leads(pool: &SqlitePool, tenant_id: Uuid) -> Result<Vec<Lead>> {
    let rows = sqlx::query(
        "SELECT id, pipeline_id, name, phone, subject, label_ids, source_id, notes \
         FROM leads WHERE tenant_id = ? AND converted_deal_id IS NULL",
    )
    .bind(tenant_id.to_string())
    .fetch_all(pool)
    .await?;

    let mut leads = Vec::with_capacity(rows.len());
    for row in rows {
        let id_str: String = row.get("id");
        let pipeline_str: String = row.get("pipeline_id");
        let source_str: Option<String> = row.get("source_id");

        leads.push(Lead {
            id: Uuid::parse_str(&id_str)?,
            pipeline_id: Uuid::parse_str(&pipeline_str)?,
            name: row.get("name"),
            phone: row.get("phone"),
            subject: row.get("subject"),
            label_ids: row.get("label_ids"),
            source_id: source_str.as_deref().map(Uuid::parse_str).transpose()?,
            notes: row.get("notes"),
        });
    }

    Ok(leads)
}

async fn first_deal_stage(
    pool: &SqlitePool,
    tenant_id: Uuid,
    pipeline_id: Uuid,
) -> Result<Option<Uuid>> {
    let id: Option<String> = sqlx::query_scalar(
        "SELECT id FROM deal_stages WHERE tenant_id = ? AND pipeline_id = ? \
         ORDER BY position LIMIT 1",
    )
    .bind(tenant_id.to_string())
    .bind(pipeline_id.to_string())
    .fetch_optional(pool)
    .await?;

    Ok(id.as_deref().map(Uuid::parse_str).transpose()?)
}

/// Copy every activity row of the lead onto the deal, minting fresh ids
async fn copy_activities(
    pool: &SqlitePool,
    tenant_id: Uuid,
    lead_id: Uuid,
    deal_id: Uuid,
) -> Result<u32> {
    let mut copied: u32 = 0;
    copied += copy_tasks(pool, tenant_id, lead_id, deal_id).await?;
    copied += copy_calls(pool, tenant_id, lead_id, deal_id).await?;
    copied += copy_emails(pool, tenant_id, lead_id, deal_id).await?;
    copied += copy_discussions(pool, tenant_id, lead_id, deal_id).await?;
    copied += copy_files(pool, tenant_id, lead_id, deal_id).await?;
    Ok(copied)
}

async fn copy_tasks(
    pool: &SqlitePool,
    tenant_id: Uuid,
    lead_id: Uuid,
    deal_id: Uuid,
) -> Result<u32> {
    let rows = sqlx::query(
        "SELECT name, due_date, priority, status, created_at FROM crm_tasks \
         WHERE tenant_id = ? AND parent_type = 'lead' AND parent_id = ?",
    )
    .bind(tenant_id.to_string())
    .bind(lead_id.to_string())
    .fetch_all(pool)
    .await?;

    let count = rows.len() as u32;
    for row in rows {
        sqlx::query(
            "INSERT INTO crm_tasks (id, tenant_id, parent_type, parent_id, name, due_date, \
             priority, status, created_at) VALUES (?, ?, 'deal', ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(tenant_id.to_string())
        .bind(deal_id.to_string())
        .bind(row.get::<String, _>("name"))
        .bind(row.get::<Option<String>, _>("due_date"))
        .bind(row.get::<String, _>("priority"))
        .bind(row.get::<String, _>("status"))
        .bind(row.get::<String, _>("created_at"))
        .execute(pool)
        .await?;
    }

    Ok(count)
}

async fn copy_calls(
    pool: &SqlitePool,
    tenant_id: Uuid,
    lead_id: Uuid,
    deal_id: Uuid,
) -> Result<u32> {
    let rows = sqlx::query(
        "SELECT subject, call_type, duration_minutes, description, created_at FROM crm_calls \
         WHERE tenant_id = ? AND parent_type = 'lead' AND parent_id = ?",
    )
    .bind(tenant_id.to_string())
    .bind(lead_id.to_string())
    .fetch_all(pool)
    .await?;

    let count = rows.len() as u32;
    for row in rows {
        sqlx::query(
            "INSERT INTO crm_calls (id, tenant_id, parent_type, parent_id, subject, call_type, \
             duration_minutes, description, created_at) VALUES (?, ?, 'deal', ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(tenant_id.to_string())
        .bind(deal_id.to_string())
        .bind(row.get::<String, _>("subject"))
        .bind(row.get::<String, _>("call_type"))
        .bind(row.get::<i64, _>("duration_minutes"))
        .bind(row.get::<Option<String>, _>("description"))
        .bind(row.get::<String, _>("created_at"))
        .execute(pool)
        .await?;
    }

    Ok(count)
}

async fn copy_emails(
    pool: &SqlitePool,
    tenant_id: Uuid,
    lead_id: Uuid,
    deal_id: Uuid,
) -> Result<u32> {
    let rows = sqlx::query(
        "SELECT to_address, subject, body, created_at FROM crm_emails \
         WHERE tenant_id = ? AND parent_type = 'lead' AND parent_id = ?",
    )
    .bind(tenant_id.to_string())
    .bind(lead_id.to_string())
    .fetch_all(pool)
    .await?;

    let count = rows.len() as u32;
    for row in rows {
        sqlx::query(
            "INSERT INTO crm_emails (id, tenant_id, parent_type, parent_id, to_address, subject, \
             body, created_at) VALUES (?, ?, 'deal', ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(tenant_id.to_string())
        .bind(deal_id.to_string())
        .bind(row.get::<String, _>("to_address"))
        .bind(row.get::<String, _>("subject"))
        .bind(row.get::<String, _>("body"))
        .bind(row.get::<String, _>("created_at"))
        .execute(pool)
        .await?;
    }

    Ok(count)
}

async fn copy_discussions(
    pool: &SqlitePool,
    tenant_id: Uuid,
    lead_id: Uuid,
    deal_id: Uuid,
) -> Result<u32> {
    let rows = sqlx::query(
        "SELECT comment, created_at FROM crm_discussions \
         WHERE tenant_id = ? AND parent_type = 'lead' AND parent_id = ?",
    )
    .bind(tenant_id.to_string())
    .bind(lead_id.to_string())
    .fetch_all(pool)
    .await?;

    let count = rows.len() as u32;
    for row in rows {
        sqlx::query(
            "INSERT INTO crm_discussions (id, tenant_id, parent_type, parent_id, comment, \
             created_at) VALUES (?, ?, 'deal', ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(tenant_id.to_string())
        .bind(deal_id.to_string())
        .bind(row.get::<String, _>("comment"))
        .bind(row.get::<String, _>("created_at"))
        .execute(pool)
        .await?;
    }

    Ok(count)
}

async fn copy_files(
    pool: &SqlitePool,
    tenant_id: Uuid,
    lead_id: Uuid,
    deal_id: Uuid,
) -> Result<u32> {
    let rows = sqlx::query(
        "SELECT file_name, file_path, created_at FROM crm_files \
         WHERE tenant_id = ? AND parent_type = 'lead' AND parent_id = ?",
    )
    .bind(tenant_id.to_string())
    .bind(lead_id.to_string())
    .fetch_all(pool)
    .await?;

    let count = rows.len() as u32;
    for row in rows {
        sqlx::query(
            "INSERT INTO crm_files (id, tenant_id, parent_type, parent_id, file_name, file_path, \
             created_at) VALUES (?, ?, 'deal', ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(tenant_id.to_string())
        .bind(deal_id.to_string())
        .bind(row.get::<String, _>("file_name"))
        .bind(row.get::<String, _>("file_path"))
        .bind(row.get::<String, _>("created_at"))
        .execute(pool)
        .await?;
    }

    Ok(count)
}
