// ABOUTME: Seeds demo deals into every pipeline of a tenant
// ABOUTME: Same stage-bucket distribution as leads, with prices and outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::seed::templates;
use crate::seed::{backdated_timestamp, json_ids, phone_number, tenant_count};

use super::{deal_stages_for, label_ids_for, pipelines_for, source_ids_for};

/// Deals generated per pipeline
const DEALS_PER_PIPELINE: u32 = 5;

/// Combined with a company name to form the deal name
const DEAL_NAMES: &[&str] = &[
    "Platform rollout",
    "Annual license renewal",
    "Implementation project",
    "Enterprise upgrade",
    "Support retainer",
    "Data migration",
    "Training package",
    "Multi-year agreement",
];

const DEAL_NOTES: &[&str] = &[
    "Verbal commitment received, contract in review.",
    "Waiting on a revised statement of work.",
    "Procurement wants net-60 payment terms.",
    "Expansion of an existing engagement.",
    "Decision committee meets next week.",
];

fn stage_bucket(roll: u8) -> usize {
    match roll {
        0..=39 => 0,
        40..=69 => 1,
        70..=89 => 2,
        _ => 3,
    }
}

/// Won/lost/open outcome, weighted toward open
fn deal_status(roll: u8) -> &'static str {
    match roll {
        0..=59 => "open",
        60..=84 => "won",
        _ => "lost",
    }
}

/// Seed demo deals for every pipeline of the tenant.
///
/// No-op when the tenant already has deals or has no pipelines yet.
/// Returns the number of deals created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_deals(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let existing = tenant_count(pool, "SELECT COUNT(*) FROM deals WHERE tenant_id = ?", tenant_id)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    let pipelines = pipelines_for(pool, tenant_id).await?;
    if pipelines.is_empty() {
        return Ok(0);
    }

    let sources = source_ids_for(pool, tenant_id).await?;
    let labels = label_ids_for(pool, tenant_id).await?;

    let mut rng = StdRng::from_entropy();
    let mut created: u32 = 0;

    for pipeline in &pipelines {
        let stages = deal_stages_for(pool, tenant_id, pipeline.id).await?;
        if stages.is_empty() {
            continue;
        }

        for _ in 0..DEALS_PER_PIPELINE {
            let roll: u8 = rng.gen_range(0..100);
            let stage = &stages[stage_bucket(roll).min(stages.len() - 1)];

            let company = templates::company(&mut rng);
            let name = format!(
                "{} - {company}",
                DEAL_NAMES[rng.gen_range(0..DEAL_NAMES.len())]
            );

            let price: i64 = rng.gen_range(1_000..=90_000);
            let phone = rng.gen_bool(0.6).then(|| phone_number(&mut rng));
            let source_id = sources.choose(&mut rng).copied();

            let label_count = rng.gen_range(1..=2).min(labels.len());
            let picked: Vec<Uuid> = labels
                .choose_multiple(&mut rng, label_count)
                .copied()
                .collect();
            let label_ids = json_ids(&picked)?;

            let notes = rng
                .gen_bool(0.4)
                .then(|| DEAL_NOTES[rng.gen_range(0..DEAL_NOTES.len())]);
            let status = deal_status(rng.gen_range(0..100));
            let created_at = backdated_timestamp(&mut rng, 1, 45);

            sqlx::query(
                "INSERT INTO deals (id, tenant_id, pipeline_id, stage_id, name, price, phone, \
                 label_ids, source_id, notes, status, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(tenant_id.to_string())
            .bind(pipeline.id.to_string())
            .bind(stage.id.to_string())
            .bind(&name)
            .bind(price)
            .bind(&phone)
            .bind(&label_ids)
            .bind(source_id.map(|id| id.to_string()))
            .bind(notes)
            .bind(status)
            .bind(&created_at)
            .execute(pool)
            .await?;

            created += 1;
        }

        info!(
            "  Seeded {} deals into pipeline: {}",
            DEALS_PER_PIPELINE, pipeline.name
        );
    }

    Ok(created)
}
