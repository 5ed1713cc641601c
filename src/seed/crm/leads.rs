// ABOUTME: Seeds demo leads into every pipeline of a tenant
// ABOUTME: Distributes leads across stages by percentage buckets
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
use crate::seed::{backdated_timestamp, future_date, json_ids, phone_number, tenant_count};

use super::{label_ids_for, lead_stages_for, pipelines_for, source_ids_for};

/// Leads generated per pipeline
const LEADS_PER_PIPELINE: u32 = 10;

/// What the lead is about; combined with a company name
const LEAD_SUBJECTS: &[&str] = &[
    "Website redesign",
    "Annual support contract",
    "CRM migration",
    "Product demo request",
    "Pricing inquiry",
    "Pilot program",
    "Integration project",
    "Upgrade consultation",
    "Onboarding package",
    "Partnership proposal",
];

/// Free-form notes attached to roughly half the leads
const LEAD_NOTES: &[&str] = &[
    "Met at the industry meetup last month.",
    "Asked for a follow-up call after the quarter closes.",
    "Budget approved, waiting on legal review.",
    "Interested in the enterprise plan.",
    "Referred by an existing customer.",
    "Wants a comparison against their current vendor.",
];

/// Map a 0-99 roll to a stage index, weighted toward the front of the
/// pipeline (40/30/20/10)
fn stage_bucket(roll: u8) -> usize {
    match roll {
        0..=39 => 0,
        40..=69 => 1,
        70..=89 => 2,
        _ => 3,
    }
}

/// Seed demo leads for every pipeline of the tenant.
///
/// No-op when the tenant already has leads or has no pipelines yet.
/// Returns the number of leads created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_leads(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let existing = tenant_count(pool, "SELECT COUNT(*) FROM leads WHERE tenant_id = ?", tenant_id)
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
        let stages = lead_stages_for(pool, tenant_id, pipeline.id).await?;
        if stages.is_empty() {
            continue;
        }

        for _ in 0..LEADS_PER_PIPELINE {
            let roll: u8 = rng.gen_range(0..100);
            let stage = &stages[stage_bucket(roll).min(stages.len() - 1)];

            let name = templates::full_name(&mut rng);
            let email = templates::email_for(&name, &mut rng);
            let company = templates::company(&mut rng);
            let subject = format!(
                "{} - {company}",
                LEAD_SUBJECTS[rng.gen_range(0..LEAD_SUBJECTS.len())]
            );

            let phone = rng.gen_bool(0.8).then(|| phone_number(&mut rng));
            let source_id = sources.choose(&mut rng).copied();

            let label_count = rng.gen_range(1..=3).min(labels.len());
            let picked: Vec<Uuid> = labels
                .choose_multiple(&mut rng, label_count)
                .copied()
                .collect();
            let label_ids = json_ids(&picked)?;

            let notes = rng
                .gen_bool(0.5)
                .then(|| LEAD_NOTES[rng.gen_range(0..LEAD_NOTES.len())]);
            let follow_up = rng.gen_bool(0.6).then(|| future_date(&mut rng, 1, 14));
            let created_at = backdated_timestamp(&mut rng, 1, 45);

            sqlx::query(
                "INSERT INTO leads (id, tenant_id, pipeline_id, stage_id, name, email, phone, \
                 subject, label_ids, source_id, notes, follow_up_date, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(tenant_id.to_string())
            .bind(pipeline.id.to_string())
            .bind(stage.id.to_string())
            .bind(&name)
            .bind(&email)
            .bind(&phone)
            .bind(&subject)
            .bind(&label_ids)
            .bind(source_id.map(|id| id.to_string()))
            .bind(notes)
            .bind(&follow_up)
            .bind(&created_at)
            .execute(pool)
            .await?;

            created += 1;
        }

        info!(
            "  Seeded {} leads into pipeline: {}",
            LEADS_PER_PIPELINE, pipeline.name
        );
    }

    Ok(created)
}
