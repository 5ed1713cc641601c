// ABOUTME: Seeds the onboarding checklist for hired candidates
// ABOUTME: Earlier checklist items are marked done to look in-progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::seed::tenant_count;

use super::{candidates_between, STAGE_HIRED};

/// The standard onboarding checklist, in completion order
const CHECKLIST: &[&str] = &[
    "Sign employment contract",
    "Submit identification documents",
    "Set up workspace account",
    "Complete security training",
    "Meet the team",
    "Review the employee handbook",
];

/// Seed the onboarding checklist for every hired candidate, with the first
/// few items already ticked off.
///
/// No-op when onboarding tasks already exist. Returns the number of
/// checklist rows created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_onboarding(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let existing = tenant_count(
        pool,
        "SELECT COUNT(*) FROM onboarding_tasks WHERE tenant_id = ?",
        tenant_id,
    )
    .await?;
    if existing > 0 {
        return Ok(0);
    }

    let hired = candidates_between(pool, tenant_id, STAGE_HIRED, STAGE_HIRED).await?;
    if hired.is_empty() {
        return Ok(0);
    }

    let mut rng = StdRng::from_entropy();
    let mut created: u32 = 0;
    let now = Utc::now().to_rfc3339();

    for candidate in &hired {
        let done_through: usize = rng.gen_range(2..=4);

        for (index, title) in CHECKLIST.iter().enumerate() {
            sqlx::query(
                "INSERT INTO onboarding_tasks (id, tenant_id, candidate_id, title, is_done, \
                 position, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(tenant_id.to_string())
            .bind(candidate.id.to_string())
            .bind(title)
            .bind(index < done_through)
            .bind((index + 1) as i64)
            .bind(&now)
            .execute(pool)
            .await?;

            created += 1;
        }
    }

    Ok(created)
}
