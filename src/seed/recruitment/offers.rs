// ABOUTME: Seeds one offer per candidate at the Offer or Hired stage
// ABOUTME: Hired candidates always hold an accepted offer with a joining date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::seed::{backdated_date, future_date, tenant_count};

use super::{candidates_between, STAGE_HIRED, STAGE_OFFER};

/// Seed offers for candidates at the Offer or Hired stage.
///
/// Hired candidates get an accepted offer with a joining date; candidates
/// still at the Offer stage get a sent (70%) or declined (30%) one. No-op
/// when offers already exist. Returns the number of offers created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_offers(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let existing = tenant_count(
        pool,
        "SELECT COUNT(*) FROM offers WHERE tenant_id = ?",
        tenant_id,
    )
    .await?;
    if existing > 0 {
        return Ok(0);
    }

    let candidates = candidates_between(pool, tenant_id, STAGE_OFFER, STAGE_HIRED).await?;
    if candidates.is_empty() {
        return Ok(0);
    }

    let mut rng = StdRng::from_entropy();
    let mut created: u32 = 0;

    for candidate in &candidates {
        let annual_salary: i64 = rng.gen_range(55..=140) * 1000;

        let (status, sent_on, joining_on) = if candidate.stage_position >= STAGE_HIRED {
            (
                "accepted",
                Some(backdated_date(&mut rng, 5, 15)),
                Some(future_date(&mut rng, 14, 45)),
            )
        } else if rng.gen_bool(0.7) {
            ("sent", Some(backdated_date(&mut rng, 1, 7)), None)
        } else {
            ("declined", Some(backdated_date(&mut rng, 5, 15)), None)
        };

        sqlx::query(
            "INSERT INTO offers (id, tenant_id, candidate_id, job_id, annual_salary, status, \
             sent_on, joining_on, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(tenant_id.to_string())
        .bind(candidate.id.to_string())
        .bind(candidate.job_id.to_string())
        .bind(annual_salary)
        .bind(status)
        .bind(&sent_on)
        .bind(&joining_on)
        .bind(Utc::now().to_rfc3339())
        .execute(pool)
        .await?;

        created += 1;
    }

    Ok(created)
}
