// ABOUTME: Seeds interview rounds for candidates past the screening stage
// ABOUTME: Past rounds are completed with feedback; upcoming ones stay scheduled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::seed::{backdated_date, business_time, future_date, tenant_count};

use super::{candidates_between, STAGE_HIRED, STAGE_INTERVIEW};

const FEEDBACK: &[&str] = &[
    "Strong communicator, solid fundamentals. Recommend advancing.",
    "Good cultural fit, some gaps on the technical side.",
    "Impressive portfolio walkthrough, answered follow-ups well.",
    "Struggled with the practical exercise, but reasoning was sound.",
    "Clear, structured answers. Team was unanimous.",
    "Would benefit from a second round with the hiring manager.",
];

/// Interview lengths offered by the scheduler, in minutes
const DURATIONS: &[i64] = &[30, 45, 60];

/// Seed 1-2 interview rounds for every candidate at the Interview stage or
/// beyond (excluding Rejected). The tenant owner is the interviewer.
///
/// No-op when interviews already exist. Returns the number of interviews
/// created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_interviews(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let existing = tenant_count(
        pool,
        "SELECT COUNT(*) FROM interviews WHERE tenant_id = ?",
        tenant_id,
    )
    .await?;
    if existing > 0 {
        return Ok(0);
    }

    let candidates = candidates_between(pool, tenant_id, STAGE_INTERVIEW, STAGE_HIRED).await?;
    if candidates.is_empty() {
        return Ok(0);
    }

    let mut rng = StdRng::from_entropy();
    let mut created: u32 = 0;

    for candidate in &candidates {
        // First round always happened already
        let first_on = backdated_date(&mut rng, 5, 20);
        insert_interview(
            pool,
            &mut rng,
            tenant_id,
            candidate.id,
            1,
            &first_on,
            "completed",
            true,
        )
        .await?;
        created += 1;

        if !rng.gen_bool(0.5) {
            continue;
        }

        // Second round: already held for candidates past the interview
        // stage, still upcoming otherwise
        if candidate.stage_position > STAGE_INTERVIEW {
            let second_on = backdated_date(&mut rng, 1, 5);
            insert_interview(
                pool,
                &mut rng,
                tenant_id,
                candidate.id,
                2,
                &second_on,
                "completed",
                true,
            )
            .await?;
        } else {
            let second_on = future_date(&mut rng, 1, 10);
            insert_interview(
                pool,
                &mut rng,
                tenant_id,
                candidate.id,
                2,
                &second_on,
                "scheduled",
                false,
            )
            .await?;
        }
        created += 1;
    }

    Ok(created)
}

#[allow(clippy::too_many_arguments)]
async fn insert_interview(
    pool: &SqlitePool,
    rng: &mut StdRng,
    tenant_id: Uuid,
    candidate_id: Uuid,
    round: i64,
    scheduled_on: &str,
    status: &str,
    with_feedback: bool,
) -> Result<()> {
    let duration = DURATIONS[rng.gen_range(0..DURATIONS.len())];
    let feedback = with_feedback.then(|| FEEDBACK[rng.gen_range(0..FEEDBACK.len())]);

    sqlx::query(
        "INSERT INTO interviews (id, tenant_id, candidate_id, interviewer_id, scheduled_on, \
         scheduled_at, duration_minutes, round, status, feedback, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(tenant_id.to_string())
    .bind(candidate_id.to_string())
    .bind(tenant_id.to_string())
    .bind(scheduled_on)
    .bind(business_time(rng))
    .bind(duration)
    .bind(round)
    .bind(status)
    .bind(feedback)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}
