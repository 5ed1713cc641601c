// ABOUTME: Seeds demo candidates onto every open job
// ABOUTME: Distributes candidates across pipeline stages by percentage buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::seed::templates;
use crate::seed::{backdated_timestamp, phone_number, tenant_count};

use super::job_stages_for;
use super::open_jobs_for;

/// Cover letter openers attached to most candidates
const COVER_LETTERS: &[&str] = &[
    "I have followed your product for a while and would love to help build it.",
    "My last role involved very similar challenges, and I'm excited to apply that experience here.",
    "I'm looking for a team where I can own problems end to end, and this role fits exactly.",
    "A former colleague recommended your company as a great place to do meaningful work.",
    "The combination of product and team in this posting is what drew me to apply.",
];

/// Map a 0-99 roll to a 1-based stage position: 35% Applied, 25% Screening,
/// 20% Interview, 10% Offer, 5% Hired, 5% Rejected
fn stage_bucket(roll: u8) -> i64 {
    match roll {
        0..=34 => 1,
        35..=59 => 2,
        60..=79 => 3,
        80..=89 => 4,
        90..=94 => 5,
        _ => 6,
    }
}

/// Seed 4-8 demo candidates onto every open job of the tenant.
///
/// No-op when the tenant already has candidates, or has no open jobs or no
/// job stages yet. Returns the number of candidates created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_candidates(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let existing = tenant_count(
        pool,
        "SELECT COUNT(*) FROM candidates WHERE tenant_id = ?",
        tenant_id,
    )
    .await?;
    if existing > 0 {
        return Ok(0);
    }

    let jobs = open_jobs_for(pool, tenant_id).await?;
    let stages = job_stages_for(pool, tenant_id).await?;
    if jobs.is_empty() || stages.is_empty() {
        return Ok(0);
    }

    let mut rng = StdRng::from_entropy();
    let mut created: u32 = 0;

    for job in &jobs {
        let count: u32 = rng.gen_range(4..=8);

        for _ in 0..count {
            let roll: u8 = rng.gen_range(0..100);
            let position = stage_bucket(roll);
            let index = ((position - 1) as usize).min(stages.len() - 1);
            let stage = &stages[index];

            let name = templates::full_name(&mut rng);
            let email = templates::email_for(&name, &mut rng);
            let phone = rng.gen_bool(0.85).then(|| phone_number(&mut rng));
            let country = templates::country(&mut rng);
            let rating = rating_for(&mut rng, stage.position);

            let resume_path = rng.gen_bool(0.8).then(|| {
                format!("uploads/resumes/{}.pdf", name.to_lowercase().replace(' ', "-"))
            });
            let cover_letter = rng
                .gen_bool(0.7)
                .then(|| COVER_LETTERS[rng.gen_range(0..COVER_LETTERS.len())]);
            let applied_at = backdated_timestamp(&mut rng, 3, 40);

            sqlx::query(
                "INSERT INTO candidates (id, tenant_id, job_id, stage_id, name, email, phone, \
                 country, rating, resume_path, cover_letter, applied_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(tenant_id.to_string())
            .bind(job.id.to_string())
            .bind(stage.id.to_string())
            .bind(&name)
            .bind(&email)
            .bind(&phone)
            .bind(country)
            .bind(rating)
            .bind(&resume_path)
            .bind(cover_letter)
            .bind(&applied_at)
            .execute(pool)
            .await?;

            created += 1;
        }

        info!("  Seeded {} candidates for job: {}", count, job.title);
    }

    Ok(created)
}

/// Ratings track stage depth; rejected candidates score low
fn rating_for(rng: &mut StdRng, stage_position: i64) -> i64 {
    if stage_position >= 6 {
        rng.gen_range(1..=2)
    } else {
        (stage_position + rng.gen_range(0..=1)).min(5)
    }
}
