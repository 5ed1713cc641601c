// ABOUTME: Recruitment module seeders and their shared read helpers
// ABOUTME: Execution order is fixed by the seed-recruitment-data binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

//! Seeders for the Recruitment module.
//!
//! Fixed execution order: job categories, job stages, jobs, candidates,
//! interviews, offers, onboarding. Later seeders read rows written by
//! earlier ones and silently no-op when those rows are missing.

mod candidates;
mod interviews;
mod jobs;
mod offers;
mod onboarding;

pub use candidates::seed_candidates;
pub use interviews::seed_interviews;
pub use jobs::{seed_job_categories, seed_job_stages, seed_jobs};
pub use offers::seed_offers;
pub use onboarding::seed_onboarding;

use anyhow::Result;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::models::recruitment::{Candidate, Job, JobStage};

/// Stage position of "Interview" in the default candidate pipeline
pub(crate) const STAGE_INTERVIEW: i64 = 3;

/// Stage position of "Offer"
pub(crate) const STAGE_OFFER: i64 = 4;

/// Stage position of "Hired"
pub(crate) const STAGE_HIRED: i64 = 5;

/// The tenant's candidate pipeline, ordered by position
pub(crate) async fn job_stages_for(pool: &SqlitePool, tenant_id: Uuid) -> Result<Vec<JobStage>> {
    let rows = sqlx::query(
        "SELECT id, title, position FROM job_stages WHERE tenant_id = ? ORDER BY position",
    )
    .bind(tenant_id.to_string())
    .fetch_all(pool)
    .await?;

    let mut stages = Vec::with_capacity(rows.len());
    for row in rows {
        let id_str: String = row.get("id");
        stages.push(JobStage {
            id: Uuid::parse_str(&id_str)?,
            title: row.get("title"),
            position: row.get("position"),
        });
    }

    Ok(stages)
}

/// The tenant's open jobs, oldest first
pub(crate) async fn open_jobs_for(pool: &SqlitePool, tenant_id: Uuid) -> Result<Vec<Job>> {
    let rows = sqlx::query(
        "SELECT id, title FROM jobs WHERE tenant_id = ? AND status = 'open' ORDER BY created_at",
    )
    .bind(tenant_id.to_string())
    .fetch_all(pool)
    .await?;

    let mut jobs = Vec::with_capacity(rows.len());
    for row in rows {
        let id_str: String = row.get("id");
        jobs.push(Job {
            id: Uuid::parse_str(&id_str)?,
            title: row.get("title"),
        });
    }

    Ok(jobs)
}

/// Candidates whose stage position falls in `lo..=hi`
pub(crate) async fn candidates_between(
    pool: &SqlitePool,
    tenant_id: Uuid,
    lo: i64,
    hi: i64,
) -> Result<Vec<Candidate>> {
    let rows = sqlx::query(
        "SELECT c.id, c.job_id, s.position FROM candidates c \
         JOIN job_stages s ON s.id = c.stage_id \
         WHERE c.tenant_id = ? AND s.position BETWEEN ? AND ? \
         ORDER BY c.applied_at",
    )
    .bind(tenant_id.to_string())
    .bind(lo)
    .bind(hi)
    .fetch_all(pool)
    .await?;

    let mut candidates = Vec::with_capacity(rows.len());
    for row in rows {
        let id_str: String = row.get("id");
        let job_str: String = row.get("job_id");
        candidates.push(Candidate {
            id: Uuid::parse_str(&id_str)?,
            job_id: Uuid::parse_str(&job_str)?,
            stage_position: row.get("position"),
        });
    }

    Ok(candidates)
}
