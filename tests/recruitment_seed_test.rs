// ABOUTME: Integration tests for the Recruitment module seeders
// ABOUTME: Covers idempotence, stage-dependent children, and cardinality bounds
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Atrio Labs
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use atrio_demo_seeder::seed::recruitment;

use common::{count, create_test_database, create_test_tenant, run_recruitment_seeders};

/// Tables touched by the recruitment seeders, used for idempotence snapshots
const RECRUITMENT_TABLES: &[&str] = &[
    "job_categories",
    "job_stages",
    "jobs",
    "candidates",
    "interviews",
    "offers",
    "onboarding_tasks",
];

async fn table_counts(pool: &sqlx::SqlitePool) -> Vec<i64> {
    let mut counts = Vec::with_capacity(RECRUITMENT_TABLES.len());
    for table in RECRUITMENT_TABLES {
        counts.push(count(pool, &format!("SELECT COUNT(*) FROM {table}")).await);
    }
    counts
}

#[tokio::test]
async fn test_recruitment_seeding_creates_expected_rows() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@hire.test").await.unwrap();

    run_recruitment_seeders(pool, tenant).await.unwrap();

    assert_eq!(count(pool, "SELECT COUNT(*) FROM job_categories").await, 5);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM job_stages").await, 6);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM jobs").await, 6);
    assert_eq!(
        count(pool, "SELECT COUNT(*) FROM jobs WHERE status = 'open'").await,
        5
    );

    // 4-8 candidates per open job, none on closed jobs
    let per_job_out_of_bounds = count(
        pool,
        "SELECT COUNT(*) FROM (SELECT job_id, COUNT(*) AS n FROM candidates \
         GROUP BY job_id HAVING n < 4 OR n > 8)",
    )
    .await;
    assert_eq!(per_job_out_of_bounds, 0);

    let jobs_with_candidates = count(pool, "SELECT COUNT(DISTINCT job_id) FROM candidates").await;
    assert_eq!(jobs_with_candidates, 5);

    let closed_job_candidates = count(
        pool,
        "SELECT COUNT(*) FROM candidates c \
         JOIN jobs j ON j.id = c.job_id WHERE j.status = 'closed'",
    )
    .await;
    assert_eq!(closed_job_candidates, 0);
}

#[tokio::test]
async fn test_recruitment_seeding_is_idempotent() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@hire.test").await.unwrap();

    run_recruitment_seeders(pool, tenant).await.unwrap();
    let first = table_counts(pool).await;

    run_recruitment_seeders(pool, tenant).await.unwrap();
    let second = table_counts(pool).await;

    assert_eq!(first, second, "re-running the seeders must insert nothing");
}

#[tokio::test]
async fn test_candidate_foreign_keys_and_ratings() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@hire.test").await.unwrap();

    run_recruitment_seeders(pool, tenant).await.unwrap();

    let orphan_stages = count(
        pool,
        "SELECT COUNT(*) FROM candidates c WHERE NOT EXISTS ( \
             SELECT 1 FROM job_stages s WHERE s.id = c.stage_id AND s.tenant_id = c.tenant_id)",
    )
    .await;
    assert_eq!(orphan_stages, 0);

    let orphan_jobs = count(
        pool,
        "SELECT COUNT(*) FROM candidates c WHERE NOT EXISTS ( \
             SELECT 1 FROM jobs j WHERE j.id = c.job_id AND j.tenant_id = c.tenant_id)",
    )
    .await;
    assert_eq!(orphan_jobs, 0);

    let bad_ratings = count(
        pool,
        "SELECT COUNT(*) FROM candidates WHERE rating < 1 OR rating > 5",
    )
    .await;
    assert_eq!(bad_ratings, 0);
}

#[tokio::test]
async fn test_interviews_only_for_candidates_past_screening() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@hire.test").await.unwrap();

    run_recruitment_seeders(pool, tenant).await.unwrap();

    // Candidates before the Interview stage, or rejected, have no interviews
    let early_stage_interviews = count(
        pool,
        "SELECT COUNT(*) FROM interviews i \
         JOIN candidates c ON c.id = i.candidate_id \
         JOIN job_stages s ON s.id = c.stage_id \
         WHERE s.position < 3 OR s.position > 5",
    )
    .await;
    assert_eq!(early_stage_interviews, 0);

    // Candidates at Interview or beyond each have 1-2 rounds
    let out_of_bounds = count(
        pool,
        "SELECT COUNT(*) FROM candidates c \
         JOIN job_stages s ON s.id = c.stage_id \
         WHERE s.position BETWEEN 3 AND 5 AND \
         (SELECT COUNT(*) FROM interviews WHERE candidate_id = c.id) NOT BETWEEN 1 AND 2",
    )
    .await;
    assert_eq!(out_of_bounds, 0);

    // Completed rounds carry feedback, scheduled ones do not
    assert_eq!(
        count(
            pool,
            "SELECT COUNT(*) FROM interviews WHERE status = 'completed' AND feedback IS NULL",
        )
        .await,
        0
    );
    assert_eq!(
        count(
            pool,
            "SELECT COUNT(*) FROM interviews WHERE status = 'scheduled' AND feedback IS NOT NULL",
        )
        .await,
        0
    );
}

#[tokio::test]
async fn test_offers_match_candidate_stages() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@hire.test").await.unwrap();

    run_recruitment_seeders(pool, tenant).await.unwrap();

    // Exactly one offer per candidate at the Offer or Hired stage
    let missing_offers = count(
        pool,
        "SELECT COUNT(*) FROM candidates c \
         JOIN job_stages s ON s.id = c.stage_id \
         WHERE s.position BETWEEN 4 AND 5 AND \
         (SELECT COUNT(*) FROM offers WHERE candidate_id = c.id) != 1",
    )
    .await;
    assert_eq!(missing_offers, 0);

    // No offers for anyone else
    let stray_offers = count(
        pool,
        "SELECT COUNT(*) FROM offers o \
         JOIN candidates c ON c.id = o.candidate_id \
         JOIN job_stages s ON s.id = c.stage_id \
         WHERE s.position NOT BETWEEN 4 AND 5",
    )
    .await;
    assert_eq!(stray_offers, 0);

    // Hired candidates hold an accepted offer with a joining date
    let bad_hired_offers = count(
        pool,
        "SELECT COUNT(*) FROM offers o \
         JOIN candidates c ON c.id = o.candidate_id \
         JOIN job_stages s ON s.id = c.stage_id \
         WHERE s.position = 5 AND (o.status != 'accepted' OR o.joining_on IS NULL)",
    )
    .await;
    assert_eq!(bad_hired_offers, 0);
}

#[tokio::test]
async fn test_onboarding_checklists_only_for_hired() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@hire.test").await.unwrap();

    run_recruitment_seeders(pool, tenant).await.unwrap();

    // Six checklist rows per hired candidate, 2-4 of them done
    let bad_checklists = count(
        pool,
        "SELECT COUNT(*) FROM candidates c \
         JOIN job_stages s ON s.id = c.stage_id \
         WHERE s.position = 5 AND ( \
             (SELECT COUNT(*) FROM onboarding_tasks WHERE candidate_id = c.id) != 6 OR \
             (SELECT COUNT(*) FROM onboarding_tasks WHERE candidate_id = c.id AND is_done = 1) \
                 NOT BETWEEN 2 AND 4)",
    )
    .await;
    assert_eq!(bad_checklists, 0);

    let stray_checklists = count(
        pool,
        "SELECT COUNT(*) FROM onboarding_tasks o \
         JOIN candidates c ON c.id = o.candidate_id \
         JOIN job_stages s ON s.id = c.stage_id \
         WHERE s.position != 5",
    )
    .await;
    assert_eq!(stray_checklists, 0);
}

#[tokio::test]
async fn test_candidate_seeder_no_ops_without_jobs() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@hire.test").await.unwrap();

    recruitment::seed_job_stages(pool, tenant).await.unwrap();

    assert_eq!(recruitment::seed_candidates(pool, tenant).await.unwrap(), 0);
    assert_eq!(recruitment::seed_interviews(pool, tenant).await.unwrap(), 0);
    assert_eq!(recruitment::seed_offers(pool, tenant).await.unwrap(), 0);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM candidates").await, 0);
}
