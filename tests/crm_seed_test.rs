// ABOUTME: Integration tests for the CRM (Lead) module seeders
// ABOUTME: Covers idempotence, referential validity, and cardinality bounds
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Atrio Labs
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use std::collections::HashSet;

use atrio_demo_seeder::seed::crm;
use sqlx::Row;

use common::{count, count_for, create_test_database, create_test_tenant, run_crm_seeders};

/// Tables touched by the CRM seeders, used for idempotence snapshots
const CRM_TABLES: &[&str] = &[
    "pipelines",
    "lead_stages",
    "deal_stages",
    "lead_sources",
    "labels",
    "leads",
    "deals",
    "crm_tasks",
    "crm_calls",
    "crm_emails",
    "crm_discussions",
    "crm_files",
];

async fn table_counts(pool: &sqlx::SqlitePool) -> Vec<i64> {
    let mut counts = Vec::with_capacity(CRM_TABLES.len());
    for table in CRM_TABLES {
        counts.push(count(pool, &format!("SELECT COUNT(*) FROM {table}")).await);
    }
    counts
}

#[tokio::test]
async fn test_crm_seeding_creates_expected_row_counts() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@crm.test").await.unwrap();

    run_crm_seeders(pool, tenant).await.unwrap();

    assert_eq!(count(pool, "SELECT COUNT(*) FROM pipelines").await, 2);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM lead_stages").await, 8);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM deal_stages").await, 8);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM lead_sources").await, 6);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM labels").await, 5);

    // 10 leads per pipeline
    assert_eq!(count(pool, "SELECT COUNT(*) FROM leads").await, 20);

    // 30% of 20 leads convert, each conversion creating one extra deal
    let converted = count(
        pool,
        "SELECT COUNT(*) FROM leads WHERE converted_deal_id IS NOT NULL",
    )
    .await;
    assert_eq!(converted, 6);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM deals").await, 10 + 6);
}

#[tokio::test]
async fn test_crm_seeding_is_idempotent() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@crm.test").await.unwrap();

    run_crm_seeders(pool, tenant).await.unwrap();
    let first = table_counts(pool).await;

    run_crm_seeders(pool, tenant).await.unwrap();
    let second = table_counts(pool).await;

    assert_eq!(first, second, "re-running the seeders must insert nothing");
}

#[tokio::test]
async fn test_seeded_foreign_keys_are_valid() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@crm.test").await.unwrap();

    run_crm_seeders(pool, tenant).await.unwrap();

    // Every lead's stage belongs to the lead's own pipeline and tenant
    let orphan_lead_stages = count(
        pool,
        "SELECT COUNT(*) FROM leads l WHERE NOT EXISTS ( \
             SELECT 1 FROM lead_stages s WHERE s.id = l.stage_id \
             AND s.pipeline_id = l.pipeline_id AND s.tenant_id = l.tenant_id)",
    )
    .await;
    assert_eq!(orphan_lead_stages, 0);

    let orphan_deal_stages = count(
        pool,
        "SELECT COUNT(*) FROM deals d WHERE NOT EXISTS ( \
             SELECT 1 FROM deal_stages s WHERE s.id = d.stage_id \
             AND s.pipeline_id = d.pipeline_id AND s.tenant_id = d.tenant_id)",
    )
    .await;
    assert_eq!(orphan_deal_stages, 0);

    let orphan_sources = count(
        pool,
        "SELECT COUNT(*) FROM leads l WHERE l.source_id IS NOT NULL AND NOT EXISTS ( \
             SELECT 1 FROM lead_sources s WHERE s.id = l.source_id AND s.tenant_id = l.tenant_id)",
    )
    .await;
    assert_eq!(orphan_sources, 0);

    let orphan_conversions = count(
        pool,
        "SELECT COUNT(*) FROM leads l WHERE l.converted_deal_id IS NOT NULL AND NOT EXISTS ( \
             SELECT 1 FROM deals d WHERE d.id = l.converted_deal_id AND d.tenant_id = l.tenant_id)",
    )
    .await;
    assert_eq!(orphan_conversions, 0);
}

#[tokio::test]
async fn test_lead_labels_reference_seeded_labels() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@crm.test").await.unwrap();

    run_crm_seeders(pool, tenant).await.unwrap();

    let known: HashSet<String> = sqlx::query_scalar("SELECT id FROM labels")
        .fetch_all(pool)
        .await
        .unwrap()
        .into_iter()
        .collect();

    let rows = sqlx::query("SELECT label_ids FROM leads")
        .fetch_all(pool)
        .await
        .unwrap();
    assert_eq!(rows.len(), 20);

    for row in rows {
        let raw: String = row.get("label_ids");
        let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert!((1..=3).contains(&ids.len()), "got {} labels", ids.len());
        for id in &ids {
            assert!(known.contains(id), "unknown label id {id}");
        }
        // No duplicate label assignments on a single lead
        let distinct: HashSet<&String> = ids.iter().collect();
        assert_eq!(distinct.len(), ids.len());
    }
}

#[tokio::test]
async fn test_activity_cardinality_bounds() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@crm.test").await.unwrap();

    run_crm_seeders(pool, tenant).await.unwrap();

    // 1-2 tasks and calls per parent, for leads and deals alike
    for table in ["crm_tasks", "crm_calls"] {
        let out_of_bounds = count(
            pool,
            &format!(
                "SELECT COUNT(*) FROM (SELECT parent_id, COUNT(*) AS n FROM {table} \
                 GROUP BY parent_type, parent_id HAVING n < 1 OR n > 2)"
            ),
        )
        .await;
        assert_eq!(out_of_bounds, 0, "{table} out of 1..=2 per parent");
    }

    // Every lead got activities
    let lead_parents = count(
        pool,
        "SELECT COUNT(DISTINCT parent_id) FROM crm_tasks WHERE parent_type = 'lead'",
    )
    .await;
    assert_eq!(lead_parents, 20);

    // Exactly one email per lead and per deal
    let bad_email_parents = count(
        pool,
        "SELECT COUNT(*) FROM (SELECT parent_id, COUNT(*) AS n FROM crm_emails \
         GROUP BY parent_type, parent_id HAVING n != 1)",
    )
    .await;
    assert_eq!(bad_email_parents, 0);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM crm_emails").await, 20 + 16);

    // 0-2 discussions, 0-1 files per parent
    let excess_discussions = count(
        pool,
        "SELECT COUNT(*) FROM (SELECT parent_id, COUNT(*) AS n FROM crm_discussions \
         GROUP BY parent_type, parent_id HAVING n > 2)",
    )
    .await;
    assert_eq!(excess_discussions, 0);

    let excess_files = count(
        pool,
        "SELECT COUNT(*) FROM (SELECT parent_id, COUNT(*) AS n FROM crm_files \
         GROUP BY parent_type, parent_id HAVING n > 1)",
    )
    .await;
    assert_eq!(excess_files, 0);
}

#[tokio::test]
async fn test_conversion_copies_lead_activities_onto_deal() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@crm.test").await.unwrap();

    run_crm_seeders(pool, tenant).await.unwrap();

    for table in [
        "crm_tasks",
        "crm_calls",
        "crm_emails",
        "crm_discussions",
        "crm_files",
    ] {
        let mismatched = count(
            pool,
            &format!(
                "SELECT COUNT(*) FROM leads l WHERE l.converted_deal_id IS NOT NULL AND \
                 (SELECT COUNT(*) FROM {table} WHERE parent_type = 'lead' AND parent_id = l.id) \
                 != \
                 (SELECT COUNT(*) FROM {table} WHERE parent_type = 'deal' \
                  AND parent_id = l.converted_deal_id)"
            ),
        )
        .await;
        assert_eq!(mismatched, 0, "{table} rows not carried over 1:1");
    }
}

#[tokio::test]
async fn test_seeders_no_op_without_prerequisites() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@crm.test").await.unwrap();

    // No pipelines yet, so nothing downstream can seed
    assert_eq!(crm::seed_leads(pool, tenant).await.unwrap(), 0);
    assert_eq!(crm::seed_lead_activities(pool, tenant).await.unwrap(), 0);
    assert_eq!(crm::seed_deals(pool, tenant).await.unwrap(), 0);
    assert_eq!(crm::seed_conversions(pool, tenant).await.unwrap(), 0);

    assert_eq!(count(pool, "SELECT COUNT(*) FROM leads").await, 0);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM deals").await, 0);
}

#[tokio::test]
async fn test_reset_allows_reseeding() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let tenant = create_test_tenant(pool, "owner@crm.test").await.unwrap();

    run_crm_seeders(pool, tenant).await.unwrap();
    db.reset_crm_data().await.unwrap();

    assert_eq!(count(pool, "SELECT COUNT(*) FROM leads").await, 0);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM pipelines").await, 0);

    run_crm_seeders(pool, tenant).await.unwrap();
    assert_eq!(count(pool, "SELECT COUNT(*) FROM leads").await, 20);
}

#[tokio::test]
async fn test_tenants_are_isolated() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();
    let alpha = create_test_tenant(pool, "alpha@crm.test").await.unwrap();
    let beta = create_test_tenant(pool, "beta@crm.test").await.unwrap();

    run_crm_seeders(pool, alpha).await.unwrap();
    run_crm_seeders(pool, beta).await.unwrap();

    for tenant in [alpha, beta] {
        assert_eq!(
            count_for(pool, "SELECT COUNT(*) FROM leads WHERE tenant_id = ?", tenant).await,
            20
        );
        assert_eq!(
            count_for(
                pool,
                "SELECT COUNT(*) FROM pipelines WHERE tenant_id = ?",
                tenant
            )
            .await,
            2
        );
    }
}
