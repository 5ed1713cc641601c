// ABOUTME: Integration tests for the schema bootstrap and tenant resolution
// ABOUTME: Exercises in-memory and on-disk databases
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Atrio Labs
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use atrio_demo_seeder::database::{ensure_demo_owner, find_owner, Database};

use common::{count, create_test_database, create_test_tenant};

#[tokio::test]
async fn test_migrate_is_repeatable() {
    let db = create_test_database().await.unwrap();

    // CREATE TABLE IF NOT EXISTS makes a second pass harmless
    db.migrate().await.unwrap();

    assert_eq!(count(db.pool(), "SELECT COUNT(*) FROM pipelines").await, 0);
    assert_eq!(count(db.pool(), "SELECT COUNT(*) FROM candidates").await, 0);
}

#[tokio::test]
async fn test_on_disk_database_is_created_and_persists() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("atrio-test.db");
    let url = format!("sqlite:{}", path.display());

    let db = Database::new(&url).await.unwrap();
    let tenant = create_test_tenant(db.pool(), "disk@atrio.test")
        .await
        .unwrap();
    drop(db);

    assert!(path.exists(), "database file should have been created");

    // Reopen and read the row back
    let db = Database::new(&url).await.unwrap();
    let owner = find_owner(db.pool(), Some("disk@atrio.test"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner.id, tenant);
}

#[tokio::test]
async fn test_find_owner_on_empty_database() {
    let db = create_test_database().await.unwrap();

    let owner = find_owner(db.pool(), None).await.unwrap();
    assert!(owner.is_none());

    let owner = find_owner(db.pool(), Some("missing@atrio.test")).await.unwrap();
    assert!(owner.is_none());
}

#[tokio::test]
async fn test_ensure_demo_owner_is_stable() {
    let db = create_test_database().await.unwrap();

    let first = ensure_demo_owner(db.pool()).await.unwrap();
    let second = ensure_demo_owner(db.pool()).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.email, second.email);
    assert_eq!(count(db.pool(), "SELECT COUNT(*) FROM users").await, 1);
}

#[tokio::test]
async fn test_find_owner_prefers_requested_email() {
    let db = create_test_database().await.unwrap();
    let pool = db.pool();

    create_test_tenant(pool, "first@atrio.test").await.unwrap();
    let second = create_test_tenant(pool, "second@atrio.test").await.unwrap();

    let owner = find_owner(pool, Some("second@atrio.test"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner.id, second);
}
