// ABOUTME: Workspace account table and tenant owner resolution
// ABOUTME: Finds or creates the owner account demo data is scoped to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::Database;

/// Email of the workspace owner created when the users table is empty
const DEMO_OWNER_EMAIL: &str = "owner@atrio.demo";

/// Display name of the bootstrapped demo owner
const DEMO_OWNER_NAME: &str = "Demo Owner";

/// The workspace account all seeded rows are scoped to
pub struct TenantOwner {
    /// Tenant id written into every seeded row's `tenant_id` column
    pub id: Uuid,
    /// Owner account email
    pub email: String,
}

impl Database {
    /// Create the workspace accounts table
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                display_name TEXT,
                is_owner BOOLEAN NOT NULL DEFAULT false,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }
}

/// Find the workspace owner account, by email when one is given, otherwise
/// the earliest-created owner.
///
/// # Errors
/// Returns an error on query failure or an unparseable stored id.
pub async fn find_owner(pool: &SqlitePool, email: Option<&str>) -> Result<Option<TenantOwner>> {
    let row = if let Some(email) = email {
        sqlx::query("SELECT id, email FROM users WHERE email = ? AND is_owner = 1")
            .bind(email)
            .fetch_optional(pool)
            .await?
    } else {
        sqlx::query("SELECT id, email FROM users WHERE is_owner = 1 ORDER BY created_at LIMIT 1")
            .fetch_optional(pool)
            .await?
    };

    let Some(row) = row else {
        return Ok(None);
    };

    let id_str: String = row.get("id");
    let email: String = row.get("email");
    let id = Uuid::parse_str(&id_str)?;

    Ok(Some(TenantOwner { id, email }))
}

/// Create the demo owner account if no owner exists yet, and return it.
///
/// # Errors
/// Returns an error on query failure.
pub async fn ensure_demo_owner(pool: &SqlitePool) -> Result<TenantOwner> {
    if let Some(owner) = find_owner(pool, None).await? {
        return Ok(owner);
    }

    let id = Uuid::new_v4();
    let created_at = Utc::now().to_rfc3339();

    sqlx::query(
        "INSERT INTO users (id, email, display_name, is_owner, created_at) \
         VALUES (?, ?, ?, 1, ?)",
    )
    .bind(id.to_string())
    .bind(DEMO_OWNER_EMAIL)
    .bind(DEMO_OWNER_NAME)
    .bind(&created_at)
    .execute(pool)
    .await?;

    Ok(TenantOwner {
        id,
        email: DEMO_OWNER_EMAIL.to_owned(),
    })
}
