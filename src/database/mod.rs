// ABOUTME: Database connection management and schema bootstrap
// ABOUTME: Creates the CRM and recruitment tables the seeders populate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

//! # Database Management
//!
//! Connection handling and schema bootstrap for the demo seeders. The host
//! application normally owns the schema; this module mirrors it with
//! `CREATE TABLE IF NOT EXISTS` statements so the seeder binaries and the
//! integration tests can run against an empty database file.

mod crm;
mod recruitment;
mod users;

pub use users::{ensure_demo_owner, find_owner, TenantOwner};

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database handle for the seeders
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open a database connection and bootstrap the schema.
    ///
    /// # Errors
    /// Returns an error when the connection cannot be established or a
    /// schema statement fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create all tables the seeders write to
    ///
    /// # Errors
    /// Returns an error when a schema statement fails.
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        self.migrate_crm().await?;
        self.migrate_recruitment().await?;
        Ok(())
    }
}
