// ABOUTME: CRM module schema - pipelines, leads, deals, and activity tables
// ABOUTME: Also provides the reset used by seed-crm-data --reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;

use super::Database;

impl Database {
    /// Create the CRM module tables
    pub(super) async fn migrate_crm(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS pipelines (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                name TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS lead_stages (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                pipeline_id TEXT NOT NULL REFERENCES pipelines(id),
                name TEXT NOT NULL,
                position INTEGER NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS deal_stages (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                pipeline_id TEXT NOT NULL REFERENCES pipelines(id),
                name TEXT NOT NULL,
                position INTEGER NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS lead_sources (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                name TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS labels (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                name TEXT NOT NULL,
                color TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS leads (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                pipeline_id TEXT NOT NULL REFERENCES pipelines(id),
                stage_id TEXT NOT NULL REFERENCES lead_stages(id),
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                subject TEXT NOT NULL,
                label_ids TEXT NOT NULL DEFAULT '[]',
                source_id TEXT REFERENCES lead_sources(id),
                notes TEXT,
                follow_up_date TEXT,
                converted_deal_id TEXT REFERENCES deals(id),
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS deals (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                pipeline_id TEXT NOT NULL REFERENCES pipelines(id),
                stage_id TEXT NOT NULL REFERENCES deal_stages(id),
                name TEXT NOT NULL,
                price INTEGER NOT NULL DEFAULT 0,
                phone TEXT,
                label_ids TEXT NOT NULL DEFAULT '[]',
                source_id TEXT REFERENCES lead_sources(id),
                notes TEXT,
                status TEXT NOT NULL DEFAULT 'open',
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        self.migrate_crm_activities().await?;

        Ok(())
    }

    /// Activity tables hang off leads and deals via (parent_type, parent_id)
    async fn migrate_crm_activities(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS crm_tasks (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                parent_type TEXT NOT NULL CHECK (parent_type IN ('lead', 'deal')),
                parent_id TEXT NOT NULL,
                name TEXT NOT NULL,
                due_date TEXT,
                priority TEXT NOT NULL DEFAULT 'medium',
                status TEXT NOT NULL DEFAULT 'pending',
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS crm_calls (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                parent_type TEXT NOT NULL CHECK (parent_type IN ('lead', 'deal')),
                parent_id TEXT NOT NULL,
                subject TEXT NOT NULL,
                call_type TEXT NOT NULL CHECK (call_type IN ('inbound', 'outbound')),
                duration_minutes INTEGER NOT NULL,
                description TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS crm_emails (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                parent_type TEXT NOT NULL CHECK (parent_type IN ('lead', 'deal')),
                parent_id TEXT NOT NULL,
                to_address TEXT NOT NULL,
                subject TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS crm_discussions (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                parent_type TEXT NOT NULL CHECK (parent_type IN ('lead', 'deal')),
                parent_id TEXT NOT NULL,
                comment TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS crm_files (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                parent_type TEXT NOT NULL CHECK (parent_type IN ('lead', 'deal')),
                parent_id TEXT NOT NULL,
                file_name TEXT NOT NULL,
                file_path TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Delete all CRM module rows, children before parents
    ///
    /// # Errors
    /// Returns an error when a delete statement fails.
    pub async fn reset_crm_data(&self) -> Result<()> {
        for table in [
            "crm_files",
            "crm_discussions",
            "crm_emails",
            "crm_calls",
            "crm_tasks",
            "leads",
            "deals",
            "labels",
            "lead_sources",
            "deal_stages",
            "lead_stages",
            "pipelines",
        ] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(self.pool())
                .await?;
        }
        Ok(())
    }
}
