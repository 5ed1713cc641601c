// ABOUTME: Recruitment module schema - jobs, candidates, interviews, offers
// ABOUTME: Also provides the reset used by seed-recruitment-data --reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;

use super::Database;

impl Database {
    /// Create the recruitment module tables
    pub(super) async fn migrate_recruitment(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS job_categories (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                title TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS job_stages (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                title TEXT NOT NULL,
                position INTEGER NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS jobs (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                category_id TEXT NOT NULL REFERENCES job_categories(id),
                title TEXT NOT NULL,
                skills TEXT NOT NULL DEFAULT '[]',
                positions_open INTEGER NOT NULL DEFAULT 1,
                status TEXT NOT NULL DEFAULT 'open' CHECK (status IN ('open', 'closed')),
                starts_on TEXT NOT NULL,
                ends_on TEXT,
                description TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS candidates (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                job_id TEXT NOT NULL REFERENCES jobs(id),
                stage_id TEXT NOT NULL REFERENCES job_stages(id),
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                country TEXT,
                rating INTEGER NOT NULL DEFAULT 0,
                resume_path TEXT,
                cover_letter TEXT,
                applied_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS interviews (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                candidate_id TEXT NOT NULL REFERENCES candidates(id),
                interviewer_id TEXT NOT NULL REFERENCES users(id),
                scheduled_on TEXT NOT NULL,
                scheduled_at TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL DEFAULT 30,
                round INTEGER NOT NULL DEFAULT 1,
                status TEXT NOT NULL DEFAULT 'scheduled'
                    CHECK (status IN ('scheduled', 'completed', 'canceled')),
                feedback TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS offers (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                candidate_id TEXT NOT NULL REFERENCES candidates(id),
                job_id TEXT NOT NULL REFERENCES jobs(id),
                annual_salary INTEGER NOT NULL,
                status TEXT NOT NULL DEFAULT 'draft'
                    CHECK (status IN ('draft', 'sent', 'accepted', 'declined')),
                sent_on TEXT,
                joining_on TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS onboarding_tasks (
                id TEXT PRIMARY KEY,
                tenant_id TEXT NOT NULL REFERENCES users(id),
                candidate_id TEXT NOT NULL REFERENCES candidates(id),
                title TEXT NOT NULL,
                is_done BOOLEAN NOT NULL DEFAULT false,
                position INTEGER NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Delete all recruitment module rows, children before parents
    ///
    /// # Errors
    /// Returns an error when a delete statement fails.
    pub async fn reset_recruitment_data(&self) -> Result<()> {
        for table in [
            "onboarding_tasks",
            "offers",
            "interviews",
            "candidates",
            "jobs",
            "job_stages",
            "job_categories",
        ] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(self.pool())
                .await?;
        }
        Ok(())
    }
}
