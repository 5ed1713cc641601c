// ABOUTME: Seeds the default lead sources and labels
// ABOUTME: Per-name existence checks keep re-runs duplicate-free
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

/// Default lead sources for a demo workspace
const DEFAULT_SOURCES: &[&str] = &[
    "Website",
    "Referral",
    "Phone Inquiry",
    "Email Campaign",
    "Social Media",
    "Trade Show",
];

/// Default labels with their display colors
const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("New", "#3b82f6"),
    ("Important", "#ef4444"),
    ("Warm", "#f59e0b"),
    ("Cold", "#6b7280"),
    ("On Hold", "#8b5cf6"),
];

/// Seed the default lead sources, skipping names that already exist.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_sources(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let mut created: u32 = 0;

    for name in DEFAULT_SOURCES {
        let existing: Option<(String,)> =
            sqlx::query_as("SELECT id FROM lead_sources WHERE tenant_id = ? AND name = ?")
                .bind(tenant_id.to_string())
                .bind(name)
                .fetch_optional(pool)
                .await?;

        if existing.is_some() {
            debug!("  Found existing source: {}", name);
            continue;
        }

        sqlx::query("INSERT INTO lead_sources (id, tenant_id, name) VALUES (?, ?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind(tenant_id.to_string())
            .bind(name)
            .execute(pool)
            .await?;

        created += 1;
    }

    Ok(created)
}

/// Seed the default labels, skipping names that already exist.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_labels(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let mut created: u32 = 0;

    for (name, color) in DEFAULT_LABELS {
        let existing: Option<(String,)> =
            sqlx::query_as("SELECT id FROM labels WHERE tenant_id = ? AND name = ?")
                .bind(tenant_id.to_string())
                .bind(name)
                .fetch_optional(pool)
                .await?;

        if existing.is_some() {
            debug!("  Found existing label: {}", name);
            continue;
        }

        sqlx::query("INSERT INTO labels (id, tenant_id, name, color) VALUES (?, ?, ?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind(tenant_id.to_string())
            .bind(name)
            .bind(color)
            .execute(pool)
            .await?;

        created += 1;
    }

    Ok(created)
}
