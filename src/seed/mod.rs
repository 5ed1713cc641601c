// ABOUTME: Seeder modules for the CRM and recruitment business modules
// ABOUTME: Shared randomization and timestamp helpers live here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

//! Demo data seeders, grouped by business module.
//!
//! Every seeder follows the same contract: given a tenant id, if prerequisite
//! rows exist and target rows do not, insert a bounded randomized set of rows
//! and return how many were written; otherwise return 0 without effect. The
//! fixed execution order lives in the two seeder binaries.

pub mod crm;
pub mod recruitment;
pub(crate) mod templates;

use anyhow::Result;
use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Run a single-bind COUNT query scoped to the tenant.
pub(crate) async fn tenant_count(pool: &SqlitePool, sql: &str, tenant_id: Uuid) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(sql)
        .bind(tenant_id.to_string())
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// RFC 3339 timestamp between `lo` and `hi` days in the past
pub(crate) fn backdated_timestamp(rng: &mut impl Rng, lo: i64, hi: i64) -> String {
    let days_ago = rng.gen_range(lo..=hi);
    (Utc::now() - Duration::days(days_ago)).to_rfc3339()
}

/// Calendar date between `lo` and `hi` days in the past
pub(crate) fn backdated_date(rng: &mut impl Rng, lo: i64, hi: i64) -> String {
    let days_ago = rng.gen_range(lo..=hi);
    (Utc::now() - Duration::days(days_ago))
        .format("%Y-%m-%d")
        .to_string()
}

/// Calendar date between `lo` and `hi` days in the future
pub(crate) fn future_date(rng: &mut impl Rng, lo: i64, hi: i64) -> String {
    let days_ahead = rng.gen_range(lo..=hi);
    (Utc::now() + Duration::days(days_ahead))
        .format("%Y-%m-%d")
        .to_string()
}

/// Serialize a uuid set for a JSON list column
pub(crate) fn json_ids(ids: &[Uuid]) -> Result<String> {
    let strings: Vec<String> = ids.iter().map(Uuid::to_string).collect();
    Ok(serde_json::to_string(&strings)?)
}

/// Plausible North American phone number
pub(crate) fn phone_number(rng: &mut impl Rng) -> String {
    format!(
        "+1 {:03}-{:03}-{:04}",
        rng.gen_range(201..989),
        rng.gen_range(100..999),
        rng.gen_range(0..10000)
    )
}

/// Business-hours time of day, on the half hour
pub(crate) fn business_time(rng: &mut impl Rng) -> String {
    let hour: u32 = rng.gen_range(9..17);
    let minute: u32 = if rng.gen_bool(0.5) { 0 } else { 30 };
    format!("{hour:02}:{minute:02}")
}
