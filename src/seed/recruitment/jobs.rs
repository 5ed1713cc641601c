// ABOUTME: Seeds job categories, the candidate pipeline, and demo job openings
// ABOUTME: First recruitment seeders; candidates and offers hang off these rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::seed::{backdated_date, future_date, tenant_count};

/// Default job categories for a demo workspace
const DEFAULT_CATEGORIES: &[&str] = &[
    "Engineering",
    "Product Design",
    "Marketing",
    "Sales",
    "Customer Support",
];

/// The candidate pipeline, front to back. Rejected sits last so interview
/// and offer seeders can select on position ranges.
const CANDIDATE_STAGES: &[&str] = &[
    "Applied",
    "Screening",
    "Interview",
    "Offer",
    "Hired",
    "Rejected",
];

/// Demo job opening definition
struct JobTemplate {
    title: &'static str,
    category: &'static str,
    skills: &'static [&'static str],
    description: &'static str,
    status: &'static str,
}

/// The demo job openings. One posting is already closed so candidate
/// seeding can demonstrate the open-jobs-only filter.
const JOB_TEMPLATES: &[JobTemplate] = &[
    JobTemplate {
        title: "Backend Engineer",
        category: "Engineering",
        skills: &["Rust", "PostgreSQL", "Distributed Systems"],
        description: "Build and operate the services behind the workspace platform.",
        status: "open",
    },
    JobTemplate {
        title: "Frontend Engineer",
        category: "Engineering",
        skills: &["TypeScript", "React", "Accessibility"],
        description: "Own the web client, from design handoff to production.",
        status: "open",
    },
    JobTemplate {
        title: "Product Designer",
        category: "Product Design",
        skills: &["Figma", "Prototyping", "User Research"],
        description: "Shape the workspace experience across web and mobile.",
        status: "open",
    },
    JobTemplate {
        title: "Growth Marketer",
        category: "Marketing",
        skills: &["SEO", "Content Strategy", "Analytics"],
        description: "Drive self-serve acquisition for the platform.",
        status: "open",
    },
    JobTemplate {
        title: "Account Executive",
        category: "Sales",
        skills: &["B2B SaaS", "Negotiation", "Pipeline Management"],
        description: "Close mid-market deals and grow existing accounts.",
        status: "open",
    },
    JobTemplate {
        title: "Support Specialist",
        category: "Customer Support",
        skills: &["Zendesk", "Technical Writing", "Troubleshooting"],
        description: "Help customers get the most out of the workspace.",
        status: "closed",
    },
];

/// Seed the default job categories, skipping titles that already exist.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_job_categories(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let mut created: u32 = 0;

    for title in DEFAULT_CATEGORIES {
        let existing: Option<(String,)> =
            sqlx::query_as("SELECT id FROM job_categories WHERE tenant_id = ? AND title = ?")
                .bind(tenant_id.to_string())
                .bind(title)
                .fetch_optional(pool)
                .await?;

        if existing.is_some() {
            debug!("  Found existing job category: {}", title);
            continue;
        }

        sqlx::query("INSERT INTO job_categories (id, tenant_id, title) VALUES (?, ?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind(tenant_id.to_string())
            .bind(title)
            .execute(pool)
            .await?;

        created += 1;
    }

    Ok(created)
}

/// Seed the default candidate pipeline stages.
///
/// No-op when the tenant already has job stages. Returns the number of
/// stages created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_job_stages(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let existing = tenant_count(
        pool,
        "SELECT COUNT(*) FROM job_stages WHERE tenant_id = ?",
        tenant_id,
    )
    .await?;
    if existing > 0 {
        return Ok(0);
    }

    for (index, title) in CANDIDATE_STAGES.iter().enumerate() {
        sqlx::query("INSERT INTO job_stages (id, tenant_id, title, position) VALUES (?, ?, ?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind(tenant_id.to_string())
            .bind(title)
            .bind((index + 1) as i64)
            .execute(pool)
            .await?;
    }

    Ok(CANDIDATE_STAGES.len() as u32)
}

/// Seed the demo job openings.
///
/// No-op when the tenant already has jobs or has no categories yet.
/// Returns the number of jobs created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_jobs(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let existing = tenant_count(pool, "SELECT COUNT(*) FROM jobs WHERE tenant_id = ?", tenant_id)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    let categories: Vec<(String, String)> =
        sqlx::query_as("SELECT id, title FROM job_categories WHERE tenant_id = ?")
            .bind(tenant_id.to_string())
            .fetch_all(pool)
            .await?;
    if categories.is_empty() {
        return Ok(0);
    }

    let mut rng = StdRng::from_entropy();
    let mut created: u32 = 0;

    for template in JOB_TEMPLATES {
        let category_id = categories
            .iter()
            .find(|(_, title)| title == template.category)
            .map_or_else(|| categories[0].0.clone(), |(id, _)| id.clone());

        let positions_open: i64 = rng.gen_range(1..=4);
        let starts_on = backdated_date(&mut rng, 10, 60);
        let ends_on = if template.status == "closed" {
            Some(backdated_date(&mut rng, 1, 10))
        } else {
            rng.gen_bool(0.5).then(|| future_date(&mut rng, 30, 90))
        };
        let skills = serde_json::to_string(template.skills)?;
        let created_at = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO jobs (id, tenant_id, category_id, title, skills, positions_open, \
             status, starts_on, ends_on, description, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(tenant_id.to_string())
        .bind(&category_id)
        .bind(template.title)
        .bind(&skills)
        .bind(positions_open)
        .bind(template.status)
        .bind(&starts_on)
        .bind(&ends_on)
        .bind(template.description)
        .bind(&created_at)
        .execute(pool)
        .await?;

        info!("  Created job: {} ({})", template.title, template.status);
        created += 1;
    }

    Ok(created)
}
