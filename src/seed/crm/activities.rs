// ABOUTME: Seeds tasks, calls, emails, discussions, and files onto leads and deals
// ABOUTME: Template arrays with bounded random counts per parent record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::seed::templates;
use crate::seed::{backdated_timestamp, future_date, tenant_count};

/// Task templates with a fixed priority each
const TASKS: &[(&str, &str)] = &[
    ("Send introduction email", "medium"),
    ("Prepare proposal draft", "high"),
    ("Schedule discovery call", "medium"),
    ("Review requirements document", "low"),
    ("Confirm budget and timeline", "high"),
    ("Share case studies", "low"),
    ("Book product walkthrough", "medium"),
    ("Draft contract terms", "high"),
];

const CALL_SUBJECTS: &[&str] = &[
    "Introductory call",
    "Requirements walkthrough",
    "Pricing discussion",
    "Follow-up on proposal",
    "Technical questions",
    "Next steps planning",
    "Stakeholder alignment",
    "Contract review call",
];

const CALL_NOTES: &[&str] = &[
    "Left a voicemail, will retry tomorrow.",
    "Walked through the main requirements.",
    "They asked for an updated quote.",
    "Positive call, decision expected soon.",
    "Needs sign-off from their finance team.",
    "Rescheduled to next week.",
];

/// Email subject/body pairs
const EMAILS: &[(&str, &str)] = &[
    (
        "Following up on our conversation",
        "Thanks for taking the time to talk today. I've attached the materials we discussed and am happy to answer any questions.",
    ),
    (
        "Proposal attached",
        "Please find our proposal attached. It covers scope, timeline, and pricing for the work we outlined together.",
    ),
    (
        "Quick question about your timeline",
        "We're planning capacity for next quarter and wanted to confirm when you're hoping to get started.",
    ),
    (
        "Resources you might find useful",
        "Here are a couple of case studies from teams with a similar setup to yours. Happy to walk through them on a call.",
    ),
    (
        "Checking in",
        "Just checking in to see whether you've had a chance to review the materials. Let me know if anything is unclear.",
    ),
    (
        "Updated pricing",
        "As promised, here is the updated pricing reflecting the revised scope. The offer is valid through the end of the month.",
    ),
];

const DISCUSSION_COMMENTS: &[&str] = &[
    "They mentioned a hard deadline at the end of the quarter.",
    "Competitor quote is apparently 15% lower, worth addressing.",
    "Champion is the ops lead, economic buyer is the CFO.",
    "Asked marketing for an updated one-pager for this account.",
    "Security questionnaire is the main blocker right now.",
    "Renewal of their current contract is in three months.",
    "Positive signals from the technical evaluation.",
    "Waiting on their procurement process.",
];

/// File name/path pairs for attached documents
const FILES: &[(&str, &str)] = &[
    ("requirements.pdf", "uploads/crm/requirements.pdf"),
    ("proposal-v2.docx", "uploads/crm/proposal-v2.docx"),
    ("pricing-sheet.xlsx", "uploads/crm/pricing-sheet.xlsx"),
    ("nda-signed.pdf", "uploads/crm/nda-signed.pdf"),
    ("architecture-notes.pdf", "uploads/crm/architecture-notes.pdf"),
    ("meeting-recording.txt", "uploads/crm/meeting-recording.txt"),
];

/// Seed activities (1-2 tasks, 1-2 calls, 1 email, 0-2 discussions,
/// 0-1 files) for every lead of the tenant.
///
/// No-op when lead activities already exist. Returns the total number of
/// activity rows created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_lead_activities(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    // Tasks are written first, so their presence marks a completed run
    let existing = tenant_count(
        pool,
        "SELECT COUNT(*) FROM crm_tasks WHERE tenant_id = ? AND parent_type = 'lead'",
        tenant_id,
    )
    .await?;
    if existing > 0 {
        return Ok(0);
    }

    let parents = sqlx::query("SELECT id, email FROM leads WHERE tenant_id = ?")
        .bind(tenant_id.to_string())
        .fetch_all(pool)
        .await?;
    if parents.is_empty() {
        return Ok(0);
    }

    let mut rng = StdRng::from_entropy();
    let mut created: u32 = 0;

    for row in parents {
        let id_str: String = row.get("id");
        let parent_id = Uuid::parse_str(&id_str)?;
        let to_address: String = row.get("email");

        created += add_tasks(pool, &mut rng, tenant_id, "lead", parent_id).await?;
        created += add_calls(pool, &mut rng, tenant_id, "lead", parent_id).await?;
        created += add_email(pool, &mut rng, tenant_id, "lead", parent_id, &to_address).await?;
        created += add_discussions(pool, &mut rng, tenant_id, parent_id).await?;
        created += add_file(pool, &mut rng, tenant_id, parent_id).await?;
    }

    Ok(created)
}

/// Seed activities (1-2 tasks, 1-2 calls, 1 email) for every deal of the
/// tenant.
///
/// No-op when deal activities already exist. Returns the total number of
/// activity rows created.
///
/// # Errors
/// Returns an error on query failure.
pub async fn seed_deal_activities(pool: &SqlitePool, tenant_id: Uuid) -> Result<u32> {
    let existing = tenant_count(
        pool,
        "SELECT COUNT(*) FROM crm_tasks WHERE tenant_id = ? AND parent_type = 'deal'",
        tenant_id,
    )
    .await?;
    if existing > 0 {
        return Ok(0);
    }

    let ids: Vec<String> = sqlx::query_scalar("SELECT id FROM deals WHERE tenant_id = ?")
        .bind(tenant_id.to_string())
        .fetch_all(pool)
        .await?;
    if ids.is_empty() {
        return Ok(0);
    }

    let mut rng = StdRng::from_entropy();
    let mut created: u32 = 0;

    for id in &ids {
        let parent_id = Uuid::parse_str(id)?;
        let contact = templates::full_name(&mut rng);
        let to_address = templates::email_for(&contact, &mut rng);

        created += add_tasks(pool, &mut rng, tenant_id, "deal", parent_id).await?;
        created += add_calls(pool, &mut rng, tenant_id, "deal", parent_id).await?;
        created += add_email(pool, &mut rng, tenant_id, "deal", parent_id, &to_address).await?;
    }

    Ok(created)
}

async fn add_tasks(
    pool: &SqlitePool,
    rng: &mut StdRng,
    tenant_id: Uuid,
    parent_type: &str,
    parent_id: Uuid,
) -> Result<u32> {
    let count = rng.gen_range(1..=2);

    for _ in 0..count {
        let (name, priority) = TASKS[rng.gen_range(0..TASKS.len())];
        let status = if rng.gen_bool(0.6) { "pending" } else { "done" };
        let due_date = rng.gen_bool(0.7).then(|| future_date(rng, 1, 21));

        sqlx::query(
            "INSERT INTO crm_tasks (id, tenant_id, parent_type, parent_id, name, due_date, \
             priority, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(tenant_id.to_string())
        .bind(parent_type)
        .bind(parent_id.to_string())
        .bind(name)
        .bind(&due_date)
        .bind(priority)
        .bind(status)
        .bind(backdated_timestamp(rng, 1, 30))
        .execute(pool)
        .await?;
    }

    Ok(count)
}

async fn add_calls(
    pool: &SqlitePool,
    rng: &mut StdRng,
    tenant_id: Uuid,
    parent_type: &str,
    parent_id: Uuid,
) -> Result<u32> {
    let count = rng.gen_range(1..=2);

    for _ in 0..count {
        let subject = CALL_SUBJECTS[rng.gen_range(0..CALL_SUBJECTS.len())];
        let call_type = if rng.gen_bool(0.5) { "inbound" } else { "outbound" };
        let duration: i64 = rng.gen_range(5..=45);
        let description = rng
            .gen_bool(0.7)
            .then(|| CALL_NOTES[rng.gen_range(0..CALL_NOTES.len())]);

        sqlx::query(
            "INSERT INTO crm_calls (id, tenant_id, parent_type, parent_id, subject, call_type, \
             duration_minutes, description, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(tenant_id.to_string())
        .bind(parent_type)
        .bind(parent_id.to_string())
        .bind(subject)
        .bind(call_type)
        .bind(duration)
        .bind(description)
        .bind(backdated_timestamp(rng, 1, 30))
        .execute(pool)
        .await?;
    }

    Ok(count)
}

async fn add_email(
    pool: &SqlitePool,
    rng: &mut StdRng,
    tenant_id: Uuid,
    parent_type: &str,
    parent_id: Uuid,
    to_address: &str,
) -> Result<u32> {
    let (subject, body) = EMAILS[rng.gen_range(0..EMAILS.len())];

    sqlx::query(
        "INSERT INTO crm_emails (id, tenant_id, parent_type, parent_id, to_address, subject, \
         body, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(tenant_id.to_string())
    .bind(parent_type)
    .bind(parent_id.to_string())
    .bind(to_address)
    .bind(subject)
    .bind(body)
    .bind(backdated_timestamp(rng, 1, 30))
    .execute(pool)
    .await?;

    Ok(1)
}

async fn add_discussions(
    pool: &SqlitePool,
    rng: &mut StdRng,
    tenant_id: Uuid,
    parent_id: Uuid,
) -> Result<u32> {
    let count = rng.gen_range(0..=2);

    for _ in 0..count {
        let comment = DISCUSSION_COMMENTS[rng.gen_range(0..DISCUSSION_COMMENTS.len())];

        sqlx::query(
            "INSERT INTO crm_discussions (id, tenant_id, parent_type, parent_id, comment, \
             created_at) VALUES (?, ?, 'lead', ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(tenant_id.to_string())
        .bind(parent_id.to_string())
        .bind(comment)
        .bind(backdated_timestamp(rng, 1, 30))
        .execute(pool)
        .await?;
    }

    Ok(count)
}

async fn add_file(
    pool: &SqlitePool,
    rng: &mut StdRng,
    tenant_id: Uuid,
    parent_id: Uuid,
) -> Result<u32> {
    if !rng.gen_bool(0.5) {
        return Ok(0);
    }

    let (file_name, file_path) = FILES[rng.gen_range(0..FILES.len())];

    sqlx::query(
        "INSERT INTO crm_files (id, tenant_id, parent_type, parent_id, file_name, file_path, \
         created_at) VALUES (?, ?, 'lead', ?, ?, ?, ?)",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(tenant_id.to_string())
    .bind(parent_id.to_string())
    .bind(file_name)
    .bind(file_path)
    .bind(backdated_timestamp(rng, 1, 30))
    .execute(pool)
    .await?;

    Ok(1)
}
