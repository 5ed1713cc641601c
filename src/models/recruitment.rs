// ABOUTME: Recruitment module row structs - jobs, stages, and candidates
// ABOUTME: Candidates carry their stage position for downstream seeders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use uuid::Uuid;

/// An open (or closed) position candidates apply to
#[derive(Debug, Clone)]
pub struct Job {
    /// Row id
    pub id: Uuid,
    /// Posting title, e.g. "Backend Engineer"
    pub title: String,
}

/// One step of the candidate pipeline (Applied through Hired/Rejected)
#[derive(Debug, Clone)]
pub struct JobStage {
    /// Row id
    pub id: Uuid,
    /// Display name
    pub title: String,
    /// 1-based order of the stage
    pub position: i64,
}

/// A candidate as read back by the interview/offer/onboarding seeders
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Row id
    pub id: Uuid,
    /// Job the candidate applied to
    pub job_id: Uuid,
    /// Position of the candidate's current stage
    pub stage_position: i64,
}
