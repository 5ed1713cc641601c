// ABOUTME: CRM module row structs - pipelines, stages, and leads
// ABOUTME: Leads carry the fields copied onto a deal during conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use uuid::Uuid;

/// A named workflow leads and deals are bucketed into
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Row id
    pub id: Uuid,
    /// Display name, e.g. "Sales"
    pub name: String,
}

/// One ordered step of a pipeline (lead stage or deal stage)
#[derive(Debug, Clone)]
pub struct Stage {
    /// Row id
    pub id: Uuid,
    /// Display name, e.g. "Prospect"
    pub name: String,
    /// 1-based order within the pipeline
    pub position: i64,
}

/// A lead row as read back for conversion into a deal.
///
/// `label_ids` stays in its stored JSON form since conversion carries it
/// over verbatim.
#[derive(Debug, Clone)]
pub struct Lead {
    /// Row id
    pub id: Uuid,
    /// Pipeline the lead (and its converted deal) belongs to
    pub pipeline_id: Uuid,
    /// Contact name
    pub name: String,
    /// Contact phone, when present
    pub phone: Option<String>,
    /// What the lead is about; becomes the deal name on conversion
    pub subject: String,
    /// JSON array of label uuids
    pub label_ids: String,
    /// Originating source, when present
    pub source_id: Option<Uuid>,
    /// Free-form notes
    pub notes: Option<String>,
}
