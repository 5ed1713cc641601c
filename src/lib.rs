// ABOUTME: Library entry point for the Atrio Workspace demo data seeders
// ABOUTME: Exposes the schema bootstrap and the CRM/recruitment seeder modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

#![deny(unsafe_code)]

//! # Atrio Demo Seeder
//!
//! Demo/sample data seeders for the two business modules of Atrio Workspace:
//! the CRM (Lead) module and the Recruitment module. Each seeder populates a
//! bounded, randomized set of rows for one workspace tenant, referencing only
//! foreign keys that already exist for that tenant, and no-ops when its data
//! is already present.
//!
//! ## Usage
//!
//! ```bash
//! # Seed the CRM module (pipelines, leads, deals, activities, conversions)
//! cargo run --bin seed-crm-data
//!
//! # Seed the Recruitment module (jobs, candidates, interviews, offers)
//! cargo run --bin seed-recruitment-data
//! ```
//!
//! Both binaries read `DATABASE_URL` (default `sqlite:./data/atrio.db`),
//! bootstrap the schema on first run, and log a per-table summary when done.
//!
//! ## Architecture
//!
//! - [`database`] - connection handling, schema bootstrap, tenant resolution
//! - [`models`] - plain row structs read back by the seeders
//! - [`seed`] - the seeder functions, grouped by module, plus shared template
//!   pools and randomization helpers

pub mod database;
pub mod models;
pub mod seed;
