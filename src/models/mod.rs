// ABOUTME: Plain row structs read back by the seeders
// ABOUTME: Split by business module, mirroring the table layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

//! Row structs for the records the seeders read back mid-run (parents whose
//! ids child rows reference, and leads carried through conversion). Ids are
//! stored as TEXT uuids; these structs hold them parsed.

pub mod crm;
pub mod recruitment;
