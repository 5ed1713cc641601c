// ABOUTME: Shared template pools for generated people and companies
// ABOUTME: Used by both the lead and candidate seeders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atrio Labs

use rand::Rng;

/// First names for generated contacts and candidates
const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Carmen", "Diego", "Elena", "Felix", "Greta", "Hassan", "Ingrid", "Jonas",
    "Katya", "Liam", "Mona", "Nadia", "Oscar", "Priya", "Quentin", "Rosa", "Stefan", "Tariq",
    "Uma", "Viktor", "Wendy", "Yusuf",
];

/// Last names for generated contacts and candidates
const LAST_NAMES: &[&str] = &[
    "Almeida", "Bergstrom", "Castillo", "Dubois", "Eriksen", "Fontaine", "Garcia", "Hoffmann",
    "Ivanova", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov",
    "Quispe", "Rossi", "Svensson", "Tanaka", "Ueda", "Vargas", "Weber", "Yamamoto",
];

/// Mail domains for generated addresses
const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "mailbox.org",
    "fastmail.io",
    "postbox.net",
    "inbox.dev",
];

/// Company names leads are attributed to
const COMPANIES: &[&str] = &[
    "Northwind Traders",
    "Lumen Analytics",
    "Bluepeak Logistics",
    "Harbor & Sons",
    "Vertex Manufacturing",
    "Cobalt Media",
    "Greenfield Energy",
    "Atlas Retail Group",
    "Silverline Studios",
    "Pinewood Consulting",
    "Meridian Health",
    "Clearwater Foods",
];

/// Countries for candidate records
const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "Germany",
    "Brazil",
    "India",
    "Japan",
    "Sweden",
    "Spain",
    "Kenya",
    "Australia",
];

/// Random "First Last" pairing
pub(crate) fn full_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

/// Derive a mail address from a generated name
pub(crate) fn email_for(name: &str, rng: &mut impl Rng) -> String {
    let local = name.to_lowercase().replace(' ', ".");
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
    format!("{local}@{domain}")
}

/// Random company name
pub(crate) fn company(rng: &mut impl Rng) -> &'static str {
    COMPANIES[rng.gen_range(0..COMPANIES.len())]
}

/// Random country name
pub(crate) fn country(rng: &mut impl Rng) -> &'static str {
    COUNTRIES[rng.gen_range(0..COUNTRIES.len())]
}
