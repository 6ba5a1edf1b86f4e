// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Mrzwerk MRZ engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// Unique identifier for an emitted scan event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Document categories of ICAO 9303, keyed by the type letter in the first
/// byte of MRZ line 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// TD3 passport booklet (`P`).
    Passport,
    /// TD1/TD2 identity card (`I`, `A`, or `C`).
    IdentityCard,
    /// Visa (`V`, MRV-A/MRV-B).
    Visa,
    /// Any other type letter the scanner reported.
    Other(char),
}

impl DocumentKind {
    /// MRZ type letter for this document category.
    pub fn type_letter(&self) -> char {
        match self {
            Self::Passport => 'P',
            Self::IdentityCard => 'I',
            Self::Visa => 'V',
            Self::Other(letter) => *letter,
        }
    }

    /// Classify a type letter as reported by the scanner.
    pub fn from_type_letter(letter: char) -> Self {
        match letter {
            'P' => Self::Passport,
            'I' | 'A' | 'C' => Self::IdentityCard,
            'V' => Self::Visa,
            other => Self::Other(other),
        }
    }
}

/// One successful recognition from the native scanner collaborator.
///
/// A value object: produced once per recognition event, consumed by the
/// scan session, never stored. Dates are plain calendar dates — the native
/// layer resolves its timestamps in UTC before crossing the boundary (see
/// `mrzwerk_mrz::date::utc_calendar_date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Recognized document number, uppercase MRZ alphabet (`A-Z`, `0-9`, `<`).
    pub document_number: String,
    pub birth_date: NaiveDate,
    pub expiry_date: NaiveDate,
    /// Document category from the MRZ type letter.
    pub document_kind: DocumentKind,
    /// ISO 3166-1 alpha-3 issuing state, when the scanner recognized one.
    pub country_code: Option<String>,
    /// Raw MRZ text as recognized, for diagnostics only. Never used for
    /// checksum computation.
    pub raw_mrz: Option<String>,
}

/// The payload emitted to the embedding layer after each recognition.
///
/// Emission is fire-and-forget: no acknowledgment, no retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MrzScanEvent {
    pub id: EventId,
    pub captured_at: DateTime<Utc>,
    /// The assembled synthetic MRZ line, checksums re-derived from the
    /// recognized fields.
    pub line: String,
    pub document_kind: DocumentKind,
    pub country_code: Option<String>,
}

impl MrzScanEvent {
    pub fn new(line: String, document_kind: DocumentKind, country_code: Option<String>) -> Self {
        Self {
            id: EventId::new(),
            captured_at: Utc::now(),
            line,
            document_kind,
            country_code,
        }
    }

    /// JSON body for native event bridges that take a serialized payload.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
