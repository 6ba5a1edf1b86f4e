// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Mrzwerk.

use thiserror::Error;

/// Top-level error type for all Mrzwerk operations.
#[derive(Debug, Error)]
pub enum MrzwerkError {
    // -- MRZ assembly --
    /// The document-number field is required by the TD3 layout; an empty
    /// value is a broken precondition on the caller's side, never padded
    /// into a line.
    #[error("document number is empty; cannot assemble an MRZ line")]
    EmptyDocumentNumber,

    // -- Scanner collaborator --
    #[error("scanner error: {0}")]
    Scanner(String),

    #[error("scanner not available on this platform")]
    PlatformUnavailable,

    // -- Event emission --
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MrzwerkError>;
