// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::types::DocumentKind;

/// Which camera the native scanner should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraFacing {
    Back,
    Front,
}

/// Settings handed through to the native scanner collaborator.
///
/// The core itself is configuration-free; everything here belongs to the
/// capture side (which documents to recognize, which camera to use) and is
/// applied via `NativeMrzScanner::apply_config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Document categories the scanner should report. Recognitions of other
    /// kinds are discarded at the native layer.
    pub document_kinds: Vec<DocumentKind>,
    pub camera: CameraFacing,
    /// Include the raw recognized MRZ text in `ScanResult::raw_mrz`.
    pub include_raw_mrz: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            document_kinds: vec![DocumentKind::Passport],
            camera: CameraFacing::Back,
            include_raw_mrz: false,
        }
    }
}
