// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scan session: the glue between the scanner's recognition delegate and the
// event sink. One recognition in, one assembled event out.

use tracing::{debug, warn};

use mrzwerk_core::error::Result;
use mrzwerk_core::types::{MrzScanEvent, ScanResult};
use mrzwerk_mrz::assemble_line;

use crate::traits::{MrzEventSink, MrzScanHandler};

/// Per-view scan session.
///
/// Holds nothing but its sink — no camera handles, no interior mutability —
/// so it is safe to drive from the capture-callback thread without locking.
pub struct ScanSession<S: MrzEventSink> {
    sink: S,
}

impl<S: MrzEventSink> ScanSession<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Assemble the synthetic MRZ line for one recognition and emit it.
    ///
    /// Fails only on the empty-document-number contract violation; nothing
    /// is emitted in that case.
    pub fn handle_scan(&self, result: &ScanResult) -> Result<()> {
        let line = assemble_line(&result.document_number, result.birth_date, result.expiry_date)?;
        debug!(
            document_kind = ?result.document_kind,
            length = line.len(),
            "recognition assembled"
        );
        self.sink.emit(MrzScanEvent::new(
            line,
            result.document_kind,
            result.country_code.clone(),
        ));
        Ok(())
    }
}

impl<S: MrzEventSink> MrzScanHandler for ScanSession<S> {
    /// Delegate entry point. The scanner cannot act on a failure, so a
    /// broken precondition is logged and the recognition dropped.
    fn on_recognition(&self, result: ScanResult) {
        if let Err(error) = self.handle_scan(&result) {
            warn!(%error, "recognition dropped");
        }
    }
}
