// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the scanner collaborator and the
// event-emission boundary.

use mrzwerk_core::config::ScannerConfig;
use mrzwerk_core::error::Result;
use mrzwerk_core::types::{MrzScanEvent, ScanResult};

/// The native scanning collaborator: camera session plus recognition engine.
///
/// Implementations live in the embedding platform layer and drive an
/// [`MrzScanHandler`] with structured results. This crate never sees camera
/// frames or raw OCR output.
pub trait NativeMrzScanner {
    /// Begin the camera session. Hosts call this when the scanner view
    /// becomes visible.
    fn start_scanning(&mut self) -> Result<()>;

    /// End the camera session. Hosts call this when the view goes away.
    /// Must be idempotent — stopping a stopped scanner is a no-op.
    fn stop_scanning(&mut self);

    fn is_scanning(&self) -> bool;

    /// Hand pass-through settings (document kinds, camera facing) to the
    /// native engine. May be called before or during a session.
    fn apply_config(&mut self, config: &ScannerConfig) -> Result<()>;
}

/// Recognition delegate the native scanner drives.
///
/// One call per successful recognition; the scanner does not retry and does
/// not wait. Implemented by [`crate::ScanSession`].
pub trait MrzScanHandler {
    fn on_recognition(&self, result: ScanResult);
}

/// Fire-and-forget event emission toward the embedding layer.
///
/// `Send + Sync` because recognitions arrive on the capture-callback thread
/// while the sink is typically owned by the UI side.
pub trait MrzEventSink: Send + Sync {
    /// Deliver one assembled event. No acknowledgment, no retry.
    fn emit(&self, event: MrzScanEvent);
}
