// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub scanner for desktop/CI builds where no camera or recognition engine
// is available. Real implementations live in the embedding platform layer.

use mrzwerk_core::config::ScannerConfig;
use mrzwerk_core::error::{MrzwerkError, Result};

use crate::traits::NativeMrzScanner;

/// No-op scanner returned in non-mobile environments.
#[derive(Debug, Default)]
pub struct StubScanner;

impl NativeMrzScanner for StubScanner {
    fn start_scanning(&mut self) -> Result<()> {
        tracing::warn!("NativeMrzScanner::start_scanning called on stub scanner");
        Err(MrzwerkError::PlatformUnavailable)
    }

    fn stop_scanning(&mut self) {}

    fn is_scanning(&self) -> bool {
        false
    }

    fn apply_config(&mut self, _config: &ScannerConfig) -> Result<()> {
        tracing::warn!("NativeMrzScanner::apply_config called on stub scanner");
        Err(MrzwerkError::PlatformUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_never_scans() {
        let mut scanner = StubScanner;
        assert!(matches!(
            scanner.start_scanning(),
            Err(MrzwerkError::PlatformUnavailable)
        ));
        assert!(!scanner.is_scanning());
        // Idempotent by contract, trivially so here.
        scanner.stop_scanning();
        scanner.stop_scanning();
    }
}
