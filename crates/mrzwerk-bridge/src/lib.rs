// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mrzwerk-bridge — Seams between the pure MRZ core and a native host app.
//
// The camera session, the recognition engine, and the UI all live in the
// embedding layer (iOS/Android view code); this crate defines the traits
// they implement and the `ScanSession` glue that turns each recognition
// into one emitted event. The core holds no lifecycle hooks and no UI
// references.

pub mod session;
pub mod stub;
pub mod traits;

pub use session::ScanSession;
pub use stub::StubScanner;
pub use traits::{MrzEventSink, MrzScanHandler, NativeMrzScanner};
