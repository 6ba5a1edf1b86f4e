// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mrzwerk-mrz — The pure algorithmic core: ICAO 9303 weighted check digits,
// MRZ date rendering, and the synthetic TD3 line assembler.
//
// Everything in this crate is a deterministic function of its inputs — no
// I/O, no shared state, no locks. Callers may invoke it from any thread,
// including a camera-capture callback.

pub mod assemble;
pub mod check_digit;
pub mod date;

pub use assemble::assemble_line;
pub use check_digit::{FILLER, check_digit};
