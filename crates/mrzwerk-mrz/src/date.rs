// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// MRZ date rendering.
//
// `chrono::NaiveDate` is a proleptic-Gregorian calendar date with no locale
// and no time zone, so the rendered forms are identical on every host —
// the device's locale or zone settings cannot leak in.

use chrono::{DateTime, NaiveDate, Utc};

/// Render a calendar date as the eight-digit `YYYYMMDD` form.
pub fn yyyymmdd(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Render a calendar date as the six-digit `YYMMDD` MRZ field.
///
/// Takes the last six characters of [`yyyymmdd`]; dropping the century is
/// intentional and matches the MRZ field width.
pub fn yymmdd(date: NaiveDate) -> String {
    let full = yyyymmdd(date);
    // %Y always renders at least four (ASCII) year digits.
    full[full.len() - 6..].to_string()
}

/// Calendar date of an instant, resolved in UTC.
///
/// Native layers that hold recognition timestamps convert them here exactly
/// once, at the boundary, so a scan at 23:30 in Auckland and the same scan
/// replayed in Honolulu produce the same MRZ fields.
pub fn utc_calendar_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}
