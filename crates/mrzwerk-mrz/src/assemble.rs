// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Synthetic TD3-shaped MRZ line assembly.
//
// The assembled line is not a real TD3 zone: line-1 holder fields,
// nationality, and sex are fixed placeholders. Its sole purpose is to
// re-derive the ICAO check digits from the fields the scanner recognized,
// in a shape downstream consumers already parse by exact byte offsets.
// Every filler width below is part of that contract — do not "correct" the
// placeholders to real TD3 fields.

use chrono::NaiveDate;
use tracing::trace;

use mrzwerk_core::error::{MrzwerkError, Result};

use crate::check_digit::check_digit;
use crate::date::yymmdd;

/// Fixed head of the line: document-type marker `P`, the `NNN` nationality
/// placeholder, and filler out to the full 44-column line-1 width. A format
/// constant, never computed.
const LINE_PREFIX: &str = "P<NNN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<";

/// Nationality placeholder, duplicated ahead of the birth-date field.
const NATIONALITY: &str = "NNN";

/// Sex is never populated; always filler.
const SEX: char = '<';

/// Optional-data field, always empty.
const OPTIONAL_DATA: &str = "<<<<<<<<<<<<<<<<";

/// The optional-data check-digit slot is a literal filler, not a computed
/// digit.
const OPTIONAL_DATA_DIGIT: char = '<';

/// Assemble the synthetic MRZ line for one recognized document.
///
/// Renders both dates as `YYMMDD` (UTC proleptic-Gregorian calendar, century
/// dropped), appends a check digit after the document number and after each
/// date field, and closes the line with an overall check digit computed over
/// everything before it.
///
/// An empty document number is a broken caller precondition and returns
/// [`MrzwerkError::EmptyDocumentNumber`]; it is never padded into a line.
/// A document number containing non-MRZ characters is not rejected here —
/// the check-digit sentinel `'<'` flows into the line, and it is the
/// consumer's job to treat that slot as "checksum unavailable".
pub fn assemble_line(
    document_number: &str,
    birth_date: NaiveDate,
    expiry_date: NaiveDate,
) -> Result<String> {
    if document_number.is_empty() {
        return Err(MrzwerkError::EmptyDocumentNumber);
    }

    let birth = yymmdd(birth_date);
    let expiry = yymmdd(expiry_date);

    // Everything after the document number is fixed-width: 37 bytes.
    let mut line = String::with_capacity(LINE_PREFIX.len() + document_number.len() + 37);
    line.push_str(LINE_PREFIX);
    line.push_str(document_number);
    line.push(check_digit(document_number));
    line.push_str(NATIONALITY);
    line.push_str(&birth);
    line.push(check_digit(&birth));
    line.push(SEX);
    line.push_str(&expiry);
    line.push(check_digit(&expiry));
    line.push_str(OPTIONAL_DATA);
    line.push(OPTIONAL_DATA_DIGIT);

    let overall = check_digit(&line);
    line.push(overall);

    trace!(length = line.len(), overall = %overall, "assembled synthetic MRZ line");
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    /// The ICAO specimen document, assembled end to end.
    #[test]
    fn icao_specimen_full_line() {
        let line = assemble_line("L898902C3", date(1974, 8, 12), date(2012, 4, 15)).unwrap();
        assert_eq!(
            line,
            "P<NNN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<\
             L898902C36NNN7408122<1204159<<<<<<<<<<<<<<<<<3"
        );
    }

    #[test]
    fn field_layout_after_the_prefix() {
        let line = assemble_line("L898902C3", date(1974, 8, 12), date(2012, 4, 15)).unwrap();

        let body = &line[LINE_PREFIX.len()..];
        assert_eq!(&body[0..9], "L898902C3");
        assert_eq!(&body[9..10], "6"); // check_digit("L898902C3")
        assert_eq!(&body[10..13], "NNN");
        assert_eq!(&body[13..19], "740812");
        assert_eq!(&body[19..20], "2"); // check_digit("740812")
        assert_eq!(&body[20..21], "<"); // sex
        assert_eq!(&body[21..27], "120415");
        assert_eq!(&body[27..28], "9"); // check_digit("120415")
        assert_eq!(&body[28..44], "<<<<<<<<<<<<<<<<");
        assert_eq!(&body[44..45], "<"); // optional-data digit slot
    }

    #[test]
    fn overall_digit_covers_the_entire_preceding_body() {
        let line = assemble_line("D23145890", date(1934, 7, 12), date(2027, 4, 16)).unwrap();
        let (body, tail) = line.split_at(line.len() - 1);
        assert_eq!(tail.chars().next(), Some(check_digit(body)));
    }

    #[test]
    fn length_is_prefix_plus_document_number_plus_fixed_tail() {
        // 44-byte prefix + 9-byte document number + 37 fixed = 90.
        let line = assemble_line("L898902C3", date(1974, 8, 12), date(2012, 4, 15)).unwrap();
        assert_eq!(line.len(), 90);

        let short = assemble_line("X1", date(2000, 1, 1), date(2030, 1, 1)).unwrap();
        assert_eq!(short.len(), 44 + 2 + 37);
    }

    #[test]
    fn prefix_is_the_44_column_constant() {
        assert_eq!(LINE_PREFIX.len(), 44);
        assert!(LINE_PREFIX.starts_with("P<NNN"));
        assert!(LINE_PREFIX[5..].chars().all(|c| c == '<'));
    }

    #[test]
    fn empty_document_number_is_a_contract_violation() {
        let err = assemble_line("", date(1974, 8, 12), date(2012, 4, 15)).unwrap_err();
        assert!(matches!(err, MrzwerkError::EmptyDocumentNumber));
    }

    #[test]
    fn non_mrz_document_number_carries_the_sentinel() {
        // Not rejected: the sentinel lands in the check-digit slot and the
        // consumer sees "checksum unavailable".
        let line = assemble_line("L89-902C3", date(1974, 8, 12), date(2012, 4, 15)).unwrap();
        let body = &line[LINE_PREFIX.len()..];
        assert_eq!(&body[9..10], "<");
    }

    #[test]
    fn deterministic_per_inputs() {
        let a = assemble_line("AB2134<<<", date(1987, 1, 1), date(2031, 12, 31)).unwrap();
        let b = assemble_line("AB2134<<<", date(1987, 1, 1), date(2031, 12, 31)).unwrap();
        assert_eq!(a, b);
    }
}
