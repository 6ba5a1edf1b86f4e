// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ICAO 9303 part 3, Annex B: weighted modulo-10 check digit.

/// The MRZ filler character, doubling as the "checksum cannot be computed"
/// sentinel return of [`check_digit`].
pub const FILLER: char = '<';

/// Position weights, cycled over the input (position 0 → 7, 1 → 3, 2 → 1, …).
const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Numeric value of one MRZ character, `None` outside the alphabet.
///
/// `A`–`Z` map to 10–35, digits to themselves, filler to 0.
fn char_value(ch: char) -> Option<u32> {
    match ch {
        'A'..='Z' => Some(ch as u32 - 'A' as u32 + 10),
        '0'..='9' => Some(ch as u32 - '0' as u32),
        FILLER => Some(0),
        _ => None,
    }
}

/// Compute the ICAO 9303 check digit of an MRZ field.
///
/// Returns the digit as a char in `'0'..='9'`, or the sentinel `'<'` as soon
/// as a character outside `A-Z`, `0-9`, `<` is seen. The sentinel means
/// "checksum cannot be computed" and must not be read as digit zero. MRZ
/// text is canonically uppercase, so lowercase letters also yield the
/// sentinel. The empty string sums to zero and yields `'0'`.
pub fn check_digit(value: &str) -> char {
    let mut total: u32 = 0;
    for (index, ch) in value.chars().enumerate() {
        let Some(numeric) = char_value(ch) else {
            return FILLER;
        };
        // Reducing per step keeps the sum in u32 range for any input length.
        total = (total + numeric * WEIGHTS[index % 3]) % 10;
    }
    (b'0' + total as u8) as char
}
