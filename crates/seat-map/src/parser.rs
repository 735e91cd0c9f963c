//! Parsing seat identifiers.
//!
//! Seat ids are written as `<row><letter>`, e.g. "1A" or "23F". Parsing is
//! lenient about surrounding whitespace and letter case, strict about
//! everything else: "01A" is not "1A".

use crate::error::{InvalidInput, Result, SeatMapError};
use crate::types::SeatId;
use std::str::FromStr;

fn malformed(value: &str, reason: &str) -> SeatMapError {
    InvalidInput::MalformedSeatId {
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Parse a single seat id such as "12C"
pub fn parse_seat_id(s: &str) -> Result<SeatId> {
    let trimmed = s.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| malformed(s, "missing column letter"))?;
    let (row_part, letter_part) = trimmed.split_at(split);

    if row_part.is_empty() {
        return Err(malformed(s, "missing row number"));
    }
    if row_part.len() > 1 && row_part.starts_with('0') {
        return Err(malformed(s, "row number has a leading zero"));
    }
    let row: u16 = row_part
        .parse()
        .map_err(|_| malformed(s, "row number out of range"))?;
    if row == 0 {
        return Err(malformed(s, "rows start at 1"));
    }

    let mut letters = letter_part.chars();
    let letter = match (letters.next(), letters.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return Err(malformed(s, "expected a single column letter")),
    };

    Ok(SeatId::new(row, letter as u8 - b'A'))
}

/// Parse a list of seat ids separated by commas and/or whitespace
///
/// Empty entries are skipped, so "1A, 2B,,3C" yields three ids.
pub fn parse_seat_list(s: &str) -> Result<Vec<SeatId>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_seat_id)
        .collect()
}

impl FromStr for SeatId {
    type Err = SeatMapError;

    fn from_str(s: &str) -> Result<Self> {
        parse_seat_id(s)
    }
}

impl TryFrom<String> for SeatId {
    type Error = SeatMapError;

    fn try_from(value: String) -> Result<Self> {
        parse_seat_id(&value)
    }
}
