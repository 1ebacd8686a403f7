//! # Reading of tableaus
//!
//! Tableaus are read from a plain text format. Each non-empty line is a row, starting with the
//! objective row. Values are separated by whitespace or commas, and everything after a `#` is a
//! comment:
//!
//! ```text
//! # objective row: objective value, then reduced costs
//! 3   0 0 0  -1 -2 -3
//! 8   1 0 0   2 -1  2
//! 12  0 1 0  -1  3  3
//! 4   0 0 1   1  1 -5
//! ```
//!
//! Values are integers (`-3`), fractions (`5/4`) or decimals (`1.25`). They are converted exactly.
use std::fs;
use std::path::Path;

use num_traits::{One, Zero};
use tracing::debug;

use crate::data::number_types::{divide, from_integer};
use crate::data::number_types::traits::OrderedField;
use crate::data::tableau::Tableau;
use crate::io::error::{ImportError, ParseError};

pub mod error;

/// Import a tableau from a file.
///
/// # Errors
///
/// When the file can't be read, contains something that is not a number, or the rows don't form a
/// tableau in canonical form for its initial basis.
pub fn import<F: OrderedField>(file_path: &Path) -> Result<Tableau<F>, ImportError> {
    debug!(path = %file_path.display(), "reading tableau");
    let text = fs::read_to_string(file_path)?;

    parse_tableau(&text)
}

/// Parse a tableau from text.
///
/// # Errors
///
/// When a value can't be parsed, or the rows don't form a tableau in canonical form for its
/// initial basis.
pub fn parse_tableau<F: OrderedField>(text: &str) -> Result<Tableau<F>, ImportError> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let row = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|entry| !entry.is_empty())
            .map(|entry| parse_number(entry).map_err(|error| ParseError::with_file_location(
                format!("row {}: {}", rows.len(), error.description()),
                (index + 1, line),
            )))
            .collect::<Result<Vec<F>, _>>()?;
        rows.push(row);
    }
    debug!(rows = rows.len(), "parsed tableau rows");

    Ok(Tableau::new(rows)?)
}

/// Parse a single exact value.
///
/// # Arguments
///
/// * `text`: An integer with an optional sign, a fraction of two integers where only the
/// numerator may be signed, or a decimal number.
///
/// # Errors
///
/// When the text is not of one of these forms, or a fraction has a zero denominator.
pub fn parse_number<F: OrderedField>(text: &str) -> Result<F, ParseError> {
    let invalid = || ParseError::new(format!("invalid number \"{}\"", text));

    if let Some((numerator, denominator)) = text.split_once('/') {
        let numerator = parse_signed_integer::<F>(numerator).ok_or_else(invalid)?;
        let denominator = parse_digits::<F>(denominator).ok_or_else(invalid)?;
        return divide(numerator, &denominator)
            .map_err(|_| ParseError::new(format!("zero denominator in \"{}\"", text)));
    }

    let (negative, unsigned) = split_sign(text);
    let value = match unsigned.split_once('.') {
        Some((whole, fractional)) => {
            if whole.is_empty() && fractional.is_empty() {
                return Err(invalid());
            }
            let whole = if whole.is_empty() { F::zero() } else { parse_digits(whole).ok_or_else(invalid)? };
            let fractional_value = if fractional.is_empty() {
                F::zero()
            } else {
                let digits = parse_digits::<F>(fractional).ok_or_else(invalid)?;
                let scale = (0..fractional.len()).fold(F::one(), |scale, _| scale * from_integer::<F>(10));
                digits / scale
            };
            whole + fractional_value
        },
        None => parse_digits(unsigned).ok_or_else(invalid)?,
    };

    Ok(if negative { -value } else { value })
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn parse_signed_integer<F: OrderedField>(text: &str) -> Option<F> {
    let (negative, digits) = split_sign(text);
    let value = parse_digits::<F>(digits)?;

    Some(if negative { -value } else { value })
}

/// Digits only, of any length.
fn parse_digits<F: OrderedField>(text: &str) -> Option<F> {
    if text.is_empty() {
        return None;
    }

    let ten = from_integer::<F>(10);
    text.chars().try_fold(F::zero(), |total, c| {
        let digit = c.to_digit(10)?;
        Some(total * &ten + from_integer::<F>(i64::from(digit)))
    })
}

/// The tableau that is solved when no file is given.
///
/// Maximize `x1 + 2 x2 + 3 x3` with an objective constant of 3, subject to three constraints
/// with right-hand sides 8, 12 and 4.
pub fn builtin_example<F: OrderedField>() -> Tableau<F> {
    const ROWS: [[i64; 7]; 4] = [
        [3, 0, 0, 0, -1, -2, -3],
        [8, 1, 0, 0, 2, -1, 2],
        [12, 0, 1, 0, -1, 3, 3],
        [4, 0, 0, 1, 1, 1, -5],
    ];

    let data = ROWS.iter().flatten().map(|&value| from_integer(value)).collect();
    Tableau::from_row_major(data, ROWS.len(), ROWS[0].len())
}
