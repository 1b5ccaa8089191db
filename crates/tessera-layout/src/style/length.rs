//! Length values and parsing
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;

use crate::error::UnitError;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
///
/// The parsed, still-unresolved form of a style length string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthValue {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// Also produced by a bare number with no unit.
    Px(f32),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// "A <percentage> value is denoted by <percentage>, and consists of a
    /// <number> immediately followed by a percent sign '%'."
    Percent(f32),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw(f32),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vh = 1% of viewport height"
    Vh(f32),
}

impl LengthValue {
    /// Parse a style length string.
    ///
    /// Suffixes are tried in a fixed order: `%`, `vw`, `vh`, `px`, then a
    /// bare number. The empty string is `0px`. Unit suffixes match ASCII
    /// case-insensitively and surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// [`UnitError::InvalidNumber`] when the numeric prefix is not a number
    /// (`"abc%"`, `"12xx"`, `"px"`), [`UnitError::OutOfRange`] when it does
    /// not fit in an `f32` (`"1e40"`).
    pub fn parse(text: &str) -> Result<Self, UnitError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::Px(0.0));
        }

        if let Some(number) = trimmed.strip_suffix('%') {
            return parse_number(number, text).map(Self::Percent);
        }
        if let Some(number) = strip_unit(trimmed, "vw") {
            return parse_number(number, text).map(Self::Vw);
        }
        if let Some(number) = strip_unit(trimmed, "vh") {
            return parse_number(number, text).map(Self::Vh);
        }
        let number = strip_unit(trimmed, "px").unwrap_or(trimmed);
        parse_number(number, text).map(Self::Px)
    }
}

/// Strip a two-letter unit suffix, ignoring ASCII case.
fn strip_unit<'a>(text: &'a str, unit: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(unit.len())?;
    if !text.is_char_boundary(split) {
        return None;
    }
    let (number, suffix) = text.split_at(split);
    suffix.eq_ignore_ascii_case(unit).then_some(number)
}

fn parse_number(number: &str, original: &str) -> Result<f32, UnitError> {
    let number = number.trim();
    // `f32::from_str` accepts these spellings; style strings never mean them.
    if number.eq_ignore_ascii_case("nan")
        || number.to_ascii_lowercase().trim_start_matches(['+', '-']).starts_with("inf")
    {
        return Err(UnitError::InvalidNumber(original.to_string()));
    }
    let value: f32 = number
        .parse()
        .map_err(|_| UnitError::InvalidNumber(original.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(UnitError::OutOfRange(original.to_string()))
    }
}
