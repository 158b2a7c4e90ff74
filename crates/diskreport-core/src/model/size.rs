/// Size formatting and parsing: human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting and parsing boundary.
use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Units used by the report, all base 1024 but labelled with the short
/// forms people expect in a disk tool.
const REPORT_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

const DECIMAL_UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];
const BINARY_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Unit system for [`format_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Numeration {
    /// Powers of 1000: B, kB, MB, GB, TB.
    #[default]
    Decimal,
    /// Powers of 1024: B, KiB, MiB, GiB, TiB.
    Binary,
}

impl Numeration {
    fn base(self) -> f64 {
        match self {
            Self::Decimal => 1000.0,
            Self::Binary => 1024.0,
        }
    }

    fn units(self) -> &'static [&'static str] {
        match self {
            Self::Decimal => &DECIMAL_UNITS,
            Self::Binary => &BINARY_UNITS,
        }
    }
}

impl FromStr for Numeration {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "decimal" => Ok(Self::Decimal),
            "binary" => Ok(Self::Binary),
            _ => Err(FormatError::UnsupportedNumeration(s.to_string())),
        }
    }
}

impl fmt::Display for Numeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Decimal => "decimal",
            Self::Binary => "binary",
        })
    }
}

/// Format a byte count the way the report prints it: base 1024, no space
/// between value and unit, e.g. `"10.68GB"`.
///
/// Zero renders as `"0B"`.
pub fn human_readable_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }
    let (value, unit) = scale(bytes, 1024.0, &REPORT_UNITS);
    format!("{}{unit}", round_two(value))
}

/// Format a byte count in the given unit system, e.g. `"10.68 GB"` or
/// `"1.0 KiB"`.
pub fn format_size(bytes: u64, numeration: Numeration) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let (value, unit) = scale(bytes, numeration.base(), numeration.units());
    format!("{} {unit}", round_two(value))
}

/// Parse a human-readable size such as `"10.68 GB"` or `"1 KiB"` into bytes.
///
/// The space between value and unit is optional. Fractional byte counts
/// are rounded up.
pub fn parse_size(input: &str) -> Result<u64, FormatError> {
    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(|| FormatError::MissingUnit(input.to_string()))?;
    let (number, unit) = trimmed.split_at(split);
    let number = number.trim();

    let value: f64 = number
        .parse()
        .map_err(|_| FormatError::InvalidNumber(input.to_string()))?;
    if !value.is_finite() {
        return Err(FormatError::InvalidNumber(input.to_string()));
    }
    if value < 0.0 {
        return Err(FormatError::NegativeSize(input.to_string()));
    }

    let multiplier = unit_multiplier(unit.trim())
        .ok_or_else(|| FormatError::UnknownUnit(unit.trim().to_string()))?;
    let bytes = (value * multiplier).ceil();
    // `u64::MAX as f64` rounds up to 2^64, the first value that no longer fits.
    if bytes >= u64::MAX as f64 {
        return Err(FormatError::Overflow(input.to_string()));
    }
    Ok(bytes as u64)
}

/// Bytes per unit. Decimal units chain by 1000, binary by 1024.
fn unit_multiplier(unit: &str) -> Option<f64> {
    let m = match unit {
        "B" => 1.0,
        "KB" | "kB" => 1e3,
        "MB" => 1e6,
        "GB" => 1e9,
        "TB" => 1e12,
        "KiB" => 1024.0,
        "MiB" => 1024.0 * 1024.0,
        "GiB" => 1024.0 * 1024.0 * 1024.0,
        "TiB" => 1024.0 * 1024.0 * 1024.0 * 1024.0,
        _ => return None,
    };
    Some(m)
}

/// Pick the largest unit whose scaled value is at least 1, clamping to the
/// last unit in the table.
fn scale(bytes: u64, base: f64, units: &[&'static str]) -> (f64, &'static str) {
    let mut value = bytes as f64;
    let mut idx = 0;
    while value >= base && idx + 1 < units.len() {
        value /= base;
        idx += 1;
    }
    (value, units[idx])
}

/// Round to two decimals, keeping at least one fractional digit
/// (`1.0`, `1.5`, `10.68`).
fn round_two(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let mut s = format!("{rounded:.2}");
    if s.ends_with('0') {
        s.pop();
    }
    s
}
