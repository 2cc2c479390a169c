use crate::property::PropertyError;

/// Parse a data-size string like `"12 B"`, `"64KB"` or `"1.5 MB"` into a byte
/// count.
///
/// Units are binary multiples of 1024 (`1 KB` = 1024 B, `1 MB` = 1048576 B).
/// A bare number means bytes. Decimal magnitudes are accepted and the product
/// is floored to whole bytes. Negative and malformed input fails; parsing
/// never rounds a valid size up past the next whole byte.
pub fn parse_data_size(raw: &str) -> Result<u64, PropertyError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(PropertyError::invalid_data_size(raw, "empty string"));
    }

    // Split the numeric magnitude from the optional unit suffix.
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(s.len());
    let (magnitude, unit) = s.split_at(split);

    let magnitude: f64 = magnitude
        .parse()
        .map_err(|_| PropertyError::invalid_data_size(raw, "not a number"))?;

    if !magnitude.is_finite() || magnitude < 0.0 {
        return Err(PropertyError::invalid_data_size(
            raw,
            "size must be non-negative",
        ));
    }

    let multiplier = match unit.trim() {
        "" | "B" | "b" => 1u64,
        "KB" | "kb" | "Kb" | "kB" => 1u64 << 10,
        "MB" | "mb" | "Mb" | "mB" => 1u64 << 20,
        "GB" | "gb" | "Gb" | "gB" => 1u64 << 30,
        "TB" | "tb" | "Tb" | "tB" => 1u64 << 40,
        other => {
            return Err(PropertyError::invalid_data_size(
                raw,
                format!("unknown unit '{other}'"),
            ));
        }
    };

    Ok((magnitude * multiplier as f64) as u64)
}
