//! Size conversion and formatting — the single rounding policy.
//!
//! All internal sizes are `u64` bytes. Floating point is only used at the
//! reporting boundary, and every surfaced figure goes through [`round2`] so
//! the same byte count renders identically in every field.

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn kb(bytes: u64) -> f64 {
    round2(bytes as f64 / KIB)
}

pub fn mb(bytes: u64) -> f64 {
    round2(bytes as f64 / MIB)
}

pub fn gb(bytes: u64) -> f64 {
    round2(bytes as f64 / GIB)
}

/// `part` as a percentage of `total`, rounded; 0 when `total` is 0.
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Uses binary units (KiB = 1024) but labels them with common short forms
/// (KB, MB, GB, TB).
pub fn format_size(bytes: u64) -> String {
    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < MIB {
        format!("{:.2} KB", b / KIB)
    } else if b < GIB {
        format!("{:.2} MB", b / MIB)
    } else if b < TIB {
        format!("{:.2} GB", b / GIB)
    } else {
        format!("{:.2} TB", b / TIB)
    }
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
