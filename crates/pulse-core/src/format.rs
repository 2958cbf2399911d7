//! Display formatting for dashboard values

use crate::types::{FieldValue, MetricCard, MetricUnit};
use crate::vocabulary::FieldKind;

const THOUSAND: i64 = 1_000;
const MILLION: i64 = 1_000_000;

/// Abbreviate a count with a K or M suffix.
///
/// Values of a thousand or more are scaled and rounded half away from zero to
/// one decimal; anything smaller (including negatives) is printed as is.
#[must_use]
pub fn format_count(n: i64) -> String {
    if n >= MILLION {
        abbreviate(n, MILLION, 'M')
    } else if n >= THOUSAND {
        abbreviate(n, THOUSAND, 'K')
    } else {
        n.to_string()
    }
}

fn abbreviate(n: i64, unit: i64, suffix: char) -> String {
    // Integer arithmetic keeps the half-away-from-zero rounding exact.
    let n = i128::from(n);
    let unit = i128::from(unit);
    let tenths = (n * 10 + unit / 2) / unit;
    format!("{}.{}{suffix}", tenths / 10, tenths % 10)
}

/// Clamp a percentage to `[0, 100]` for use as a bar width.
///
/// NaN is treated as empty.
#[must_use]
pub fn percentage_bar_width(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

fn round_tenths(value: f64) -> f64 {
    // Adding 0.0 turns -0.0 into 0.0.
    (value * 10.0).round() / 10.0 + 0.0
}

/// Percentage with one decimal, e.g. `"42.5%"`
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", round_tenths(percentage))
}

/// Signed percentage change, e.g. `"+12.5%"` or `"-3.0%"`
#[must_use]
pub fn format_change(change: f64) -> String {
    let rounded = round_tenths(change);
    if rounded >= 0.0 {
        format!("+{rounded:.1}%")
    } else {
        format!("{rounded:.1}%")
    }
}

/// Format a duration in seconds as `"3m 24s"`, or `"45s"` under a minute
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;

    if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Render a fixed-width text bar for a percentage
#[must_use]
pub fn render_bar(percentage: f64, width: usize) -> String {
    let fraction = percentage_bar_width(percentage) / 100.0;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((fraction * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[allow(clippy::cast_possible_truncation)]
fn to_count(value: f64) -> i64 {
    // `as` saturates at the i64 bounds and maps NaN to 0.
    value.round() as i64
}

/// Abbreviate a count held as a float.
///
/// Whole values go through [`format_count`]. Fractional values are scaled
/// before rounding, so `1449.5` is `"1.4K"` and `999.6` stays below the
/// thousands and prints `"1000"`.
#[must_use]
pub fn format_count_f64(n: f64) -> String {
    let scaled = |unit: f64, suffix: char| format!("{:.1}{suffix}", (n * 10.0 / unit).round() / 10.0);

    if !n.is_finite() || n.fract() == 0.0 {
        format_count(to_count(n))
    } else if n >= 1e6 {
        scaled(1e6, 'M')
    } else if n >= 1e3 {
        scaled(1e3, 'K')
    } else {
        to_count(n).to_string()
    }
}

/// Format a cell value according to its field's kind
#[must_use]
pub fn format_value(kind: FieldKind, value: &FieldValue) -> String {
    match (kind, value) {
        (FieldKind::Count, FieldValue::Number(n)) => format_count_f64(*n),
        (FieldKind::Percentage, FieldValue::Number(n)) => format_percentage(*n),
        (_, FieldValue::Number(n)) => n.to_string(),
        (_, FieldValue::Text(text)) => text.clone(),
        (_, FieldValue::Status(status)) => status.to_string(),
    }
}

/// Format a metric card's headline value
#[must_use]
pub fn format_metric(card: &MetricCard) -> String {
    match card.unit {
        MetricUnit::Count => format_count_f64(card.value),
        MetricUnit::Percentage => format_percentage(card.value),
        #[allow(clippy::cast_sign_loss)]
        MetricUnit::Duration => format_duration(to_count(card.value).max(0) as u64),
    }
}
