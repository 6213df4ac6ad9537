//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Chart emoji for size reports
pub const CHART: Emoji = Emoji("📊 ", "~ ");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅ ", "[OK] ");

/// Microscope emoji for measurement
pub const MICROSCOPE: Emoji = Emoji("🔍 ", ">> ");

/// Warning emoji for degraded inputs
pub const WARNING: Emoji = Emoji("⚠️ ", "! ");

/// Environment variable set by `--no-emoji`
pub const NO_EMOJI_ENV: &str = "NO_EMOJI";

/// Render an emoji, falling back to its ASCII form when emoji are disabled
pub fn icon(emoji: Emoji<'static, 'static>) -> String {
    if std::env::var_os(NO_EMOJI_ENV).is_some() {
        emoji.1.to_string()
    } else {
        emoji.to_string()
    }
}

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use bundle_delta::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a signed byte delta, always carrying its sign
///
/// # Examples
///
/// ```
/// use bundle_delta::fmt::format_signed_bytes;
///
/// assert_eq!(format_signed_bytes(50), "+50 B");
/// assert_eq!(format_signed_bytes(-2048), "-2.00 KB");
/// assert_eq!(format_signed_bytes(0), "0 B");
/// ```
pub fn format_signed_bytes(delta: i64) -> String {
    let magnitude = format_bytes(delta.unsigned_abs());
    match delta.signum() {
        1 => format!("+{}", magnitude),
        -1 => format!("-{}", magnitude),
        _ => magnitude,
    }
}
