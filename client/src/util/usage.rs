//! Usage percentage and severity thresholds for capacity bars.

#[cfg(test)]
#[path = "usage_test.rs"]
mod usage_test;

/// Above this percentage a bar turns amber.
pub const WARNING_PERCENT: u32 = 75;
/// Above this percentage a bar turns red.
pub const CRITICAL_PERCENT: u32 = 90;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

impl UsageLevel {
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        if percent > CRITICAL_PERCENT {
            Self::Critical
        } else if percent > WARNING_PERCENT {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// Tailwind class of the filled track.
    #[must_use]
    pub fn bar_class(self) -> &'static str {
        match self {
            Self::Normal => "bg-primary-500",
            Self::Warning => "bg-amber-500",
            Self::Critical => "bg-red-500",
        }
    }

    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Normal => "text-slate-700",
            Self::Warning => "text-amber-600",
            Self::Critical => "text-red-600",
        }
    }
}

/// `round(used / total * 100)`, capped at 100; 0 when `total` is 0.
#[must_use]
pub fn usage_percent(used: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (used as f64 / total as f64 * 100.0).round() as u32;
    percent.min(100)
}
