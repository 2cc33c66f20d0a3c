//! Growth warnings for the report store.
//!
//! Every query is a linear scan over one serialized collection; these
//! thresholds flag stores that have outgrown that design.

/// Report count above which searches start to feel slow.
pub const REPORT_WARNING_THRESHOLD: usize = 1_000;
/// store.db size above which load/save round-trips get noticeable.
pub const STORE_SIZE_WARNING_THRESHOLD: u64 = 5 * 1024 * 1024;

/// A warning about potential performance issues.
#[derive(Debug, Clone)]
pub enum Warning {
    /// Report count exceeds the recommended threshold.
    HighReportCount { count: usize, threshold: usize },
    /// store.db file size exceeds the recommended threshold.
    LargeStoreFile { size_mb: f64, threshold_mb: f64 },
}

/// Check thresholds and return any warnings (empty if all are OK).
pub fn check_thresholds(report_count: usize, store_size: u64) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if report_count > REPORT_WARNING_THRESHOLD {
        warnings.push(Warning::HighReportCount {
            count: report_count,
            threshold: REPORT_WARNING_THRESHOLD,
        });
    }

    if store_size > STORE_SIZE_WARNING_THRESHOLD {
        warnings.push(Warning::LargeStoreFile {
            size_mb: store_size as f64 / (1024.0 * 1024.0),
            threshold_mb: STORE_SIZE_WARNING_THRESHOLD as f64 / (1024.0 * 1024.0),
        });
    }

    warnings
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::HighReportCount { count, threshold } => {
            format!(
                "Warning: {} reports exceeds recommended {} - search may slow down",
                count, threshold
            )
        }
        Warning::LargeStoreFile {
            size_mb,
            threshold_mb,
        } => {
            format!(
                "Warning: store.db size ({:.1}MB) exceeds recommended {:.0}MB",
                size_mb, threshold_mb
            )
        }
    }
}
