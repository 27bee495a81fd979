use crate::models::report::{ScanReport, VendorResult};

/// Shown for engines that reported no malware name.
pub const NO_RESULT: &str = "N/A";

/// Format a rate the way a float is normally printed: always with a
/// fractional part (`0.0`, `12.5`, `33.33`).
pub fn format_rate(rate: f64) -> String {
    format!("{:?}", rate)
}

/// Turn a `YYYYMMDD...` engine update stamp into `YYYY-MM-DD`.
/// Anything that does not start with eight digits is returned unchanged.
pub fn normalize_update_date(update: &str) -> String {
    match update.get(..8) {
        Some(digits) if digits.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{}-{}-{}", &digits[0..4], &digits[4..6], &digits[6..8])
        }
        _ => update.to_string(),
    }
}

/// One line of the vendor table, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRow {
    pub vendor: String,
    pub detected: bool,
    pub result: String,
    pub update: String,
}

impl VendorRow {
    pub fn new(vendor: &str, scan: &VendorResult) -> Self {
        Self {
            vendor: vendor.to_string(),
            detected: scan.detected,
            result: scan.result.clone().unwrap_or_else(|| NO_RESULT.to_string()),
            update: normalize_update_date(&scan.update),
        }
    }
}

/// Rows for every engine in the report, optionally only those that detected
/// something.
pub fn vendor_rows(report: &ScanReport, positive_only: bool) -> Vec<VendorRow> {
    report
        .scans
        .iter()
        .filter(|(_, scan)| !positive_only || scan.detected)
        .map(|(vendor, scan)| VendorRow::new(vendor, scan))
        .collect()
}
