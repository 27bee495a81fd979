use console::{style, Alignment};

use super::formatter::{format_rate, vendor_rows, VendorRow};
use super::table::Table;
use super::tier::ColorTier;
use crate::config::OutputOptions;
use crate::models::report::{ReportOutcome, ScanReport};

pub const QUEUED_NOTICE: &str =
    "[*] Your resource is queued for analysis. Please submit your request in a moment again.";

const TABLE_HEADER: [&str; 4] = ["--VENDOR--", "--STATUS--", "--RESULT--", "--UPDATE--"];

/// Render a report outcome as styled terminal output.
pub fn render_outcome(outcome: &ReportOutcome, file_name: &str, options: &OutputOptions) -> String {
    match outcome {
        ReportOutcome::Found(report) => render_found(report, file_name, options),
        ReportOutcome::Queued => format!("{}\n\n", QUEUED_NOTICE),
        ReportOutcome::Unavailable { verbose_msg, .. } => format!("{}\n", verbose_msg),
    }
}

fn render_found(report: &ScanReport, file_name: &str, options: &OutputOptions) -> String {
    let rate = report.detection_rate();
    let tier = ColorTier::from_rate(rate);

    let mut out = format!(
        "{} Results for {} ({})\n\
         Permalink: {}\n\
         \n\
         {} {} ({} positive / {} negative)\n\
         MD5: {}\n\
         SHA256: {}\n\
         SHA1: {}\n",
        style("[+]").green(),
        style(file_name).bold(),
        report.scan_date,
        report.permalink,
        style("Detection rate:").bold(),
        tier.paint(&format_rate(rate)),
        style(report.positives).green(),
        style(report.negatives()).red(),
        report.md5,
        report.sha256,
        report.sha1,
    );

    if options.quiet {
        return out;
    }

    let rows = vendor_rows(report, options.positive_only);
    if rows.is_empty() {
        return out;
    }

    out.push_str("\nVendors analysis results:\n\n");
    out.push_str(&render_vendor_table(&rows));
    out.push('\n');
    out
}

/// Render a styled status label for a vendor verdict.
pub fn render_status(detected: bool) -> String {
    if detected {
        style("detected").green().bold().to_string()
    } else {
        style("not detected").red().bold().to_string()
    }
}

pub fn render_vendor_table(rows: &[VendorRow]) -> String {
    let mut table = Table::new(TABLE_HEADER).align(1, Alignment::Center);
    for row in rows {
        table.push_row(vec![
            row.vendor.clone(),
            render_status(row.detected),
            row.result.clone(),
            row.update.clone(),
        ]);
    }
    table.render()
}
