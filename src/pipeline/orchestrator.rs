use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::client::ScanService;
use crate::config::ScanConfig;
use crate::errors::VtScanError;
use crate::models::report::{parse_report, ReportOutcome};
use crate::reporting::render_outcome;

pub const MSG_SENT: &str = "[*] Sent file to VT api";
pub const MSG_RECEIVED: &str = "[*] Received response";

/// Upload, fetch the report once, render. One pass, not restartable.
pub struct ScanPipeline {
    config: ScanConfig,
    service: Arc<dyn ScanService>,
}

impl ScanPipeline {
    pub fn new(config: ScanConfig, service: Arc<dyn ScanService>) -> Self {
        Self { config, service }
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ReportOutcome, VtScanError> {
        info!(
            file = %self.config.file_path.display(),
            service = self.service.service_name(),
            "Starting scan"
        );

        let bar = spinner("Uploading file...");
        let submission = self.service.submit_file(&self.config.file_path).await;
        bar.finish_and_clear();
        let submission = submission?;
        writeln!(out, "{}", MSG_SENT)?;

        let bar = spinner("Fetching report...");
        let body = self.service.fetch_report(&submission.resource_id).await;
        bar.finish_and_clear();
        let body = body?;

        // Dump before parsing so a malformed body is still captured
        if let Some(path) = &self.config.out_path {
            tokio::fs::write(path, &body).await?;
            info!(path = %path.display(), bytes = body.len(), "Saved raw report");
        }
        writeln!(out, "{}\n", MSG_RECEIVED)?;

        let outcome = parse_report(&body)?;
        debug!(outcome = outcome_name(&outcome), "Report parsed");

        if matches!(outcome, ReportOutcome::Found(_)) && self.config.output.clear {
            clear_terminal()?;
        }

        let rendered = render_outcome(&outcome, &self.config.display_name(), &self.config.output);
        write!(out, "{}", rendered)?;
        out.flush()?;

        Ok(outcome)
    }
}

fn outcome_name(outcome: &ReportOutcome) -> &'static str {
    match outcome {
        ReportOutcome::Found(_) => "found",
        ReportOutcome::Queued => "queued",
        ReportOutcome::Unavailable { .. } => "unavailable",
    }
}

/// Clear stdout only when it is a terminal; redirected output is left alone.
fn clear_terminal() -> std::io::Result<()> {
    let term = console::Term::stdout();
    if term.is_term() {
        term.clear_screen()?;
    }
    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}
