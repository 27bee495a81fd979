use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::VtScanError;

/// The `response_code` field of a report lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "i64")]
pub enum ResponseCode {
    /// The report is available.
    Found,
    /// The resource is still waiting in the analysis queue.
    Queued,
    /// The service does not know the resource.
    NotFound,
    Unknown(i64),
}

impl From<i64> for ResponseCode {
    fn from(code: i64) -> Self {
        match code {
            1 => ResponseCode::Found,
            -2 => ResponseCode::Queued,
            0 => ResponseCode::NotFound,
            other => ResponseCode::Unknown(other),
        }
    }
}

impl ResponseCode {
    pub fn as_i64(self) -> i64 {
        match self {
            ResponseCode::Found => 1,
            ResponseCode::Queued => -2,
            ResponseCode::NotFound => 0,
            ResponseCode::Unknown(code) => code,
        }
    }
}

/// One antivirus engine's verdict on the submitted file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorResult {
    pub detected: bool,
    #[serde(default)]
    pub version: Option<String>,
    /// Malware name reported by the engine, if any.
    #[serde(default)]
    pub result: Option<String>,
    /// Engine signature date, usually `YYYYMMDD`.
    #[serde(deserialize_with = "string_or_number")]
    pub update: String,
}

/// A completed analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub scan_date: String,
    pub permalink: String,
    pub positives: u32,
    pub total: u32,
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    /// Engine verdicts in the order the service listed them.
    #[serde(
        default,
        deserialize_with = "vendors_in_wire_order",
        serialize_with = "vendors_as_map"
    )]
    pub scans: Vec<(String, VendorResult)>,
}

impl ScanReport {
    /// Percentage of engines that flagged the file, rounded to two decimals
    /// with exact ties going to the even digit (2/64 is 3.12, not 3.13).
    ///
    /// Callers must have checked `total > 0`; [`parse_report`] guarantees it.
    pub fn detection_rate(&self) -> f64 {
        let rate = f64::from(self.positives) / f64::from(self.total) * 100.0;
        (rate * 100.0).round_ties_even() / 100.0
    }

    pub fn negatives(&self) -> u32 {
        self.total.saturating_sub(self.positives)
    }

    fn validate(&self) -> Result<(), VtScanError> {
        if self.total == 0 {
            return Err(VtScanError::InvalidReport(
                "report lists zero scanning engines".into(),
            ));
        }
        if self.positives > self.total {
            return Err(VtScanError::InvalidReport(format!(
                "{} positives out of {} engines",
                self.positives, self.total
            )));
        }
        Ok(())
    }
}

/// Result of interpreting a report body.
#[derive(Debug, Clone)]
pub enum ReportOutcome {
    Found(ScanReport),
    Queued,
    /// Any other response code, with the service's explanation.
    Unavailable {
        code: ResponseCode,
        verbose_msg: String,
    },
}

#[derive(Deserialize)]
struct ReportEnvelope {
    response_code: ResponseCode,
    #[serde(default)]
    verbose_msg: Option<String>,
}

/// Parse a raw report body, validating the typed shape of a found report.
pub fn parse_report(body: &[u8]) -> Result<ReportOutcome, VtScanError> {
    let envelope: ReportEnvelope = serde_json::from_slice(body)
        .map_err(|e| VtScanError::MalformedResponse(format!("report: {}", e)))?;

    match envelope.response_code {
        ResponseCode::Found => {
            let report: ScanReport = serde_json::from_slice(body)
                .map_err(|e| VtScanError::MalformedResponse(format!("report: {}", e)))?;
            report.validate()?;
            Ok(ReportOutcome::Found(report))
        }
        ResponseCode::Queued => Ok(ReportOutcome::Queued),
        code => Ok(ReportOutcome::Unavailable {
            code,
            verbose_msg: envelope.verbose_msg.unwrap_or_default(),
        }),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}

fn vendors_in_wire_order<'de, D>(deserializer: D) -> Result<Vec<(String, VendorResult)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct WireOrder;

    impl<'de> Visitor<'de> for WireOrder {
        type Value = Vec<(String, VendorResult)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of engine name to verdict")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut scans = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, VendorResult>()? {
                scans.push(entry);
            }
            Ok(scans)
        }
    }

    deserializer.deserialize_map(WireOrder)
}

fn vendors_as_map<S>(scans: &[(String, VendorResult)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(scans.iter().map(|(name, scan)| (name, scan)))
}
