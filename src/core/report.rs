use crate::core::batch::CheckReport;
use crate::utils::error::{PostcodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 4] = ["text", "csv", "tsv", "json"];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PostcodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(PostcodeError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

pub fn render_report(report: &CheckReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Csv => render_delimited(report, b','),
        OutputFormat::Tsv => render_delimited(report, b'\t'),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();
    for result in &report.results {
        let outcome = match (&result.formatted, result.valid) {
            (Some(formatted), _) => formatted.as_str(),
            (None, true) => "valid, no inward code",
            (None, false) => "invalid",
        };
        out.push_str(&format!("{} -> {}\n", result.input, outcome));
    }
    out.push_str(&format!(
        "checked {}: {} valid, {} invalid\n",
        report.total, report.valid, report.invalid
    ));
    out
}

fn render_delimited(report: &CheckReport, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["input", "valid", "formatted"])?;
    for result in &report.results {
        writer.write_record([
            result.input.as_str(),
            if result.valid { "true" } else { "false" },
            result.formatted.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PostcodeError::IoError(e.into_error()))?;
    report_text(bytes)
}

fn report_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| PostcodeError::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::batch::PostcodeChecker;
    use crate::core::matcher::Grammar;

    fn sample_report() -> CheckReport {
        PostcodeChecker::default().check_all(["W1A0AX", "INVALID"])
    }

    #[test]
    fn test_render_text() {
        let out = render_report(&sample_report(), OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "W1A0AX -> W1A 0AX\nINVALID -> invalid\nchecked 2: 1 valid, 1 invalid\n"
        );
    }

    #[test]
    fn test_render_text_valid_without_inward_code() {
        let report =
            PostcodeChecker::new(Grammar::Legacy).check_all(["SW1A", "M11AE", "INVALID"]);
        let out = render_report(&report, OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "SW1A -> valid, no inward code\nM11AE -> M1 1AE\nINVALID -> invalid\nchecked 3: 2 valid, 1 invalid\n"
        );

        let csv = render_report(&report, OutputFormat::Csv).unwrap();
        assert!(csv.contains("SW1A,true,\n"));
    }

    #[test]
    fn test_render_csv() {
        let out = render_report(&sample_report(), OutputFormat::Csv).unwrap();
        assert_eq!(
            out,
            "input,valid,formatted\nW1A0AX,true,W1A 0AX\nINVALID,false,\n"
        );
    }

    #[test]
    fn test_render_tsv() {
        let out = render_report(&sample_report(), OutputFormat::Tsv).unwrap();
        assert!(out.starts_with("input\tvalid\tformatted\n"));
        assert!(out.contains("W1A0AX\ttrue\tW1A 0AX\n"));
    }

    #[test]
    fn test_render_json() {
        let out = render_report(&sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["grammar"], "strict");
        assert_eq!(value["valid"], 1);
        assert_eq!(value["results"][0]["formatted"], "W1A 0AX");
        assert!(value["results"][1]["formatted"].is_null());
    }

    #[test]
    fn test_non_utf8_buffer_is_io_error() {
        let err = report_text(vec![0xff, 0xfe]).unwrap_err();
        match err {
            PostcodeError::IoError(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
