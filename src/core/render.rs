//! Renderer module
//!
//! Renders a ConversionReport to the supported output formats: text, json

use crate::core::model::ConversionReport;
use crate::core::paths::display_name;

/// Number of modified files listed by name in the text summary
pub const SUMMARY_LIMIT: usize = 10;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub quiet: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Create a new render config with the pretty and quiet options
    pub fn with_options(format: OutputFormat, pretty: bool, quiet: bool) -> Self {
        Self {
            format,
            pretty,
            quiet,
        }
    }
}

/// Renderer for conversion reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string (no trailing newline)
    pub fn render(&self, report: &ConversionReport) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Json => self.render_json(report),
        }
    }

    /// Render the human summary
    fn render_text(&self, report: &ConversionReport) -> String {
        let mut lines = vec![format!("Updated {} files:", report.modified_count())];
        if self.config.quiet || report.is_empty() {
            return lines.join("\n");
        }

        for path in report.modified.iter().take(SUMMARY_LIMIT) {
            lines.push(format!("  - {}", display_name(path)));
        }

        let remaining = report.modified_count().saturating_sub(SUMMARY_LIMIT);
        if remaining > 0 {
            lines.push(format!("  ... and {} more files", remaining));
        }

        lines.join("\n")
    }

    /// Render as a single JSON object
    fn render_json(&self, report: &ConversionReport) -> String {
        let summary = report.to_summary();
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(&summary)
        } else {
            serde_json::to_string(&summary)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::FileFailure;
    use std::path::PathBuf;

    fn report_with(count: usize) -> ConversionReport {
        let mut report = ConversionReport::new("/app");
        report.scanned = count;
        for i in 0..count {
            report
                .modified
                .push(PathBuf::from(format!("/app/src/File{}.tsx", i)));
        }
        report
    }

    #[test]
    fn test_render_text_empty() {
        let renderer = Renderer::with_config(RenderConfig::default());
        assert_eq!(renderer.render(&report_with(0)), "Updated 0 files:");
    }

    #[test]
    fn test_render_text_lists_basenames() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let output = renderer.render(&report_with(2));
        assert_eq!(
            output,
            "Updated 2 files:\n  - File0.tsx\n  - File1.tsx"
        );
    }

    #[test]
    fn test_render_text_exactly_limit() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let output = renderer.render(&report_with(SUMMARY_LIMIT));
        assert_eq!(output.lines().count(), SUMMARY_LIMIT + 1);
        assert!(!output.contains("more files"));
    }

    #[test]
    fn test_render_text_truncates_after_limit() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let output = renderer.render(&report_with(13));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Updated 13 files:");
        assert_eq!(lines[1], "  - File0.tsx");
        assert_eq!(lines[10], "  - File9.tsx");
        assert_eq!(lines[11], "  ... and 3 more files");
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn test_render_text_quiet() {
        let renderer =
            Renderer::with_config(RenderConfig::with_options(OutputFormat::Text, false, true));
        assert_eq!(renderer.render(&report_with(4)), "Updated 4 files:");
    }

    #[test]
    fn test_render_text_omits_failures() {
        let mut report = report_with(1);
        report
            .failed
            .push(FileFailure::new("/app/src/bad.ts", "read failed: boom"));
        let renderer = Renderer::with_config(RenderConfig::default());
        let output = renderer.render(&report);
        assert!(!output.contains("bad.ts"));
        assert!(output.starts_with("Updated 1 files:"));
    }

    #[test]
    fn test_render_json() {
        let mut report = report_with(1);
        report
            .failed
            .push(FileFailure::new("/app/src/bad.ts", "read failed: boom"));
        let renderer = Renderer::with_config(RenderConfig::new(OutputFormat::Json));
        let output = renderer.render(&report);
        assert!(!output.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["scanned"], 1);
        assert_eq!(value["modified"][0], "src/File0.tsx");
        assert_eq!(value["failed"][0]["path"], "src/bad.ts");
        assert_eq!(value["failed"][0]["error"], "read failed: boom");
    }

    #[test]
    fn test_render_json_pretty() {
        let renderer =
            Renderer::with_config(RenderConfig::with_options(OutputFormat::Json, true, false));
        let output = renderer.render(&report_with(1));
        assert!(output.contains('\n'));
        assert!(output.contains("  "));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "yaml".parse::<OutputFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.pretty);
        assert!(!config.quiet);
    }
}
