// Output formatting for CLI

use std::io::Write;

use anyhow::Result;
use serde_json::Value;

use mp3meta::{Metadata, StandardField};

use crate::cli::config::OutputFormat;

/// Format and output data
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Build the JSON object printed for one file, limited to `fields`
    pub fn metadata_value(path: &str, metadata: &Metadata, fields: &[StandardField]) -> Result<Value> {
        let mut obj = match serde_json::to_value(metadata)? {
            Value::Object(obj) => obj,
            other => anyhow::bail!("metadata serialized to {} instead of an object", other),
        };
        obj.retain(|key, _| fields.iter().any(|f| f.as_str() == key.as_str()));
        obj.insert("file".to_string(), Value::String(path.to_string()));
        Ok(Value::Object(obj))
    }

    /// Output metadata
    pub fn output_metadata(&self, metadata: &Value, writer: &mut impl Write) -> Result<()> {
        match self.format {
            OutputFormat::Pretty => {
                writeln!(writer, "{}", serde_json::to_string_pretty(metadata)?)?;
            }
            OutputFormat::Json => {
                writeln!(writer, "{}", serde_json::to_string(metadata)?)?;
            }
            OutputFormat::KeyValue => {
                self.output_key_value(metadata, writer)?;
            }
            OutputFormat::Table => {
                self.output_table(metadata, writer)?;
            }
        }
        Ok(())
    }

    /// Output as key-value pairs
    fn output_key_value(&self, metadata: &Value, writer: &mut impl Write) -> Result<()> {
        if let Some(obj) = metadata.as_object() {
            for (key, value) in obj {
                writeln!(writer, "{}: {}", key, self.format_value(value))?;
            }
        }
        Ok(())
    }

    /// Output as table
    fn output_table(&self, metadata: &Value, writer: &mut impl Write) -> Result<()> {
        if let Some(obj) = metadata.as_object() {
            let max_key_len = obj.keys().map(|k| k.len()).max().unwrap_or(0);

            writeln!(writer, "{}", "=".repeat(max_key_len + 30))?;

            for (key, value) in obj {
                writeln!(
                    writer,
                    "{:<width$}{}",
                    format!("{}:", key),
                    self.format_value(value),
                    width = max_key_len + 2
                )?;
            }

            writeln!(writer, "{}", "=".repeat(max_key_len + 30))?;
        }
        Ok(())
    }

    /// Format a JSON value for display. NUL padding is shown escaped.
    fn format_value(&self, value: &Value) -> String {
        match value {
            Value::String(s) => s.escape_default().to_string(),
            Value::Null => "(null)".to_string(),
            other => other.to_string(),
        }
    }

    /// Print a progress line unless quiet
    pub fn print_info(&self, message: &str) {
        if !self.quiet {
            println!("  {}", message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        let metadata = Metadata {
            title: "Hello\0".to_string(),
            artist: "Band".to_string(),
            ..Default::default()
        };
        OutputFormatter::metadata_value(
            "song.mp3",
            &metadata,
            &[StandardField::Title, StandardField::Artist],
        )
        .unwrap()
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        OutputFormatter::new(format, true)
            .output_metadata(&sample(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_metadata_value_respects_fields() {
        let value = sample();
        assert_eq!(value["file"], "song.mp3");
        assert_eq!(value["title"], "Hello\0");
        assert!(value.get("album").is_none());
    }

    #[test]
    fn test_json_output() {
        let out = render(OutputFormat::Json);
        let parsed: Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_key_value_output() {
        let out = render(OutputFormat::KeyValue);
        assert!(out.contains("artist: Band\n"));
        assert!(out.contains("title: Hello\\u{0}\n"));
    }

    #[test]
    fn test_table_output() {
        let out = render(OutputFormat::Table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("====="));
        assert!(lines.iter().any(|l| l.starts_with("artist:") && l.ends_with("Band")));
    }
}
