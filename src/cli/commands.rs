// CLI command implementations
use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use tracing::debug;

use mp3meta::field_mapping::FieldMappings;
use mp3meta::{ReadOptions, StandardField};

use crate::cli::output::OutputFormatter;

/// Expand glob patterns; plain paths pass through untouched
pub fn expand_files(patterns: &[String]) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            files.push(pattern.clone());
            continue;
        }

        let entries = glob::glob(pattern).with_context(|| format!("invalid glob pattern: {}", pattern))?;
        let before = files.len();
        for entry in entries {
            let path = entry?;
            if path.is_file() {
                files.push(path.to_string_lossy().into_owned());
            }
        }
        debug!(pattern = %pattern, matched = files.len() - before, "expanded pattern");
    }
    Ok(files)
}

/// Read metadata from files. Returns the number of files that failed.
pub fn command_read(
    files: &[String],
    fields: Option<&str>,
    output: Option<&str>,
    options: &ReadOptions,
    formatter: &OutputFormatter,
) -> Result<usize> {
    let fields = match fields {
        Some(list) => FieldMappings::parse_list(list).map_err(anyhow::Error::msg)?,
        None => StandardField::ALL.to_vec(),
    };

    let mut writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("cannot create {}", path))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let mut failures = 0;
    for file_path in expand_files(files)? {
        match mp3meta::read_metadata_with(&file_path, options) {
            Ok(metadata) => {
                let value = OutputFormatter::metadata_value(&file_path, &metadata, &fields)?;
                formatter.output_metadata(&value, &mut writer)?;
            }
            Err(e) => {
                formatter.print_error(&format!("{}: {}", file_path, e));
                failures += 1;
            }
        }
    }

    writer.flush()?;
    Ok(failures)
}

/// Detect tag formats. Returns the number of files that failed.
pub fn command_detect(files: &[String], formatter: &OutputFormatter) -> Result<usize> {
    let mut failures = 0;
    for file_path in expand_files(files)? {
        match mp3meta::detect_format(&file_path) {
            Ok(format) => formatter.print_info(&format!("{}: {}", file_path, format)),
            Err(e) => {
                formatter.print_error(&format!("{}: {}", file_path, e));
                failures += 1;
            }
        }
    }
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::config::OutputFormat;

    fn trailer_file(dir: &std::path::Path, name: &str, title: &str) -> String {
        let mut data = vec![0xFFu8; 64];
        let mut block = b"TAG".to_vec();
        block.extend(title.as_bytes());
        block.resize(128, 0);
        data.extend(block);
        let path = dir.join(name);
        std::fs::write(&path, data).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_expand_files_passes_plain_paths() {
        let files = expand_files(&["missing.mp3".to_string()]).unwrap();
        assert_eq!(files, vec!["missing.mp3"]);
    }

    #[test]
    fn test_expand_files_globs() {
        let dir = tempfile::tempdir().unwrap();
        trailer_file(dir.path(), "a.mp3", "A");
        trailer_file(dir.path(), "b.mp3", "B");
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let pattern = format!("{}/*.mp3", dir.path().display());
        let files = expand_files(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.ends_with(".mp3")));
    }

    #[test]
    fn test_command_read_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let song = trailer_file(dir.path(), "song.mp3", "Tune");
        let out = dir.path().join("out.json");
        let formatter = OutputFormatter::new(OutputFormat::Json, true);
        let options = ReadOptions::new().with_trim_padding(true);

        let failures = command_read(
            &[song, dir.path().join("gone.mp3").to_string_lossy().into_owned()],
            Some("title"),
            Some(out.to_str().unwrap()),
            &options,
            &formatter,
        )
        .unwrap();

        assert_eq!(failures, 1);
        let written = std::fs::read_to_string(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(written.trim()).unwrap();
        assert_eq!(value["title"], "Tune");
        assert!(value.get("artist").is_none());
    }

    #[test]
    fn test_command_read_rejects_unknown_field() {
        let formatter = OutputFormatter::new(OutputFormat::Json, true);
        let result = command_read(&[], Some("genre"), None, &ReadOptions::default(), &formatter);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_detect_counts_failures() {
        let dir = tempfile::tempdir().unwrap();
        let song = trailer_file(dir.path(), "song.mp3", "Tune");
        let formatter = OutputFormatter::new(OutputFormat::Pretty, true);

        let missing = dir.path().join("gone.mp3").to_string_lossy().into_owned();
        assert_eq!(command_detect(&[song, missing], &formatter).unwrap(), 1);
    }
}
