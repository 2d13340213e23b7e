//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from binding generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Package names in generation order.
    pub packages: Vec<String>,

    /// Network the package ids came from.
    pub network: Option<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of binding generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Written files.
    pub files: Vec<PathBuf>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!("Packages ({})", self.packages.len()));
        for name in &self.packages {
            out.list_item(0, name);
        }
        if let Some(network) = &self.network {
            out.key_value("Network", network);
        }
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for file in &written.files {
            let shown = file.strip_prefix(&written.output_dir).unwrap_or(file);
            out.added_item(&shown.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_written_lists_relative_paths() {
        let report = GenerateReport {
            packages: vec!["counter".to_string()],
            network: Some("testnet".to_string()),
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("src/abi"),
                files: vec![
                    PathBuf::from("src/abi/counter.abi.ts"),
                    PathBuf::from("src/abi/index.ts"),
                ],
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "Packages (1):",
                "  - counter",
                "Network: testnet",
                "",
                "Generated in src/abi:",
                "  + counter.abi.ts",
                "  + index.ts",
            ]
        );
    }

    #[test]
    fn test_preview_summary() {
        let report = GenerateReport {
            packages: vec!["counter".to_string()],
            network: None,
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "index.ts".to_string(),
                content: "export {};".to_string(),
            }]),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines.first().map(String::as_str), Some("── index.ts ──"));
        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("1 files would be generated")
        );
    }
}
