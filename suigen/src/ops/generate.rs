//! Generate operation - bindings from loaded packages.

use std::path::Path;

use eyre::{Context, Result};
use suigen_codegen::LanguageCodegen;
use suigen_codegen_typescript::Generator;
use suigen_ir::Package;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the bindings are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Network the package ids came from, for the summary.
    pub network: Option<&'a str>,
}

/// Execute the generate operation.
pub fn generate(packages: Vec<(String, Package)>, opts: GenerateOptions) -> Result<GenerateReport> {
    let package_names = packages.iter().map(|(name, _)| name.clone()).collect();
    let generator = Generator::new(packages).wrap_err("Invalid package set")?;

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate bindings")?
            .written;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: written,
        })
    };

    Ok(GenerateReport {
        packages: package_names,
        network: opts.network.map(str::to_string),
        result,
    })
}
