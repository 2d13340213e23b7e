//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, PackageEntry, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "suigen.toml")
    }
}

impl Manifest {
    /// Parse a suigen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a suigen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    validate_packages(&ctx, manifest.packages.iter())?;

    for (network, config) in &manifest.networks {
        let net_ctx = ctx.push(network);
        validate_packages(&net_ctx, config.packages.iter())?;
    }

    if let Some(network) = &manifest.generator.network
        && !manifest.networks.contains_key(network)
    {
        let message = format!("default network '{}' has no [networks.{}] section", network, network);
        return Err(match ctx.find_value_span(network) {
            Some(span) => ctx.source_context().validation_error_at(message, span),
            None => ctx.source_context().validation_error(message),
        });
    }

    Ok(())
}

fn validate_packages<'a>(
    ctx: &ParseContext<'_>,
    packages: impl Iterator<Item = (&'a String, &'a PackageEntry)>,
) -> Result<()> {
    for (name, entry) in packages {
        ctx.validate_package_name(name)?;
        ctx.validate_package_id(name, entry.id())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_has_span() {
        let err = Manifest::from_str("[packages\ncounter = \"0x1\"").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Manifest::from_str("[generator]\nout = \"x\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_package_name() {
        let err = Manifest::from_str("[packages]\n9lives = \"0x1\"\n").unwrap_err();
        match *err {
            Error::InvalidName { name, span, .. } => {
                assert_eq!(name, "9lives");
                assert_eq!(span.map(|s| s.offset()), Some(11));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_package_id() {
        let src = "[packages]\ncounter = \"0xnothex\"\n";
        let err = Manifest::from_str(src).unwrap_err();
        match *err {
            Error::InvalidPackageId { name, id, span, .. } => {
                assert_eq!(name, "counter");
                assert_eq!(id, "0xnothex");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "0xnothex");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_network_packages_are_validated() {
        let err = Manifest::from_str("[networks.testnet.packages]\ncounter = \"123\"\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidPackageId { .. }));
    }

    #[test]
    fn test_default_network_must_exist() {
        let err = Manifest::from_str("[generator]\nnetwork = \"devnet\"\n").unwrap_err();
        match *err {
            Error::Validation { message, span, .. } => {
                assert!(message.contains("devnet"));
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
