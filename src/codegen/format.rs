//! Best-effort canonical formatting of generated sources.

use crate::error::FormatError;

/// Parse `raw` as a Rust file and pretty-print it.
pub fn format_source(unit: &str, raw: &str) -> Result<String, FormatError> {
    let file = syn::parse_file(raw).map_err(|e| FormatError {
        unit: unit.to_string(),
        message: e.to_string(),
    })?;
    Ok(prettyplease::unparse(&file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_valid_source() {
        let out = format_source("ok", "pub fn  f( ) -> i64 { 1 }").unwrap();
        assert!(out.contains("pub fn f() -> i64 {\n"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn keeps_doc_comments() {
        let out = format_source("doc", "//! Header\n/// Item\npub struct A;").unwrap();
        assert!(out.starts_with("//! Header\n"));
        assert!(out.contains("/// Item\n"));
    }

    #[test]
    fn invalid_source_is_a_format_error() {
        let err = format_source("bad_gen.rs", "pub struct Bad Name {}").unwrap_err();
        assert_eq!(err.unit, "bad_gen.rs");
        assert!(err.to_string().contains("bad_gen.rs"));
    }
}
