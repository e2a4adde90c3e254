//! Extraction settings shared by the loader, the builders and the assembler.

use crate::error::ExtractError;
use regex::Regex;
use std::sync::LazyLock;

/// Filename globs selecting the compound XML files of interest:
/// files, groups, structs, enums and classes. Namespaces, directories,
/// pages and `index.xml` are never loaded.
pub const DEFAULT_INCLUDE: &[&str] = &[
    "*_8*.xml",
    "group__*.xml",
    "struct*.xml",
    "enum*.xml",
    "class*.xml",
];

/// Visibility macro Doxygen leaves in front of exported declarations.
pub const DEFAULT_EXPORT_MARKER: &str = "EXPORT_SYM";

static RE_C_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// How `structures`, `enumerations` and `types` are keyed in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TypeKeys {
    /// Documentation id (unique per generation run).
    #[default]
    Id,
    /// Entity name, for consumers that look types up by spelling.
    Name,
}

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub include: Vec<String>,
    pub type_keys: TypeKeys,
    export_marker: Option<Regex>,
}

impl ExtractConfig {
    /// Build a config. An empty or absent `export_marker` disables stripping.
    pub fn new(
        include: Vec<String>,
        export_marker: Option<&str>,
        type_keys: TypeKeys,
    ) -> Result<Self, ExtractError> {
        let export_marker = match export_marker.filter(|m| !m.is_empty()) {
            Some(marker) => {
                validate_marker(marker).map_err(|_| ExtractError::Marker(marker.to_string()))?;
                let re = marker_regex(marker)
                    .map_err(|_| ExtractError::Marker(marker.to_string()))?;
                Some(re)
            }
            None => None,
        };
        let include = if include.is_empty() {
            DEFAULT_INCLUDE.iter().map(|p| p.to_string()).collect()
        } else {
            include
        };
        Ok(Self {
            include,
            type_keys,
            export_marker,
        })
    }

    /// Remove the export marker token and collapse the remaining whitespace.
    ///
    /// `"EXPORT_SYM  const char *"` → `"const char *"`
    pub fn strip_marker(&self, text: &str) -> String {
        let stripped = match &self.export_marker {
            Some(re) => re.replace_all(text, ""),
            None => text.into(),
        };
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE.iter().map(|p| p.to_string()).collect(),
            type_keys: TypeKeys::Id,
            export_marker: Some(marker_regex(DEFAULT_EXPORT_MARKER).unwrap()),
        }
    }
}

fn marker_regex(marker: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(marker)))
}

/// clap value parser for `--export-marker`: a C macro name, or empty.
pub fn validate_marker(marker: &str) -> Result<String, String> {
    if marker.is_empty() || RE_C_IDENT.is_match(marker) {
        Ok(marker.to_string())
    } else {
        Err(format!("not a C identifier: {marker}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_marker_anywhere() {
        let config = ExtractConfig::default();
        assert_eq!(config.strip_marker("EXPORT_SYM int"), "int");
        assert_eq!(config.strip_marker("const EXPORT_SYM char *"), "const char *");
        assert_eq!(config.strip_marker("EXPORT_SYM"), "");
    }

    #[test]
    fn default_matches_explicit_default_marker() {
        let explicit =
            ExtractConfig::new(vec![], Some(DEFAULT_EXPORT_MARKER), TypeKeys::Id).unwrap();
        let default = ExtractConfig::default();
        for text in ["EXPORT_SYM int", "EXPORT_SYMBOL_t", "const EXPORT_SYM char *"] {
            assert_eq!(default.strip_marker(text), explicit.strip_marker(text));
        }
    }

    #[test]
    fn marker_respects_word_boundaries() {
        let config = ExtractConfig::default();
        assert_eq!(config.strip_marker("EXPORT_SYMBOL_t"), "EXPORT_SYMBOL_t");
    }

    #[test]
    fn custom_and_disabled_marker() {
        let config = ExtractConfig::new(vec![], Some("KIPR_API"), TypeKeys::Id).unwrap();
        assert_eq!(config.strip_marker("KIPR_API double"), "double");
        assert_eq!(config.strip_marker("EXPORT_SYM double"), "EXPORT_SYM double");

        let config = ExtractConfig::new(vec![], Some(""), TypeKeys::Id).unwrap();
        assert_eq!(config.strip_marker("EXPORT_SYM double"), "EXPORT_SYM double");
    }

    #[test]
    fn empty_include_falls_back_to_defaults() {
        let config = ExtractConfig::new(vec![], None, TypeKeys::Name).unwrap();
        assert_eq!(config.include.len(), DEFAULT_INCLUDE.len());
        assert_eq!(config.type_keys, TypeKeys::Name);
    }

    #[test]
    fn rejects_non_identifier_marker() {
        assert!(validate_marker("__attribute__((visibility))").is_err());
        assert!(ExtractConfig::new(vec![], Some("a b"), TypeKeys::Id).is_err());
    }
}
