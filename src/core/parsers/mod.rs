//! Parsers for resource bundle files.
//!
//! Both formats are reduced to the list of keys they define; values never leave the parser.
//! - `properties`: line-oriented `key=value` files
//! - `xml`: XML properties files (`<entry key="...">`)

use std::{fs, path::Path};

use anyhow::{Context, Result};

pub mod properties;
pub mod xml;

const XML_EXTENSION: &str = "xml";

/// Reads `path` and returns its keys, choosing the format by file extension.
pub fn read_keys(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let is_xml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(XML_EXTENSION));

    if is_xml {
        let content = String::from_utf8(bytes).context("XML file is not valid UTF-8")?;
        xml::parse_keys(&content)
    } else {
        properties::parse_keys(&properties::decode(&bytes))
    }
}
