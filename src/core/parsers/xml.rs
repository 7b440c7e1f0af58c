//! Key extraction for the XML properties format:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!DOCTYPE properties SYSTEM "http://java.sun.com/dtd/properties.dtd">
//! <properties>
//!     <comment>optional</comment>
//!     <entry key="button.label">Save</entry>
//! </properties>
//! ```

use anyhow::{Context, Result, bail};
use roxmltree::{Document, ParsingOptions};

const ROOT_ELEMENT: &str = "properties";
const ENTRY_ELEMENT: &str = "entry";
const COMMENT_ELEMENT: &str = "comment";
const KEY_ATTRIBUTE: &str = "key";

/// Returns the `key` attribute of every `<entry>`, in document order.
pub fn parse_keys(content: &str) -> Result<Vec<String>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(content, options).context("Invalid XML")?;

    let root = doc.root_element();
    if root.tag_name().name() != ROOT_ELEMENT {
        bail!(
            "Expected <{}> root element, found <{}>",
            ROOT_ELEMENT,
            root.tag_name().name()
        );
    }

    let mut keys = Vec::new();
    for child in root.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            ENTRY_ELEMENT => {
                let key = child.attribute(KEY_ATTRIBUTE).with_context(|| {
                    let pos = doc.text_pos_at(child.range().start);
                    format!("<entry> without a key attribute at line {}", pos.row)
                })?;
                keys.push(key.to_string());
            }
            COMMENT_ELEMENT => {}
            other => bail!("Unexpected <{}> element inside <{}>", other, ROOT_ELEMENT),
        }
    }

    Ok(keys)
}
