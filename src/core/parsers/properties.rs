//! Key extraction for the line-oriented `key=value` format.
//!
//! Follows the `java.util.Properties` text format: `#`/`!` comment lines, `=`, `:` or
//! whitespace as separator, backslash line continuation and `\uXXXX` escapes.

use anyhow::{Result, bail};

/// Decodes raw file bytes: UTF-8 when valid, ISO-8859-1 otherwise.
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Returns the keys of every entry, in file order. Values are validated but discarded.
pub fn parse_keys(content: &str) -> Result<Vec<String>> {
    let mut keys = Vec::new();

    for (line_number, line) in logical_lines(content) {
        let (raw_key, raw_value) = split_entry(&line);
        let key = unescape(raw_key)
            .map_err(|e| anyhow::anyhow!("line {}: {}", line_number, e))?;
        unescape(raw_value).map_err(|e| anyhow::anyhow!("line {}: {}", line_number, e))?;
        keys.push(key);
    }

    Ok(keys)
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// Joins continuation lines and drops blank and comment lines.
///
/// Yields the 1-based line number where each logical line starts.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut result = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (index, raw) in physical_lines(content).enumerate() {
        let trimmed = raw.trim_start_matches(is_blank);

        let (start, mut text) = match current.take() {
            Some((start, text)) => (start, text),
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (index + 1, String::new())
            }
        };

        if ends_with_continuation(trimmed) {
            text.push_str(&trimmed[..trimmed.len() - 1]);
            current = Some((start, text));
        } else {
            text.push_str(trimmed);
            result.push((start, text));
        }
    }

    if let Some(pending) = current {
        result.push(pending);
    }

    result
}

/// Splits on `\n`, `\r\n` and a lone `\r`. A final terminator adds no empty line.
fn physical_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\n', '\r']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// An odd number of trailing backslashes continues the line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Splits a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut separator: Option<char> = None;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                separator = Some(c);
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                separator = Some(c);
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let Some(separator) = separator else {
        return (key, "");
    };

    let mut rest = &line[key_end + separator.len_utf8()..];
    if is_blank(separator) {
        rest = rest.trim_start_matches(is_blank);
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped;
        }
    }
    (key, rest.trim_start_matches(is_blank))
}

fn unescape(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                    bail!("Malformed \\uxxxx encoding");
                }
                let code = u32::from_str_radix(&hex, 16)?;
                // Lone surrogate halves are kept as the replacement character
                out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}
