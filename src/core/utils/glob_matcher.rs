use std::path::MAIN_SEPARATOR;

/// Segment wildcard that spans any number of path segments, including none.
const DOUBLE_STAR: &str = "**";

/// Ant-style path matcher.
///
/// Patterns are split on the separator (the platform path separator unless told otherwise);
/// `*` matches any run of characters inside one segment and `**` matches zero or more whole
/// segments. A path matches the matcher if it matches at least one of its patterns.
///
/// The matcher never rewrites separators: patterns and candidates must use the same one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatcher {
    patterns: Vec<String>,
    separator: char,
}

impl PathMatcher {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_separator(patterns, MAIN_SEPARATOR)
    }

    pub fn with_separator<I, S>(patterns: I, separator: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            separator,
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// True if `path` matches any of the patterns. The first match short-circuits.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| match_path(pattern, path, self.separator))
    }
}

/// Match a whole path against one pattern.
///
/// Examples (with `/` as separator):
/// - `**/*.properties` matches `labels.properties` and `org/test/labels.properties`
/// - `org/test/*.properties` matches `org/test/labels.properties` but not `org/test/sub/labels.properties`
/// - `org/**/sub/*.properties` matches `org/a/b/sub/labels.properties`
pub fn match_path(pattern: &str, path: &str, separator: char) -> bool {
    if path.starts_with(separator) != pattern.starts_with(separator) {
        return false;
    }

    let pattern_segments = split_segments(pattern, separator);
    let path_segments = split_segments(path, separator);

    let mut pattern_start = 0;
    let mut pattern_end = pattern_segments.len();
    let mut path_start = 0;
    let mut path_end = path_segments.len();

    // Leading segments, up to the first `**`
    while pattern_start < pattern_end && path_start < path_end {
        let segment = pattern_segments[pattern_start];
        if segment == DOUBLE_STAR {
            break;
        }
        if !segment_matches(segment, path_segments[path_start]) {
            return false;
        }
        pattern_start += 1;
        path_start += 1;
    }

    if path_start == path_end {
        if pattern_start == pattern_end {
            // Trailing separators must agree
            return pattern.ends_with(separator) == path.ends_with(separator);
        }
        if pattern_end - pattern_start == 1
            && pattern_segments[pattern_start] == "*"
            && path.ends_with(separator)
        {
            return true;
        }
        return only_double_stars(&pattern_segments[pattern_start..pattern_end]);
    }
    if pattern_start == pattern_end {
        return false;
    }

    // Trailing segments, back to the last `**`
    while pattern_start < pattern_end && path_start < path_end {
        let segment = pattern_segments[pattern_end - 1];
        if segment == DOUBLE_STAR {
            break;
        }
        if !segment_matches(segment, path_segments[path_end - 1]) {
            return false;
        }
        pattern_end -= 1;
        path_end -= 1;
    }

    if path_start == path_end {
        return only_double_stars(&pattern_segments[pattern_start..pattern_end]);
    }

    // pattern_segments[pattern_start] and pattern_segments[pattern_end - 1] are both `**`.
    // Place each literal block between two `**` at its leftmost position in the path.
    while pattern_start + 1 < pattern_end && path_start < path_end {
        let next_star = (pattern_start + 1..pattern_end)
            .find(|&i| pattern_segments[i] == DOUBLE_STAR)
            .unwrap_or(pattern_end - 1);

        if next_star == pattern_start + 1 {
            // `**/**`
            pattern_start += 1;
            continue;
        }

        let block = &pattern_segments[pattern_start + 1..next_star];
        let remaining = &path_segments[path_start..path_end];
        let Some(offset) = find_block(block, remaining) else {
            return false;
        };

        pattern_start = next_star;
        path_start += offset + block.len();
    }

    only_double_stars(&pattern_segments[pattern_start..pattern_end])
}

fn split_segments(text: &str, separator: char) -> Vec<&str> {
    text.split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn only_double_stars(segments: &[&str]) -> bool {
    segments.iter().all(|segment| *segment == DOUBLE_STAR)
}

/// Leftmost offset in `path` where every segment of `block` matches positionally.
fn find_block(block: &[&str], path: &[&str]) -> Option<usize> {
    if block.len() > path.len() {
        return None;
    }
    (0..=path.len() - block.len()).find(|&offset| {
        block
            .iter()
            .zip(&path[offset..])
            .all(|(pattern, segment)| segment_matches(pattern, segment))
    })
}

/// Match a single segment with potential wildcards.
/// `*` matches 0 or more characters (standard glob semantics).
fn segment_matches(pattern: &str, text: &str) -> bool {
    if pattern == "*" {
        return true; // Matches any segment
    }
    if !pattern.contains('*') {
        return pattern == text; // Exact match
    }

    // Partial match with wildcards
    let parts: Vec<&str> = pattern.split('*').collect();

    let mut pos = 0;

    // First part must be a prefix
    if !parts[0].is_empty() {
        if !text.starts_with(parts[0]) {
            return false;
        }
        pos = parts[0].len();
    }

    // Last part must be a suffix
    let last = parts[parts.len() - 1];
    let end = if last.is_empty() {
        text.len()
    } else {
        if !text.ends_with(last) {
            return false;
        }
        // Check for overlap between prefix and suffix
        if pos + last.len() > text.len() {
            return false;
        }
        text.len() - last.len()
    };

    // Middle parts must appear in order
    for part in &parts[1..parts.len() - 1] {
        if part.is_empty() {
            continue;
        }
        if let Some(found) = text[pos..end].find(part) {
            pos = pos + found + part.len();
        } else {
            return false;
        }
    }

    true
}
