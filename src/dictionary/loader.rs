//! Line parsing for dictionary files.
//!
//! One entry per line, fields separated by a configurable delimiter. Lines
//! that fail to parse are skipped by the callers, never reported.

/// Parse a `(term, count)` entry out of `line`.
///
/// Three separator modes, matching common frequency-dictionary layouts:
/// an empty or `" "` separator splits on any whitespace run; a custom
/// separator with the default `0, 1` field order splits at the *last*
/// occurrence, so terms may contain the separator; any other field order
/// splits at every occurrence.
pub(crate) fn parse_term_count<'a>(
    line: &'a str,
    term_index: usize,
    count_index: usize,
    separator: &str,
) -> Option<(&'a str, u32)> {
    if separator.is_empty() || separator == " " {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let term = *fields.get(term_index)?;
        let count = fields.get(count_index)?.parse().ok()?;
        Some((term, count))
    } else if term_index == 0 && count_index == 1 {
        let split_at = line.rfind(separator)?;
        let term = &line[..split_at];
        let count = line[split_at + separator.len()..].parse().ok()?;
        Some((term, count))
    } else {
        let fields: Vec<&str> = line.split(separator).collect();
        let term = *fields.get(term_index)?;
        let count = fields.get(count_index)?.parse().ok()?;
        Some((term, count))
    }
}

/// Parse a `key -> replacement` pair for the exact-transform map.
pub(crate) fn parse_transform<'a>(line: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if separator.is_empty() {
        let mut fields = line.split_whitespace();
        Some((fields.next()?, fields.next()?))
    } else {
        let mut fields = line.split(separator);
        let key = fields.next()?;
        let replacement = fields.next()?;
        if key.is_empty() || replacement.is_empty() {
            return None;
        }
        Some((key, replacement))
    }
}

/// Parse a bigram entry: two whitespace-separated words and a count, or
/// `pair<sep>count` with a custom separator.
pub(crate) fn parse_bigram(line: &str, separator: &str) -> Option<(String, u32)> {
    if separator.is_empty() || separator == " " {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return None;
        }
        let count = fields[2].parse().ok()?;
        Some((format!("{} {}", fields[0], fields[1]), count))
    } else {
        let split_at = line.rfind(separator)?;
        let count = line[split_at + separator.len()..].parse().ok()?;
        Some((line[..split_at].to_string(), count))
    }
}
