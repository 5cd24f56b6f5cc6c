//! Properties text codec
//!
//! Line-oriented `key=value` format with `#` comment lines. Decoding keeps
//! only the entries; comments and blank-line layout are not reconstructed by
//! [`encode`], so only `decode(encode(decode(t))) == decode(t)` holds.

use crate::types::ConfigEntry;

const COMMENT_PREFIX: char = '#';
const SEPARATOR: char = '=';

/// Parse properties text into ordered entries.
///
/// Each line is trimmed; empty lines and `#` comments are skipped. The split
/// happens at the first `=`, which must have a non-empty key before it.
/// Duplicate keys are kept in file order.
pub fn decode(text: &str) -> Vec<ConfigEntry> {
    text.split('\n').filter_map(decode_line).collect()
}

fn decode_line(line: &str) -> Option<ConfigEntry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return None;
    }

    let index = line.find(SEPARATOR)?;
    if index == 0 {
        return None;
    }

    Some(ConfigEntry::new(
        line[..index].trim(),
        line[index + SEPARATOR.len_utf8()..].trim(),
    ))
}

/// Serialize entries as `key=value` lines, each terminated by `\n`.
///
/// Entries whose key is blank are dropped; keys and values are trimmed.
pub fn encode(entries: &[ConfigEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let key = entry.key.trim();
        if key.is_empty() {
            continue;
        }
        out.push_str(key);
        out.push(SEPARATOR);
        out.push_str(entry.value.trim());
        out.push('\n');
    }
    out
}
