//! Match segmentation for option text.

use regex::RegexBuilder;

/// A run of an option's text, marked when it matches the typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

/// Split `value` into matched and unmatched runs for display.
///
/// Each whitespace-separated word of `query` is searched for literally and
/// case-insensitively; overlapping or touching matches merge into one run.
/// Segments borrow from `value` in order, so joining their text gives back
/// `value` exactly, original casing included.
pub fn highlight_segments<'a>(value: &'a str, query: &str) -> Vec<Segment<'a>> {
    if value.is_empty() {
        return Vec::new();
    }

    let mut chunks: Vec<(usize, usize)> = Vec::new();
    for word in query.split_whitespace() {
        let re = match RegexBuilder::new(&regex::escape(word))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re,
            Err(err) => {
                log::debug!("[combobox] skipping highlight word {:?}: {}", word, err);
                continue;
            }
        };
        chunks.extend(
            re.find_iter(value)
                .map(|m| (m.start(), m.end()))
                .filter(|(start, end)| start < end),
        );
    }
    chunks.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(chunks.len());
    for (start, end) in chunks {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut segments = Vec::with_capacity(merged.len() * 2 + 1);
    let mut cursor = 0;
    for (start, end) in merged {
        if start > cursor {
            segments.push(Segment {
                text: &value[cursor..start],
                is_match: false,
            });
        }
        segments.push(Segment {
            text: &value[start..end],
            is_match: true,
        });
        cursor = end;
    }
    if cursor < value.len() {
        segments.push(Segment {
            text: &value[cursor..],
            is_match: false,
        });
    }
    segments
}
