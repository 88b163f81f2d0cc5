//! Case-insensitive substring filtering and highlighting.
//!
//! Inclusion is decided on the raw line, before any highlighting or
//! wrapping. Highlighting marks literal, non-overlapping occurrences from
//! left to right and keeps the line's own casing.

use std::ops::Range;

/// A run of text that is either highlighted or plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The text of the run. Never empty.
    pub text: String,
    /// Whether the run is an occurrence of the filter text.
    pub highlighted: bool,
}

impl Fragment {
    /// Plain (not highlighted) run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    /// Highlighted run.
    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// Concatenate fragment text, dropping highlight markup.
pub fn strip_markup(fragments: &[Fragment]) -> String {
    fragments.iter().map(|f| f.text.as_str()).collect()
}

/// Compiled filter text.
///
/// Case is folded char by char (`char::to_lowercase`) on both the filter
/// and the line. Inclusion and highlighting share the same folded search,
/// so a line is included exactly when it has at least one highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matcher {
    lower: String,
}

/// One char of the original line and where its lowercase form starts in
/// the folded text.
struct FoldedChar {
    folded_start: usize,
    start: usize,
    end: usize,
}

impl Matcher {
    /// Compile a filter. The empty string matches everything.
    pub fn new(filter: &str) -> Self {
        Self {
            lower: fold(filter),
        }
    }

    /// Whether the filter is empty (include all, highlight nothing).
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Whether `line` is part of the filtered view.
    pub fn matches(&self, line: &str) -> bool {
        self.is_empty() || !self.spans(line).is_empty()
    }

    /// Split `line` into plain and highlighted fragments.
    ///
    /// Returns no fragments for an empty line.
    pub fn highlight(&self, line: &str) -> Vec<Fragment> {
        if line.is_empty() {
            return Vec::new();
        }

        let mut fragments = Vec::new();
        let mut plain_start = 0;
        for span in self.spans(line) {
            if span.start > plain_start {
                fragments.push(Fragment::plain(&line[plain_start..span.start]));
            }
            fragments.push(Fragment::highlighted(&line[span.clone()]));
            plain_start = span.end;
        }

        if plain_start < line.len() {
            fragments.push(Fragment::plain(&line[plain_start..]));
        }
        fragments
    }

    /// Byte ranges of `line` covered by occurrences of the filter.
    ///
    /// Occurrences are found left to right without overlap in the folded
    /// text, then widened to whole chars of the original line. Ranges are
    /// ascending and disjoint.
    fn spans(&self, line: &str) -> Vec<Range<usize>> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut folded = String::with_capacity(line.len());
        let mut chars = Vec::new();
        for (start, ch) in line.char_indices() {
            chars.push(FoldedChar {
                folded_start: folded.len(),
                start,
                end: start + ch.len_utf8(),
            });
            folded.extend(ch.to_lowercase());
        }

        // Index of the original char whose folded form covers `offset`.
        let owner = |offset: usize| {
            chars
                .partition_point(|c| c.folded_start <= offset)
                .saturating_sub(1)
        };

        let mut spans: Vec<Range<usize>> = Vec::new();
        for (hit, text) in folded.match_indices(self.lower.as_str()) {
            let start = chars[owner(hit)].start;
            let end = chars[owner(hit + text.len() - 1)].end;
            match spans.last_mut() {
                // Two hits inside one original char collapse into one span.
                Some(last) if start < last.end => last.end = last.end.max(end),
                _ => spans.push(start..end),
            }
        }
        spans
    }
}

fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        let m = Matcher::new("");
        assert!(m.matches(""));
        assert!(m.matches("anything"));
    }

    #[test]
    fn matching_ignores_case() {
        let m = Matcher::new("error");
        assert!(m.matches("ERROR: disk full"));
        assert!(m.matches("an Error occurred"));
        assert!(!m.matches("info: ok"));
    }

    #[test]
    fn empty_filter_does_not_highlight() {
        let m = Matcher::new("");
        assert_eq!(m.highlight("plain line"), vec![Fragment::plain("plain line")]);
    }

    #[test]
    fn highlight_preserves_line_casing() {
        let m = Matcher::new("error");
        assert_eq!(
            m.highlight("ERROR: disk full"),
            vec![Fragment::highlighted("ERROR"), Fragment::plain(": disk full")]
        );
    }

    #[test]
    fn highlight_marks_every_occurrence() {
        let m = Matcher::new("ab");
        assert_eq!(
            m.highlight("xAbyabz"),
            vec![
                Fragment::plain("x"),
                Fragment::highlighted("Ab"),
                Fragment::plain("y"),
                Fragment::highlighted("ab"),
                Fragment::plain("z"),
            ]
        );
    }

    #[test]
    fn highlight_is_non_overlapping_left_to_right() {
        let m = Matcher::new("aa");
        assert_eq!(
            m.highlight("aaa"),
            vec![Fragment::highlighted("aa"), Fragment::plain("a")]
        );
    }

    #[test]
    fn highlight_handles_multibyte_text() {
        let m = Matcher::new("fü");
        assert_eq!(
            m.highlight("Überfüll FÜ"),
            vec![
                Fragment::plain("Über"),
                Fragment::highlighted("fü"),
                Fragment::plain("ll "),
                Fragment::highlighted("FÜ"),
            ]
        );
    }

    #[test]
    fn highlight_of_empty_line_is_empty() {
        assert!(Matcher::new("x").highlight("").is_empty());
    }

    #[test]
    fn strip_markup_restores_original() {
        let line = "W/Binder: error in Error path";
        let fragments = Matcher::new("error").highlight(line);
        assert_eq!(strip_markup(&fragments), line);
    }

    #[test]
    fn included_line_always_has_a_highlight() {
        // 'İ' lowercases to "i\u{307}", two chars.
        let m = Matcher::new("i");
        assert!(m.matches("İstanbul"));
        assert_eq!(
            m.highlight("İstanbul"),
            vec![Fragment::highlighted("İ"), Fragment::plain("stanbul")]
        );
    }

    #[test]
    fn expanding_lowercase_in_filter_matches_same_expansion() {
        let m = Matcher::new("İS");
        assert!(m.matches("xİsy"));
        assert_eq!(
            m.highlight("xİsy"),
            vec![
                Fragment::plain("x"),
                Fragment::highlighted("İs"),
                Fragment::plain("y"),
            ]
        );
        assert!(!m.matches("is"));
    }

    #[test]
    fn line_without_occurrence_is_excluded_and_plain() {
        let m = Matcher::new("fatal");
        assert!(!m.matches("I dalvik: gc"));
        assert_eq!(m.highlight("I dalvik: gc"), vec![Fragment::plain("I dalvik: gc")]);
    }
}
