//! Suggestion filtering and match highlighting

use crate::model::Suggestion;

/// A piece of a rendered suggestion label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: true,
        }
    }
}

/// Keep the suggestions whose label contains `query`, ignoring case.
/// Order is preserved.
pub fn filter_suggestions(query: &str, suggestions: &[Suggestion]) -> Vec<Suggestion> {
    let needle = query.to_lowercase();
    suggestions
        .iter()
        .filter(|s| s.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Split `label` into plain and matched segments, marking every
/// case-insensitive occurrence of `query`.
pub fn highlight(label: &str, query: &str) -> Vec<Segment> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return vec![Segment::plain(label)];
    }

    let chars: Vec<char> = label.chars().collect();
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        let end = i + needle.len();
        let hit = end <= chars.len()
            && chars[i..end]
                .iter()
                .zip(&needle)
                .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()));

        if hit {
            if !plain.is_empty() {
                segments.push(Segment::plain(std::mem::take(&mut plain)));
            }
            segments.push(Segment::matched(chars[i..end].iter().collect::<String>()));
            i = end;
        } else {
            plain.push(chars[i]);
            i += 1;
        }
    }

    if !plain.is_empty() {
        segments.push(Segment::plain(plain));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> Vec<Suggestion> {
        ["Thailand", "India", "Indonesia", "Finland"]
            .into_iter()
            .map(Suggestion::from)
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let found = filter_suggestions("IND", &countries());
        let labels: Vec<&str> = found.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["India", "Indonesia"]);

        let found = filter_suggestions("land", &countries());
        let labels: Vec<&str> = found.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Thailand", "Finland"]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(filter_suggestions("", &countries()).len(), 4);
    }

    #[test]
    fn test_highlight_marks_every_occurrence() {
        let segments = highlight("Banana", "an");
        assert_eq!(
            segments,
            vec![
                Segment::plain("B"),
                Segment::matched("an"),
                Segment::matched("an"),
                Segment::plain("a"),
            ]
        );
    }

    #[test]
    fn test_highlight_keeps_original_case() {
        let segments = highlight("Thailand", "THAI");
        assert_eq!(segments[0], Segment::matched("Thai"));
        assert_eq!(segments[1], Segment::plain("land"));
    }

    #[test]
    fn test_highlight_without_query() {
        assert_eq!(highlight("Peru", ""), vec![Segment::plain("Peru")]);
    }
}
