use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").unwrap());

/// Free text with its hashtags pulled out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged {
    pub text: String,
    pub tags: Vec<String>,
}

/// Splits `#hashtags` out of `raw` and merges them with an explicit `--tag`.
///
/// The explicit tag comes first, then hashtags left to right. Tags are lowercased
/// and deduplicated keeping the first occurrence. The remaining text is trimmed at
/// both ends; inner whitespace is left alone.
pub fn extract_tags(raw: &str, explicit: Option<&str>) -> Tagged {
    let explicit = explicit
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);
    let found = HASHTAG
        .captures_iter(raw)
        .map(|caps| caps[1].to_lowercase());

    let mut seen = HashSet::new();
    let tags = explicit
        .into_iter()
        .chain(found)
        .filter(|tag| seen.insert(tag.clone()))
        .collect();

    let text = HASHTAG.replace_all(raw, "").trim().to_string();
    Tagged { text, tags }
}

/// `#a #b`, the way tags are shown next to an entry.
pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_and_dedupes_case_insensitively() {
        let t = extract_tags("deep work #project #Project", None);
        assert_eq!(t.text, "deep work");
        assert_eq!(t.tags, vec!["project"]);
    }

    #[test]
    fn empty_explicit_tag_is_ignored() {
        let t = extract_tags("deep work #project", Some(""));
        assert_eq!(t.tags, vec!["project"]);
    }

    #[test]
    fn explicit_tag_is_lowercased() {
        let t = extract_tags("sync", Some("Acme"));
        assert_eq!(t.text, "sync");
        assert_eq!(t.tags, vec!["acme"]);
    }

    #[test]
    fn explicit_tag_goes_first_and_wins_duplicates() {
        let t = extract_tags("#ops standup #acme", Some("ACME"));
        assert_eq!(t.text, "standup");
        assert_eq!(t.tags, vec!["acme", "ops"]);
    }

    #[test]
    fn inner_whitespace_is_preserved() {
        let t = extract_tags("  review #x  the   draft ", None);
        assert_eq!(t.text, "review   the   draft");
        assert_eq!(t.tags, vec!["x"]);
    }

    #[test]
    fn text_without_tags_is_untouched() {
        let t = extract_tags("plain text", None);
        assert_eq!(t.text, "plain text");
        assert!(t.tags.is_empty());
    }

    #[test]
    fn lone_hash_is_not_a_tag() {
        let t = extract_tags("issue # 42", None);
        assert_eq!(t.text, "issue # 42");
        assert!(t.tags.is_empty());
    }

    #[test]
    fn formats_with_hash_prefix() {
        assert_eq!(format_tags(&["a".into(), "b".into()]), "#a #b");
        assert_eq!(format_tags(&[]), "");
    }
}
