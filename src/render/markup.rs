use scraper::Html;

/// Reduces an HTML fragment to its text content.
///
/// Text nodes are concatenated in document order; elements and attributes
/// are dropped. A fragment the parser reports errors for is returned
/// unchanged.
pub fn strip_markup(fragment: &str) -> String {
    let parsed = Html::parse_fragment(fragment);
    if !parsed.errors.is_empty() {
        return fragment.to_string();
    }

    parsed.root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_inline_tags() {
        assert_eq!(strip_markup("<b>Hello</b> <i>World</i>"), "Hello World");
    }

    #[test]
    fn test_strip_nested_tags_and_attributes() {
        assert_eq!(
            strip_markup(r#"<span class="genus"><acronym title="neuter">nt</acronym></span> Haus"#),
            "nt Haus"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(strip_markup("house"), "house");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(strip_markup("rock &amp; roll"), "rock & roll");
    }

    #[test]
    fn test_unterminated_tag_returns_input() {
        assert_eq!(strip_markup("<b>Hello</b"), "<b>Hello</b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_markup(""), "");
    }
}
