//! slug
//!
//! Kebab-case slug conversion.
//!
//! # Features
//!
//! - Split text on whitespace and join the words with hyphens
//! - Strip every non-alphanumeric character from each word
//! - Lowercase the result

/// Convert arbitrary text into a kebab-case slug.
///
/// Splits the input on runs of whitespace, keeps only alphanumeric
/// characters within each word (Unicode-aware, so accented letters and
/// non-Latin digits survive), joins the words with single hyphens, and
/// lowercases the whole result.
///
/// A word made entirely of punctuation is reduced to the empty string but
/// still occupies its hyphen slot, so `"!!! report"` becomes `"-report"`.
/// Snake_case and camelCase inputs are not split into words.
///
/// # Example
///
/// ```
/// use casefile::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  multiple   spaces "), "multiple-spaces");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect())
        .collect::<Vec<String>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("My Report"), "my-report");
        assert_eq!(slugify("Fix bug #123"), "fix-bug-123");
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("  multiple   spaces "), "multiple-spaces");
        assert_eq!(slugify("tab\tand\nnewline"), "tab-and-newline");
    }

    #[test]
    fn slugify_handles_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn slugify_all_punctuation_word_is_empty() {
        // Single word of punctuation: one token, no hyphen slot
        assert_eq!(slugify("!!!"), "");
        // Stripped words joined across one hyphen each
        assert_eq!(slugify("a!! b@@"), "a-b");
        // An empty word still claims its slot
        assert_eq!(slugify("!!! report"), "-report");
        assert_eq!(slugify("report !!!"), "report-");
    }

    #[test]
    fn slugify_retains_unicode_alphanumerics() {
        assert_eq!(slugify("Café Menu"), "café-menu");
        assert_eq!(slugify("Über Plan"), "über-plan");
    }

    #[test]
    fn slugify_does_not_split_snake_or_camel_case() {
        // Underscores are stripped, not treated as word boundaries
        assert_eq!(slugify("snake_case input"), "snakecase-input");
        assert_eq!(slugify("camelCase input"), "camelcase-input");
    }

    #[test]
    fn slugify_stable_on_single_word_slugs() {
        let once = slugify("Report2024");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn slugify_second_pass_strips_hyphens() {
        // Hyphens are not whitespace, so a second pass sees one word and
        // filters the hyphens out as non-alphanumeric.
        assert_eq!(slugify("hello-world"), "helloworld");
    }
}
