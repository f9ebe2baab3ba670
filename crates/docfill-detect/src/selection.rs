//! Selection feature detection and opportunity scoring.

use std::sync::LazyLock;

use docfill_model::{ContentSelectionAnalysis, SelectionDescriptor};
use regex::Regex;

use crate::signals::{LIST_ITEM_REGEX, MARKUP_TAG_REGEX, STYLE_ATTRIBUTE_REGEX};

/// Text longer than this (in characters) gains style opportunity.
const LONG_TEXT_THRESHOLD: usize = 50;
const LONG_TEXT_STYLE_BONUS: f64 = 0.2;
const COMPLEX_FORMATTING_STYLE_BONUS: f64 = 0.4;
const LIST_STYLE_BONUS: f64 = 0.3;
/// Image potential contributed by each distinct image keyword.
const IMAGE_KEYWORD_POTENTIAL: f64 = 0.3;

const IMAGE_KEYWORDS: &[&str] = &[
    "image", "img", "photo", "picture", "logo", "icon", "graphic", "figure",
];

static BOLD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*[^*\n]+\*\*|__[^_\n]+__|<(?:b|strong)\b[^>]*>")
        .expect("Invalid bold regex")
});

static ITALIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^*\w])\*[^*\s][^*\n]*\*|(?:^|[^_\w])_[^_\s][^_\n]*_|<(?:i|em)\b[^>]*>")
        .expect("Invalid italic regex")
});

static UNDERLINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\+\+[^+\n]+\+\+|<u\b[^>]*>").expect("Invalid underline regex")
});

static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*#{1,6}[ \t]+\S|<h[1-6]\b[^>]*>").expect("Invalid heading regex")
});

static HTML_LIST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:ul|ol|li)\b[^>]*>").expect("Invalid HTML list regex")
});

/// HTML table elements or markdown table rows (`| a | b |`).
static TABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)<(?:table|tr|td|th)\b[^>]*>|^[ \t]*\|.*\|[ \t]*$").expect("Invalid table regex")
});

/// Bracketed image placeholders: `[image]`, `[img]`, `{photo}`.
static IMAGE_PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\[{][ \t]*(?:image|img|photo|picture|logo)[ \t]*[\]}]")
        .expect("Invalid image placeholder regex")
});

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("Invalid word regex"));

/// Extracts style descriptors in a fixed order without duplicates.
pub fn extract_style_descriptors(text: &str) -> Vec<String> {
    let checks: [(&str, &LazyLock<Regex>); 5] = [
        ("bold", &BOLD_REGEX),
        ("italic", &ITALIC_REGEX),
        ("underline", &UNDERLINE_REGEX),
        ("heading", &HEADING_REGEX),
        ("inline-style", &STYLE_ATTRIBUTE_REGEX),
    ];

    checks
        .iter()
        .filter(|(_, regex)| regex.is_match(text))
        .map(|(name, _)| (*name).to_string())
        .collect()
}

/// Number of distinct image-related keywords appearing as words in `text`.
fn distinct_image_keywords(text: &str) -> usize {
    let mut found: Vec<&str> = Vec::new();
    for word in WORD_REGEX.find_iter(text) {
        let lower = word.as_str().to_lowercase();
        let stem = lower.strip_suffix('s').unwrap_or(&lower);
        if let Some(keyword) = IMAGE_KEYWORDS
            .iter()
            .find(|keyword| **keyword == lower || **keyword == stem)
            && !found.contains(keyword)
        {
            found.push(*keyword);
        }
    }
    found.len()
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Builds the feature and opportunity analysis of a selection.
///
/// Never fails; empty text yields minimal scores.
pub fn analyze_selection(selection: &SelectionDescriptor) -> ContentSelectionAnalysis {
    let text = selection.text.as_str();

    let has_tags = MARKUP_TAG_REGEX.is_match(text);
    let has_inline_style = has_tags || STYLE_ATTRIBUTE_REGEX.is_match(text);
    let contains_lists = LIST_ITEM_REGEX.is_match(text) || HTML_LIST_REGEX.is_match(text);
    let contains_tables = TABLE_REGEX.is_match(text);
    let is_image_placeholder = IMAGE_PLACEHOLDER_REGEX.is_match(text);
    let has_complex_formatting = has_inline_style || contains_tables || contains_lists;

    let mut style_opportunity = 0.0;
    if text.chars().count() > LONG_TEXT_THRESHOLD {
        style_opportunity += LONG_TEXT_STYLE_BONUS;
    }
    if has_complex_formatting {
        style_opportunity += COMPLEX_FORMATTING_STYLE_BONUS;
    }
    if contains_lists {
        style_opportunity += LIST_STYLE_BONUS;
    }

    let markup_benefit = if has_tags {
        0.9
    } else if contains_lists {
        0.6
    } else if contains_tables {
        0.8
    } else {
        0.1
    };

    let image_potential = if is_image_placeholder {
        1.0
    } else {
        distinct_image_keywords(text) as f64 * IMAGE_KEYWORD_POTENTIAL
    };

    let style_opportunity = clamp_unit(style_opportunity);
    let markup_benefit = clamp_unit(markup_benefit);
    let image_potential = clamp_unit(image_potential);

    tracing::debug!(
        block = %selection.block_id,
        chars = text.chars().count(),
        complex = has_complex_formatting,
        style_opportunity,
        markup_benefit,
        image_potential,
        "Analyzed selection"
    );

    ContentSelectionAnalysis {
        start: selection.start,
        end: selection.end,
        text: selection.text.clone(),
        block_id: selection.block_id.clone(),
        style_descriptors: extract_style_descriptors(text),
        has_complex_formatting,
        contains_lists,
        contains_tables,
        is_image_placeholder,
        style_opportunity,
        markup_benefit,
        image_potential,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> ContentSelectionAnalysis {
        analyze_selection(&SelectionDescriptor::new(text))
    }

    #[test]
    fn plain_short_text_has_low_scores() {
        let analysis = analyze("Dear customer");

        assert!(analysis.style_descriptors.is_empty());
        assert!(!analysis.has_complex_formatting);
        assert_eq!(analysis.style_opportunity, 0.0);
        assert_eq!(analysis.markup_benefit, 0.1);
        assert_eq!(analysis.image_potential, 0.0);
    }

    #[test]
    fn style_descriptors_are_ordered_and_unique() {
        let analysis = analyze("**Total** and <strong>due</strong> are *final*");
        assert_eq!(analysis.style_descriptors, vec!["bold", "italic"]);
    }

    #[test]
    fn lists_raise_style_and_markup() {
        let analysis = analyze("- apples\n- pears");

        assert!(analysis.contains_lists);
        assert!(analysis.has_complex_formatting);
        assert!((analysis.style_opportunity - 0.7).abs() < 1e-9);
        assert_eq!(analysis.markup_benefit, 0.6);
    }

    #[test]
    fn tags_take_precedence_for_markup_benefit() {
        let analysis = analyze("<ul><li>one</li></ul>");

        assert!(analysis.contains_lists);
        assert_eq!(analysis.markup_benefit, 0.9);
    }

    #[test]
    fn tables_are_complex_formatting() {
        let analysis = analyze("| Item | Qty |\n| --- | --- |\n| Pen | 2 |");

        assert!(analysis.contains_tables);
        assert!(analysis.has_complex_formatting);
        assert_eq!(analysis.markup_benefit, 0.8);
    }

    #[test]
    fn long_complex_list_is_capped() {
        let text = "<p>Shipping list for this week's orders:</p>\n- first item\n- second item";
        let analysis = analyze(text);

        assert!(analysis.style_opportunity <= 1.0);
        assert!((analysis.style_opportunity - 0.9).abs() < 1e-9);
    }

    #[test]
    fn image_placeholders() {
        assert_eq!(analyze("[image]").image_potential, 1.0);
        assert_eq!(analyze("{Photo}").image_potential, 1.0);
        assert!(analyze("[ img ]").is_image_placeholder);
        assert!(!analyze("[name]").is_image_placeholder);
    }

    #[test]
    fn image_keywords_accumulate_per_distinct_word() {
        let analysis = analyze("company logo and logos with a photo");
        assert!((analysis.image_potential - 0.6).abs() < 1e-9);

        let analysis = analyze("image, photo, logo, icon");
        assert_eq!(analysis.image_potential, 1.0);
    }

    #[test]
    fn empty_text_does_not_fail() {
        let analysis = analyze("");
        assert_eq!(analysis.text_length(), 0);
        assert_eq!(analysis.markup_benefit, 0.1);
    }
}
