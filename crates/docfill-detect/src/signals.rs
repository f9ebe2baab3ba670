//! Pattern-based content signal detection.
//!
//! Each [`ContentSignal`] is detected by an independent pure function over a
//! single text value. Detection is case-insensitive and never fails.

use std::sync::LazyLock;

use docfill_model::ContentSignal;
use regex::Regex;

/// Image file extensions (`photo.jpg`, `logo.svg?v=2`).
static IMAGE_EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(?:jpe?g|png|gif|bmp|webp|svg|tiff?|ico|heic|avif)\b")
        .expect("Invalid image extension regex")
});

/// Inline base64 image payloads.
static BASE64_IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)data:image/[a-z0-9.+-]+;base64,").expect("Invalid base64 image regex")
});

/// URLs pointing into image/media locations.
static IMAGE_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bhttps?://\S*/(?:images?|img|photos?|pictures?|media|uploads|avatars?)/\S*")
        .expect("Invalid image URL regex")
});

static IMAGE_KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:images?|photos?|logos?)\b").expect("Invalid image keyword regex")
});

/// HTML-like opening, closing or self-closing tags.
pub(crate) static MARKUP_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?[a-zA-Z][a-zA-Z0-9]*(?:\s[^<>]*)?/?>").expect("Invalid markup tag regex")
});

static HTML_ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:[a-zA-Z][a-zA-Z0-9]*|#[0-9]+|#[xX][0-9a-fA-F]+);")
        .expect("Invalid HTML entity regex")
});

pub(crate) static STYLE_ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bstyle\s*=\s*["']"#).expect("Invalid style attribute regex")
});

/// Markdown-style emphasis: `**bold**`, `__bold__`, `*italic*`, `_italic_`, `++underline++`.
static EMPHASIS_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\*\*[^*\n]+\*\*|__[^_\n]+__|\+\+[^+\n]+\+\+|(?:^|[^*\w])\*[^*\s][^*\n]*\*|(?:^|[^_\w])_[^_\s][^_\n]*_",
    )
    .expect("Invalid emphasis marker regex")
});

static CSS_PROPERTY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:font-weight|font-style|font-size|font-family|text-decoration|text-align|background-color|color)\s*:",
    )
    .expect("Invalid CSS property regex")
});

static PARAGRAPH_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r?\n[ \t]*\r?\n").expect("Invalid paragraph break regex")
});

/// Bulleted (`-`, `*`, `•`) or numbered (`1.`, `2)`) list items.
pub(crate) static LIST_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:[-*•]|\d+[.)])[ \t]+\S").expect("Invalid list item regex")
});

/// True when `text` carries `signal`.
pub fn detects(signal: ContentSignal, text: &str) -> bool {
    match signal {
        ContentSignal::Image => has_image_reference(text),
        ContentSignal::Markup => has_markup(text),
        ContentSignal::RichFormatting => has_rich_formatting(text),
    }
}

/// Image file extension, base64 image, image URL or image keyword.
pub fn has_image_reference(text: &str) -> bool {
    IMAGE_EXTENSION_REGEX.is_match(text)
        || BASE64_IMAGE_REGEX.is_match(text)
        || IMAGE_URL_REGEX.is_match(text)
        || IMAGE_KEYWORD_REGEX.is_match(text)
}

/// HTML tags, HTML entities or inline style attributes.
pub fn has_markup(text: &str) -> bool {
    MARKUP_TAG_REGEX.is_match(text)
        || HTML_ENTITY_REGEX.is_match(text)
        || STYLE_ATTRIBUTE_REGEX.is_match(text)
}

/// Emphasis markers, CSS keywords, paragraph breaks or list items.
pub fn has_rich_formatting(text: &str) -> bool {
    EMPHASIS_MARKER_REGEX.is_match(text)
        || CSS_PROPERTY_REGEX.is_match(text)
        || PARAGRAPH_BREAK_REGEX.is_match(text)
        || LIST_ITEM_REGEX.is_match(text)
}
