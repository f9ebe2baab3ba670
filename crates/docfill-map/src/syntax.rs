//! Placeholder syntax generation.
//!
//! Placeholder shapes per strategy:
//!
//! | Strategy | Syntax |
//! |---|---|
//! | PlainText, TabularData | `{key}` |
//! | RichHTML | `{~~key}` |
//! | Image | `{%key}` inline, `{%%key}` block |
//! | StyledText | `{key:style="decl;decl"}` |
//!
//! Generation is a pure function of its inputs.

use docfill_model::{
    Alignment, ColumnContentAnalysis, ComplexityTier, ContentSelectionAnalysis, Strategy,
    StyleConfig,
};

/// Declarations used for styled text when no style is configured.
pub const DEFAULT_STYLE_DECLARATIONS: &str = "font-weight:bold;color:#2563eb";

const BOLD_DECLARATION: &str = "font-weight:bold";
const ADVANCED_BACKGROUND_DECLARATION: &str = "background-color:#f8fafc";
const ADVANCED_PADDING_DECLARATION: &str = "padding:2px 4px";

/// CSS declarations for a style configuration, in a fixed order.
pub fn style_declarations(style: &StyleConfig) -> Vec<String> {
    let mut declarations = Vec::new();
    if let Some(color) = non_blank(style.background_color.as_deref()) {
        declarations.push(format!("background-color:{color}"));
    }
    if let Some(color) = non_blank(style.color.as_deref()) {
        declarations.push(format!("color:{color}"));
    }
    if let Some(size) = style.font_size {
        declarations.push(format!("font-size:{size}pt"));
    }
    if let Some(family) = non_blank(style.font_family.as_deref()) {
        declarations.push(format!("font-family:{family}"));
    }
    if style.bold {
        declarations.push(BOLD_DECLARATION.to_string());
    }
    if style.italic {
        declarations.push("font-style:italic".to_string());
    }
    if style.underline {
        declarations.push("text-decoration:underline".to_string());
    }
    if let Some(alignment) = style.text_align {
        declarations.push(format!("text-align:{}", alignment.as_css()));
    }
    declarations
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Configured declarations, or the defaults when nothing is configured.
fn base_declarations(style: Option<&StyleConfig>) -> Vec<String> {
    let declarations = style.map(style_declarations).unwrap_or_default();
    if declarations.is_empty() {
        DEFAULT_STYLE_DECLARATIONS
            .split(';')
            .map(str::to_string)
            .collect()
    } else {
        declarations
    }
}

fn has_property(declarations: &[String], property: &str) -> bool {
    declarations
        .iter()
        .any(|declaration| declaration.split(':').next() == Some(property))
}

fn styled(key: &str, declarations: &[String]) -> String {
    format!("{{{key}:style=\"{}\"}}", declarations.join(";"))
}

fn image(key: &str, block: bool) -> String {
    if block {
        format!("{{%%{key}}}")
    } else {
        format!("{{%{key}}}")
    }
}

fn requests_block(alignment: Option<Alignment>) -> bool {
    alignment.is_some_and(|alignment| !alignment.is_inline())
}

/// Renders the canonical placeholder for a column and strategy.
pub fn generate_syntax(
    key: &str,
    strategy: Strategy,
    style: Option<&StyleConfig>,
    alignment: Option<Alignment>,
) -> String {
    match strategy {
        Strategy::PlainText | Strategy::TabularData => format!("{{{key}}}"),
        // Block form contains multi-element markup safely.
        Strategy::RichHtml => format!("{{~~{key}}}"),
        Strategy::Image => image(key, requests_block(alignment)),
        Strategy::StyledText => styled(key, &base_declarations(style)),
    }
}

/// Renders the placeholder with context-specific refinements applied.
///
/// - RichHTML stays in block form.
/// - Image switches to block form when the selection has complex formatting.
/// - StyledText gains `font-weight:bold` next to complex formatting, and a
///   background plus padding for advanced columns.
///
/// The result depends only on the arguments, so repeated calls agree.
pub fn optimize_syntax(
    key: &str,
    strategy: Strategy,
    style: Option<&StyleConfig>,
    alignment: Option<Alignment>,
    column: &ColumnContentAnalysis,
    selection: Option<&ContentSelectionAnalysis>,
) -> String {
    let complex_selection = selection.is_some_and(|selection| selection.has_complex_formatting);
    match strategy {
        Strategy::PlainText | Strategy::TabularData | Strategy::RichHtml => {
            generate_syntax(key, strategy, style, alignment)
        }
        Strategy::Image => image(key, complex_selection || requests_block(alignment)),
        Strategy::StyledText => {
            let mut declarations = base_declarations(style);
            if complex_selection && !declarations.iter().any(|d| d == BOLD_DECLARATION) {
                declarations.push(BOLD_DECLARATION.to_string());
            }
            if column.complexity_tier == ComplexityTier::Advanced {
                if !has_property(&declarations, "background-color") {
                    declarations.push(ADVANCED_BACKGROUND_DECLARATION.to_string());
                }
                if !has_property(&declarations, "padding") {
                    declarations.push(ADVANCED_PADDING_DECLARATION.to_string());
                }
            }
            styled(key, &declarations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_tabular_use_bare_placeholder() {
        assert_eq!(generate_syntax("Name", Strategy::PlainText, None, None), "{Name}");
        assert_eq!(generate_syntax("Qty", Strategy::TabularData, None, None), "{Qty}");
    }

    #[test]
    fn rich_html_is_always_block() {
        assert_eq!(generate_syntax("Bio", Strategy::RichHtml, None, None), "{~~Bio}");
    }

    #[test]
    fn image_form_follows_alignment() {
        assert_eq!(generate_syntax("Logo", Strategy::Image, None, None), "{%Logo}");
        assert_eq!(
            generate_syntax("Logo", Strategy::Image, None, Some(Alignment::Left)),
            "{%Logo}"
        );
        assert_eq!(
            generate_syntax("Logo", Strategy::Image, None, Some(Alignment::Center)),
            "{%%Logo}"
        );
    }

    #[test]
    fn styled_text_defaults() {
        assert_eq!(
            generate_syntax("Total", Strategy::StyledText, None, None),
            "{Total:style=\"font-weight:bold;color:#2563eb\"}"
        );
        assert_eq!(
            generate_syntax("Total", Strategy::StyledText, Some(&StyleConfig::new()), None),
            "{Total:style=\"font-weight:bold;color:#2563eb\"}"
        );
    }

    #[test]
    fn style_declarations_follow_fixed_order() {
        let style = StyleConfig::new()
            .with_text_align(Alignment::Center)
            .underline()
            .italic()
            .bold()
            .with_font_family("Inter")
            .with_font_size(11.5)
            .with_color("#111")
            .with_background("#ff0");

        assert_eq!(
            style_declarations(&style).join(";"),
            "background-color:#ff0;color:#111;font-size:11.5pt;font-family:Inter;\
             font-weight:bold;font-style:italic;text-decoration:underline;text-align:center"
        );
    }

    #[test]
    fn blank_style_values_are_skipped() {
        let style = StyleConfig::new().with_color("  ").with_font_size(12.0);
        assert_eq!(style_declarations(&style), vec!["font-size:12pt"]);
    }
}
