use docfill_map::{
    MappingBuilder, generate_syntax, optimize_consistency, optimize_syntax, select_strategy,
    strategy_candidates,
};
use docfill_model::{
    Alignment, ColumnContentAnalysis, ColumnDescriptor, ComplexityTier, ConfidenceTier,
    ContentSelectionAnalysis, DecisionTier, DeclaredType, Mapping, MappingOptions,
    SelectionDescriptor, Strategy, StyleConfig,
};
use proptest::prelude::*;
use proptest::strategy::Strategy as _;

fn tier() -> impl proptest::strategy::Strategy<Value = ComplexityTier> {
    prop_oneof![
        Just(ComplexityTier::Simple),
        Just(ComplexityTier::Moderate),
        Just(ComplexityTier::Advanced),
    ]
}

fn column(
    has_images: bool,
    has_markup: bool,
    has_rich_formatting: bool,
    confidence_score: f64,
    complexity_tier: ComplexityTier,
    minutes: f64,
) -> ColumnContentAnalysis {
    ColumnContentAnalysis {
        identifier: "X".to_string(),
        header_label: "Field".to_string(),
        sample_values: Vec::new(),
        declared_type: DeclaredType::String,
        has_images,
        has_markup,
        has_rich_formatting,
        complexity_tier,
        suggested_strategy: Strategy::PlainText,
        confidence_score,
        estimated_time_saved_minutes: minutes,
        estimated_quality_gain: 5.0,
    }
}

fn selection() -> impl proptest::strategy::Strategy<Value = Option<ContentSelectionAnalysis>> {
    proptest::option::of(
        (any::<bool>(), any::<bool>(), 0.0..=1.0f64, 0.0..=1.0f64).prop_map(
            |(complex, tables, style_opportunity, image_potential)| ContentSelectionAnalysis {
                start: 0,
                end: 4,
                text: "text".to_string(),
                block_id: String::new(),
                style_descriptors: Vec::new(),
                has_complex_formatting: complex,
                contains_lists: false,
                contains_tables: tables,
                is_image_placeholder: false,
                style_opportunity,
                markup_benefit: 0.1,
                image_potential,
            },
        ),
    )
}

const SAMPLE_KINDS: [&str; 5] = ["photo.jpg", "<p>hi</p>", "**bold**", "plain words", "42"];

fn batch() -> impl proptest::strategy::Strategy<Value = Vec<Mapping>> {
    proptest::collection::vec(0..SAMPLE_KINDS.len(), 0..12).prop_map(|kinds| {
        let builder = MappingBuilder::new();
        kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| {
                let column = ColumnDescriptor::new(format!("C{i}"), format!("Col{i}"))
                    .with_samples([SAMPLE_KINDS[kind]]);
                builder
                    .create(&column, None, MappingOptions::default())
                    .unwrap()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn images_dominate_every_other_flag(
        markup in any::<bool>(),
        rich in any::<bool>(),
        confidence in 0.0..=1.0f64,
        tier in tier(),
        minutes in 0.0..20.0f64,
        selection in selection(),
    ) {
        let column = column(true, markup, rich, confidence, tier, minutes);
        let result = select_strategy(&column, selection.as_ref());

        prop_assert_eq!(result.primary_strategy, Strategy::Image);
        prop_assert_eq!(result.confidence_tier, ConfidenceTier::High);
        prop_assert_eq!(result.value_score, 10);
    }

    #[test]
    fn confident_markup_requires_html(
        rich in any::<bool>(),
        confidence in 0.81..=1.0f64,
        tier in tier(),
        minutes in 0.0..20.0f64,
        selection in selection(),
    ) {
        let column = column(false, true, rich, confidence, tier, minutes);
        let result = select_strategy(&column, selection.as_ref());

        prop_assert_eq!(result.primary_strategy, Strategy::RichHtml);
        prop_assert_eq!(result.value_score, 10);
    }

    #[test]
    fn selection_always_decides(
        images in any::<bool>(),
        markup in any::<bool>(),
        rich in any::<bool>(),
        confidence in 0.0..=1.0f64,
        tier in tier(),
        minutes in 0.0..20.0f64,
        selection in selection(),
    ) {
        let column = column(images, markup, rich, confidence, tier, minutes);
        let result = select_strategy(&column, selection.as_ref());

        prop_assert!(result.value_score >= result.decision_tier.min_value_score());
        prop_assert_eq!(result.confidence_tier, ConfidenceTier::from_value_score(result.value_score));
        prop_assert_eq!(result.strategy_weight, result.primary_strategy.weight());
    }

    #[test]
    fn candidates_hold_the_choice_once_each(
        images in any::<bool>(),
        markup in any::<bool>(),
        rich in any::<bool>(),
        confidence in 0.0..=1.0f64,
        tier in tier(),
        minutes in 0.0..20.0f64,
        selection in selection(),
    ) {
        let column = column(images, markup, rich, confidence, tier, minutes);
        let result = select_strategy(&column, selection.as_ref());
        let candidates = strategy_candidates(&column, selection.as_ref());
        let strategies: Vec<Strategy> = candidates.iter().map(|c| c.strategy).collect();

        prop_assert_eq!(strategies.first().copied(), Some(result.primary_strategy));
        prop_assert!(strategies.contains(&Strategy::PlainText));
        for (index, strategy) in strategies.iter().enumerate() {
            prop_assert!(!strategies[index + 1..].contains(strategy));
        }
        if images {
            prop_assert!(strategies.contains(&Strategy::Image));
        }
        if rich {
            prop_assert!(strategies.contains(&Strategy::StyledText));
        }
    }

    #[test]
    fn consistency_never_touches_necessary_mappings(mut mappings in batch()) {
        let necessary: Vec<Mapping> = mappings
            .iter()
            .filter(|m| m.selection_result.decision_tier == DecisionTier::FunctionalNecessity)
            .cloned()
            .collect();

        optimize_consistency(&mut mappings);
        let once = mappings.clone();
        optimize_consistency(&mut mappings);

        prop_assert_eq!(&mappings, &once);
        for before in &necessary {
            let after = mappings.iter().find(|m| m.id == before.id);
            prop_assert_eq!(after, Some(before));
        }
    }

    #[test]
    fn optimize_is_idempotent(
        sample in ".{0,40}",
        text in ".{0,80}",
        optimize_twice in any::<bool>(),
    ) {
        let builder = MappingBuilder::new();
        let column = ColumnDescriptor::new("A", "Field").with_samples([sample]);
        let selection = SelectionDescriptor::new(text);
        let mut mapping = builder
            .create(&column, Some(&selection), MappingOptions::default())
            .unwrap();

        builder.optimize(&mut mapping);
        let syntax = mapping.generated_syntax.clone();
        let quality = mapping.quality_score;
        builder.optimize(&mut mapping);
        if optimize_twice {
            builder.optimize(&mut mapping);
        }

        prop_assert_eq!(mapping.generated_syntax, syntax);
        prop_assert_eq!(mapping.quality_score, quality);
        prop_assert!((1.0..=10.0).contains(&mapping.quality_score));
    }
}

#[test]
fn syntax_shapes() {
    insta::assert_snapshot!(generate_syntax("Name", Strategy::PlainText, None, None), @"{Name}");
    insta::assert_snapshot!(generate_syntax("Qty", Strategy::TabularData, None, None), @"{Qty}");
    insta::assert_snapshot!(generate_syntax("Bio", Strategy::RichHtml, None, None), @"{~~Bio}");
    insta::assert_snapshot!(
        generate_syntax("Logo", Strategy::Image, None, Some(Alignment::Right)),
        @"{%%Logo}"
    );
    insta::assert_snapshot!(
        generate_syntax("Total", Strategy::StyledText, None, None),
        @r#"{Total:style="font-weight:bold;color:#2563eb"}"#
    );
}

#[test]
fn optimized_styled_text_for_advanced_columns() {
    let column = column(false, false, true, 0.8, ComplexityTier::Advanced, 17.5);
    let style = StyleConfig::new().with_color("#111");
    let selection = ContentSelectionAnalysis {
        start: 0,
        end: 20,
        text: "<p>a</p>".to_string(),
        block_id: String::new(),
        style_descriptors: Vec::new(),
        has_complex_formatting: true,
        contains_lists: false,
        contains_tables: false,
        is_image_placeholder: false,
        style_opportunity: 0.4,
        markup_benefit: 0.9,
        image_potential: 0.0,
    };

    insta::assert_snapshot!(
        optimize_syntax("Notes", Strategy::StyledText, Some(&style), None, &column, Some(&selection)),
        @r#"{Notes:style="color:#111;font-weight:bold;background-color:#f8fafc;padding:2px 4px"}"#
    );
    insta::assert_snapshot!(
        optimize_syntax("Pic", Strategy::Image, None, None, &column, Some(&selection)),
        @"{%%Pic}"
    );
}
