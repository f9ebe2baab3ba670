//! Terminal rendering of plans and the strategy listing.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use docfill_model::{BatchResult, ConfidenceTier, Mapping, MappingStatus, Strategy};

/// One row per strategy: name, syntax shape, base minutes, quality gain, weight.
pub fn strategy_rows() -> Vec<[String; 5]> {
    Strategy::ALL
        .iter()
        .map(|strategy| {
            [
                strategy.as_str().to_string(),
                strategy.syntax_shape().to_string(),
                format!("{:.1}", strategy.base_minutes()),
                format!("{:.0}", strategy.quality_gain()),
                strategy.weight().to_string(),
            ]
        })
        .collect()
}

pub fn strategies_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Strategy"),
        header_cell("Syntax"),
        header_cell("Base minutes"),
        header_cell("Quality gain"),
        header_cell("Weight"),
    ]);
    apply_table_style(&mut table);
    for row in strategy_rows() {
        table.add_row(row);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    table
}

pub fn plan_table(result: &BatchResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Strategy"),
        header_cell("Confidence"),
        header_cell("Syntax"),
        header_cell("Quality"),
        header_cell("Minutes"),
        header_cell("Status"),
    ]);
    apply_plan_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Center);

    for mapping in &result.mappings {
        table.add_row(vec![
            Cell::new(mapping.order_index),
            column_cell(mapping),
            strategy_cell(mapping.primary_strategy()),
            confidence_cell(mapping.selection_result.confidence_tier),
            Cell::new(&mapping.generated_syntax),
            Cell::new(format!("{:.1}", mapping.quality_score)),
            minutes_cell(mapping.performance_benefit_minutes),
            status_cell(mapping.status),
        ]);
    }

    let summary = &result.summary;
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} mappings", summary.total_mappings)).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(format!("{:.1}", summary.average_quality)).add_attribute(Attribute::Bold),
        minutes_cell(summary.total_estimated_time_saved).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

pub fn print_plan(result: &BatchResult) {
    println!("{}", plan_table(result));

    let counts: Vec<String> = result
        .summary
        .per_strategy_counts
        .iter()
        .map(|(strategy, count)| format!("{strategy}: {count}"))
        .collect();
    if !counts.is_empty() {
        println!("Strategies: {}", counts.join(", "));
    }
    if result.summary.mappings_with_issues > 0 {
        println!(
            "Mappings with issues: {}",
            result.summary.mappings_with_issues
        );
    }
    if !result.summary.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for recommendation in &result.summary.recommendations {
            println!("- {recommendation}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_plan_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(3)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn column_cell(mapping: &Mapping) -> Cell {
    let key = mapping.placeholder_key();
    if key == mapping.column_analysis.identifier {
        Cell::new(key)
    } else {
        Cell::new(format!("{key} ({})", mapping.column_analysis.identifier))
    }
}

fn strategy_cell(strategy: Strategy) -> Cell {
    match strategy {
        Strategy::PlainText => dim_cell(strategy),
        Strategy::RichHtml => Cell::new(strategy).fg(Color::Magenta),
        Strategy::Image => Cell::new(strategy).fg(Color::Green),
        Strategy::StyledText => Cell::new(strategy).fg(Color::Blue),
        Strategy::TabularData => Cell::new(strategy).fg(Color::Yellow),
    }
}

fn confidence_cell(tier: ConfidenceTier) -> Cell {
    match tier {
        ConfidenceTier::High => Cell::new("HIGH")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        ConfidenceTier::Medium => Cell::new("MEDIUM").fg(Color::Yellow),
        ConfidenceTier::Low => Cell::new("LOW").fg(Color::Red),
    }
}

fn status_cell(status: MappingStatus) -> Cell {
    match status {
        MappingStatus::Optimized => Cell::new(status.as_str()).fg(Color::Green),
        MappingStatus::Draft | MappingStatus::Saved => dim_cell(status.as_str()),
    }
}

fn minutes_cell(minutes: f64) -> Cell {
    if minutes > 0.0 {
        Cell::new(format!("{minutes:.1}"))
    } else {
        dim_cell("0.0")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
