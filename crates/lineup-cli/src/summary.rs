use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lineup_cli::types::{RunResult, TeamStatus, TeamSummary};

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_dir.display());
    if result.dry_run {
        println!("Dry run: no files written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Team"),
        header_cell("Schema"),
        header_cell("Season rows"),
        header_cell("Top lineups"),
        header_cell("Intervals"),
        header_cell("Progression rows"),
        header_cell("Top CSV"),
        header_cell("Progression CSV"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 6, CellAlignment::Center);
    align_column(&mut table, 7, CellAlignment::Center);

    let mut total_rows = 0usize;
    let mut total_top = 0usize;
    for summary in &result.teams {
        total_rows += summary.season_rows;
        total_top += summary.top_lineups;
        table.add_row(team_row(summary));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_top).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    let warnings: Vec<(&str, &String)> = result
        .teams
        .iter()
        .flat_map(|team| team.warnings.iter().map(move |w| (team.team.as_str(), w)))
        .collect();
    if !warnings.is_empty() {
        eprintln!("Warnings:");
        for (team, warning) in warnings {
            eprintln!("- {team}: {warning}");
        }
    }
    let failures: Vec<(&str, &str)> = result
        .teams
        .iter()
        .filter_map(|team| match &team.status {
            TeamStatus::Failed(message) => Some((team.team.as_str(), message.as_str())),
            _ => None,
        })
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (team, message) in failures {
            eprintln!("- {team}: {message}");
        }
    }
}

fn team_row(summary: &TeamSummary) -> Vec<Cell> {
    let schema = match summary.schema {
        Some(variant) => Cell::new(variant),
        None => dim_cell("-"),
    };
    let intervals = match summary.interval_strategy {
        Some(strategy) if summary.progression_rows.is_some() => {
            Cell::new(format!("{} ({strategy})", summary.intervals))
        }
        _ => dim_cell("-"),
    };
    vec![
        Cell::new(&summary.team)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        schema,
        count_cell(summary.schema.map(|_| summary.season_rows)),
        count_cell(summary.schema.map(|_| summary.top_lineups)),
        intervals,
        count_cell(summary.progression_rows),
        output_cell(summary.outputs.top_lineups.as_ref()),
        output_cell(summary.outputs.progression.as_ref()),
        status_cell(&summary.status),
    ]
}

fn status_cell(status: &TeamStatus) -> Cell {
    match status {
        TeamStatus::Written => Cell::new("written").fg(Color::Green),
        TeamStatus::Checked => Cell::new("checked").fg(Color::Green),
        TeamStatus::Skipped(reason) => Cell::new(format!("skipped: {reason}")).fg(Color::Yellow),
        TeamStatus::Failed(_) => Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn count_cell(count: Option<usize>) -> Cell {
    match count {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
