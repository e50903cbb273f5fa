use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use lineup_cli::config::{ConfigOverrides, load_config};
use lineup_cli::pipeline::{load_player_lookup, run};
use lineup_cli::types::RunResult;
use lineup_model::{IntervalMode, RunConfig};

use crate::cli::{ConfigArgs, IntervalArg, PlayersArgs, RunArgs};
use crate::summary::apply_table_style;

pub fn run_batch(args: &RunArgs) -> Result<RunResult> {
    let start = Instant::now();
    let overrides = ConfigOverrides {
        players_csv: args.config.players.clone(),
        teams_dir: args.teams_dir.clone(),
        output_dir: args.output_dir.clone(),
        season_file: args.season_file.clone(),
        top_lineups: args.top,
        interval_mode: args.intervals.map(interval_mode),
        total_games: args.total_games,
        game_split: args.game_split,
    };
    let config = resolve_config(&args.config, overrides)?;
    let lookup = load_player_lookup(&config.players_csv)?;
    let result = run(&config, &lookup, args.dry_run)?;
    info!(
        teams = result.teams.len(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(result)
}

pub fn run_players(args: &PlayersArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        players_csv: args.config.players.clone(),
        ..ConfigOverrides::default()
    };
    let config = resolve_config(&args.config, overrides)?;
    let lookup = load_player_lookup(&config.players_csv)?;

    let filter = args.team.as_deref().map(str::to_lowercase);
    let mut table = Table::new();
    table.set_header(vec!["Id", "Initial", "Height", "Team"]);
    apply_table_style(&mut table);
    for record in lookup.sorted_records() {
        if let Some(team) = &filter
            && record.team.to_lowercase() != *team
        {
            continue;
        }
        let height = record
            .height
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);
        table.add_row(vec![
            record.id.to_string(),
            record.initial.clone(),
            height,
            record.team.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn resolve_config(args: &ConfigArgs, overrides: ConfigOverrides) -> Result<RunConfig> {
    load_config(args.config.as_deref(), overrides).context("load configuration")
}

fn interval_mode(arg: IntervalArg) -> IntervalMode {
    match arg {
        IntervalArg::Auto => IntervalMode::Auto,
        IntervalArg::Named => IntervalMode::Named,
        IntervalArg::GameWindows => IntervalMode::GameWindows,
    }
}
