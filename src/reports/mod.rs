// ===== leaguerank/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use leaguerank::api::RankingView;
use leaguerank::config::League;
use leaguerank::evaluator::RowEvaluation;

fn numeric(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

pub fn print_ranking(view: &RankingView) {
    let cap = if view.league.is_unlimited() {
        "unlimited".to_string()
    } else {
        view.league.max_cp.to_string()
    };
    println!(
        "\n🏆 === {} — {} (cap {}) === 🏆",
        view.species, view.league.name, cap
    );
    println!(
        "    {} of 4096 IV combinations fit under the cap",
        view.total_combos
    );

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("IV").add_attribute(Attribute::Bold),
        Cell::new("Level"),
        Cell::new("CP"),
        Cell::new("Stat Product"),
        Cell::new("%"),
    ]);

    for combo in &view.combos {
        let mut iv_cell = Cell::new(combo.iv.to_string());
        if combo.rank_position == 1 {
            iv_cell = iv_cell.fg(Color::Green).add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            numeric(format!("#{}", combo.rank_position)),
            iv_cell,
            numeric(format!("{:.1}", combo.level)),
            numeric(combo.cp.to_string()),
            numeric(format!("{:.0}", combo.stat_product)),
            numeric(format!("{:.2}", combo.rank_percent)),
        ]);
    }

    println!("{table}");
}

pub fn print_rows(raw: &[String], rows: &[Option<RowEvaluation>], league: &League) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new("IV"),
        Cell::new("Level"),
        Cell::new("CP"),
        Cell::new("Rank"),
        Cell::new("%"),
        Cell::new("Best"),
    ]);

    for (input, row) in raw.iter().zip(rows) {
        match row {
            None => {
                let mut cells = vec![Cell::new(input).fg(Color::DarkGrey)];
                cells.extend((0..6).map(|_| Cell::new("—")));
                table.add_row(cells);
            }
            Some(eval) => {
                let rank = match eval.rank_position {
                    Some(r) => format!("#{}", r),
                    // valid input, but over the cap even at level 1.0
                    None => format!("over cap {}", league.max_cp),
                };
                let percent = eval
                    .rank_percent
                    .map(|p| format!("{:.2}", p))
                    .unwrap_or_else(|| "—".to_string());
                let best = if eval.is_optimal { "⭐" } else { "" };
                table.add_row(vec![
                    Cell::new(input),
                    Cell::new(eval.iv.to_string()),
                    numeric(format!("{:.1}", eval.level)),
                    numeric(eval.cp.to_string()),
                    numeric(rank),
                    numeric(percent),
                    Cell::new(best).set_alignment(CellAlignment::Center),
                ]);
            }
        }
    }

    println!("{table}");
}
