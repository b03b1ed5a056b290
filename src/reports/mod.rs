use cipherforge::alphabet::ALPHABET;
use cipherforge::caesar::CaesarCandidate;
use cipherforge::key::{Direction, SubstitutionKey};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn print_key_table<D: Direction>(name: &str, key: &SubstitutionKey<D>) {
    println!("\nKey ({}): {}", D::NAME, name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = 13;
    let images = key.letters();

    for (from, to) in ALPHABET.chunks(cols).zip(images.as_bytes().chunks(cols)) {
        let header: Vec<Cell> = from
            .iter()
            .map(|&b| {
                Cell::new((b as char).to_string())
                    .set_alignment(CellAlignment::Center)
                    .add_attribute(Attribute::Bold)
            })
            .collect();
        let mapped: Vec<Cell> = to
            .iter()
            .map(|&b| {
                Cell::new((b as char).to_string())
                    .set_alignment(CellAlignment::Center)
                    .fg(Color::Cyan)
            })
            .collect();
        table.add_row(header);
        table.add_row(mapped);
    }
    println!("{}", table);
}

pub fn print_attempt_table(attempts: &[f64]) {
    let best = attempts
        .iter()
        .enumerate()
        .fold(None, |acc: Option<(usize, f64)>, (i, &s)| match acc {
            Some((_, b)) if s <= b => acc,
            _ => Some((i, s)),
        })
        .map(|(i, _)| i);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Attempt").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (i, score) in attempts.iter().enumerate() {
        let mut score_cell = Cell::new(format!("{:.3}", score));
        let mut name_cell = Cell::new(format!("#{}", i + 1));
        if Some(i) == best {
            score_cell = score_cell.fg(Color::Green).add_attribute(Attribute::Bold);
            name_cell = name_cell.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![name_cell, score_cell]);
    }
    println!("\n{}", table);
}

pub fn print_caesar_candidates(candidates: &[CaesarCandidate]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Shift").add_attribute(Attribute::Bold),
        Cell::new("Plaintext").fg(Color::Green),
    ]);
    if let Some(col) = table.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for c in candidates {
        table.add_row(vec![Cell::new(c.shift), Cell::new(&c.text)]);
    }
    println!("\n{}", table);
}
