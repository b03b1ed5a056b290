use crate::caesar::Dictionary;
use crate::error::CfResult;
use crate::scorer::table::QuadgramTable;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads `QUAD,count` lines. Rows without a separator, with an unparsable count or with
/// a quadgram that is not four letters are skipped.
pub fn load_quadgrams_from_reader<R: Read>(reader: R) -> CfResult<QuadgramTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = QuadgramTable::new();
    let mut skipped = 0usize;
    let mut row_idx = 0usize;

    for result in rdr.records() {
        row_idx += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                debug!("[Row {}] CSV Parse Error: {}", row_idx, e);
                skipped += 1;
                continue;
            }
        };

        if rec.len() < 2 {
            skipped += 1;
            continue;
        }

        let quad = rec[0].trim();
        let count: u64 = match rec[1].trim_end_matches('\r').trim().parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        if let Err(e) = table.insert(quad, count) {
            debug!("[Row {}] {}", row_idx, e);
            skipped += 1;
        }
    }

    if skipped > 0 {
        warn!("Skipped {} invalid rows in quadgram table.", skipped);
    }
    debug!(
        "Scanned {} rows. Loaded {} quadgrams (total count {}).",
        row_idx,
        table.len(),
        table.total()
    );

    Ok(table)
}

pub fn load_quadgrams<P: AsRef<Path>>(path: P) -> CfResult<QuadgramTable> {
    info!("📊 Loading Quadgrams: {}", path.as_ref().display());
    let file = File::open(path)?;
    load_quadgrams_from_reader(file)
}

pub fn load_dictionary_from_reader<R: Read>(reader: R) -> CfResult<Dictionary> {
    let mut words = Vec::new();
    for line in BufReader::new(reader).lines() {
        words.push(line?);
    }
    let dict: Dictionary = words.into_iter().collect();
    debug!("Loaded {} dictionary words.", dict.len());
    Ok(dict)
}

pub fn load_dictionary<P: AsRef<Path>>(path: P) -> CfResult<Dictionary> {
    info!("📖 Loading Dictionary: {}", path.as_ref().display());
    let file = File::open(path)?;
    load_dictionary_from_reader(file)
}
