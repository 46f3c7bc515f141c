//! Text table input and result output.
//!
//! Input rows look like `n i1 i2 ... in`: a leading count followed by the
//! row's items. The count is not an item and is skipped. Results are written
//! one per line as `[i1 i2 ... ik] support`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{MiningError, Result};
use crate::mining::{FrequentItemsets, Item};

pub fn parse_table(reader: impl BufRead) -> Result<Vec<Vec<Item>>> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();

        // A blank line is an empty transaction.
        if let Some(count) = tokens.next() {
            parse_token(count, idx + 1)?;
        }

        let row = tokens
            .map(|token| parse_token(token, idx + 1))
            .collect::<Result<Vec<Item>>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(MiningError::EmptyTable);
    }
    Ok(rows)
}

fn parse_token(token: &str, line: usize) -> Result<Item> {
    token.parse::<Item>().map_err(|_| MiningError::MalformedToken {
        line,
        token: token.to_string(),
    })
}

pub fn read_table(path: impl AsRef<Path>) -> Result<Vec<Vec<Item>>> {
    let path = path.as_ref();
    let rows = parse_table(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), rows = rows.len(), "read transaction table");
    Ok(rows)
}

pub fn write_results(mut writer: impl Write, results: &FrequentItemsets) -> Result<()> {
    for entry in results.iter() {
        writeln!(writer, "{}", entry)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_results_file(path: impl AsRef<Path>, results: &FrequentItemsets) -> Result<()> {
    let path = path.as_ref();
    write_results(BufWriter::new(File::create(path)?), results)?;
    debug!(path = %path.display(), itemsets = results.len(), "wrote results");
    Ok(())
}
