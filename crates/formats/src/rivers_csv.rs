use std::fs;
use std::path::{Path, PathBuf};

use scene::record::RiverRecord;
use scene::table::RiverTable;

/// Columns the header row must contain. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "length", "countries", "continent"];

#[derive(Debug)]
pub enum RiversCsvError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The input had no header row (empty file or blank lines only).
    MissingHeader,
    MissingColumn {
        name: &'static str,
    },
}

impl std::fmt::Display for RiversCsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiversCsvError::Io { path, source } => {
                write!(f, "failed to read dataset {}: {source}", path.display())
            }
            RiversCsvError::MissingHeader => write!(f, "dataset has no header row"),
            RiversCsvError::MissingColumn { name } => {
                write!(f, "dataset header is missing required column `{name}`")
            }
        }
    }
}

impl std::error::Error for RiversCsvError {}

pub fn load_rivers_csv(path: impl AsRef<Path>) -> Result<RiverTable, RiversCsvError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| RiversCsvError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_rivers_csv(&text)
}

/// Parses the dataset into a [`RiverTable`], in row order.
///
/// A row with an unparseable `length` is kept with `length_km = NaN` (the
/// eligibility filter drops it from layout later); an unparseable
/// `countries` becomes 0. Only a missing header or a missing required
/// column is an error — those are fatal for the session.
pub fn parse_rivers_csv(text: &str) -> Result<RiverTable, RiversCsvError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header = lines.next().ok_or(RiversCsvError::MissingHeader)?;
    let columns = split_csv_line(header);

    let column_index = |name: &'static str| -> Result<usize, RiversCsvError> {
        columns
            .iter()
            .position(|c| c.trim() == name)
            .ok_or(RiversCsvError::MissingColumn { name })
    };
    let mut indices = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        indices[slot] = column_index(name)?;
    }
    let [name_idx, length_idx, countries_idx, continent_idx] = indices;

    let mut table = RiverTable::new();
    for line in lines {
        let fields = split_csv_line(line);
        let field = |idx: usize| fields.get(idx).map(|s| s.trim()).unwrap_or("");

        let length_km = field(length_idx).parse::<f64>().unwrap_or(f64::NAN);
        let countries = field(countries_idx).parse::<u32>().unwrap_or(0);
        table.push(RiverRecord::new(
            field(name_idx),
            length_km,
            countries,
            field(continent_idx),
        ));
    }

    Ok(table)
}

/// Splits one CSV line. Double-quoted fields may contain commas; a doubled
/// quote inside a quoted field is a literal quote.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
