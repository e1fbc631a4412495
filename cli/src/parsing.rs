use featpath_core::Collab;
use rustc_hash::FxHashSet;

const ARTISTS_COLUMN: &str = "Artist(s)";
const SONG_COLUMN: &str = "song";
const POPULARITY_COLUMN: &str = "Popularity";

struct ColumnIndices {
    artists: usize,
    song: usize,
    popularity: usize,
}

/// Turns the raw dataset into collaboration triples ready for the bulk
/// loader.
///
/// Filtering mirrors the dataset's quirks: rows need all three columns and a
/// numeric popularity at or above the threshold; solo tracks (no comma in
/// the artist cell) are skipped; exact duplicate rows count once. Each
/// surviving row expands into consecutive-pair triples, so "A, B, C" yields
/// A-B and B-C, not A-C.
pub fn parse_dataset(raw: &str, min_popularity: f64) -> Result<Vec<Collab>, String> {
    let mut records = parse_csv_records(raw).into_iter();
    let header = records.next().ok_or("dataset is empty")?;
    let columns = locate_columns(&header)?;

    let mut seen_rows = FxHashSet::default();
    let mut collabs = Vec::new();

    for record in records {
        let Some((artists_cell, song, popularity_cell)) = extract_row(&record, &columns) else {
            continue;
        };
        let Ok(popularity) = popularity_cell.parse::<f64>() else {
            continue;
        };
        if popularity < min_popularity {
            continue;
        }
        if !artists_cell.contains(',') {
            continue;
        }
        if !seen_rows.insert((
            artists_cell.to_string(),
            song.to_string(),
            popularity_cell.to_string(),
        )) {
            continue;
        }

        let artist_list = parse_artist_list(artists_cell);
        if artist_list.len() < 2 {
            continue;
        }
        for pair in artist_list.windows(2) {
            collabs.push(Collab::new(pair[0].clone(), pair[1].clone(), song));
        }
    }

    Ok(collabs)
}

fn locate_columns(header: &[String]) -> Result<ColumnIndices, String> {
    let position = |column: &str| {
        header
            .iter()
            .position(|cell| cell.as_str() == column)
            .ok_or_else(|| format!("dataset is missing the '{column}' column"))
    };

    Ok(ColumnIndices {
        artists: position(ARTISTS_COLUMN)?,
        song: position(SONG_COLUMN)?,
        popularity: position(POPULARITY_COLUMN)?,
    })
}

fn extract_row<'a>(
    record: &'a [String],
    columns: &ColumnIndices,
) -> Option<(&'a str, &'a str, &'a str)> {
    let cell = |index: usize| {
        record
            .get(index)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    };

    Some((
        cell(columns.artists)?,
        cell(columns.song)?,
        cell(columns.popularity)?,
    ))
}

/// The artist cell is either a Python-style list literal (`['A', 'B']`) or a
/// plain comma-separated list. Apostrophes are stripped from names, matching
/// the cleanup the dataset has always received.
pub fn parse_artist_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let inner = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    inner
        .split(',')
        .map(|part| {
            part.trim()
                .trim_matches('"')
                .replace('\'', "")
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Minimal CSV reader: quoted fields, doubled-quote escapes, commas and
/// newlines inside quotes. Enough for the collaborations dataset.
pub fn parse_csv_records(raw: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                let blank_line = record.len() == 1 && record[0].is_empty();
                if !blank_line {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(c),
        }
    }

    // Final record when the file does not end with a newline.
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}
