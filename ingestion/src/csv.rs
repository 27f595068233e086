use crate::error::ImportError;
use crate::payload::{non_empty, parse_year};
use boardmap_core::config::ImportConfig;
use boardmap_core::model::BoardRow;

const PERSON_NAME: &str = "person_name";
const PERSON_EMAIL: &str = "person_email";
const ORG_NAME: &str = "org_name";
const ROLE: &str = "role";
const START_YEAR: &str = "start_year";
const END_YEAR: &str = "end_year";

struct Columns {
    person_name: usize,
    person_email: Option<usize>,
    org_name: usize,
    role: Option<usize>,
    start_year: Option<usize>,
    end_year: Option<usize>,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self, ImportError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|column| column.trim().eq_ignore_ascii_case(name))
        };

        Ok(Self {
            person_name: find(PERSON_NAME).ok_or(ImportError::MissingColumn(PERSON_NAME))?,
            person_email: find(PERSON_EMAIL),
            org_name: find(ORG_NAME).ok_or(ImportError::MissingColumn(ORG_NAME))?,
            role: find(ROLE),
            start_year: find(START_YEAR),
            end_year: find(END_YEAR),
        })
    }

    fn row(&self, record: &[String]) -> BoardRow {
        let cell = |idx: usize| record.get(idx).cloned().unwrap_or_default();
        let optional = |idx: Option<usize>| idx.map(cell);

        BoardRow {
            person_name: cell(self.person_name),
            person_email: non_empty(optional(self.person_email)),
            org_name: cell(self.org_name),
            role: non_empty(optional(self.role)),
            start_year: optional(self.start_year).and_then(|v| parse_year(&v)),
            end_year: optional(self.end_year).and_then(|v| parse_year(&v)),
        }
    }
}

/// Decodes the board CSV upload. The first non-blank record is the header;
/// column order is free and unknown columns are ignored.
pub fn decode_csv_rows(text: &str, config: &ImportConfig) -> Result<Vec<BoardRow>, ImportError> {
    let mut records = split_records(text)?.into_iter();
    let Some(header) = records.next() else {
        return Err(ImportError::MissingColumn(PERSON_NAME));
    };
    let columns = Columns::from_header(&header)?;

    let rows: Vec<BoardRow> = records.map(|record| columns.row(&record)).collect();
    if rows.len() > config.max_rows {
        return Err(ImportError::TooManyRows {
            actual: rows.len(),
            limit: config.max_rows,
        });
    }

    tracing::debug!("decoded {} rows from csv upload", rows.len());
    Ok(rows)
}

// RFC 4180 style: quoted fields may contain commas, newlines and "" escapes.
fn split_records(text: &str) -> Result<Vec<Vec<String>>, ImportError> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_line = 0;
    let mut line = 1;
    let mut chars = text.trim_start_matches('\u{feff}').chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_line = line;
            }
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                line += 1;
                record.push(std::mem::take(&mut field));
                push_record(&mut records, std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(ImportError::UnterminatedQuote { line: quote_line });
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        push_record(&mut records, record);
    }

    Ok(records)
}

fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    let blank = record.iter().all(|field| field.trim().is_empty());
    if !blank {
        records.push(record);
    }
}
