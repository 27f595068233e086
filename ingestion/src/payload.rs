use crate::error::ImportError;
use boardmap_core::config::ImportConfig;
use boardmap_core::model::BoardRow;
use serde::Deserialize;
use serde_json::Value;

/// Row shape as returned by the persistence API. Every field may be null or
/// missing, and years may arrive as numbers or strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RowPayload {
    #[serde(default)]
    pub person_name: Option<String>,
    #[serde(default)]
    pub person_email: Option<String>,
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub start_year: Value,
    #[serde(default)]
    pub end_year: Value,
}

impl RowPayload {
    pub fn into_row(self) -> BoardRow {
        BoardRow {
            person_name: self.person_name.unwrap_or_default(),
            person_email: non_empty(self.person_email),
            org_name: self.org_name.unwrap_or_default(),
            role: non_empty(self.role),
            start_year: coerce_year(&self.start_year),
            end_year: coerce_year(&self.end_year),
        }
    }
}

/// Decodes a JSON array of rows. Incomplete rows are kept here; the
/// bipartite builder is the one that drops them.
pub fn decode_json_rows(raw: &str, config: &ImportConfig) -> Result<Vec<BoardRow>, ImportError> {
    let payloads: Vec<RowPayload> = serde_json::from_str(raw)?;
    if payloads.len() > config.max_rows {
        return Err(ImportError::TooManyRows {
            actual: payloads.len(),
            limit: config.max_rows,
        });
    }

    let rows: Vec<BoardRow> = payloads.into_iter().map(RowPayload::into_row).collect();
    tracing::debug!("decoded {} rows from json payload", rows.len());
    Ok(rows)
}

/// Integral numbers and numeric strings become years; anything else is absent.
pub fn coerce_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                i32::try_from(int).ok()
            } else {
                number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() <= i32::MAX as f64)
                    .map(|f| f as i32)
            }
        }
        Value::String(text) => parse_year(text),
        _ => None,
    }
}

pub(crate) fn parse_year(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
