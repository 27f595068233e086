use boardmap_core::model::BoardRow;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub trait ContentHash {
    fn content_hash(&self) -> String;
}

impl ContentHash for BoardRow {
    fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hash_row(&mut hasher, self);
        format!("{:x}", hasher.finalize())
    }
}

impl ContentHash for [BoardRow] {
    fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for row in self {
            hash_row(&mut hasher, row);
        }
        format!("{:x}", hasher.finalize())
    }
}

fn hash_row(hasher: &mut Sha256, row: &BoardRow) {
    // Unit separators keep ("ab", "c") and ("a", "bc") apart.
    for field in [
        Some(row.person_name.as_str()),
        row.person_email.as_deref(),
        Some(row.org_name.as_str()),
        row.role.as_deref(),
    ] {
        hasher.update(field.unwrap_or("\u{0}").as_bytes());
        hasher.update([0x1f_u8]);
    }
    for year in [row.start_year, row.end_year] {
        match year {
            Some(year) => hasher.update(year.to_le_bytes()),
            None => hasher.update([0xff_u8]),
        }
        hasher.update([0x1f_u8]);
    }
    hasher.update([0x1e_u8]);
}

/// Counts shown after an upload. Dropped rows are the ones missing a person
/// or organization name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub total_rows: usize,
    pub accepted_rows: usize,
    pub dropped_rows: usize,
    pub batch_hash: String,
}

impl ImportReport {
    pub fn summarize(rows: &[BoardRow]) -> Self {
        let accepted_rows = rows.iter().filter(|row| row.is_complete()).count();
        Self {
            total_rows: rows.len(),
            accepted_rows,
            dropped_rows: rows.len() - accepted_rows,
            batch_hash: rows.content_hash(),
        }
    }

    pub fn is_partial(&self) -> bool {
        self.dropped_rows > 0
    }
}
