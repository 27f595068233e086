use boardmap_core::config::ViewConfig;
use boardmap_core::model::BoardRow;
use serde::{Deserialize, Serialize};

/// Row filter criteria plus the free-text search box.
///
/// An empty `role` and a year bound of `None` or `0` impose no constraint.
/// A row whose own year is missing always passes the matching bound.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filters {
    pub query: String,
    pub role: String,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
}

impl Filters {
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            query: String::new(),
            role: config.role.clone(),
            year_min: config.year_min,
            year_max: config.year_max,
        }
    }

    pub fn matches(&self, row: &BoardRow) -> bool {
        let role_ok = self.role.is_empty() || row.role.as_deref() == Some(self.role.as_str());

        let start_ok = match (bound(self.year_min), bound(row.start_year)) {
            (Some(min), Some(start)) => start >= min,
            _ => true,
        };

        let end_ok = match (bound(self.year_max), bound(row.end_year)) {
            (Some(max), Some(end)) => end <= max,
            _ => true,
        };

        role_ok && start_ok && end_ok
    }

    /// Merges only the fields the patch carries.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(query) = patch.query {
            self.query = query;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(year_min) = patch.year_min {
            self.year_min = year_min;
        }
        if let Some(year_max) = patch.year_max {
            self.year_max = year_max;
        }
    }
}

// Zero counts as unset, same as a blank form field.
fn bound(year: Option<i32>) -> Option<i32> {
    year.filter(|y| *y != 0)
}

/// Partial filter update. `None` leaves a field untouched; for the year
/// bounds `Some(None)` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub query: Option<String>,
    pub role: Option<String>,
    pub year_min: Option<Option<i32>>,
    pub year_max: Option<Option<i32>>,
}

impl FilterPatch {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn year_min(mut self, year_min: Option<i32>) -> Self {
        self.year_min = Some(year_min);
        self
    }

    pub fn year_max(mut self, year_max: Option<i32>) -> Self {
        self.year_max = Some(year_max);
        self
    }
}
