//! User-chosen search/filter/sort/page criteria.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Minimum-rating buckets selectable by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingBucket {
    #[default]
    All,
    Gte3,
    Gte4,
    Gte45,
}

impl RatingBucket {
    /// The minimum rating this bucket admits; `None` means unconstrained.
    pub fn threshold(self) -> Option<f64> {
        match self {
            RatingBucket::All => None,
            RatingBucket::Gte3 => Some(3.0),
            RatingBucket::Gte4 => Some(4.0),
            RatingBucket::Gte45 => Some(4.5),
        }
    }
}

/// The closed set of sort strategies. `Relevance` keeps the filtered order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    TitleAsc,
}

/// The full set of user-chosen parameters at a point in time. Lives for the
/// session, reset only by explicit user action, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub rating_bucket: RatingBucket,
    pub sort_key: SortKey,
    pub page_size: usize,
    pub page_number: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            price_min: None,
            price_max: None,
            rating_bucket: RatingBucket::default(),
            sort_key: SortKey::default(),
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}

impl FilterCriteria {
    /// Normalized price bounds: non-finite values count as absent and an
    /// inverted pair is swapped rather than rejected.
    pub fn price_bounds(&self) -> (Option<f64>, Option<f64>) {
        let min = self.price_min.filter(|v| v.is_finite());
        let max = self.price_max.filter(|v| v.is_finite());
        match (min, max) {
            (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
            other => other,
        }
    }

    /// The trimmed, case-folded search keyword; `None` when search is idle.
    pub fn search_keyword(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}
