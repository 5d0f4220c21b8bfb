//! Domain types shared by the catalog pipeline and the repository clients.

use serde::{Deserialize, Serialize};

pub type BookId = i64;

/// A book record as served by the collection endpoint.
///
/// Everything except `keywords` is optional on the wire. Records without an
/// `id` are display-only: they can be browsed but not edited or deleted.
/// Missing numeric fields are coerced to `0` for filtering and sorting and
/// rendered as "unknown" by the presentation layer; that coercion is part of
/// the catalog contract, not an accident.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BookId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl Book {
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn author_or_empty(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// True when the record carries a usable cover reference.
    pub fn has_cover(&self) -> bool {
        self.cover.as_deref().is_some_and(|c| !c.trim().is_empty())
    }
}

/// Create/update payload for a book. Fields arrive as free-form strings from
/// a form; [`BookDraft::from_form`] normalizes them once so the repositories
/// never see malformed numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

pub const MAX_KEYWORDS: usize = 30;

impl BookDraft {
    /// Build a draft from raw form fields. The title must be non-blank;
    /// numeric fields that fail to parse become `None` rather than errors,
    /// the rating is clamped into `[0, 5]`, and keywords are split on commas
    /// (ASCII or fullwidth), semicolons and whitespace, capped at
    /// [`MAX_KEYWORDS`] entries.
    pub fn from_form(
        title: &str,
        author: Option<&str>,
        category: Option<&str>,
        price: Option<&str>,
        original_price: Option<&str>,
        rating: Option<&str>,
        description: Option<&str>,
        keywords: Option<&str>,
    ) -> crate::error::Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(crate::error::Error::Mutation(
                "title must not be empty".to_string(),
            ));
        }
        Ok(Self {
            title: title.to_string(),
            author: author.map(str::to_string),
            category: category.map(str::to_string),
            price: price.and_then(parse_amount),
            original_price: original_price.and_then(parse_amount),
            rating: rating.and_then(parse_amount).map(clamp_rating),
            description: description.map(str::to_string),
            keywords: keywords.map(parse_keywords).unwrap_or_default(),
            cover: None,
        })
    }

    /// Apply this draft over an existing record, keeping its id. The cover is
    /// preserved from the existing record unless the draft supplies one.
    pub fn apply_to(&self, existing: &Book) -> Book {
        Book {
            id: existing.id,
            title: Some(self.title.clone()),
            author: self.author.clone(),
            category: self.category.clone(),
            price: self.price,
            original_price: self.original_price,
            rating: self.rating,
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            cover: self.cover.clone().or_else(|| existing.cover.clone()),
        }
    }
}

/// Parse an optional decimal amount; blank or malformed input is `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Clamp a rating into the `[0, 5]` range.
pub fn clamp_rating(r: f64) -> f64 {
    r.clamp(0.0, 5.0)
}

fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c == '，' || c == ';' || c.is_whitespace())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// The derived, paginated view over the catalog: one page of records plus
/// pagination metadata. Pure function of the raw collection and the current
/// criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    pub records: Vec<Book>,
    pub total_count: usize,
    pub page_number: usize,
    pub total_pages: usize,
}
