// src/filters/criteria.rs
use std::collections::HashMap;

/// Category buttons on the inventory page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    New,
    Used,
    Imported,
}

impl CategoryFilter {
    pub const ALL_TAGS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::New,
        CategoryFilter::Used,
        CategoryFilter::Imported,
    ];

    /// Unknown tags behave like `all`.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "new" => CategoryFilter::New,
            "used" => CategoryFilter::Used,
            "imported" => CategoryFilter::Imported,
            _ => CategoryFilter::All,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::New => "new",
            CategoryFilter::Used => "used",
            CategoryFilter::Imported => "imported",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Vehicles",
            CategoryFilter::New => "New",
            CategoryFilter::Used => "Used",
            CategoryFilter::Imported => "Imported",
        }
    }
}

/// Inclusive price bounds parsed from `min-max`, `min-` or `min`.
/// A side that does not parse as a number contributes no bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceBand {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl PriceBand {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Self::default();
        }

        let mut parts = raw.splitn(2, '-');
        let min = parts.next().and_then(parse_bound);
        // A zero upper bound means "open ended", like `50000-0`.
        let max = parts.next().and_then(parse_bound).filter(|m| *m > 0);

        Self { min, max }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: u64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }

    /// Value used by the price `<select>` and the query string.
    pub fn as_query(&self) -> String {
        match (self.min, self.max) {
            (None, None) => "all".to_string(),
            (Some(min), Some(max)) => format!("{min}-{max}"),
            (Some(min), None) => format!("{min}-"),
            (None, Some(max)) => format!("-{max}"),
        }
    }
}

fn parse_bound(part: &str) -> Option<u64> {
    part.trim().parse().ok()
}

/// The active filter state. Every field defaults to "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub price: PriceBand,
    /// Exact match against the record condition; `None` means any.
    pub condition: Option<String>,
    /// Exact match against the record category; `None` means any.
    pub body_type: Option<String>,
    pub search: String,
}

impl FilterCriteria {
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let mut criteria = Self::default();
        if let Some(v) = params.get("category") {
            criteria.set_category(v);
        }
        if let Some(v) = params.get("price") {
            criteria.set_price(v);
        }
        if let Some(v) = params.get("condition") {
            criteria.set_condition(v);
        }
        if let Some(v) = params.get("type") {
            criteria.set_body_type(v);
        }
        if let Some(v) = params.get("search") {
            criteria.set_search(v);
        }
        criteria
    }

    pub fn set_category(&mut self, tag: &str) {
        self.category = CategoryFilter::parse(tag);
    }

    pub fn set_price(&mut self, band: &str) {
        self.price = PriceBand::parse(band);
    }

    pub fn set_condition(&mut self, value: &str) {
        self.condition = selector(value);
    }

    pub fn set_body_type(&mut self, value: &str) {
        self.body_type = selector(value);
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        self.category == CategoryFilter::All
            && self.price.is_unconstrained()
            && self.condition.is_none()
            && self.body_type.is_none()
            && self.search.trim().is_empty()
    }

    /// Trimmed, lower-cased search term; `None` when the search box is blank.
    pub fn search_term(&self) -> Option<String> {
        let term = self.search.trim();
        (!term.is_empty()).then(|| term.to_lowercase())
    }

    /// Non-default criteria as query pairs, using the page's field names.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.category != CategoryFilter::All {
            pairs.push(("category", self.category.tag().to_string()));
        }
        if !self.price.is_unconstrained() {
            pairs.push(("price", self.price.as_query()));
        }
        if let Some(c) = &self.condition {
            pairs.push(("condition", c.clone()));
        }
        if let Some(t) = &self.body_type {
            pairs.push(("type", t.clone()));
        }
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

fn selector(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == "all" {
        None
    } else {
        Some(value.to_string())
    }
}
