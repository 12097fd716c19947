// src/filters/engine.rs
use crate::filters::{CategoryFilter, FilterCriteria};
use crate::inventory::VehicleRecord;

/// Records that pass every active criterion, in inventory order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    records: Vec<&'a VehicleRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a VehicleRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }
}

/// Stable filter of `records` by `criteria`. Pure: same inputs, same output.
pub fn apply_filters<'a>(records: &'a [VehicleRecord], criteria: &FilterCriteria) -> FilteredView<'a> {
    // Lower-case the term once instead of per record.
    let term = criteria.search_term();

    FilteredView {
        records: records
            .iter()
            .filter(|car| matches_with_term(car, criteria, term.as_deref()))
            .collect(),
    }
}

pub fn matches(car: &VehicleRecord, criteria: &FilterCriteria) -> bool {
    matches_with_term(car, criteria, criteria.search_term().as_deref())
}

fn matches_with_term(car: &VehicleRecord, criteria: &FilterCriteria, term: Option<&str>) -> bool {
    category_passes(car, criteria.category)
        && criteria.price.contains(car.price)
        && exact_passes(&car.condition, criteria.condition.as_deref())
        && criteria
            .body_type
            .as_deref()
            .map_or(true, |t| car.category.as_deref() == Some(t))
        && term.map_or(true, |t| car.searchable_text().contains(t))
}

fn category_passes(car: &VehicleRecord, category: CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::New => car.condition == "New",
        CategoryFilter::Used => car.condition == "Used",
        CategoryFilter::Imported => car.imported,
    }
}

fn exact_passes(value: &str, wanted: Option<&str>) -> bool {
    wanted.map_or(true, |w| value == w)
}
