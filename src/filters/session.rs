// src/filters/session.rs
use crate::debounce::Debouncer;
use crate::filters::{apply_filters, FilterCriteria, FilteredView};
use crate::inventory::VehicleRecord;
use std::time::{Duration, Instant};

/// One user gesture on the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    Category(String),
    Price(String),
    Condition(String),
    BodyType(String),
    Search(String),
    Reset,
}

impl FilterEvent {
    /// Maps a control name (as sent by the page) and its value to an event.
    pub fn from_field(field: &str, value: &str) -> Option<Self> {
        let value = value.to_string();
        match field {
            "category" => Some(FilterEvent::Category(value)),
            "price" => Some(FilterEvent::Price(value)),
            "condition" => Some(FilterEvent::Condition(value)),
            "type" => Some(FilterEvent::BodyType(value)),
            "search" => Some(FilterEvent::Search(value)),
            "reset" => Some(FilterEvent::Reset),
            _ => None,
        }
    }
}

/// View controller for the inventory page: owns the criteria, borrows the
/// inventory, and debounces the search box.
pub struct FilterSession<'a> {
    records: &'a [VehicleRecord],
    criteria: FilterCriteria,
    search: Debouncer<String>,
}

impl<'a> FilterSession<'a> {
    pub fn new(records: &'a [VehicleRecord], criteria: FilterCriteria, debounce: Duration) -> Self {
        Self {
            records,
            criteria,
            search: Debouncer::new(debounce),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Applies one event. Returns the recomputed view, or `None` while a
    /// search term is waiting out the debounce window.
    pub fn handle(&mut self, event: FilterEvent, now: Instant) -> Option<FilteredView<'a>> {
        match event {
            FilterEvent::Category(tag) => self.criteria.set_category(&tag),
            FilterEvent::Price(band) => self.criteria.set_price(&band),
            FilterEvent::Condition(v) => self.criteria.set_condition(&v),
            FilterEvent::BodyType(v) => self.criteria.set_body_type(&v),
            FilterEvent::Search(term) => {
                self.search.push(term, now);
                return None;
            }
            FilterEvent::Reset => {
                self.search.cancel();
                self.criteria.reset();
            }
        }
        Some(self.view())
    }

    /// Commits the pending search term once the user has stopped typing.
    /// For hosts that keep a session alive across keystrokes; the htmx
    /// router waits in the browser instead and calls `flush`.
    pub fn poll(&mut self, now: Instant) -> Option<FilteredView<'a>> {
        let term = self.search.poll(now)?;
        self.criteria.set_search(&term);
        Some(self.view())
    }

    /// Commits any pending search term right away and recomputes.
    pub fn flush(&mut self) -> FilteredView<'a> {
        if let Some(term) = self.search.flush() {
            self.criteria.set_search(&term);
        }
        self.view()
    }

    pub fn view(&self) -> FilteredView<'a> {
        apply_filters(self.records, &self.criteria)
    }
}
