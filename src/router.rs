use crate::errors::ServerError;
use crate::filters::{apply_filters, FilterCriteria, FilterEvent, FilterSession};
use crate::forms::{self, FieldErrors, FormKind, FormValues};
use crate::inventory::VehicleRecord;
use crate::render::{project, project_records, LazyImages};
use crate::responses::{
    fragment_response, html_response, html_response_with_status, see_other, static_response,
    ResultResp,
};
use crate::state::AppState;
use crate::templates::components::filters::category_buttons;
use crate::templates::components::form::FormClock;
use crate::templates::components::form_view;
use crate::templates::pages::{self, InventoryVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use std::time::Instant;

/// Featured strip on the home page falls back to the first few listings.
const HOME_FALLBACK_CARDS: usize = 6;
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => home(state),

        ("GET", ["inventory"]) => inventory(&req, state),
        ("GET", ["inventory", "results"]) => inventory_results(&req, state),
        ("GET", ["inventory", "reset"]) => inventory_reset(&req, state),

        ("GET", ["vehicles", id]) => {
            let car = find_vehicle(state, id)?;
            html_response(pages::vehicle_page(&state.chrome(), car))
        }
        ("GET", ["vehicles", id, "quote"]) => {
            let car = find_vehicle(state, id)?;
            html_response(pages::quote_page(
                &state.chrome(),
                car,
                &FormValues::default(),
                &FieldErrors::new(),
                FormClock::now(),
            ))
        }
        ("POST", ["vehicles", id, "quote"]) => {
            let car = find_vehicle(state, id)?;
            let values = read_form(&mut req)?;
            submit_form(&req, state, FormKind::Quote, values, Some(car))
        }

        ("GET", ["contact"]) => form_page(state, FormKind::Contact),
        ("GET", ["service"]) => form_page(state, FormKind::ServiceBooking),
        ("GET", ["rentals"]) => form_page(state, FormKind::RentalSearch),
        ("POST", ["contact"]) => {
            let values = read_form(&mut req)?;
            submit_form(&req, state, FormKind::Contact, values, None)
        }
        ("POST", ["service"]) => {
            let values = read_form(&mut req)?;
            submit_form(&req, state, FormKind::ServiceBooking, values, None)
        }
        ("POST", ["rentals"]) => {
            let values = read_form(&mut req)?;
            submit_form(&req, state, FormKind::RentalSearch, values, None)
        }
        ("POST", ["forms", form_id]) => {
            let kind = FormKind::from_id(form_id);
            let values = read_form(&mut req)?;
            submit_form(&req, state, kind, values, None)
        }

        ("GET", ["static", rest @ ..]) => static_response(&state.config.static_dir, &rest.join("/")),

        _ => Err(ServerError::NotFound),
    }
}

fn home(state: &AppState) -> ResultResp {
    let featured = state.inventory.featured();
    let shown: Vec<&VehicleRecord> = if featured.is_empty() {
        state.inventory.all().iter().take(HOME_FALLBACK_CARDS).collect()
    } else {
        featured
    };

    let mut lazy = LazyImages::new(state.config.lazy_root_margin.clone());
    let vm = project_records(shown, &state.config.dealer_phone, &mut lazy);

    html_response(pages::home_page(&state.chrome(), &vm, &lazy))
}

fn inventory(req: &Request, state: &AppState) -> ResultResp {
    let criteria = FilterCriteria::from_query(&parse_query(req));
    let view = apply_filters(state.inventory.all(), &criteria);

    let mut lazy = LazyImages::new(state.config.lazy_root_margin.clone());
    let results = project(&view, &state.config.dealer_phone, &mut lazy);
    let vm = InventoryVm {
        criteria: &criteria,
        results,
        lazy,
        search_debounce: state.config.search_debounce,
    };

    let mut chrome = state.chrome();
    chrome.notices.extend(state.inventory_notice());

    html_response(pages::inventory_page(&chrome, &vm))
}

/// One filter gesture: rebuild the criteria the page was showing, apply the
/// control that changed, recompute and send back the new results.
fn inventory_results(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let mut session = FilterSession::new(
        state.inventory.all(),
        FilterCriteria::from_query(&params),
        state.config.search_debounce,
    );

    let event = params.get("event").and_then(|field| {
        let value = params
            .get("value")
            .or_else(|| params.get(field.as_str()))
            .map(String::as_str)
            .unwrap_or("");
        FilterEvent::from_field(field, value)
    });
    let category_changed = matches!(event, Some(FilterEvent::Category(_)));

    if let Some(event) = event {
        session.handle(event, Instant::now());
    }
    // The search box already waited out its quiet period in the browser
    // (hx-trigger delay), so a pending term is committed right away.
    let view = session.flush();

    let mut lazy = LazyImages::new(state.config.lazy_root_margin.clone());
    let results = project(&view, &state.config.dealer_phone, &mut lazy);
    let criteria = session.criteria().clone();
    let vm = InventoryVm {
        criteria: &criteria,
        results,
        lazy,
        search_debounce: state.config.search_debounce,
    };

    let oob = category_changed.then(|| category_buttons(criteria.category, true));

    fragment_response(
        pages::results_update(&vm, oob),
        &[("HX-Push-Url", inventory_url(&criteria))],
    )
}

fn inventory_reset(req: &Request, state: &AppState) -> ResultResp {
    let mut session = FilterSession::new(
        state.inventory.all(),
        FilterCriteria::from_query(&parse_query(req)),
        state.config.search_debounce,
    );
    let view = session
        .handle(FilterEvent::Reset, Instant::now())
        .unwrap_or_else(|| session.view());

    let mut lazy = LazyImages::new(state.config.lazy_root_margin.clone());
    let results = project(&view, &state.config.dealer_phone, &mut lazy);
    let vm = InventoryVm {
        criteria: session.criteria(),
        results,
        lazy,
        search_debounce: state.config.search_debounce,
    };

    let notice = state.inventory_notice();
    let body = maud::html! {
        (pages::inventory_app(&vm))
        @if let Some(note) = &notice {
            (crate::templates::components::toast_oob(note))
        }
    };

    fragment_response(body, &[("HX-Push-Url", "/inventory".to_string())])
}

fn form_page(state: &AppState, kind: FormKind) -> ResultResp {
    html_response(pages::form_page(
        &state.chrome(),
        kind,
        &FormValues::default(),
        &FieldErrors::new(),
        FormClock::now(),
    ))
}

/// Valid forms leave through WhatsApp; invalid ones come back with errors.
fn submit_form(
    req: &Request,
    state: &AppState,
    kind: FormKind,
    values: FormValues,
    vehicle: Option<&VehicleRecord>,
) -> ResultResp {
    let htmx = is_htmx(req);

    match forms::submit(kind, &values, &state.config.dealer_phone, vehicle) {
        Ok(submission) => {
            println!("📨 {} submitted", kind.id());
            if htmx {
                fragment_response(
                    pages::submitted_fragment(&submission),
                    &[("HX-Trigger-After-Settle", "formSubmitted".to_string())],
                )
            } else {
                see_other(&submission.whatsapp_url)
            }
        }
        Err(errors) => {
            let clock = FormClock::now();
            let markup = match (htmx, vehicle) {
                (true, Some(car)) => pages::quote_form(car, &values, &errors, clock),
                (true, None) => form_view(kind, &pages::form_action(kind), &values, &errors, clock),
                (false, Some(car)) => pages::quote_page(&state.chrome(), car, &values, &errors, clock),
                (false, None) => pages::form_page(&state.chrome(), kind, &values, &errors, clock),
            };
            html_response_with_status(422, markup)
        }
    }
}

fn find_vehicle<'a>(state: &'a AppState, id: &str) -> Result<&'a VehicleRecord, ServerError> {
    state.inventory.get(id).ok_or(ServerError::NotFound)
}

fn inventory_url(criteria: &FilterCriteria) -> String {
    let query = criteria.to_query_string();
    if query.is_empty() {
        "/inventory".to_string()
    } else {
        format!("/inventory?{query}")
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v == "true")
}

fn read_form(req: &mut Request) -> Result<FormValues, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    Ok(forms::parse_form_body(&body))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
