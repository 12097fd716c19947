use crate::forms::{default_time_slot, FieldErrors, FieldKind, FieldSpec, FormKind, FormValues, TIME_SLOTS};
use chrono::{NaiveDate, Timelike};
use maud::{html, Markup};

/// Clock readings used for date minimums and time defaults.
#[derive(Debug, Clone, Copy)]
pub struct FormClock {
    pub today: NaiveDate,
    pub hour: u32,
}

impl FormClock {
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            today: now.date_naive(),
            hour: now.hour(),
        }
    }
}

/// Renders a site form with the posted values and per-field errors.
/// The form replaces itself on htmx submits.
pub fn form_view(
    kind: FormKind,
    action: &str,
    values: &FormValues,
    errors: &FieldErrors,
    clock: FormClock,
) -> Markup {
    html! {
        form
            id=(kind.id())
            class="site-form"
            method="post"
            action=(action)
            hx-post=(action)
            hx-target="this"
            hx-swap="outerHTML"
            novalidate
        {
            @for spec in kind.fields() {
                (field(spec, values.get(spec.name), values.checked(spec.name), errors.get(spec.name), clock))
            }
            button type="submit" class="btn btn-primary btn-block" { (kind.submit_label()) }
        }
    }
}

fn field(
    spec: &FieldSpec,
    value: &str,
    checked: bool,
    error: Option<&String>,
    clock: FormClock,
) -> Markup {
    let id = format!("field-{}", spec.name);
    let today = clock.today.format("%Y-%m-%d").to_string();

    html! {
        div.form-group.has-error[error.is_some()] {
            @if spec.kind == FieldKind::Checkbox {
                label for=(id) {
                    input id=(id) type="checkbox" name=(spec.name) checked[checked];
                    " " (spec.label)
                }
            } @else {
                label for=(id) {
                    (spec.label)
                    @if spec.required { " *" }
                }
                @match spec.kind {
                    FieldKind::Select => {
                        select id=(id) name=(spec.name) class="form-select" required[spec.required] {
                            option value="" disabled selected[value.is_empty()] { "Select..." }
                            @for (opt, label) in spec.options {
                                option value=(opt) selected[*opt == value] { (label) }
                            }
                        }
                    }
                    FieldKind::Time => {
                        @let selected = if value.is_empty() {
                            default_time_slot(clock.hour).unwrap_or("")
                        } else {
                            value
                        };
                        select id=(id) name=(spec.name) class="form-select time-select" required[spec.required] {
                            @for slot in TIME_SLOTS {
                                option value=(slot) selected[*slot == selected] { (slot) }
                            }
                        }
                    }
                    FieldKind::TextArea => {
                        textarea
                            id=(id)
                            name=(spec.name)
                            class="form-input"
                            required[spec.required]
                            maxlength=[spec.max_length]
                        { (value) }
                    }
                    FieldKind::Date => {
                        input
                            id=(id)
                            type="date"
                            name=(spec.name)
                            class="form-input"
                            min=(today)
                            value=(if value.is_empty() { today.as_str() } else { value })
                            required[spec.required];
                    }
                    _ => {
                        input
                            id=(id)
                            type=(spec.kind.input_type())
                            name=(spec.name)
                            class="form-input"
                            value=(value)
                            required[spec.required]
                            minlength=[spec.min_length]
                            maxlength=[spec.max_length]
                            data-format=[(spec.kind == FieldKind::Phone).then_some("phone")];
                    }
                }
            }
            div class="error-message" {
                @if let Some(msg) = error { (msg) }
            }
        }
    }
}
