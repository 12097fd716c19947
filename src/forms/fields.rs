// src/forms/fields.rs
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Number,
    Select,
    Checkbox,
    TextArea,
    Date,
    Time,
}

impl FieldKind {
    /// `type` attribute for `<input>` fields.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            FieldKind::Number => "number",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Date => "date",
            _ => "text",
        }
    }
}

/// Accessor for a regex compiled once, e.g. from a `static LazyLock<Regex>`.
pub type PatternFn = fn() -> &'static Regex;

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// (compiled regex, message shown when it does not match)
    pub pattern: Option<(PatternFn, &'static str)>,
    /// (value, label) pairs for selects.
    pub options: &'static [(&'static str, &'static str)],
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            options: &[],
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub const fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub const fn pattern(mut self, regex: PatternFn, message: &'static str) -> Self {
        self.pattern = Some((regex, message));
        self
    }

    pub const fn options(mut self, options: &'static [(&'static str, &'static str)]) -> Self {
        self.options = options;
        self
    }
}

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Checks one value against its field rules; the first failing rule wins.
pub fn validate_field(spec: &FieldSpec, raw: &str) -> Result<(), String> {
    let value = raw.trim();

    if spec.required && value.is_empty() {
        return Err("This field is required".into());
    }
    if value.is_empty() {
        return Ok(());
    }

    match spec.kind {
        FieldKind::Email if !EMAIL_REGEX.is_match(value) => {
            return Err("Please enter a valid email address".into());
        }
        FieldKind::Phone if value.chars().filter(char::is_ascii_digit).count() < 10 => {
            return Err("Please enter a valid phone number".into());
        }
        FieldKind::Number if !value.parse::<f64>().map_or(false, f64::is_finite) => {
            return Err("Please enter a valid number".into());
        }
        _ => {}
    }

    let len = value.chars().count();
    if let Some(min) = spec.min_length {
        if len < min {
            return Err(format!("Minimum {min} characters required"));
        }
    }
    if let Some(max) = spec.max_length {
        if len > max {
            return Err(format!("Maximum {max} characters allowed"));
        }
    }

    if let Some((pattern, message)) = spec.pattern {
        if !pattern().is_match(value) {
            let message = if message.is_empty() { "Invalid format" } else { message };
            return Err(message.to_string());
        }
    }

    Ok(())
}
