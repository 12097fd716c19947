mod fields;
mod kinds;
mod submit;

pub use fields::{validate_field, FieldKind, FieldSpec};
pub use kinds::FormKind;
pub use submit::{
    default_time_slot, format_message, parse_form_body, submit, validate_form, FieldErrors,
    FormValues, Submission, TIME_SLOTS,
};
