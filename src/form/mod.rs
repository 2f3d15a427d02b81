pub mod content;
pub mod extract;

pub use content::{AttachedPicker, DateRangePickerOptions, DialogContent, FormInput, SubmittedForm};
pub use extract::extract_dates;
