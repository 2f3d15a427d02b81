use crate::constants::{END_INPUT_ID, START_INPUT_ID};
use crate::form::SubmittedForm;
use crate::models::availability::AvailabilityQuery;

/// Pulls the arrival/departure pair out of the check-availability form.
/// Either field empty means there is nothing to ask the server.
pub fn extract_dates(form: &SubmittedForm) -> Option<AvailabilityQuery> {
    let start = form.value(START_INPUT_ID).filter(|v| !v.is_empty())?;
    let end = form.value(END_INPUT_ID).filter(|v| !v.is_empty())?;
    Some(AvailabilityQuery::new(start, end))
}
