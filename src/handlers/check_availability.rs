use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::booking::{booking_button, booking_link};
use crate::client::AvailabilityService;
use crate::constants::{
    CHECK_AVAILABILITY_FORM, CHECK_AVAILABILITY_TITLE, END_INPUT_ID, NO_AVAILABILITY_MESSAGE,
    RESERVATION_DATES_ID, START_INPUT_ID,
};
use crate::error::AvailabilityError;
use crate::form::{DateRangePickerOptions, extract_dates};
use crate::models::dialog::{DialogOutcome, Icon, MessageOptions, ToastOptions};
use crate::notify::{CustomOptions, DialogBackend, Notifier};

const FAILURE_TITLE: &str = "Could not check availability";

/// How one "check availability" round went.
#[derive(Debug)]
pub enum CheckOutcome {
    Available { booking_link: String },
    Unavailable,
    Cancelled,
    Invalid,
    Failed(AvailabilityError),
}

/// The dialog the check starts with: the date form, a range picker bound
/// before it opens, and both inputs enabled once it is visible.
pub fn availability_dialog() -> CustomOptions {
    CustomOptions::new(CHECK_AVAILABILITY_TITLE, CHECK_AVAILABILITY_FORM)
        .will_open(|content| {
            let options = DateRangePickerOptions::default();
            if !content.attach_date_range_picker(RESERVATION_DATES_ID, options) {
                warn!("no #{} in availability form", RESERVATION_DATES_ID);
            }
        })
        .did_open(|content| {
            content.remove_attribute(START_INPUT_ID, "disabled");
            content.remove_attribute(END_INPUT_ID, "disabled");
        })
}

/// Asks the user for dates, checks them with `service` and shows the answer.
/// Backend failures propagate; everything about the request itself ends up
/// in the returned outcome after the user has been told.
pub async fn check_availability<B, S>(
    notifier: &Notifier<B>,
    service: &S,
    booking_path: &str,
) -> Result<CheckOutcome>
where
    B: DialogBackend,
    S: AvailabilityService + ?Sized,
{
    let dialog = availability_dialog();
    let query = match notifier.custom(dialog, extract_dates).await? {
        DialogOutcome::Confirmed(query) => query,
        DialogOutcome::Cancelled => {
            debug!("availability check cancelled");
            return Ok(CheckOutcome::Cancelled);
        }
        DialogOutcome::Invalid => {
            debug!("availability check submitted without both dates");
            return Ok(CheckOutcome::Invalid);
        }
    };

    if !query.is_well_formed() {
        warn!(?query, "rejecting malformed dates");
        let toast = ToastOptions::new("Dates must look like yyyy-mm-dd").icon(Icon::Error);
        notifier.toast(toast).await?;
        return Ok(CheckOutcome::Invalid);
    }

    let response = match service.search(&query).await {
        Ok(response) => response,
        Err(err) => return report_failure(notifier, err).await,
    };

    if !response.ok {
        info!(?query, "no availability");
        let message = MessageOptions::new(NO_AVAILABILITY_MESSAGE).footer(response.message);
        notifier.error(message).await?;
        return Ok(CheckOutcome::Unavailable);
    }

    let link = match booking_link(booking_path, &response) {
        Ok(link) => link,
        Err(err) => return report_failure(notifier, AvailabilityError::Url(err)).await,
    };
    info!("room {} available, offering {}", response.room_id, link);
    let text = format!(
        "Room is available from {} to {}",
        response.start_date, response.end_date
    );
    notifier
        .success(
            MessageOptions::new(text)
                .title("Good news")
                .footer(booking_button(&link)),
        )
        .await?;
    Ok(CheckOutcome::Available { booking_link: link })
}

/// Tells the user the check could not be completed.
async fn report_failure<B: DialogBackend>(
    notifier: &Notifier<B>,
    err: AvailabilityError,
) -> Result<CheckOutcome> {
    error!("availability check failed: {}", err);
    notifier
        .error(MessageOptions::new(err.to_string()).title(FAILURE_TITLE))
        .await?;
    Ok(CheckOutcome::Failed(err))
}
