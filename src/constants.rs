// Server endpoints
pub const SEARCH_AVAILABILITY_PATH: &str = "/search-availability-json";
pub const BOOK_ROOM_PATH: &str = "/book-room";

// Element ids of the check-availability dialog
pub const CHECK_AVAILABILITY_FORM_ID: &str = "check-availability-form";
pub const RESERVATION_DATES_ID: &str = "reservation-dates-modal";
pub const START_INPUT_ID: &str = "start";
pub const END_INPUT_ID: &str = "end";

// Dates travel as yyyy-mm-dd on the wire and in the picker
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const PICKER_DATE_FORMAT: &str = "yyyy-mm-dd";

pub const TOAST_TIMER_MS: u64 = 3000;
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

pub const CHECK_AVAILABILITY_TITLE: &str = "Choose your dates";
pub const NO_AVAILABILITY_MESSAGE: &str = "No availability";

/// Body of the "check availability" dialog. Both inputs start disabled and
/// are enabled once the dialog is visible.
pub const CHECK_AVAILABILITY_FORM: &str = r#"<form id="check-availability-form" action="" method="post" novalidate class="needs-validation">
  <div class="form-row">
    <div class="col">
      <div class="form-row" id="reservation-dates-modal">
        <div class="col">
          <input disabled required class="form-control" type="text" name="start_date" id="start" placeholder="Arrival">
        </div>
        <div class="col">
          <input disabled required class="form-control" type="text" name="end_date" id="end" placeholder="Departure">
        </div>
      </div>
    </div>
  </div>
</form>"#;
