use url::{Position, Url};

use crate::models::availability::AvailabilityResponse;

/// Relative link to the booking page for a room the server said is free,
/// e.g. `/book-room?id=5&s=2024-01-01&e=2024-01-03`.
pub fn booking_link(
    path: &str,
    response: &AvailabilityResponse,
) -> Result<String, url::ParseError> {
    // a throwaway base lets url do the path and query encoding for us
    let mut url = Url::parse("http://localhost/")?.join(path)?;
    url.query_pairs_mut()
        .append_pair("id", &response.room_id)
        .append_pair("s", &response.start_date)
        .append_pair("e", &response.end_date);

    Ok(url[Position::BeforePath..].to_string())
}

/// The footer markup shown under the "room is available" dialog.
pub fn booking_button(link: &str) -> String {
    format!(r#"<a href="{link}" class="btn btn-primary">Book now!</a>"#)
}
