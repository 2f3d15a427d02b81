use serde::Deserialize;
use tracing::info;

use crate::models::availability::{AvailabilityResponse, parse_date};
use crate::store::RoomStore;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub room_id: Option<u32>,
}

/// Answers one availability query. Dates are echoed back as received.
pub async fn search_availability(
    store: &RoomStore,
    request: SearchRequest,
) -> AvailabilityResponse {
    let mut response = AvailabilityResponse {
        ok: false,
        message: String::new(),
        room_id: String::new(),
        start_date: request.start_date.clone(),
        end_date: request.end_date.clone(),
    };

    let start = parse_date(&request.start_date);
    let end = parse_date(&request.end_date);
    let (Some(start), Some(end)) = (start, end) else {
        response.message = "invalid dates".into();
        return response;
    };

    let room = match request.room_id {
        Some(id) => {
            if store.is_available(id, start, end).await {
                store.room(id).await
            } else {
                None
            }
        }
        None => store.first_available(start, end).await,
    };

    match room {
        Some(room) => {
            info!("room {} free {} -> {}", room.id, start, end);
            response.ok = true;
            response.room_id = room.id.to_string();
        }
        None => {
            info!("nothing free {} -> {}", start, end);
            if let Some(id) = request.room_id {
                response.room_id = id.to_string();
            }
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(start: &str, end: &str, room_id: Option<u32>) -> SearchRequest {
        SearchRequest {
            start_date: start.into(),
            end_date: end.into(),
            room_id,
        }
    }

    #[tokio::test]
    async fn picks_first_free_room() {
        let store = RoomStore::with_default_rooms().await;
        let resp = search_availability(&store, request("2024-01-01", "2024-01-03", None)).await;

        assert!(resp.ok);
        assert_eq!(resp.room_id, "1");
        assert_eq!(resp.start_date, "2024-01-01");
        assert_eq!(resp.end_date, "2024-01-03");
    }

    #[tokio::test]
    async fn specific_room_can_be_taken() {
        let store = RoomStore::with_default_rooms().await;
        let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        store.add_restriction(2, jan(1), jan(10)).await;

        let taken = search_availability(&store, request("2024-01-02", "2024-01-04", Some(2))).await;
        let other = search_availability(&store, request("2024-01-02", "2024-01-04", Some(1))).await;

        assert!(!taken.ok);
        assert_eq!(taken.room_id, "2");
        assert!(other.ok);
        assert_eq!(other.room_id, "1");
    }

    #[tokio::test]
    async fn bad_dates_are_reported() {
        let store = RoomStore::with_default_rooms().await;
        let resp = search_availability(&store, request("tomorrow", "2024-01-04", None)).await;

        assert!(!resp.ok);
        assert_eq!(resp.message, "invalid dates");
        assert_eq!(resp.start_date, "tomorrow");
    }
}
