use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::models::availability::parse_date;
use crate::models::rooms::BookingSummary;
use crate::store::RoomStore;

/// Query string of a generated booking link.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRoomQuery {
    pub id: u32,
    pub s: String,
    pub e: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookRoomError {
    #[error("no room with id {0}")]
    UnknownRoom(u32),
    #[error("invalid date {0:?}")]
    InvalidDate(String),
}

/// Turns a booking link back into the reservation it stands for.
pub async fn pending_reservation(
    store: &RoomStore,
    query: BookRoomQuery,
) -> Result<BookingSummary, BookRoomError> {
    let start_date = link_date(&query.s)?;
    let end_date = link_date(&query.e)?;
    let room = store
        .room(query.id)
        .await
        .ok_or(BookRoomError::UnknownRoom(query.id))?;

    Ok(BookingSummary {
        room_id: room.id,
        room_name: room.name,
        start_date,
        end_date,
    })
}

fn link_date(raw: &str) -> Result<NaiveDate, BookRoomError> {
    parse_date(raw).ok_or_else(|| BookRoomError::InvalidDate(raw.to_string()))
}
