use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub name: String,
}

/// A stretch of nights during which a room can't be booked. `end` is the
/// departure day and is itself free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRestriction {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RoomRestriction {
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start < end && start < self.end
    }
}

/// What `/book-room` hands back for a generated booking link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub room_id: u32,
    pub room_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
