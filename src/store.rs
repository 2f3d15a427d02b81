use chrono::NaiveDate;
use moka::future::Cache;

use crate::models::rooms::{Room, RoomRestriction};

const MAX_ROOMS: u64 = 256;

/// In-memory room inventory shared by the server workers.
#[derive(Clone)]
pub struct RoomStore {
    rooms: Cache<u32, Room>,
    restrictions: Cache<u32, Vec<RoomRestriction>>,
}

impl RoomStore {
    pub fn new() -> Self {
        RoomStore {
            rooms: Cache::new(MAX_ROOMS),
            restrictions: Cache::new(MAX_ROOMS),
        }
    }

    /// The two rooms the site advertises.
    pub async fn with_default_rooms() -> Self {
        let store = Self::new();
        store
            .insert_room(Room {
                id: 1,
                name: "General's Quarters".into(),
            })
            .await;
        store
            .insert_room(Room {
                id: 2,
                name: "Major's Suite".into(),
            })
            .await;
        store
    }

    pub async fn insert_room(&self, room: Room) {
        self.rooms.insert(room.id, room).await;
    }

    pub async fn room(&self, id: u32) -> Option<Room> {
        self.rooms.get(&id).await
    }

    /// Rooms ordered by id.
    pub fn rooms(&self) -> Vec<Room> {
        let mut rooms: Vec<Room> = self.rooms.iter().map(|(_, room)| room).collect();
        rooms.sort_by_key(|room| room.id);
        rooms
    }

    /// Appends a booked range. The list is updated under the entry lock so
    /// concurrent bookings for the same room never overwrite each other.
    pub async fn add_restriction(&self, room_id: u32, start: NaiveDate, end: NaiveDate) {
        self.restrictions
            .entry(room_id)
            .and_upsert_with(|existing| {
                let mut current = existing.map(|e| e.into_value()).unwrap_or_default();
                current.push(RoomRestriction { start, end });
                async move { current }
            })
            .await;
    }

    /// Whether a known room is free for the nights `[start, end)`.
    pub async fn is_available(&self, room_id: u32, start: NaiveDate, end: NaiveDate) -> bool {
        if end <= start || self.room(room_id).await.is_none() {
            return false;
        }

        let restrictions = self.restrictions.get(&room_id).await.unwrap_or_default();
        !restrictions.iter().any(|r| r.overlaps(start, end))
    }

    pub async fn first_available(&self, start: NaiveDate, end: NaiveDate) -> Option<Room> {
        for room in self.rooms() {
            if self.is_available(room.id, start, end).await {
                return Some(room);
            }
        }
        None
    }
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new()
    }
}
