pub mod book_room;
pub mod check_availability;
pub mod search;
