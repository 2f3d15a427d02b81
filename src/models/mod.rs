pub mod availability;
pub mod dialog;
pub mod rooms;
