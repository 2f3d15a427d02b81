use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::store::RoomStore;

#[get("/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

/// Rooms the server can hand out, for checking a deployment came up seeded.
#[get("/rooms")]
async fn rooms(store: web::Data<RoomStore>) -> impl Responder {
    let rooms = store.rooms();
    HttpResponse::Ok().json(json!({ "count": rooms.len(), "rooms": rooms }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping).service(rooms);
}
