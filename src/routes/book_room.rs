use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::handlers::book_room::{BookRoomError, BookRoomQuery, pending_reservation};
use crate::store::RoomStore;

#[get("/book-room")]
async fn book_room(
    store: web::Data<RoomStore>,
    query: web::Query<BookRoomQuery>,
) -> impl Responder {
    match pending_reservation(&store, query.into_inner()).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e @ BookRoomError::UnknownRoom(_)) => {
            HttpResponse::NotFound().json(json!({ "error": e.to_string() }))
        }
        Err(e) => HttpResponse::BadRequest().json(json!({ "error": e.to_string() })),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(book_room);
}
