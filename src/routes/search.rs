use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;
use tracing::warn;

use crate::handlers::search::{SearchRequest, search_availability};
use crate::store::RoomStore;

#[post("/search-availability-json")]
async fn search(store: web::Data<RoomStore>, body: web::Bytes) -> impl Responder {
    match serde_json::from_slice::<SearchRequest>(&body) {
        Ok(request) => HttpResponse::Ok().json(search_availability(&store, request).await),
        Err(e) => {
            warn!("bad availability request: {}", e);
            HttpResponse::BadRequest().json(json!({ "ok": false, "message": e.to_string() }))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(search);
}
