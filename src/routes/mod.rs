pub mod book_room;
pub mod health;
pub mod search;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::init))
        .configure(search::init)
        .configure(book_room::init);
}
