use actix_web::{App, HttpServer, web};
use room_availability::config::AppConfig;
use room_availability::routes;
use room_availability::store::RoomStore;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env().expect("Failed to load configuration");
    let store = web::Data::new(RoomStore::with_default_rooms().await);

    let addr = format!("{}:{}", config.server.bind_addr, config.server.port);
    tracing::info!("listening on {addr}");

    HttpServer::new(move || {
        let store = store.clone();
        App::new().app_data(store).configure(routes::init)
    })
    .bind(addr)?
    .run()
    .await
}
