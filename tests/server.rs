use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::{App, HttpResponse, HttpServer, test, web};
use chrono::NaiveDate;
use room_availability::client::{AvailabilityService, HttpAvailabilityClient};
use room_availability::config::ClientConfig;
use room_availability::constants::{END_INPUT_ID, START_INPUT_ID};
use room_availability::error::AvailabilityError;
use room_availability::handlers::check_availability::{CheckOutcome, check_availability};
use room_availability::models::availability::{AvailabilityQuery, AvailabilityResponse};
use room_availability::models::rooms::BookingSummary;
use room_availability::notify::Notifier;
use room_availability::notify::scripted::{ScriptedAnswer, ScriptedBackend};
use room_availability::routes;
use room_availability::store::RoomStore;
use serde_json::{Value, json};
use url::Url;

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn picks(start: &str, end: &str) -> ScriptedAnswer {
    ScriptedAnswer::confirm([(START_INPUT_ID, start), (END_INPUT_ID, end)])
}

/// Serves the real routes on an ephemeral port.
fn spawn_app(store: web::Data<RoomStore>) -> Url {
    let server = HttpServer::new(move || {
        let store = store.clone();
        App::new().app_data(store).configure(routes::init)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    Url::parse(&format!("http://{addr}")).unwrap()
}

fn client_for(base_url: Url, timeout: Duration) -> HttpAvailabilityClient {
    let mut config = ClientConfig::for_base_url(base_url);
    config.request_timeout = timeout;
    HttpAvailabilityClient::new(&config).unwrap()
}

#[actix_web::test]
async fn ping_answers_pong() {
    let app = test::init_service(App::new().configure(routes::init)).await;
    let req = test::TestRequest::get().uri("/health/ping").to_request();

    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, web::Bytes::from_static(b"pong"));
}

#[actix_web::test]
async fn health_lists_seeded_rooms() {
    let store = web::Data::new(RoomStore::with_default_rooms().await);
    let app = test::init_service(App::new().app_data(store).configure(routes::init)).await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/health/rooms").to_request(),
    )
    .await;

    assert_eq!(body["count"], 2);
    assert_eq!(body["rooms"][0]["name"], "General's Quarters");
}

#[actix_web::test]
async fn search_endpoint_reports_free_and_taken_rooms() {
    let store = web::Data::new(RoomStore::with_default_rooms().await);
    store.add_restriction(1, jan(1), jan(5)).await;
    store.add_restriction(2, jan(1), jan(5)).await;
    let app = test::init_service(App::new().app_data(store.clone()).configure(routes::init)).await;

    let taken_range = json!({ "start_date": "2024-01-02", "end_date": "2024-01-04" });
    let free_range = json!({ "start_date": "2024-01-05", "end_date": "2024-01-07" });

    let taken: AvailabilityResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/search-availability-json")
            .set_json(taken_range)
            .to_request(),
    )
    .await;
    let free: AvailabilityResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/search-availability-json")
            .set_json(free_range)
            .to_request(),
    )
    .await;

    assert!(!taken.ok);
    assert!(free.ok);
    assert_eq!(free.room_id, "1");
    assert_eq!(free.start_date, "2024-01-05");
    assert_eq!(free.end_date, "2024-01-07");
}

#[actix_web::test]
async fn search_endpoint_rejects_bad_json() {
    let store = web::Data::new(RoomStore::with_default_rooms().await);
    let app = test::init_service(App::new().app_data(store).configure(routes::init)).await;

    let req = test::TestRequest::post()
        .uri("/search-availability-json")
        .set_payload("start_date=2024-01-01")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn book_room_resolves_link() {
    let store = web::Data::new(RoomStore::with_default_rooms().await);
    let app = test::init_service(App::new().app_data(store).configure(routes::init)).await;

    let summary: BookingSummary = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/book-room?id=2&s=2024-01-01&e=2024-01-03")
            .to_request(),
    )
    .await;
    assert_eq!(summary.room_id, 2);
    assert_eq!(summary.room_name, "Major's Suite");
    assert_eq!(summary.start_date, jan(1));
    assert_eq!(summary.end_date, jan(3));

    let unknown = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/book-room?id=9&s=2024-01-01&e=2024-01-03")
            .to_request(),
    )
    .await;
    assert_eq!(unknown.status(), 404);

    let bad_date = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/book-room?id=1&s=2024-1-1&e=2024-01-03")
            .to_request(),
    )
    .await;
    assert_eq!(bad_date.status(), 400);
}

#[actix_web::test]
async fn client_posts_query_as_json_once() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
    let recorder = seen.clone();
    let server = HttpServer::new(move || {
        let recorder = recorder.clone();
        App::new().route(
            "/search-availability-json",
            web::post().to(move |body: web::Json<Value>| {
                let recorder = recorder.clone();
                async move {
                    recorder.lock().unwrap().push(body.into_inner());
                    HttpResponse::Ok().json(json!({
                        "ok": true, "room_id": 5,
                        "start_date": "2024-01-01", "end_date": "2024-01-03"
                    }))
                }
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    let base_url = Url::parse(&format!("http://{addr}")).unwrap();
    let client = client_for(base_url, Duration::from_secs(5));
    let resp = client
        .search(&AvailabilityQuery::new("2024-01-01", "2024-01-03"))
        .await
        .unwrap();

    assert!(resp.ok);
    assert_eq!(resp.room_id, "5");
    assert_eq!(
        *seen.lock().unwrap(),
        vec![json!({ "start_date": "2024-01-01", "end_date": "2024-01-03" })]
    );
}

#[actix_web::test]
async fn client_maps_failures() {
    let server = HttpServer::new(|| {
        App::new()
            .route(
                "/broken/search-availability-json",
                web::post().to(|| async { HttpResponse::InternalServerError().finish() }),
            )
            .route(
                "/garbled/search-availability-json",
                web::post().to(|| async { HttpResponse::Ok().body("not json") }),
            )
            .route(
                "/slow/search-availability-json",
                web::post().to(|| async {
                    actix_web::rt::time::sleep(Duration::from_secs(2)).await;
                    HttpResponse::Ok().json(json!({ "ok": true }))
                }),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    let query = AvailabilityQuery::new("2024-01-01", "2024-01-03");
    let base_url = Url::parse(&format!("http://{addr}")).unwrap();
    let client_at = |prefix: &str| {
        let mut config = ClientConfig::for_base_url(base_url.clone());
        config.search_path = format!("/{prefix}/search-availability-json");
        config.request_timeout = Duration::from_millis(200);
        HttpAvailabilityClient::new(&config).unwrap()
    };

    assert!(matches!(
        client_at("broken").search(&query).await,
        Err(AvailabilityError::Status(500))
    ));
    assert!(matches!(
        client_at("garbled").search(&query).await,
        Err(AvailabilityError::Decode(_))
    ));
    assert!(matches!(
        client_at("slow").search(&query).await,
        Err(AvailabilityError::Timeout)
    ));
}

#[actix_web::test]
async fn full_round_trip_against_the_server() {
    let store = web::Data::new(RoomStore::with_default_rooms().await);
    store.add_restriction(1, jan(1), jan(3)).await;
    let base_url = spawn_app(store);
    let client = client_for(base_url, Duration::from_secs(5));

    let backend = ScriptedBackend::new()
        .answer(picks("2024-01-01", "2024-01-03"))
        .answer(picks("2024-01-02", "2024-01-03"));
    let notifier = Notifier::new(&backend);

    let first = check_availability(&notifier, &client, "/book-room")
        .await
        .unwrap();
    let CheckOutcome::Available { booking_link } = first else {
        panic!("room 2 should be free");
    };
    assert_eq!(booking_link, "/book-room?id=2&s=2024-01-01&e=2024-01-03");

    let second = check_availability(&notifier, &client, "/book-room")
        .await
        .unwrap();
    assert!(matches!(second, CheckOutcome::Available { .. }));
}
