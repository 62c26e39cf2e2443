// Drives a real server over TCP: stopped -> listening -> stopped.

mod common;

use reqwest::StatusCode;
use weather_api::server;
use weather_api::{AppState, Config};

fn loopback_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        workers: 1,
        shutdown_timeout_secs: 1,
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
    }
}

#[actix_web::test]
async fn serves_requests_until_stopped() {
    let bound = server::bind(&loopback_config(), AppState::default()).expect("bind loopback");
    let addr = bound.addrs[0];
    assert_ne!(addr.port(), 0, "an ephemeral port should have been assigned");

    let handle = bound.handle();
    let running = actix_web::rt::spawn(server::serve(bound));

    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
    assert_eq!(resp.text().await.unwrap(), common::WELCOME_BODY);

    let resp = client.get(format!("{base}/nonexistent")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client.post(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let problem: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(problem["code"], "METHOD_NOT_ALLOWED");

    handle.stop(true).await;
    running
        .await
        .expect("server task should not panic")
        .expect("server should shut down cleanly");
}

#[actix_web::test]
async fn bind_fails_when_port_is_taken() {
    let first = server::bind(&loopback_config(), AppState::default()).expect("bind loopback");
    let taken = Config {
        port: first.addrs[0].port(),
        ..loopback_config()
    };

    assert!(server::bind(&taken, AppState::default()).is_err());

    let handle = first.handle();
    let running = actix_web::rt::spawn(server::serve(first));
    handle.stop(false).await;
    running.await.unwrap().unwrap();
}
