use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.auth.api_key = "e2e-key".into();
    let app = server::build_app(&cfg)?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn lamp() -> serde_json::Value {
    json!({
        "name": "Desk Lamp",
        "description": "Warm LED lamp",
        "price": 24.0,
        "category": "Home",
        "inStock": true
    })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_fetch_delete() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    // Create
    let res = c
        .post(format!("{}/api/products", app.base_url))
        .header("x-api-key", "e2e-key")
        .json(&lamp())
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    let id = body["product"]["id"].as_str().expect("id").to_string();

    // Fetch
    let res = c.get(format!("{}/api/products/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["name"], "Desk Lamp");

    // Delete, then it is gone
    let res = c
        .delete(format!("{}/api/products/{}", app.base_url, id))
        .header("x-api-key", "e2e-key")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(format!("{}/api/products/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_write_without_key_denied() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let res = c
        .post(format!("{}/api/products", app.base_url))
        .json(&lamp())
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let stats = c
        .get(format!("{}/api/products/stats", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(stats["totalProducts"], 5);
    Ok(())
}
