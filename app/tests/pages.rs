//! Both routes rendered against a live mock server.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use mock_server::Behavior;
use roster_app::{render_route, Cli};
use roster_core::ReqwestTransport;

async fn start(behavior: Behavior) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener, behavior));
    addr
}

// Loopback only; keep proxy settings from the environment out of the way.
fn transport() -> ReqwestTransport {
    ReqwestTransport::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("roster").chain(args.iter().copied())).unwrap()
}

#[tokio::test]
async fn home_needs_no_network() {
    // Nothing listens on this endpoint; home must not touch it.
    let cli = cli(&["/", "--endpoint", "http://127.0.0.1:9/users"]);
    let page = render_route(&cli, &transport()).await.unwrap();
    assert!(!page.failed);
    assert!(page.body.contains("Student Directory"));
}

#[tokio::test]
async fn students_page_lists_fixture() {
    let addr = start(Behavior::Serve).await;
    let endpoint = format!("http://{addr}/users");
    let cli = cli(&["/students", "--endpoint", &endpoint]);

    let page = render_route(&cli, &transport()).await.unwrap();
    assert!(!page.failed);
    assert!(page.body.contains("Leanne Graham\n  Year 1\n  Course: BS Computer Science\n"));
    assert!(page.body.contains("Website: clementina-dubuque.edu.ph"));
    assert_eq!(page.body.matches("Email: ").count(), 10);
}

#[tokio::test]
async fn students_page_shows_server_error() {
    let addr = start(Behavior::Status(404)).await;
    let endpoint = format!("http://{addr}/users");
    let cli = cli(&["students", "--endpoint", &endpoint]);

    let page = render_route(&cli, &transport()).await.unwrap();
    assert!(page.failed);
    assert!(page.body.contains("Server error: 404"));
    assert!(!page.body.contains("Email: "));
}

#[tokio::test]
async fn students_page_times_out() {
    let addr = start(Behavior::Delay(Duration::from_secs(5))).await;
    let endpoint = format!("http://{addr}/users");
    let cli = cli(&["/students", "--endpoint", &endpoint, "--timeout-ms", "200"]);

    let page = render_route(&cli, &transport()).await.unwrap();
    assert!(page.failed);
    assert!(page.body.contains("Request timeout - please try again"));
}

#[tokio::test]
async fn students_json_output() {
    let addr = start(Behavior::Serve).await;
    let endpoint = format!("http://{addr}/users");
    let cli = cli(&["/students", "--endpoint", &endpoint, "--format", "json"]);

    let page = render_route(&cli, &transport()).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&page.body).unwrap();
    assert_eq!(json["state"], "loaded");
    assert_eq!(json["data"].as_array().unwrap().len(), 10);
    assert_eq!(json["data"][1]["course"], "BS Information Technology");
}
