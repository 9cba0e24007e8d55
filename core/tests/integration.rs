//! Fetch pipeline against a live mock server.
//!
//! # Design
//! Each test starts the mock server on a random port with a scripted
//! behavior, then runs `fetch_students` over real HTTP through
//! `ReqwestTransport`. This checks the transport's error mapping, which the
//! unit tests only script.

use std::net::SocketAddr;
use std::time::Duration;

use mock_server::Behavior;
use roster_core::{
    fetch_students, FetchOutcome, ReqwestTransport, StudentsClient, StudentsView, ViewState,
};

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

fn client(addr: SocketAddr) -> StudentsClient {
    StudentsClient::new(&format!("http://{addr}/users"))
}

#[tokio::test]
async fn fixture_users_become_students() {
    let addr = start(Behavior::Serve).await;

    let outcome = fetch_students(&client(addr), &transport()).await;
    let students = match outcome {
        FetchOutcome::Success(students) => students,
        other => panic!("expected success, got {other:?}"),
    };

    assert_eq!(students.len(), 10);
    assert_eq!(students[0].name, "Leanne Graham");
    assert_eq!(students[0].email, "leanne.graham@student.edu.ph");
    assert_eq!(students[0].phone, "+63 177 073 6803");
    assert_eq!(students[1].website, "ervin-howell.edu.ph");
    assert_eq!(students[9].course, "BS Psychology");
    assert_eq!(students[9].year, "2");
    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn not_found_status_is_reported() {
    let addr = start(Behavior::Status(404)).await;

    let outcome = fetch_students(&client(addr), &transport()).await;
    assert_eq!(outcome, FetchOutcome::Failure("Server error: 404".to_string()));
}

#[tokio::test]
async fn slow_server_times_out() {
    let addr = start(Behavior::Delay(Duration::from_secs(5))).await;
    let client = client(addr).with_timeout(Duration::from_millis(200));

    let outcome = fetch_students(&client, &transport()).await;
    assert_eq!(
        outcome,
        FetchOutcome::Failure("Request timeout - please try again".to_string())
    );
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    // Bind then drop to get a port nothing is listening on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let outcome = fetch_students(&client(addr), &transport()).await;
    assert_eq!(
        outcome,
        FetchOutcome::Failure("Network error - please check your connection".to_string())
    );
}

#[tokio::test]
async fn malformed_body_is_generic_failure() {
    let addr = start(Behavior::Malformed).await;

    let outcome = fetch_students(&client(addr), &transport()).await;
    assert_eq!(outcome, FetchOutcome::Failure("Failed to fetch students".to_string()));
}

#[tokio::test]
async fn view_loads_from_live_server() {
    let addr = start(Behavior::Serve).await;
    let mut view = StudentsView::new();

    let state = view.load(&client(addr), &transport()).await;
    assert!(matches!(state, ViewState::Loaded(students) if students.len() == 10));
    assert!(view.render().to_string().contains("Course: BS Computer Science"));
}
