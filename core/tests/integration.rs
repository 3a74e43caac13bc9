//! Full pipeline tests against the live mock server.
//!
//! # Design
//! Each test starts the axum double on a random port and drives the real
//! client over HTTP, so envelope serialization, the ureq transport and
//! response classification are exercised end-to-end exactly as against the
//! production endpoint.

use std::net::SocketAddr;
use std::time::Duration;

use mock_server::VALID_API_KEY;
use novaposhta_core::{ApiError, Client, Config, FieldReader, Params};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr, api_key: &str) -> Client {
    Client::with_config(
        api_key,
        Config {
            endpoint: format!("http://{addr}/v2.0/json/"),
            file_endpoint: format!("http://{addr}"),
            timeout: Duration::from_secs(2),
        },
    )
}

#[test]
fn successful_fetch_yields_typed_list_data() {
    let addr = start_server();
    let client = client_for(addr, VALID_API_KEY);

    let container = client.fetch("Address", "getAreas", Params::new()).unwrap();
    assert!(container.is_success().unwrap());

    let areas = container.data_as_list().unwrap();
    assert_eq!(areas.len(), 2);

    let first = FieldReader::from_value(&areas[0]).unwrap();
    assert_eq!(first.string("Description").unwrap(), "Київська");
    // String-typed number coerced by the reader.
    assert_eq!(first.int("AreasCount").unwrap(), 5);

    let info = FieldReader::from_value(container.info().unwrap()).unwrap();
    assert_eq!(info.int("totalCount").unwrap(), 2);
}

#[test]
fn invalid_key_raises_logical_error_with_parallel_codes() {
    let addr = start_server();
    let client = client_for(addr, "wrong-key");

    let err = client
        .fetch("Address", "getAreas", Params::new())
        .unwrap_err();
    match err {
        ApiError::LogicalError {
            errors,
            error_codes,
        } => {
            assert_eq!(errors, vec!["API key is invalid"]);
            assert_eq!(error_codes, vec!["20000100001"]);
        }
        other => panic!("expected LogicalError, got {other:?}"),
    }
}

#[test]
fn unicode_params_round_trip_through_the_wire() {
    let addr = start_server();
    let client = client_for(addr, VALID_API_KEY);

    let mut params = Params::new();
    params.insert("CityName".to_string(), serde_json::json!("Київ"));
    let container = client.fetch("Address", "echoParams", params).unwrap();

    // `data` is a single object here, not a list.
    assert!(matches!(
        container.data_as_list().unwrap_err(),
        ApiError::NotAList
    ));
    let echoed = FieldReader::from_value(container.data().unwrap()).unwrap();
    assert_eq!(echoed.string("CityName").unwrap(), "Київ");
}

#[test]
fn non_json_body_is_reported_as_malformed() {
    let addr = start_server();
    let client = client_for(addr, VALID_API_KEY);

    let err = client
        .fetch("Address", "plainText", Params::new())
        .unwrap_err();
    match err {
        ApiError::MalformedResponse { body, .. } => assert_eq!(body, "plain text"),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[test]
fn connection_refused_is_a_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr, VALID_API_KEY);
    let err = client
        .fetch("Address", "getAreas", Params::new())
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }), "{err:?}");
}

#[test]
fn slow_reply_times_out_as_a_transport_error() {
    let addr = start_server();
    let mut client = client_for(addr, VALID_API_KEY);
    client.set_timeout(Duration::from_millis(200));

    let err = client
        .fetch("Address", "slowReply", Params::new())
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }), "{err:?}");
}

#[test]
fn fetch_file_returns_the_raw_document() {
    let addr = start_server();
    let client = client_for(addr, VALID_API_KEY);

    let body = client
        .fetch_file("orders/printDocument/type/pdf", Duration::from_secs(2))
        .unwrap();
    assert!(body.starts_with("%PDF-1.4"));
}
