//! End-to-end tests over real sockets.

use std::time::Duration;

use happy_day_server::proto::{HappyDayRequest, HappyDayResponse, PROTOBUF_CONTENT_TYPE};
use prost::Message;
use prost_types::Timestamp;
use reqwest::{Method, StatusCode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

mod common;

fn request(seconds: i64, include_reason: bool) -> HappyDayRequest {
    HappyDayRequest {
        date: Some(Timestamp { seconds, nanos: 0 }),
        include_reason,
    }
}

async fn verify(server: &common::TestServer, req: &HappyDayRequest) -> HappyDayResponse {
    let res = common::client()
        .post(server.url("/happy-day/verify"))
        .body(req.encode_to_vec())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    HappyDayResponse::decode(res.bytes().await.unwrap()).unwrap()
}

#[tokio::test]
async fn test_epoch_scenario() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/happy-day/verify"))
        .body(request(0, true).encode_to_vec())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
        PROTOBUF_CONTENT_TYPE
    );

    let response = HappyDayResponse::decode(res.bytes().await.unwrap()).unwrap();
    assert_eq!(
        response,
        HappyDayResponse {
            is_happy_day: true,
            reason: "Thursday is a Happy Day! ⭐".into(),
            formatted_date: "Thu, 01 Jan 1970 00:00:00 GMT".into(),
            err: String::new(),
        }
    );
}

#[tokio::test]
async fn test_wednesday_scenario() {
    let server = common::start_server().await;

    // 1970-01-07
    let response = verify(&server, &request(6 * 86_400, true)).await;
    assert!(!response.is_happy_day);
    assert!(response.reason.starts_with("Tough luck on Wednesday"));
    assert_eq!(response.formatted_date, "Wed, 07 Jan 1970 00:00:00 GMT");
}

#[tokio::test]
async fn test_reason_omitted() {
    let server = common::start_server().await;

    let response = verify(&server, &request(86_400, false)).await;
    assert!(response.is_happy_day);
    assert!(response.reason.is_empty());
    assert_eq!(response.formatted_date, "Fri, 02 Jan 1970 00:00:00 GMT");
}

#[tokio::test]
async fn test_unrepresentable_date_is_200_with_err() {
    let server = common::start_server().await;

    let response = verify(&server, &request(i64::MAX, true)).await;
    assert!(!response.err.is_empty());
    assert!(!response.is_happy_day);
    assert!(response.formatted_date.is_empty());
}

#[tokio::test]
async fn test_echo_round_trip() {
    let server = common::start_server().await;
    let client = common::client();

    let requests = [
        HappyDayRequest::default(),
        request(1_715_731_200, true),
        HappyDayRequest {
            date: Some(Timestamp {
                seconds: -62_135_596_800,
                nanos: 123_456_789,
            }),
            include_reason: false,
        },
    ];

    for req in requests {
        let res = client
            .post(server.url("/echo"))
            .body(req.encode_to_vec())
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let echoed = HappyDayRequest::decode(res.bytes().await.unwrap()).unwrap();
        assert_eq!(echoed, req);
    }
}

#[tokio::test]
async fn test_unknown_fields_are_ignored() {
    let server = common::start_server().await;

    // includeReason = true followed by field 15 (varint), unknown to the schema.
    let body = vec![0x10, 0x01, 0x78, 0x2a];
    let res = common::client()
        .post(server.url("/echo"))
        .body(body)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let echoed = HappyDayRequest::decode(res.bytes().await.unwrap()).unwrap();
    assert!(echoed.include_reason);
    assert!(echoed.date.is_none());
}

#[tokio::test]
async fn test_unmatched_path_is_404_for_any_method() {
    let server = common::start_server().await;
    let client = common::client();

    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        for target in ["/", "/happy-day", "/echo/", "/echo?x=1"] {
            let res = client
                .request(method.clone(), server.url(target))
                .body(vec![0xff, 0xff])
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{method} {target}");
            assert!(res.bytes().await.unwrap().is_empty());
        }
    }
}

#[tokio::test]
async fn test_malformed_body_is_500() {
    let server = common::start_server().await;
    let client = common::client();

    for target in ["/happy-day/verify", "/echo"] {
        let res = client
            .post(server.url(target))
            .body(vec![0x0a, 0x05, 0x08])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR, "{target}");
        assert!(res.bytes().await.unwrap().is_empty());
    }

    // The server keeps serving afterwards.
    let response = verify(&server, &request(0, false)).await;
    assert!(response.is_happy_day);
}

#[tokio::test]
async fn test_body_sent_in_chunks() {
    let server = common::start_server().await;
    let body = request(0, true).encode_to_vec();

    let mut stream = TcpStream::connect(server.addr).await.unwrap();
    let head = format!(
        "POST /happy-day/verify HTTP/1.1\r\nHost: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        server.addr,
        body.len()
    );
    stream.write_all(head.as_bytes()).await.unwrap();

    let (first, rest) = body.split_at(body.len() / 2);
    stream.write_all(first).await.unwrap();
    stream.flush().await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    stream.write_all(rest).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    let text = String::from_utf8_lossy(&raw);
    assert!(text.starts_with("HTTP/1.1 200 OK"), "{text}");

    let split = raw.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
    let response = HappyDayResponse::decode(&raw[split..]).unwrap();
    assert_eq!(response.formatted_date, "Thu, 01 Jan 1970 00:00:00 GMT");
}

#[tokio::test]
async fn test_concurrent_requests() {
    let server = common::start_server().await;
    let client = common::client();

    let tasks: Vec<_> = (0..14)
        .map(|day| {
            let client = client.clone();
            let url = server.url("/happy-day/verify");
            tokio::spawn(async move {
                let res = client
                    .post(url)
                    .body(request(day * 86_400, false).encode_to_vec())
                    .send()
                    .await
                    .unwrap();
                let response = HappyDayResponse::decode(res.bytes().await.unwrap()).unwrap();
                (day, response.is_happy_day)
            })
        })
        .collect();

    for task in tasks {
        let (day, is_happy_day) = task.await.unwrap();
        assert_eq!(is_happy_day, (4 + day) % 7 != 3, "day {day}");
    }
}
