use std::time::Duration;

use twilio_rest::{AccountSid, AuthToken, TwilioClient, TwilioError};
use wiremock::matchers::{basic_auth, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// The documented Twilio response; only status/error_code/error_message are
// modeled, the rest must be ignored.
const SEND_JSON: &str = r#"{
    "account_sid": "sid",
    "api_version": "2010-04-01",
    "body": "Hello!",
    "date_created": "Thu, 30 Jul 2015 20:12:31 +0000",
    "date_sent": "Thu, 30 Jul 2015 20:12:33 +0000",
    "date_updated": "Thu, 30 Jul 2015 20:12:33 +0000",
    "direction": "outbound-api",
    "error_code": null,
    "error_message": null,
    "from": "+14155552345",
    "messaging_service_sid": "MGXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
    "num_media": "0",
    "num_segments": "1",
    "price": -0.00750,
    "price_unit": "USD",
    "sid": "MMXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
    "status": "sent",
    "subresource_uris": {
        "media": "/2010-04-01/Accounts/sid/Messages/SMXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX/Media.json"
    },
    "to": "+15108675310",
    "uri": "/2010-04-01/Accounts/sid/Messages/SMXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX.json"
}"#;

fn client_for(server: &MockServer) -> TwilioClient {
    TwilioClient::builder(AccountSid::new("sid"), AuthToken::new("token"))
        .api_base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn send_message_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Accounts/sid/Messages.json"))
        .and(basic_auth("sid", "token"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "From=%2B14155552345&To=%2B15108675310&Body=Hello%21",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SEND_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send_message("+14155552345", "+15108675310", "Hello!")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status, "sent");
    assert_eq!(response.error_code, 0);
    assert_eq!(response.error_message, "");
}

#[tokio::test]
async fn send_message_maps_http_400_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message("+14155552345", "+15108675310", "Hello!")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TwilioError::UnexpectedStatus {
            expected: 200,
            actual: 400
        }
    ));
}

#[tokio::test]
async fn send_message_maps_invalid_json_to_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("invalid JSON"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message("+14155552345", "+15108675310", "Hello!")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, TwilioError::Decode(_)));
}

#[tokio::test]
async fn send_message_surfaces_timeout_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = TwilioClient::builder(AccountSid::new("sid"), AuthToken::new("token"))
        .api_base_url(server.uri())
        .timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let err = client
        .send_message("+14155552345", "+15108675310", "Hello!")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, TwilioError::Transport(_)));
}
