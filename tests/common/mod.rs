use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token used by every test; keeps the expected request path stable.
pub const TEST_TOKEN: &str = "TEST";

pub fn send_message_path() -> String {
    format!("/bot{TEST_TOKEN}/sendMessage")
}

pub async fn mount_send_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(send_message_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"ok":true,"result":{"message_id":1}}"#),
        )
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_send_rejected(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(send_message_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"ok":false,"description":"Bad Request: chat not found"}"#),
        )
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_send_with_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(send_message_path()))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_send_with_delay(server: &MockServer, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(send_message_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"ok":true,"result":{"message_id":1}}"#)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}
