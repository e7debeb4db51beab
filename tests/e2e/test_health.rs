use crate::helpers::{spawn_app, TestClient};
use hyper::StatusCode;

#[tokio::test]
async fn it_should_report_service_health() {
    let base_url = spawn_app().await;
    let client = TestClient::new(&base_url);

    let response = client.get("/news/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "InfoFlow News API");
    assert_eq!(body["version"], "1.0.0");
}
