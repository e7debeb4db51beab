use crate::helpers::{spawn_app, TestClient};
use hyper::StatusCode;
use serde_json::json;

#[tokio::test]
async fn it_should_search_with_topic_only_and_default_window() {
    let base_url = spawn_app().await;
    let client = TestClient::new(&base_url);

    let response = client
        .post("/news/search", &json!({ "tema": "tecnologia" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["tema"], "tecnologia");
    assert_eq!(body["janela_tempo"], "dias");
    assert!(body["total_artigos"].as_i64().unwrap() > 0);

    let artigos = body["artigos"].as_array().unwrap();
    assert!(!artigos.is_empty());

    // Every article carries all six fields as non-null strings
    for artigo in artigos {
        for field in [
            "titulo",
            "descricao",
            "url",
            "fonte",
            "data_publicacao",
            "imagem",
        ] {
            assert!(
                artigo[field].is_string(),
                "field '{}' missing or not a string in {:?}",
                field,
                artigo
            );
        }
    }
}

#[tokio::test]
async fn it_should_interpolate_the_topic_into_fallback_articles() {
    let base_url = spawn_app().await;
    let client = TestClient::new(&base_url);

    let response = client
        .post("/news/search", &json!({ "tema": "política" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();

    for artigo in body["artigos"].as_array().unwrap() {
        assert!(artigo["titulo"].as_str().unwrap().contains("política"));
        assert!(artigo["descricao"].as_str().unwrap().contains("política"));
    }
}

#[tokio::test]
async fn it_should_reject_an_empty_payload() {
    let base_url = spawn_app().await;
    let client = TestClient::new(&base_url);

    let response = client.post("/news/search", &json!({})).await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("Tema");
}

#[tokio::test]
async fn it_should_reject_a_payload_without_topic() {
    let base_url = spawn_app().await;
    let client = TestClient::new(&base_url);

    let response = client
        .post("/news/search", &json!({ "janela_tempo": "dias" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("Tema é obrigatório");
}

#[tokio::test]
async fn it_should_reject_a_blank_topic() {
    let base_url = spawn_app().await;
    let client = TestClient::new(&base_url);

    let response = client
        .post("/news/search", &json!({ "tema": "  " }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("Tema");
}

#[tokio::test]
async fn it_should_cap_articles_at_max_articles() {
    let base_url = spawn_app().await;
    let client = TestClient::new(&base_url);

    let response = client
        .post(
            "/news/search",
            &json!({ "tema": "esportes", "janela_tempo": "semanas", "max_articles": 3 }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();

    assert_eq!(body["janela_tempo"], "semanas");
    assert!(body["artigos"].as_array().unwrap().len() <= 3);
}

#[tokio::test]
async fn it_should_accept_every_supported_time_window() {
    let base_url = spawn_app().await;
    let client = TestClient::new(&base_url);

    for window in ["dias", "semanas", "meses", "anos"] {
        let response = client
            .post(
                "/news/search",
                &json!({ "tema": "esportes", "janela_tempo": window, "max_articles": 3 }),
            )
            .await
            .unwrap();

        response.assert_status(StatusCode::OK);
        let body = response.body.as_ref().unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["janela_tempo"], window);
    }
}
