#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::programming_language::{LanguageFields, ProgrammingLanguage};
    use serde_json::{Value, json};
    use serial_test::serial;

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn test_language_crud_round() {
        let app = make_test_app().await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/language",
                json!({ "name": "Rust", "releasedYear": 2010, "githutRank": 14, "pyplRank": 9, "tiobeRank": 13 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = get_json_body(response).await;
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["releasedYear"], 2010);

        let response = send(
            &app,
            json_request("PUT", &format!("/language/{id}"), json!({ "tiobeRank": 11 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = get_json_body(response).await;
        assert_eq!(updated["name"], "Rust");
        assert_eq!(updated["tiobeRank"], 11);
        assert_eq!(updated["pyplRank"], 9);

        let fetched = get_json_body(send(&app, get(&format!("/language/{id}"))).await).await;
        assert_eq!(fetched, updated);

        let response = send(
            &app,
            json_request("PUT", &format!("/language/{id}"), json!({ "pyplRank": null })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let cleared = get_json_body(response).await;
        assert_eq!(cleared["pyplRank"], Value::Null);
        assert_eq!(cleared["tiobeRank"], 11);

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/language/{id}"))
            .body(Body::empty())
            .unwrap();
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["name"], "Rust");

        let response = send(&app, get(&format!("/language/{id}"))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["error"], "Language not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_list_languages_paginates() {
        let app = make_test_app().await;
        for (i, name) in ["C", "Go", "Java", "Python", "Rust"].into_iter().enumerate() {
            ProgrammingLanguage::create(
                app.state.db(),
                LanguageFields {
                    name: name.into(),
                    released_year: 1970 + i as i32,
                    githut_rank: Some(i as i32 + 1),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }

        let json = get_json_body(send(&app, get("/language?page=3&limit=2")).await).await;
        assert_eq!(json["totalItems"], 5);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["currentPage"], 3);
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["name"], "Rust");
        assert_eq!(json["data"][0]["pyplRank"], Value::Null);

        let response = send(&app, get("/language?limit=0")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, get("/language?limit=9223372036854775808")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_json_body(response).await["error"],
            "Params page or limit are not valid"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_search_languages_by_name() {
        let app = make_test_app().await;
        for name in ["JavaScript", "Java", "Rust"] {
            ProgrammingLanguage::create(
                app.state.db(),
                LanguageFields {
                    name: name.into(),
                    released_year: 1995,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }

        let response = send(&app, get("/language/name/jav")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await.as_array().unwrap().len(), 2);

        let response = send(&app, get("/language/name/cobol")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["error"], "Language not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_create_language_validation() {
        let app = make_test_app().await;

        let response = send(
            &app,
            json_request("POST", "/language", json!({ "name": "Rust" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &app,
            json_request("POST", "/language", json!({ "name": "Rust", "releasedYear": 2010, "tiobeRank": 0 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["error"], "Ranks start at 1");

        let response = send(&app, json_request("PUT", "/language/999", json!({ "name": "X" }))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
