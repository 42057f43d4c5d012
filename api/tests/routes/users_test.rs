#[cfg(test)]
mod tests {
    use crate::helpers::{
        TestApp, bearer_request, get_json_body, json_request, make_test_app, send,
    };
    use api::auth::{decode_jwt, generate_jwt};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        car::{Model as CarModel, NewCar},
        user::Model as UserModel,
    };
    use serde_json::json;
    use serial_test::serial;

    struct TestData {
        admin: UserModel,
        ana: UserModel,
        bob: UserModel,
    }

    async fn setup_test_data(app: &TestApp) -> TestData {
        let db = app.state.db();
        TestData {
            admin: UserModel::create(db, "Admin", None, "admin@gmail.com", "adminpass1")
                .await
                .unwrap(),
            ana: UserModel::create(db, "Ana", Some("García"), "ana@example.com", "anapass123")
                .await
                .unwrap(),
            bob: UserModel::create(db, "Bob", None, "bob@example.com", "bobpass123")
                .await
                .unwrap(),
        }
    }

    fn token_for(user: &UserModel) -> String {
        generate_jwt(user.id, &user.email).unwrap().0
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    // --- POST /user ---

    #[tokio::test]
    #[serial]
    async fn test_create_user_hides_password() {
        let app = make_test_app().await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/user",
                json!({
                    "firstName": "Carla",
                    "lastName": "Ruiz",
                    "email": "carla@example.com",
                    "password": "supersecret"
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["firstName"], "Carla");
        assert_eq!(json["email"], "carla@example.com");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert!(!json.to_string().contains("supersecret"));
    }

    #[tokio::test]
    #[serial]
    async fn test_create_user_duplicate_email_conflicts() {
        let app = make_test_app().await;
        setup_test_data(&app).await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/user",
                json!({ "firstName": "Other", "email": "ana@example.com", "password": "password123" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            get_json_body(response).await["error"],
            "A user with this email already exists"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_create_user_validation() {
        let app = make_test_app().await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/user",
                json!({ "firstName": "Short", "email": "short@example.com", "password": "1234" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_json_body(response).await["error"],
            "Password must be at least 8 characters"
        );

        let response = send(
            &app,
            json_request(
                "POST",
                "/user",
                json!({ "firstName": "Bad", "email": "not-an-email", "password": "password123" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["error"], "Invalid email format");
    }

    // --- POST /user/login ---

    #[tokio::test]
    #[serial]
    async fn test_login_returns_token_for_user() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/user/login",
                json!({ "email": "ana@example.com", "password": "anapass123" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let claims = decode_jwt(json["token"].as_str().unwrap()).unwrap();
        assert_eq!(claims.sub, data.ana.id);
        assert_eq!(claims.email, "ana@example.com");
    }

    #[tokio::test]
    #[serial]
    async fn test_login_failures_are_indistinguishable() {
        let app = make_test_app().await;
        setup_test_data(&app).await;

        let wrong_password = send(
            &app,
            json_request(
                "POST",
                "/user/login",
                json!({ "email": "ana@example.com", "password": "wrongpass" }),
            ),
        )
        .await;
        let unknown_email = send(
            &app,
            json_request(
                "POST",
                "/user/login",
                json!({ "email": "ghost@example.com", "password": "anapass123" }),
            ),
        )
        .await;

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

        let a = get_json_body(wrong_password).await;
        let b = get_json_body(unknown_email).await;
        assert_eq!(a, b);
        assert_eq!(a["error"], "Invalid email and/or password");
    }

    #[tokio::test]
    #[serial]
    async fn test_login_requires_both_fields() {
        let app = make_test_app().await;

        let response = send(
            &app,
            json_request("POST", "/user/login", json!({ "email": "ana@example.com" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_json_body(response).await["error"],
            "Both email and password must be provided"
        );
    }

    // --- GET /user ---

    #[tokio::test]
    #[serial]
    async fn test_list_users_paginates_without_passwords() {
        let app = make_test_app().await;
        setup_test_data(&app).await;

        let response = send(&app, get("/user?limit=2")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["totalItems"], 3);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert!(!json.to_string().contains("passwordHash"));
    }

    #[tokio::test]
    #[serial]
    async fn test_get_user_with_cars() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;
        CarModel::create(
            app.state.db(),
            NewCar {
                model: "Leon".into(),
                plate: "P".into(),
                owner_id: Some(data.ana.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let json = get_json_body(send(&app, get(&format!("/user/{}", data.ana.id))).await).await;
        assert_eq!(json["firstName"], "Ana");
        assert!(json.get("cars").is_none());

        let json = get_json_body(
            send(&app, get(&format!("/user/{}?includeCars=true", data.ana.id))).await,
        )
        .await;
        assert_eq!(json["cars"].as_array().unwrap().len(), 1);
        assert_eq!(json["cars"][0]["model"], "Leon");

        let response = send(&app, get("/user/9999")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["error"], "User not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_search_users_by_first_name() {
        let app = make_test_app().await;
        setup_test_data(&app).await;

        let response = send(&app, get("/user/name/an")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["firstName"], "Ana");

        let response = send(&app, get("/user/name/zed")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await, json!([]));
    }

    // --- PUT / DELETE /user/{id} ---

    #[tokio::test]
    #[serial]
    async fn test_update_user_requires_token() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;

        let response = send(
            &app,
            json_request("PUT", &format!("/user/{}", data.ana.id), json!({ "firstName": "X" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(get_json_body(response).await["error"], "Authentication required");

        let response = send(
            &app,
            bearer_request(
                "PUT",
                &format!("/user/{}", data.ana.id),
                "garbage",
                Some(json!({ "firstName": "X" })),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_update_user_by_someone_else_is_rejected() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;

        let response = send(
            &app,
            bearer_request(
                "PUT",
                &format!("/user/{}", data.ana.id),
                &token_for(&data.bob),
                Some(json!({ "firstName": "Hacked" })),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_json_body(response).await["error"],
            "You are not authorized to perform this operation"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_update_self_merges_and_rehashes_password() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;

        let response = send(
            &app,
            bearer_request(
                "PUT",
                &format!("/user/{}", data.ana.id),
                &token_for(&data.ana),
                Some(json!({ "lastName": "López", "password": "brandnewpass" })),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["lastName"], "López");

        let login = send(
            &app,
            json_request(
                "POST",
                "/user/login",
                json!({ "email": "ana@example.com", "password": "brandnewpass" }),
            ),
        )
        .await;
        assert_eq!(login.status(), StatusCode::OK);
    }

    #[tokio::test]
    #[serial]
    async fn test_update_email_to_taken_one_conflicts() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;

        let response = send(
            &app,
            bearer_request(
                "PUT",
                &format!("/user/{}", data.ana.id),
                &token_for(&data.ana),
                Some(json!({ "email": "bob@example.com" })),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    #[serial]
    async fn test_admin_can_delete_any_user() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;

        let response = send(
            &app,
            bearer_request("DELETE", &format!("/user/{}", data.bob.id), &token_for(&data.admin), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["email"], "bob@example.com");

        let response = send(
            &app,
            bearer_request("DELETE", &format!("/user/{}", data.bob.id), &token_for(&data.admin), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_user_can_delete_themselves_but_not_others() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;

        let response = send(
            &app,
            bearer_request("DELETE", &format!("/user/{}", data.bob.id), &token_for(&data.ana), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = send(
            &app,
            bearer_request("DELETE", &format!("/user/{}", data.ana.id), &token_for(&data.ana), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    #[serial]
    async fn test_admin_email_in_other_case_gets_no_admin_rights() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/user",
                json!({
                    "firstName": "Mallory",
                    "email": "ADMIN@gmail.com",
                    "password": "mallorypass"
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = send(
            &app,
            json_request(
                "POST",
                "/user/login",
                json!({ "email": "ADMIN@gmail.com", "password": "mallorypass" }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let token = get_json_body(response).await["token"]
            .as_str()
            .unwrap()
            .to_string();

        let response = send(
            &app,
            bearer_request("DELETE", &format!("/user/{}", data.ana.id), &token, None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = get_json_body(response).await;
        assert_eq!(json["error"], "You are not authorized to perform this operation");

        let response = send(&app, get(&format!("/user/{}", data.ana.id))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
