#[cfg(test)]
mod tests {
    use crate::helpers::{TestApp, get_json_body, json_request, make_test_app, send};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        brand::Model as BrandModel,
        car::{Model as CarModel, NewCar},
        user::Model as UserModel,
    };
    use serde_json::{Value, json};
    use serial_test::serial;

    struct TestData {
        seat: BrandModel,
        audi: BrandModel,
        owner: UserModel,
    }

    async fn setup_test_data(app: &TestApp) -> TestData {
        let db = app.state.db();
        TestData {
            seat: BrandModel::create(db, "Seat", None).await.unwrap(),
            audi: BrandModel::create(db, "Audi", None).await.unwrap(),
            owner: UserModel::create(db, "Ana", Some("García"), "ana@example.com", "password123")
                .await
                .unwrap(),
        }
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn test_create_car_populates_brand_and_owner() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/car",
                json!({
                    "model": "Ibiza",
                    "plate": "1234ABC",
                    "power": 110,
                    "brandId": data.seat.id,
                    "ownerId": data.owner.id
                }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["model"], "Ibiza");
        assert_eq!(json["brand"]["name"], "Seat");
        assert_eq!(json["owner"]["email"], "ana@example.com");
        assert!(json["owner"].get("passwordHash").is_none());
        assert!(json["owner"].get("password").is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_create_car_rejects_unknown_references() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/car",
                json!({ "model": "Ibiza", "plate": "1", "brandId": 999 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["error"], "Brand 999 does not exist");

        let response = send(
            &app,
            json_request(
                "POST",
                "/car",
                json!({ "model": "Ibiza", "plate": "1", "brandId": data.seat.id, "ownerId": 998 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["error"], "User 998 does not exist");
    }

    #[tokio::test]
    #[serial]
    async fn test_create_car_validation() {
        let app = make_test_app().await;

        let response = send(
            &app,
            json_request("POST", "/car", json!({ "model": "Ibiza", "plate": "1", "power": -5 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get_json_body(response).await["error"], "Power must not be negative");
    }

    #[tokio::test]
    #[serial]
    async fn test_list_and_get_cars() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;
        let car = CarModel::create(
            app.state.db(),
            NewCar {
                model: "A3".into(),
                plate: "9999ZZZ".into(),
                brand_id: Some(data.audi.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let json = get_json_body(send(&app, get("/car")).await).await;
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["data"][0]["brand"]["name"], "Audi");
        assert_eq!(json["data"][0]["owner"], Value::Null);

        let response = send(&app, get(&format!("/car/{}", car.id))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["plate"], "9999ZZZ");

        let response = send(&app, get("/car/4242")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["error"], "Car not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_cars_by_brand_prefix() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;
        for (model, brand_id) in [("Leon", data.seat.id), ("Ibiza", data.seat.id), ("A4", data.audi.id)] {
            CarModel::create(
                app.state.db(),
                NewCar {
                    model: model.into(),
                    plate: "P".into(),
                    brand_id: Some(brand_id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }

        let response = send(&app, get("/car/brand/SE")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        let models: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["model"].as_str().unwrap())
            .collect();
        assert_eq!(models, vec!["Leon", "Ibiza"]);

        let response = send(&app, get("/car/brand/volvo")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            get_json_body(response).await["error"],
            "There are no cars for this brand"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_update_car_merges_and_clears_references() {
        let app = make_test_app().await;
        let data = setup_test_data(&app).await;
        let car = CarModel::create(
            app.state.db(),
            NewCar {
                model: "Leon".into(),
                plate: "P".into(),
                power: Some(150),
                brand_id: Some(data.seat.id),
                owner_id: Some(data.owner.id),
            },
        )
        .await
        .unwrap();

        let response = send(
            &app,
            json_request(
                "PUT",
                &format!("/car/{}", car.id),
                json!({ "plate": "NEW", "ownerId": null }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["model"], "Leon");
        assert_eq!(json["plate"], "NEW");
        assert_eq!(json["power"], 150);
        assert_eq!(json["brand"]["name"], "Seat");
        assert_eq!(json["owner"], Value::Null);

        let response = send(
            &app,
            json_request("PUT", &format!("/car/{}", car.id), json!({ "brandId": 777 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_car() {
        let app = make_test_app().await;
        let car = CarModel::create(
            app.state.db(),
            NewCar {
                model: "Leon".into(),
                plate: "P".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/car/{}", car.id))
            .body(Body::empty())
            .unwrap();
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["model"], "Leon");

        let response = send(&app, get(&format!("/car/{}", car.id))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
