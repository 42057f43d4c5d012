#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{player::Model as PlayerModel, team::Model as TeamModel};
    use sea_orm::EntityTrait;
    use serde_json::{Value, json};
    use serial_test::serial;

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn test_create_team() {
        let app = make_test_app().await;

        let response = send(
            &app,
            json_request("POST", "/team", json!({ "name": "Dream Team", "city": "Madrid" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert!(json["id"].as_i64().unwrap() > 0);
        assert_eq!(json["name"], "Dream Team");
        assert_eq!(json["city"], "Madrid");
        assert_eq!(json["players"], json!([]));
    }

    #[tokio::test]
    #[serial]
    async fn test_create_team_requires_city() {
        let app = make_test_app().await;

        let response = send(&app, json_request("POST", "/team", json!({ "name": "No City" }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn test_get_and_list_teams_include_players() {
        let app = make_test_app().await;
        let team = TeamModel::create(app.state.db(), "Dream Team", "Madrid").await.unwrap();
        PlayerModel::create(app.state.db(), "Lionel", "Messi", 10, Some(team.id))
            .await
            .unwrap();

        let json = get_json_body(send(&app, get(&format!("/team/{}", team.id))).await).await;
        assert_eq!(json["players"][0]["lastName"], "Messi");

        let json = get_json_body(send(&app, get("/team")).await).await;
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["data"][0]["players"].as_array().unwrap().len(), 1);

        let response = send(&app, get("/team/999")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["error"], "Team not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_team_merges() {
        let app = make_test_app().await;
        let team = TeamModel::create(app.state.db(), "Dream Team", "Madrid").await.unwrap();

        let response = send(
            &app,
            json_request("PUT", &format!("/team/{}", team.id), json!({ "city": "Barcelona" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["name"], "Dream Team");
        assert_eq!(json["city"], "Barcelona");
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_team_unlinks_players() {
        let app = make_test_app().await;
        let db = app.state.db();
        let team = TeamModel::create(db, "Dream Team", "Madrid").await.unwrap();
        let cr7 = PlayerModel::create(db, "Cristiano", "Ronaldo", 7, Some(team.id))
            .await
            .unwrap();
        let messi = PlayerModel::create(db, "Lionel", "Messi", 10, Some(team.id))
            .await
            .unwrap();

        let response = send(&app, delete(&format!("/team/{}", team.id))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["name"], "Dream Team");
        let players = json["players"].as_array().unwrap();
        assert_eq!(players.len(), 2);
        assert!(players.iter().all(|p| p["teamId"] == Value::Null));

        assert!(
            db::models::Team::find_by_id(team.id)
                .one(db)
                .await
                .unwrap()
                .is_none()
        );
        for id in [cr7.id, messi.id] {
            let json = get_json_body(send(&app, get(&format!("/player/{id}"))).await).await;
            assert_eq!(json["team"], Value::Null);
            assert_eq!(json["teamId"], Value::Null);
        }

        let response = send(&app, delete(&format!("/team/{}", team.id))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
