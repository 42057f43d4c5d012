#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app, send};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{player::Model as PlayerModel, team::Model as TeamModel};
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
    async fn test_create_player_with_team() {
        let app = make_test_app().await;
        let team = TeamModel::create(app.state.db(), "Dream Team", "Madrid").await.unwrap();

        let response = send(
            &app,
            json_request(
                "POST",
                "/player",
                json!({ "firstName": "Lionel", "lastName": "Messi", "shirtNumber": 10, "teamId": team.id }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["shirtNumber"], 10);
        assert_eq!(json["team"]["name"], "Dream Team");
    }

    #[tokio::test]
    #[serial]
    async fn test_create_player_without_team() {
        let app = make_test_app().await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/player",
                json!({ "firstName": "Free", "lastName": "Agent", "shirtNumber": 0 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(get_json_body(response).await["team"], Value::Null);
    }

    #[tokio::test]
    #[serial]
    async fn test_create_player_with_unknown_team() {
        let app = make_test_app().await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/player",
                json!({ "firstName": "Ghost", "lastName": "Player", "shirtNumber": 1, "teamId": 404 }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["error"], "Team not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_player_team_semantics() {
        let app = make_test_app().await;
        let db = app.state.db();
        let team = TeamModel::create(db, "Dream Team", "Madrid").await.unwrap();
        let player = PlayerModel::create(db, "Lionel", "Messi", 10, Some(team.id))
            .await
            .unwrap();
        let uri = format!("/player/{}", player.id);

        // Omitted teamId keeps the team.
        let json = get_json_body(
            send(&app, json_request("PUT", &uri, json!({ "shirtNumber": 30 }))).await,
        )
        .await;
        assert_eq!(json["shirtNumber"], 30);
        assert_eq!(json["team"]["id"], team.id);

        // Explicit null unlinks.
        let json = get_json_body(
            send(&app, json_request("PUT", &uri, json!({ "teamId": null }))).await,
        )
        .await;
        assert_eq!(json["team"], Value::Null);

        let response = send(&app, json_request("PUT", &uri, json!({ "teamId": 999 }))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["error"], "Team not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_list_get_delete_players() {
        let app = make_test_app().await;
        let player = PlayerModel::create(app.state.db(), "Luis", "Figo", 7, None)
            .await
            .unwrap();

        let json = get_json_body(send(&app, get("/player")).await).await;
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["data"][0]["firstName"], "Luis");

        let response = send(&app, get("/player/999")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await["error"], "Player not found");

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/player/{}", player.id))
            .body(Body::empty())
            .unwrap();
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["lastName"], "Figo");
    }
}
