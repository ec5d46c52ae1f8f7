use actix_web::{test, web::Data, App};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;

use db::{
    models::{NewGame, NewSignup},
    new_pool, SqlitePool,
};

use crate::routes::routes;

/// Fresh database file per test. Keep the directory alive for the test's duration.
pub fn test_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("soccer.db");
    let pool = new_pool(path.to_str().unwrap()).unwrap();
    (dir, pool)
}

pub fn new_game(title: &str, max_players: i32) -> NewGame {
    NewGame {
        title: title.to_string(),
        date: "2024-06-02".to_string(),
        time: "10:00".to_string(),
        location: "Riverside Park".to_string(),
        cost: 5.0,
        max_players,
    }
}

pub fn new_signup(game_id: i32, name: &str) -> NewSignup {
    NewSignup {
        game_id,
        name: name.to_string(),
        position: "Midfielder".to_string(),
        age: 30,
        speed: 3,
        passing: 3,
        shooting: 3,
        defending: 3,
    }
}

/// Runs a request through the full route table and decodes the JSON body.
pub async fn call_json<R>(pool: &SqlitePool, req: test::TestRequest) -> (u16, R)
where
    R: DeserializeOwned,
{
    let app = test::init_service(
        App::new()
            .app_data(Data::new(pool.clone()))
            .configure(routes),
    )
    .await;

    let res = test::call_service(&app, req.to_request()).await;

    let status = res.status().as_u16();
    let body = test::read_body(res).await;
    let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "read_response_json failed during deserialization. response: {} status: {}",
            String::from_utf8(body.to_vec())
                .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
            status
        )
    });

    (status, json_body)
}

/// Helper for HTTP GET integration tests
pub async fn test_get<R>(pool: &SqlitePool, route: &str) -> (u16, R)
where
    R: DeserializeOwned,
{
    call_json(pool, test::TestRequest::get().uri(route)).await
}

/// Helper for HTTP POST integration tests
pub async fn test_post<T: Serialize, R>(pool: &SqlitePool, route: &str, params: T) -> (u16, R)
where
    R: DeserializeOwned,
{
    call_json(pool, test::TestRequest::post().set_json(&params).uri(route)).await
}

/// Helper for HTTP PUT integration tests
pub async fn test_put<T: Serialize, R>(pool: &SqlitePool, route: &str, params: T) -> (u16, R)
where
    R: DeserializeOwned,
{
    call_json(pool, test::TestRequest::put().set_json(&params).uri(route)).await
}
