//! HTTP API integration tests.
//!
//! Exercises the tournament and player endpoints against in-memory stores.

mod fixtures;
use fixtures::TestServer;
use serde_json::{Value, json};

async fn create_tournament(
    client: &reqwest::Client,
    server: &TestServer,
    reward_amount: i32,
) -> Value {
    let response = client
        .post(server.url("/tournaments"))
        .json(&json!({"rewardAmount": reward_amount}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse JSON")
}

async fn create_player(client: &reqwest::Client, server: &TestServer, name: &str) -> Value {
    let response = client
        .post(server.url("/players"))
        .json(&json!({"name": name}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse JSON")
}

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().unwrap().ends_with("+09:00"));
}

#[tokio::test]
async fn test_info_endpoint() {
    // テスト項目: /api/info が API のメタデータを返す
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/api/info"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["title"].is_string());
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_tournament_crud() {
    // テスト項目: トーナメントの作成・取得・更新・削除
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作): 作成
    let created = create_tournament(&client, &server, 10).await;

    // then (期待する結果): ストアが ID を採番し、参加者は空
    assert_eq!(created["id"], 1);
    assert_eq!(created["rewardAmount"], 10);
    assert_eq!(created["players"], json!([]));

    // 取得すると作成時と同じ値
    let fetched: Value = client
        .get(server.url("/tournaments/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    // 更新は rewardAmount のみ反映される（id は無視）
    let response = client
        .put(server.url("/tournaments/1"))
        .json(&json!({"id": 99, "rewardAmount": 25}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["rewardAmount"], 25);

    // 一覧
    let list: Value = client
        .get(server.url("/tournaments"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);

    // 削除
    let response = client
        .delete(server.url("/tournaments/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .get(server.url("/tournaments/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_missing_tournament_returns_404() {
    // テスト項目: 存在しないトーナメントへの操作は 404
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作) / then (期待する結果):
    let get = client.get(server.url("/tournaments/42")).send().await.unwrap();
    assert_eq!(get.status(), 404);

    let put = client
        .put(server.url("/tournaments/42"))
        .json(&json!({"rewardAmount": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(put.status(), 404);

    let delete = client
        .delete(server.url("/tournaments/42"))
        .send()
        .await
        .unwrap();
    assert_eq!(delete.status(), 404);

    let players = client
        .get(server.url("/tournaments/42/players"))
        .send()
        .await
        .unwrap();
    assert_eq!(players.status(), 404);

    // 更新が新規作成を引き起こしていない
    let list: Value = client
        .get(server.url("/tournaments"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_tournament_players_membership() {
    // テスト項目: 参加者の追加・一覧・削除
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    create_tournament(&client, &server, 10).await;
    let player = create_player(&client, &server, "Mohammad").await;
    assert_eq!(player, json!({"id": 1, "name": "Mohammad"}));

    // 参加者なしのトーナメントは空の一覧（404 ではない）
    let response = client
        .get(server.url("/tournaments/1/players"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), json!([]));

    // when (操作): 同じ参加者を二度追加する
    for _ in 0..2 {
        let response = client
            .post(server.url("/tournaments/1/players/1"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    // then (期待する結果): 参加者は一人だけ
    let players: Value = client
        .get(server.url("/tournaments/1/players"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(players, json!([{"id": 1, "name": "Mohammad"}]));

    // 削除
    let response = client
        .delete(server.url("/tournaments/1/players/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let players: Value = client
        .get(server.url("/tournaments/1/players"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(players, json!([]));
}

#[tokio::test]
async fn test_add_unknown_player_returns_404() {
    // テスト項目: 存在しない参加者の追加は 404 で、トーナメントは変更されない
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    create_tournament(&client, &server, 10).await;

    // when (操作):
    let response = client
        .post(server.url("/tournaments/1/players/7"))
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Player not found with id: 7");

    let tournament: Value = client
        .get(server.url("/tournaments/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tournament["players"], json!([]));
}

#[tokio::test]
async fn test_remove_player_not_found_messages() {
    // テスト項目: 参加者削除の 404 メッセージがトーナメント / 参加者を区別する
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作): トーナメントが存在しない
    let response = client
        .delete(server.url("/tournaments/1/players/1"))
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Tournament not found with id: 1");

    // when (操作): トーナメントは存在するが参加者がいない
    create_tournament(&client, &server, 10).await;
    let response = client
        .delete(server.url("/tournaments/1/players/3"))
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Player not found with id: 3 for tournament with id: 1"
    );
}

#[tokio::test]
async fn test_player_endpoints() {
    // テスト項目: 参加者の作成・取得・削除とバリデーション
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // 無効な名前は 400
    let response = client
        .post(server.url("/players"))
        .json(&json!({"name": "   "}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    create_player(&client, &server, "alice").await;
    create_player(&client, &server, "bob").await;

    let players: Value = client
        .get(server.url("/players"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        players,
        json!([{"id": 1, "name": "alice"}, {"id": 2, "name": "bob"}])
    );

    let response = client.delete(server.url("/players/2")).send().await.unwrap();
    assert_eq!(response.status(), 204);

    let response = client.get(server.url("/players/2")).send().await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_deleting_player_keeps_tournament_membership() {
    // テスト項目: 参加者を削除してもトーナメントの参加者集合は変わらない
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    create_tournament(&client, &server, 10).await;
    create_player(&client, &server, "alice").await;
    client
        .post(server.url("/tournaments/1/players/1"))
        .send()
        .await
        .unwrap();

    // when (操作):
    let response = client.delete(server.url("/players/1")).send().await.unwrap();
    assert_eq!(response.status(), 204);

    // then (期待する結果):
    let players: Value = client
        .get(server.url("/tournaments/1/players"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(players, json!([{"id": 1, "name": "alice"}]));
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    // テスト項目: 数値でない ID は 400
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/tournaments/abc"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}
