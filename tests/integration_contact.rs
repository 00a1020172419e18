//! End-to-end CRUD flows against a real Postgres. Run with a live database:
//! `DATABASE_URL=postgres://... cargo test -- --ignored`

use contato_server::domain::session::Role;
use reqwest::StatusCode;
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

mod common;

fn unique_email(run_id: &str) -> String {
    format!("ana+{run_id}@example.com")
}

async fn submit(app: &common::TestApp, email: &str) -> reqwest::Response {
    let payload = json!({
        "name": "Ana Silva",
        "email": email,
        "phone": "+55 11 91234-5678",
        "message": "Preciso de ajuda urgente"
    });

    app.client.post(format!("{}/v1/contact", app.server_url)).json(&payload).send().await.unwrap()
}

async fn find_by_email(app: &common::TestApp, token: &str, email: &str) -> Option<Value> {
    let resp = app
        .client
        .get(format!("{}/v1/contact", app.server_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let list: Vec<Value> = resp.json().await.unwrap();
    list.into_iter().find(|s| s["email"] == email)
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_submit_round_trip() {
    let app = common::TestApp::spawn().await;
    let token = common::session_token(Role::Admin);
    let run_id = Uuid::new_v4().to_string()[..8].to_string();
    let email = unique_email(&run_id);

    let before = OffsetDateTime::now_utc();
    let resp = submit(&app, &email).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Mensagem enviada com sucesso!");

    // The new record shows up in the admin inbox with status `new` and a
    // createdAt inside the call's time window.
    let record = find_by_email(&app, &token, &email).await.expect("Submission missing from inbox");
    assert_eq!(record["status"], "new");
    assert_eq!(record["statusLabel"], "Nova");
    assert_eq!(record["name"], "Ana Silva");

    let created_at =
        OffsetDateTime::parse(record["createdAt"].as_str().unwrap(), &Rfc3339).unwrap();
    let after = OffsetDateTime::now_utc();
    assert!(created_at >= before - time::Duration::seconds(1) && created_at <= after);

    // Walk the status through read and replied via getById.
    let id = record["id"].as_i64().unwrap();
    for (status, label) in [("read", "Lida"), ("replied", "Respondida")] {
        let resp = app
            .client
            .put(format!("{}/v1/contact/{id}/status", app.server_url))
            .bearer_auth(&token)
            .json(&json!({ "status": status }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Status atualizado com sucesso!");

        let resp = app
            .client
            .get(format!("{}/v1/contact/{id}", app.server_url))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let fetched: Value = resp.json().await.unwrap();
        assert_eq!(fetched["status"], status);
        assert_eq!(fetched["statusLabel"], label);
    }
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_update_status_is_idempotent() {
    let app = common::TestApp::spawn().await;
    let token = common::session_token(Role::Admin);
    let run_id = Uuid::new_v4().to_string()[..8].to_string();
    let email = unique_email(&run_id);

    assert_eq!(submit(&app, &email).await.status(), StatusCode::CREATED);
    let record = find_by_email(&app, &token, &email).await.unwrap();
    let id = record["id"].as_i64().unwrap();

    for _ in 0..2 {
        let resp = app
            .client
            .put(format!("{}/v1/contact/{id}/status", app.server_url))
            .bearer_auth(&token)
            .json(&json!({ "status": "read" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let record = find_by_email(&app, &token, &email).await.unwrap();
    assert_eq!(record["status"], "read");
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_absent_ids_return_not_found() {
    let app = common::TestApp::spawn().await;
    let token = common::session_token(Role::Admin);

    let resp = app
        .client
        .get(format!("{}/v1/contact/9223372036854775807", app.server_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .client
        .put(format!("{}/v1/contact/9223372036854775807/status", app.server_url))
        .bearer_auth(&token)
        .json(&json!({ "status": "read" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_invalid_submit_persists_nothing() {
    let app = common::TestApp::spawn().await;
    let run_id = Uuid::new_v4().to_string()[..8].to_string();
    let email = unique_email(&run_id);

    let payload = json!({
        "name": "Ana Silva",
        "email": email,
        "message": "curta"
    });
    let resp =
        app.client.post(format!("{}/v1/contact", app.server_url)).json(&payload).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions WHERE email = $1")
            .bind(&email)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_duplicate_submissions_are_permitted() {
    let app = common::TestApp::spawn().await;
    let run_id = Uuid::new_v4().to_string()[..8].to_string();
    let email = unique_email(&run_id);

    assert_eq!(submit(&app, &email).await.status(), StatusCode::CREATED);
    assert_eq!(submit(&app, &email).await.status(), StatusCode::CREATED);

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions WHERE email = $1")
            .bind(&email)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn test_inbox_lists_newest_first() {
    let app = common::TestApp::spawn().await;
    let token = common::session_token(Role::Admin);
    let run_id = Uuid::new_v4().to_string()[..8].to_string();

    let first = format!("primeiro+{run_id}@example.com");
    let second = format!("segundo+{run_id}@example.com");
    assert_eq!(submit(&app, &first).await.status(), StatusCode::CREATED);
    assert_eq!(submit(&app, &second).await.status(), StatusCode::CREATED);

    let resp = app
        .client
        .get(format!("{}/v1/contact", app.server_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let list: Vec<Value> = resp.json().await.unwrap();

    let pos_first = list.iter().position(|s| s["email"] == first.as_str()).unwrap();
    let pos_second = list.iter().position(|s| s["email"] == second.as_str()).unwrap();
    assert!(pos_second < pos_first, "Newer submission should come first");
}
