use super::helpers::{expect_status, read_json, read_text, send, spawn_app, user};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::Utc;
use serde_json::Value;
use std::sync::atomic::Ordering;
use uuid::Uuid;
use web::domain::{
    activity::entity::SENT_MESSAGE, chat::entity::Chat, shared::list_options::ListOptions,
    user::entity::UserCriteria,
};

fn get(uri: &str, bearer: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, bearer)
        .body(Body::empty())
        .expect("failed to build request")
}

fn post_chat(bearer: &str, body: String, referer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/chats")
        .header(header::AUTHORIZATION, bearer)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(referer) = referer {
        builder = builder.header(header::REFERER, referer);
    }
    builder.body(Body::from(body)).expect("failed to build request")
}

fn chat(message: &str, receiver: Uuid, sender: Uuid) -> Chat {
    Chat {
        id: Uuid::now_v7(),
        message: message.to_string(),
        receiver,
        sender,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn index_lists_first_page_of_github_users() {
    let app = spawn_app();
    {
        let mut rows = app.users.rows.lock().unwrap();
        for i in 0..47 {
            rows.push(user(&format!("User{}", i), Some("octocat")));
        }
    }

    let res = expect_status(send(&app.app, get("/chat", &app.bearer())).await, StatusCode::OK).await;
    let html = read_text(res).await;

    assert!(html.contains("Chat User List"));
    assert!(html.contains("Page 1 of 5"));
    assert_eq!(html.matches("class=\"user\"").count(), 10);
    assert!(html.contains("?page=2"));

    let options = app.users.last_options.lock().unwrap().clone();
    assert_eq!(
        options,
        Some(ListOptions {
            criteria: UserCriteria::with_github(),
            page: Some(0),
            per_page: Some(10),
        })
    );
}

#[tokio::test]
async fn index_reads_requested_page_and_ignores_junk() {
    let app = spawn_app();
    {
        let mut rows = app.users.rows.lock().unwrap();
        for i in 0..25 {
            rows.push(user(&format!("User{}", i), Some("octocat")));
        }
    }

    let res = expect_status(
        send(&app.app, get("/chat?page=3", &app.bearer())).await,
        StatusCode::OK,
    )
    .await;
    let html = read_text(res).await;
    assert!(html.contains("Page 3 of 3"));
    assert_eq!(html.matches("class=\"user\"").count(), 5);

    let res = expect_status(
        send(&app.app, get("/chat?page=abc", &app.bearer())).await,
        StatusCode::OK,
    )
    .await;
    assert!(read_text(res).await.contains("Page 1 of 3"));
}

#[tokio::test]
async fn index_page_count_includes_users_without_github() {
    let app = spawn_app();
    {
        let mut rows = app.users.rows.lock().unwrap();
        rows.push(user("Linked", Some("linked")));
        for i in 0..20 {
            rows.push(user(&format!("Plain{}", i), None));
        }
    }

    let res = expect_status(send(&app.app, get("/chat", &app.bearer())).await, StatusCode::OK).await;
    let html = read_text(res).await;

    assert_eq!(html.matches("class=\"user\"").count(), 1);
    assert!(html.contains("Page 1 of 3"));
}

#[tokio::test]
async fn index_with_no_users_shows_empty_state() {
    let app = spawn_app();

    let res = expect_status(send(&app.app, get("/chat", &app.bearer())).await, StatusCode::OK).await;
    let html = read_text(res).await;

    assert!(html.contains("No users to chat with yet."));
    assert!(html.contains("Page 1 of 0"));
}

#[tokio::test]
async fn index_renders_error_view_when_count_fails() {
    let app = spawn_app();
    app.users
        .rows
        .lock()
        .unwrap()
        .push(user("Visible", Some("visible")));
    app.users.fail_count.store(true, Ordering::SeqCst);

    let res = send(&app.app, get("/chat", &app.bearer())).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = read_text(res).await;
    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("Visible"));
    assert!(!html.contains("store unavailable"));
}

#[tokio::test]
async fn index_renders_error_view_when_list_fails() {
    let app = spawn_app();
    app.users.fail_list.store(true, Ordering::SeqCst);

    let res = send(&app.app, get("/chat", &app.bearer())).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = read_text(res).await;
    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("Page 1 of"));
}

#[tokio::test]
async fn get_chat_renders_only_messages_for_receiver() {
    let app = spawn_app();
    let (alice, bob, sender) = (Uuid::now_v7(), Uuid::now_v7(), Uuid::now_v7());
    {
        let mut rows = app.chats.rows.lock().unwrap();
        rows.push(chat("hello alice", alice, sender));
        rows.push(chat("hello bob", bob, sender));
        rows.push(chat("again alice", alice, sender));
    }

    let res = expect_status(
        send(&app.app, get(&format!("/chat/get/{}", alice), &app.bearer())).await,
        StatusCode::OK,
    )
    .await;
    let html = read_text(res).await;

    assert!(html.contains("hello alice"));
    assert!(html.contains("again alice"));
    assert!(!html.contains("hello bob"));
}

async fn assert_invalid_id_view(res: axum::response::Response) {
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let content_type = res.headers()[header::CONTENT_TYPE]
        .to_str()
        .expect("content type")
        .to_string();
    assert!(content_type.starts_with("text/html"), "{}", content_type);

    let html = read_text(res).await;
    assert!(html.contains("Bad request"));
    assert!(html.contains("invalid id"));
    assert!(!html.contains("UUID parsing failed"));
    assert!(!html.contains("Cannot parse"));
}

#[tokio::test]
async fn get_chat_with_malformed_id_renders_error_view() {
    let app = spawn_app();
    let res = send(&app.app, get("/chat/get/u42", &app.bearer())).await;
    assert_invalid_id_view(res).await;
}

#[tokio::test]
async fn show_with_malformed_id_renders_error_view() {
    let app = spawn_app();
    let res = send(&app.app, get("/chat/not-a-chat", &app.bearer())).await;
    assert_invalid_id_view(res).await;
}

#[tokio::test]
async fn show_returns_loaded_chat_as_json() {
    let app = spawn_app();
    let stored = chat("hi there", Uuid::now_v7(), Uuid::now_v7());
    app.chats.rows.lock().unwrap().push(stored.clone());

    let res = expect_status(
        send(&app.app, get(&format!("/chat/{}", stored.id), &app.bearer())).await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;

    assert_eq!(body["id"], stored.id.to_string());
    assert_eq!(body["message"], "hi there");
    assert_eq!(body["receiver"], stored.receiver.to_string());
}

#[tokio::test]
async fn show_for_unknown_chat_is_not_found() {
    let app = spawn_app();

    let res = send(&app.app, get(&format!("/chat/{}", Uuid::now_v7()), &app.bearer())).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let html = read_text(res).await;
    assert!(html.contains("404"));
}

#[tokio::test]
async fn create_saves_chat_and_activity_then_returns_to_referrer() {
    let app = spawn_app();
    let receiver = Uuid::now_v7();

    let res = send(
        &app.app,
        post_chat(
            &app.bearer(),
            format!("body=Hello+there&receiver={}", receiver),
            Some("/chat?page=2"),
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], "/chat?page=2");

    let chats = app.chats.rows.lock().unwrap().clone();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].message, "Hello there");
    assert_eq!(chats[0].receiver, receiver);
    assert_eq!(chats[0].sender, app.user_id);

    let activities = app.activities.rows.lock().unwrap().clone();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].activity_stream, SENT_MESSAGE);
    assert_eq!(activities[0].activity_key, chats[0].id);
    assert_eq!(activities[0].sender, app.user_id);
    assert_eq!(activities[0].receiver, receiver);
}

#[tokio::test]
async fn create_without_referrer_returns_to_chat_index() {
    let app = spawn_app();

    let res = send(
        &app.app,
        post_chat(&app.bearer(), format!("body=hey&receiver={}", Uuid::now_v7()), None),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], "/chat");
}

#[tokio::test]
async fn create_still_redirects_when_activity_is_not_recorded() {
    let app = spawn_app();
    app.activities.fail_save.store(true, Ordering::SeqCst);

    let res = send(
        &app.app,
        post_chat(
            &app.bearer(),
            format!("body=hey&receiver={}", Uuid::now_v7()),
            Some("/chat"),
        ),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.chats.rows.lock().unwrap().len(), 1);
    assert!(app.activities.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_renders_error_view_when_chat_is_not_saved() {
    let app = spawn_app();
    app.chats.fail_save.store(true, Ordering::SeqCst);

    let res = send(
        &app.app,
        post_chat(
            &app.bearer(),
            format!("body=hey&receiver={}", Uuid::now_v7()),
            Some("/chat"),
        ),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = read_text(res).await;
    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("store unavailable"));
    assert_eq!(app.activities.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn create_rejects_blank_message_and_bad_receiver() {
    let app = spawn_app();

    let res = send(
        &app.app,
        post_chat(&app.bearer(), format!("body=+++&receiver={}", Uuid::now_v7()), None),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = send(
        &app.app,
        post_chat(&app.bearer(), "body=hi&receiver=nobody".to_string(), None),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert!(app.chats.rows.lock().unwrap().is_empty());
    assert!(app.activities.rows.lock().unwrap().is_empty());
}
