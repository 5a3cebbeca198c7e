use super::helpers::{send, spawn_app};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::Utc;
use uuid::Uuid;
use web::domain::{
    activity::entity::ADDED_COMMENT,
    tweet::{comment::Comment, entity::Tweet},
};

fn seed_tweet(app: &super::helpers::TestApp) -> Tweet {
    let tweet = Tweet {
        id: Uuid::now_v7(),
        body: "Shipping day".into(),
        user_id: Uuid::now_v7(),
        created_at: Utc::now(),
    };
    app.tweets.tweets.lock().unwrap().push(tweet.clone());
    tweet
}

fn post_comment(tweet_id: Uuid, bearer: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/tweets/{}/comments", tweet_id))
        .header(header::AUTHORIZATION, bearer)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

fn delete_comment(tweet_id: Uuid, comment_id: Uuid, bearer: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/tweets/{}/comments/{}", tweet_id, comment_id))
        .header(header::AUTHORIZATION, bearer)
        .body(Body::empty())
        .expect("failed to build request")
}

#[tokio::test]
async fn comment_is_stored_and_tweet_author_notified() {
    let app = spawn_app();
    let tweet = seed_tweet(&app);

    let res = send(&app.app, post_comment(tweet.id, &app.bearer(), "body=Congrats")).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], "/");

    let comments = app.tweets.comments.lock().unwrap().clone();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].body, "Congrats");
    assert_eq!(comments[0].user_id, app.user_id);

    let activities = app.activities.rows.lock().unwrap().clone();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].activity_stream, ADDED_COMMENT);
    assert_eq!(activities[0].receiver, tweet.user_id);
}

#[tokio::test]
async fn blank_comment_redirects_without_storing() {
    let app = spawn_app();
    let tweet = seed_tweet(&app);

    let res = send(&app.app, post_comment(tweet.id, &app.bearer(), "body=++")).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert!(app.tweets.comments.lock().unwrap().is_empty());
    assert!(app.activities.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn comment_on_unknown_tweet_is_not_found() {
    let app = spawn_app();

    let res = send(
        &app.app,
        post_comment(Uuid::now_v7(), &app.bearer(), "body=hello"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(app.tweets.comments.lock().unwrap().is_empty());
}

#[tokio::test]
async fn destroy_removes_comment_of_tweet() {
    let app = spawn_app();
    let tweet = seed_tweet(&app);
    let comment = Comment::new(tweet.id, app.user_id, "typo".into());
    app.tweets.comments.lock().unwrap().push(comment.clone());

    let res = send(&app.app, delete_comment(tweet.id, comment.id, &app.bearer())).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(app.tweets.comments.lock().unwrap().is_empty());
}

#[tokio::test]
async fn destroy_unknown_comment_is_bad_request() {
    let app = spawn_app();
    let tweet = seed_tweet(&app);

    let res = send(&app.app, delete_comment(tweet.id, Uuid::now_v7(), &app.bearer())).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
