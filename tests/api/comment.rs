use crate::helpers;
use serde_json::Value;
use uuid::Uuid;

fn comment_payload(content: &str) -> Value {
    serde_json::json!({
        "userId": Uuid::new_v4().to_string(),
        "topicId": Uuid::new_v4().to_string(),
        "content": content,
    })
}

// ============================================================================
// Create Comment
// ============================================================================

#[tokio::test]
async fn create_comment_returns_200_with_empty_body_for_valid_input() {
    let app = helpers::spawn_app().await;
    let user_id = Uuid::new_v4().to_string();
    let topic_id = Uuid::new_v4().to_string();

    let payload = serde_json::json!({
        "userId": user_id,
        "topicId": topic_id,
        "content": "This is a test comment",
    });

    let response = app.create_comment(&payload).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(Some(0), response.content_length());

    let body: Value = app
        .get_comments_for_topic(&topic_id)
        .await
        .json()
        .await
        .unwrap();
    let comments = body.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["userId"], user_id);
    assert_eq!(comments[0]["topicId"], topic_id);
    assert_eq!(comments[0]["content"], "This is a test comment");
    assert!(Uuid::parse_str(comments[0]["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn create_comment_returns_400_for_missing_or_blank_fields() {
    let app = helpers::spawn_app().await;
    let user_id = Uuid::new_v4().to_string();
    let topic_id = Uuid::new_v4().to_string();

    let test_cases = vec![
        (
            serde_json::json!({ "topicId": topic_id, "content": "hello" }),
            "missing userId",
        ),
        (
            serde_json::json!({ "userId": user_id, "content": "hello" }),
            "missing topicId",
        ),
        (
            serde_json::json!({ "userId": user_id, "topicId": topic_id }),
            "missing content",
        ),
        (
            serde_json::json!({ "userId": user_id, "topicId": topic_id, "content": "   " }),
            "whitespace-only content",
        ),
        (
            serde_json::json!({ "userId": user_id, "topicId": topic_id, "content": "<p></p>" }),
            "content made only of tags",
        ),
    ];

    for (payload, description) in test_cases {
        let response = app.create_comment(&payload).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Expected 400 when the payload has {description}"
        );

        let body: Value = response.json().await.unwrap();
        assert!(body["message"].as_str().unwrap().starts_with("Invalid comment"));
    }

    let body: Value = app.get_comments().await.json().await.unwrap();
    assert!(body.as_array().unwrap().is_empty(), "Nothing should be stored");
}

#[tokio::test]
async fn create_comment_returns_400_for_malformed_identifier() {
    let app = helpers::spawn_app().await;

    let payload = serde_json::json!({
        "userId": "not-a-uuid",
        "topicId": Uuid::new_v4().to_string(),
        "content": "hello",
    });

    let response = app.create_comment(&payload).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid userId: must be a valid UUID");
}

#[tokio::test]
async fn create_comment_returns_400_for_malformed_json() {
    let app = helpers::spawn_app().await;

    let response = app.send_raw_post("comments", "{\"content\": ").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn create_comment_strips_html_tags_before_storing() {
    let app = helpers::spawn_app().await;

    let comment = app.create_sample_comment("<b>hi</b>").await;

    assert_eq!(comment["content"], "hi");
}

// ============================================================================
// Get Comments
// ============================================================================

#[tokio::test]
async fn get_comments_returns_every_comment() {
    let app = helpers::spawn_app().await;

    for i in 0..3 {
        let response = app.create_comment(&comment_payload(&format!("Comment {i}"))).await;
        assert_eq!(response.status().as_u16(), 200);
    }

    let response = app.get_comments().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let contents: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["Comment 0", "Comment 1", "Comment 2"]);
}

#[tokio::test]
async fn get_comments_returns_empty_array_when_nothing_is_stored() {
    let app = helpers::spawn_app().await;

    let response = app.get_comments().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_comments_for_topic_only_returns_that_topic() {
    let app = helpers::spawn_app().await;
    let on_topic = app.create_sample_comment("on topic").await;
    app.create_sample_comment("elsewhere").await;

    let response = app
        .get_comments_for_topic(on_topic["topicId"].as_str().unwrap())
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap(), &vec![on_topic]);
}

#[tokio::test]
async fn get_comments_for_topic_returns_400_for_malformed_topic_id() {
    let app = helpers::spawn_app().await;

    let response = app.get_comments_for_topic("nope").await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn get_comments_returns_json_400_for_repeated_topic_id() {
    let app = helpers::spawn_app().await;
    let topic_id = Uuid::new_v4();

    let response = app
        .send_get(&format!("comments?topicId={topic_id}&topicId={topic_id}"))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], 400);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn comments_collection_accepts_a_trailing_slash() {
    let app = helpers::spawn_app().await;

    let response = app.send_post("comments/", &comment_payload("slashed")).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.send_get("comments/").await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_comment_returns_400_for_id_padded_with_spaces() {
    let app = helpers::spawn_app().await;
    let created = app.create_sample_comment("exact ids only").await;
    let id = created["id"].as_str().unwrap();

    let response = app.get_comment(&format!("%20{id}%20")).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn get_comment_returns_200_with_the_comment() {
    let app = helpers::spawn_app().await;
    let created = app.create_sample_comment("look me up").await;

    let response = app.get_comment(created["id"].as_str().unwrap()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, created);
}

#[tokio::test]
async fn get_comment_returns_404_for_unknown_id() {
    let app = helpers::spawn_app().await;

    let response = app.get_comment(&Uuid::new_v4().to_string()).await;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "comment not found");
}

#[tokio::test]
async fn get_comment_returns_400_for_malformed_id() {
    let app = helpers::spawn_app().await;

    let response = app.get_comment("not-a-uuid").await;

    assert_eq!(response.status().as_u16(), 400);
}

// ============================================================================
// Update Comment
// ============================================================================

#[tokio::test]
async fn update_comment_replaces_every_field_and_keeps_the_id() {
    let app = helpers::spawn_app().await;
    let created = app.create_sample_comment("before").await;
    let id = created["id"].as_str().unwrap();

    let new_user_id = Uuid::new_v4().to_string();
    let new_topic_id = Uuid::new_v4().to_string();
    let payload = serde_json::json!({
        "userId": new_user_id,
        "topicId": new_topic_id,
        "content": "after",
    });

    let response = app.update_comment(id, &payload).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(Some(0), response.content_length());

    let body: Value = app.get_comment(id).await.json().await.unwrap();
    assert_eq!(body["id"], id);
    assert_eq!(body["userId"], new_user_id);
    assert_eq!(body["topicId"], new_topic_id);
    assert_eq!(body["content"], "after");
}

#[tokio::test]
async fn update_comment_returns_400_for_blank_content() {
    let app = helpers::spawn_app().await;
    let created = app.create_sample_comment("keep me").await;
    let id = created["id"].as_str().unwrap();

    let response = app.update_comment(id, &comment_payload(" ")).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = app.get_comment(id).await.json().await.unwrap();
    assert_eq!(body["content"], "keep me");
}

#[tokio::test]
async fn update_comment_returns_404_for_unknown_id() {
    let app = helpers::spawn_app().await;

    let response = app
        .update_comment(&Uuid::new_v4().to_string(), &comment_payload("orphan"))
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

// ============================================================================
// Delete Comment
// ============================================================================

#[tokio::test]
async fn delete_comment_removes_comment_successfully() {
    let app = helpers::spawn_app().await;
    let created = app.create_sample_comment("To be deleted").await;
    let id = created["id"].as_str().unwrap();

    let response = app.delete_comment(id).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.get_comment(id).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn delete_comment_returns_404_for_nonexistent_comment() {
    let app = helpers::spawn_app().await;

    let response = app.delete_comment(&Uuid::new_v4().to_string()).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn delete_comment_returns_400_for_malformed_id() {
    let app = helpers::spawn_app().await;

    let response = app.delete_comment("12345").await;

    assert_eq!(response.status().as_u16(), 400);
}
