//! Integration tests for the chat proxy endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, test_app};

    fn chat_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .uri("/chat")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn iam_mock(server: &mut mockito::ServerGuard) -> mockito::Mock {
        server
            .mock("POST", "/identity/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token": "tok-123"}"#)
    }

    /// Tests that a missing apiKey is rejected before any outbound call
    #[tokio::test]
    async fn it_rejects_a_missing_api_key_without_calling_upstream() {
        let mut server = mockito::Server::new_async().await;
        let mock = iam_mock(&mut server).expect(0).create_async().await;

        let app = test_app(&server.url(), &server.url());
        let response = app
            .oneshot(chat_request(serde_json::json!({
                "messages": [{"role": "user", "content": "Hello"}]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        mock.assert_async().await;
    }

    /// Tests that an empty apiKey is rejected before any outbound call
    #[tokio::test]
    async fn it_rejects_an_empty_api_key_without_calling_upstream() {
        let mut server = mockito::Server::new_async().await;
        let mock = iam_mock(&mut server).expect(0).create_async().await;

        let app = test_app(&server.url(), &server.url());
        let response = app
            .oneshot(chat_request(serde_json::json!({
                "apiKey": "  ",
                "messages": [{"role": "user", "content": "Hello"}]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("Missing apiKey"));
        mock.assert_async().await;
    }

    /// Tests that messages must be a sequence
    #[tokio::test]
    async fn it_rejects_messages_that_are_not_a_sequence() {
        let mut server = mockito::Server::new_async().await;
        let mock = iam_mock(&mut server).expect(0).create_async().await;

        let app = test_app(&server.url(), &server.url());
        let response = app
            .oneshot(chat_request(serde_json::json!({
                "apiKey": "key",
                "messages": "Hello"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        mock.assert_async().await;
    }

    /// Tests the full relay: token exchange, completion, extraction
    #[tokio::test]
    async fn it_relays_the_first_completion_text() {
        let mut server = mockito::Server::new_async().await;
        let _iam = iam_mock(&mut server).create_async().await;
        let _completion = server
            .mock("POST", "/ml/v1/text/chat")
            .match_query(mockito::Matcher::Any)
            .match_header("authorization", "Bearer tok-123")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model_id": "ibm/granite-3-8b-instruct",
                "project_id": "test-project",
                "messages": [
                    {"role": "system", "content": "Rewrite this."},
                    {"role": "user", "content": "send the report"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [{"index": 0, "message": {"role": "assistant", "content": "Here is your email."}}],
                    "usage": {"prompt_tokens": 20, "completion_tokens": 8, "total_tokens": 28}
                }"#,
            )
            .create_async()
            .await;

        let app = test_app(&server.url(), &server.url());
        let response = app
            .oneshot(chat_request(serde_json::json!({
                "apiKey": "good-key",
                "systemPrompt": "Rewrite this.",
                "messages": [{"role": "user", "content": "send the report"}]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"reply\":\"Here is your email.\""));
        assert!(body.contains("\"total_tokens\":28"));
    }

    /// Tests that the default system prompt is used when none is sent
    #[tokio::test]
    async fn it_prepends_the_default_system_prompt() {
        let mut server = mockito::Server::new_async().await;
        let _iam = iam_mock(&mut server).create_async().await;
        let _completion = server
            .mock("POST", "/ml/v1/text/chat")
            .match_query(mockito::Matcher::Any)
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": "Hello"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "Hi"}}]}"#)
            .create_async()
            .await;

        let app = test_app(&server.url(), &server.url());
        let response = app
            .oneshot(chat_request(serde_json::json!({
                "apiKey": "good-key",
                "messages": [{"role": "user", "content": "Hello"}]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"reply\":\"Hi\""));
    }

    /// Tests that an upstream completion error status is relayed
    #[tokio::test]
    async fn it_relays_an_upstream_error_status_and_message() {
        let mut server = mockito::Server::new_async().await;
        let _iam = iam_mock(&mut server).create_async().await;
        let _completion = server
            .mock("POST", "/ml/v1/text/chat")
            .match_query(mockito::Matcher::Any)
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errors": [{"code": "token_quota_reached", "message": "Token quota exceeded"}]}"#)
            .create_async()
            .await;

        let app = test_app(&server.url(), &server.url());
        let response = app
            .oneshot(chat_request(serde_json::json!({
                "apiKey": "good-key",
                "messages": [{"role": "user", "content": "Hello"}]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("Token quota exceeded"));
    }

    /// Tests that a failed token exchange becomes a generic 500
    #[tokio::test]
    async fn it_hides_token_exchange_failures_behind_a_generic_error() {
        let mut server = mockito::Server::new_async().await;
        let _iam = server
            .mock("POST", "/identity/token")
            .with_status(400)
            .with_body(r#"{"errorCode": "BXNIM0415E", "errorMessage": "Provided API key could not be found."}"#)
            .create_async()
            .await;

        let app = test_app(&server.url(), &server.url());
        let response = app
            .oneshot(chat_request(serde_json::json!({
                "apiKey": "bogus-key",
                "messages": [{"role": "user", "content": "Hello"}]
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("Something went wrong"));
        assert!(!body.contains("BXNIM0415E"));
    }
}
