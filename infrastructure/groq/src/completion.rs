use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::services::CompletionService;

use crate::client::GroqClient;

/// `CompletionService` backed by the Groq chat completions endpoint.
///
/// One request per call, no streaming and no retries.
pub struct GroqCompletionService {
    client: GroqClient,
}

impl GroqCompletionService {
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    fn build_body(&self, system_prompt: &str, user_prompt: &str, temperature: f32) -> Value {
        json!({
            "model": self.client.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt},
            ],
            "temperature": temperature,
        })
    }

    fn extract_content(data: &Value) -> Result<String, RecommendationError> {
        let choice = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or(RecommendationError::CompletionFailed)?;

        choice["message"]["content"]
            .as_str()
            .map(|c| c.to_string())
            .ok_or(RecommendationError::EmptyCompletion)
    }
}

#[async_trait]
impl CompletionService for GroqCompletionService {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, RecommendationError> {
        let body = self.build_body(system_prompt, user_prompt, temperature);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Groq request failed: {e}");
                RecommendationError::CompletionFailed
            })?;

        if !response.status().is_success() {
            tracing::error!("Groq responded with status {}", response.status());
            return Err(RecommendationError::CompletionFailed);
        }

        let data: Value = response.json().await.map_err(|e| {
            tracing::error!("Groq response was not JSON: {e}");
            RecommendationError::CompletionFailed
        })?;

        Self::extract_content(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> GroqCompletionService {
        GroqCompletionService::new(GroqClient::new("key".to_string()).with_model("test-model"))
    }

    #[test]
    fn should_build_single_system_and_user_message_body() {
        let body = service().build_body("You are a product recommendation engine.", "prompt", 0.2);

        assert_eq!(body["model"], "test-model");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(
            body["messages"][0]["content"],
            "You are a product recommendation engine."
        );
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "prompt");
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
        assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
        assert!(body.get("stream").is_none());
    }

    #[test]
    fn should_extract_first_choice_content() {
        let data = json!({
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "[3]"}},
                {"index": 1, "message": {"role": "assistant", "content": "[4]"}}
            ]
        });

        assert_eq!(GroqCompletionService::extract_content(&data).unwrap(), "[3]");
    }

    #[test]
    fn should_fail_when_choices_are_missing() {
        let no_choices = json!({"error": {"message": "rate limited"}});
        let empty_choices = json!({"choices": []});

        assert!(matches!(
            GroqCompletionService::extract_content(&no_choices),
            Err(RecommendationError::CompletionFailed)
        ));
        assert!(matches!(
            GroqCompletionService::extract_content(&empty_choices),
            Err(RecommendationError::CompletionFailed)
        ));
    }

    #[test]
    fn should_report_empty_completion_when_content_is_null() {
        let data = json!({"choices": [{"message": {"role": "assistant", "content": null}}]});

        assert!(matches!(
            GroqCompletionService::extract_content(&data),
            Err(RecommendationError::EmptyCompletion)
        ));
    }

    #[tokio::test]
    async fn should_fail_when_endpoint_is_unreachable() {
        let service = GroqCompletionService::new(
            GroqClient::new("key".to_string()).with_base_url("http://127.0.0.1:1"),
        );

        let result = service.complete("system", "user", 0.2).await;

        assert!(matches!(result, Err(RecommendationError::CompletionFailed)));
    }
}
