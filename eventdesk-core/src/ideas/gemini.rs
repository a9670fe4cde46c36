//! Gemini `generateContent` transport.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GenerationFailure, GenerationRequest, TextGenerator};

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<PartOut<'a>>,
}

#[derive(Debug, Serialize)]
struct PartOut<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartIn>,
}

#[derive(Debug, Deserialize)]
struct PartIn {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;

        Ok(GeminiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

fn request_body(request: &GenerationRequest) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user"),
            parts: vec![PartOut {
                text: &request.prompt,
            }],
        }],
        system_instruction: Content {
            role: None,
            parts: vec![PartOut {
                text: &request.system_instruction,
            }],
        },
        generation_config: GenerationConfig {
            temperature: request.temperature,
            top_k: request.top_k,
        },
    }
}

/// Join the text parts of the first candidate.
fn response_text(response: GenerateContentResponse) -> Option<String> {
    let parts = response.candidates.into_iter().next()?.content?.parts;
    let text: String = parts.into_iter().filter_map(|p| p.text).collect();
    (!text.is_empty()).then_some(text)
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationFailure> {
        let response = self
            .client
            .post(self.url(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(request))
            .send()
            .await
            .map_err(|e| GenerationFailure::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(GenerationFailure::new(message));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationFailure::new(format!("Failed to parse response: {e}")))?;

        response_text(body).ok_or_else(|| GenerationFailure::new("The response contained no text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ideas::{SYSTEM_INSTRUCTION, TEMPERATURE, TOP_K, build_prompt};

    fn sample_request() -> GenerationRequest {
        GenerationRequest {
            model: "gemini-2.5-flash".to_string(),
            prompt: build_prompt("Vintage Circus"),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            temperature: TEMPERATURE,
            top_k: TOP_K,
        }
    }

    #[test]
    fn test_request_body_shape() {
        let request = sample_request();
        let body = serde_json::to_value(request_body(&request)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], request.prompt);
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], SYSTEM_INSTRUCTION);
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        let client = GeminiClient::new("https://example.test/", "key".into()).unwrap();
        assert_eq!(
            client.url("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_response_text_joins_first_candidate_parts() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"role":"model","parts":[{"text":"1. Lanterns\n"},{"text":"2. Juggling"}]}},
                {"content":{"parts":[{"text":"ignored"}]}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response_text(body).as_deref(), Some("1. Lanterns\n2. Juggling"));
    }

    #[test]
    fn test_response_without_text_is_none() {
        let body: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(response_text(body), None);

        let body: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(response_text(body), None);
    }

    #[test]
    fn test_error_body_message_is_extracted() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"error":{"code":429,"message":"rate limited","status":"RESOURCE_EXHAUSTED"}}"#,
        )
        .unwrap();
        assert_eq!(body.error.message.as_deref(), Some("rate limited"));
    }
}
