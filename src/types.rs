//! Request and response payloads for the Aletheia API.
//!
//! The clients return raw `serde_json::Value` bodies; the typed structs here are
//! available through `sign_typed` / `verify_typed` for callers that want them.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/sign`.
///
/// Optional fields are omitted from the JSON when unset or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub response: String,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub policy_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub request_id: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl SignRequest {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            ..Default::default()
        }
    }

    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn policy_id(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = Some(policy_id.into());
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// Response of `POST /api/sign`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignResponse {
    pub id: i64,
    pub response_hash: String,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub tsa_token: Option<String>,
    #[serde(default)]
    pub claim: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub policy_version: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `GET /api/ai/verify/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub id: i64,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    pub response_hash: String,
    #[serde(default)]
    pub computed_hash: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub tsa_token: Option<String>,
    #[serde(default)]
    pub llm_model: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub claim: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub policy_version: Option<String>,
    #[serde(default)]
    pub hash_match: Option<bool>,
    /// `"valid"`, `"invalid"` or `"n_a"`.
    #[serde(default)]
    pub signature_valid: Option<String>,
    #[serde(default)]
    pub policy_coverage: Option<f64>,
    #[serde(default)]
    pub policy_rules_evaluated: Option<Vec<PolicyRuleResult>>,
    #[serde(default)]
    pub signature_pqc: Option<String>,
    #[serde(default)]
    pub pqc_algorithm: Option<String>,
}

impl VerifyResponse {
    /// Stored hash matches and the signature checked out.
    pub fn is_verified(&self) -> bool {
        self.hash_match == Some(true) && self.signature_valid.as_deref() == Some("valid")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRuleResult {
    pub rule_id: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sign_request_omits_unset_fields() {
        let body = serde_json::to_value(SignRequest::new("hello")).unwrap();
        assert_eq!(body, json!({"response": "hello"}));
    }

    #[test]
    fn sign_request_omits_empty_fields() {
        let req = SignRequest::new("hello").model_id("").policy_id("policy-1").prompt("");
        let body = serde_json::to_value(req).unwrap();
        assert_eq!(body, json!({"response": "hello", "policyId": "policy-1"}));
    }

    #[test]
    fn sign_request_uses_camel_case_keys() {
        let req = SignRequest::new("hello")
            .model_id("external")
            .policy_id("policy-1")
            .prompt("what?")
            .request_id("req-9");
        let body = serde_json::to_value(req).unwrap();
        assert_eq!(
            body,
            json!({
                "response": "hello",
                "modelId": "external",
                "policyId": "policy-1",
                "prompt": "what?",
                "requestId": "req-9"
            })
        );
    }

    #[test]
    fn verify_response_tolerates_nulls() {
        let body = json!({
            "id": 7,
            "prompt": "p",
            "response": "r",
            "responseHash": "abc",
            "signature": null,
            "tsaToken": null,
            "llmModel": "gpt-4o",
            "createdAt": "2026-01-01T00:00:00Z",
            "hashMatch": true,
            "signatureValid": "n_a",
            "policyRulesEvaluated": [{"ruleId": "R1", "status": "pass"}]
        });
        let resp: VerifyResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.id, 7);
        assert_eq!(resp.signature, None);
        assert_eq!(resp.policy_rules_evaluated.as_ref().map(Vec::len), Some(1));
        assert!(!resp.is_verified());
    }
}
