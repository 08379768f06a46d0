//! Conversational-platform webhook envelope.
//!
//! Decodes a Dialogflow-style fulfillment request into an intent name and a
//! [`Query`], and encodes a [`Reply`] as the matching response. Transport
//! (HTTP listener, authentication) is left to the caller.
//!
//! ```text
//! {                                          {
//!   "queryResult": {                           "fulfillmentText": "a\nb",
//!     "queryText": "who wrote 1984",   ──▶     "fulfillmentMessages": [
//!     "parameters": { "book_info": "1984" },     { "text": { "text": ["a"] } },
//!     "intent": { "displayName": "..." }         { "text": { "text": ["b"] } }
//!   }                                          ]
//! }                                          }
//! ```

use crate::engine::Trace;
use crate::{Error, IntentRegistry, KnowledgeBase, Param, Parameters, Query, Reply, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub response_id: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    pub query_result: QueryResult,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub query_text: String,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub intent: Option<IntentInfo>,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentInfo {
    #[serde(default)]
    pub name: Option<String>,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
    pub fulfillment_messages: Vec<FulfillmentMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FulfillmentMessage {
    pub text: TextMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextMessage {
    pub text: Vec<String>,
}

impl WebhookRequest {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(Error::Request)
    }

    /// Intent display name, if the platform sent one.
    pub fn intent(&self) -> Option<&str> {
        self.query_result.intent.as_ref().map(|i| i.display_name.as_str())
    }

    /// The engine-facing query: raw utterance plus known parameters.
    pub fn query(&self) -> Query {
        Query { text: self.query_result.query_text.clone(), params: parameters_from(&self.query_result.parameters) }
    }
}

impl From<&Reply> for WebhookResponse {
    fn from(reply: &Reply) -> Self {
        WebhookResponse {
            fulfillment_text: reply.text(),
            fulfillment_messages: reply
                .messages
                .iter()
                .map(|m| FulfillmentMessage { text: TextMessage { text: vec![m.clone()] } })
                .collect(),
        }
    }
}

/// Read the known parameters out of the platform's parameter object.
///
/// Strings are taken as-is and arrays contribute their first string element.
/// Anything else (null, numbers, nested objects) counts as absent, as do
/// unknown parameter names.
pub fn parameters_from(map: &Map<String, Value>) -> Parameters {
    let mut params = Parameters::new();

    for param in Param::ALL {
        let value = match map.get(param.name()) {
            Some(Value::String(s)) => Some(s.as_str()),
            Some(Value::Array(items)) => items.iter().find_map(Value::as_str),
            _ => None,
        };

        if let Some(value) = value {
            params.set(param, value);
        }
    }

    params
}

/// Dispatch a decoded request through `registry`.
pub fn handle_request(
    request: &WebhookRequest,
    registry: &IntentRegistry,
    kb: &KnowledgeBase,
) -> Result<WebhookResponse> {
    let intent = request.intent().ok_or(Error::MissingIntent)?;
    let query = request.query();

    tracing::debug!(
        intent,
        session = request.session.as_deref().unwrap_or("-"),
        params = query.params.iter().count(),
        "webhook request"
    );

    let reply = registry.dispatch(intent, &query, kb, &mut Trace::new())?;
    Ok(WebhookResponse::from(&reply))
}

/// Decode `body`, dispatch it through the standard registry and return the
/// response.
pub fn handle(body: &str, kb: &KnowledgeBase) -> Result<WebhookResponse> {
    let request = WebhookRequest::from_json(body)?;
    handle_request(&request, IntentRegistry::global(), kb)
}
