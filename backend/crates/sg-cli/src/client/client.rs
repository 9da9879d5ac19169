use crate::{CliClientResult, ClientError};

use sg_core::{GoalCandidate, GoalDraft, GoalDto, SprintDraft, SprintDto};

use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// HTTP client for the sprint goals REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

/// Error body returned by the server for any non-2xx response.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

impl Client {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send the request, map error bodies to `ClientError::Api` and decode success bodies.
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Option<ErrorBody> = serde_json::from_str(&text).ok();
            let (code, message, errors) = match body {
                Some(b) => (
                    b.code.unwrap_or_else(|| "UNKNOWN".to_string()),
                    b.message.unwrap_or_else(|| status.to_string()),
                    b.errors,
                ),
                None => ("UNKNOWN".to_string(), status.to_string(), BTreeMap::new()),
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
                errors,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    // =========================================================================
    // Sprint Operations
    // =========================================================================

    pub async fn list_sprints(&self) -> CliClientResult<Vec<SprintDto>> {
        let req = self.request(Method::GET, "/api/sprints");
        self.execute(req).await
    }

    pub async fn get_sprint(&self, id: &str) -> CliClientResult<SprintDto> {
        let req = self.request(Method::GET, &format!("/api/sprints/{}", id));
        self.execute(req).await
    }

    /// Create a sprint from an already validated draft.
    pub async fn create_sprint(&self, draft: &SprintDraft) -> CliClientResult<SprintDto> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateRequest<'a> {
            pod_name: &'a str,
            start_date: String,
            end_date: String,
            goals: Vec<GoalCandidate>,
        }

        let body = CreateRequest {
            pod_name: &draft.pod_name,
            start_date: draft.start_date.format(DATE_FORMAT).to_string(),
            end_date: draft.end_date.format(DATE_FORMAT).to_string(),
            goals: draft.goals.iter().map(to_candidate).collect(),
        };
        let req = self.request(Method::POST, "/api/sprints").json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Goal Operations
    // =========================================================================

    pub async fn list_goals(&self, sprint_id: &str) -> CliClientResult<Vec<GoalDto>> {
        let req = self.request(Method::GET, &format!("/api/sprints/{}/goals", sprint_id));
        self.execute(req).await
    }

    /// Replace the full goal list, echoing known ids so they are kept.
    pub async fn replace_goals(
        &self,
        sprint_id: &str,
        goals: &[GoalDraft],
    ) -> CliClientResult<SprintDto> {
        #[derive(Serialize)]
        struct UpdateRequest {
            goals: Vec<GoalCandidate>,
        }

        let body = UpdateRequest {
            goals: goals.iter().map(to_candidate).collect(),
        };
        let req = self
            .request(Method::PUT, &format!("/api/sprints/{}/goals", sprint_id))
            .json(&body);
        self.execute(req).await
    }
}

fn to_candidate(draft: &GoalDraft) -> GoalCandidate {
    GoalCandidate {
        id: draft.id.map(|id| id.to_string()),
        description: Some(draft.description.clone()),
        goal_type: Some(draft.goal_type.as_str().to_string()),
        status: Some(draft.status.as_str().to_string()),
    }
}
