use reqwest::Client;

use tsuzuki_core::config::QueryVariables;
use tsuzuki_core::models::MediaListEntry;

use super::error::AniListError;
use super::types::{GraphQLResponse, PageResponse};

pub const API_URL: &str = "https://graphql.anilist.co";

const CURRENT_LIST_QUERY: &str = r#"
query ($username: String, $type: MediaType, $sort: [MediaListSort], $perPage: Int) {
    Page(page: 1, perPage: $perPage) {
        mediaList(userName: $username, type: $type, status_in: CURRENT, sort: $sort) {
            progress
            media {
                id
                title { english romaji }
                coverImage { medium }
                status
                episodes
                chapters
                nextAiringEpisode { timeUntilAiring episode }
            }
            user {
                options { profileColor }
            }
        }
    }
}
"#;

/// AniList GraphQL API client. Public list queries need no token.
pub struct AniListClient {
    endpoint: String,
    http: Client,
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AniListClient {
    pub fn new() -> Self {
        Self::with_endpoint(API_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    async fn graphql_request(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<String, AniListError> {
        tracing::debug!(operation, endpoint = %self.endpoint, "AniList GraphQL request");

        let resp = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(AniListError::Api {
                status,
                message: body,
            });
        }

        let body = resp.text().await?;
        tracing::debug!(operation, bytes = body.len(), "AniList GraphQL response");
        Ok(body)
    }

    /// Fetch one page of the user's in-progress list, `per_page` entries long.
    pub async fn current_list(
        &self,
        variables: &QueryVariables,
    ) -> Result<Vec<MediaListEntry>, AniListError> {
        let variables =
            serde_json::to_value(variables).map_err(|e| AniListError::Parse(e.to_string()))?;
        let body = self
            .graphql_request("CurrentList", CURRENT_LIST_QUERY, variables)
            .await?;
        parse_response(&body)
    }
}

/// Parse a current-list response body into core entries, in list order.
pub fn parse_response(body: &str) -> Result<Vec<MediaListEntry>, AniListError> {
    let resp: GraphQLResponse<PageResponse> =
        serde_json::from_str(body).map_err(|e| AniListError::Parse(e.to_string()))?;

    let errors = resp.errors.unwrap_or_default();
    let Some(data) = resp.data else {
        if errors.is_empty() {
            return Err(AniListError::Parse("response has no data".into()));
        }
        let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
        return Err(AniListError::GraphQl(messages.join("; ")));
    };
    for error in &errors {
        tracing::warn!(message = %error.message, "AniList returned a partial error");
    }

    Ok(data
        .page
        .media_list
        .into_iter()
        .map(|e| e.into_entry())
        .collect())
}
