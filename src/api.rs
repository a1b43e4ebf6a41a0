use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SlackError};
use crate::types::{FilesListResponse, UsersListResponse};

pub struct SlackApi {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl SlackApi {
    pub fn new(base_url: &str, token: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SlackError::InvalidBaseUrl(format!(
                "{base_url} must start with http:// or https://"
            )));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(format!("slack_retention/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            token: token.to_string(),
        })
    }

    pub async fn users_list(&self) -> Result<UsersListResponse> {
        self.call("users.list", &[("token", self.token.as_str())])
            .await
    }

    pub async fn files_list(
        &self,
        user: Option<&str>,
        ts_to: i64,
        types: &str,
    ) -> Result<FilesListResponse> {
        let ts_to = ts_to.to_string();
        let mut payload = vec![
            ("token", self.token.as_str()),
            ("ts_to", ts_to.as_str()),
            ("types", types),
        ];
        // An unresolved user means no user filter at all, not an empty one.
        if let Some(user) = user {
            payload.push(("user", user));
        }
        self.call("files.list", &payload).await
    }

    pub async fn files_delete(&self, file: &str) -> Result<()> {
        self.call::<Value>(
            "files.delete",
            &[("token", self.token.as_str()), ("file", file)],
        )
        .await
        .map(|_| ())
    }

    // POST {base}/api/{method} with a form-encoded payload, check the transport
    // status, then the embedded ok flag, then hand back the decoded body.
    async fn call<T: DeserializeOwned>(&self, method: &str, payload: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/api/{}", self.base_url, method);
        debug!("POST {url}");

        let response = self.http.post(&url).form(&payload).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SlackError::Transport {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).map_err(|source| SlackError::Decode {
            method: method.to_string(),
            source,
        })?;

        if !body["ok"].as_bool().unwrap_or(false) {
            let message = body["error"]
                .as_str()
                .unwrap_or("unknown error")
                .to_string();
            return Err(SlackError::Api { message });
        }

        serde_json::from_value(body).map_err(|source| SlackError::Decode {
            method: method.to_string(),
            source,
        })
    }
}
