//! GitHub Gist client

use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::{debug, info};
use url::Url;

use super::{BackupRemote, RemoteError};
use crate::utils::http;

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Name of the file holding the alias content inside the gist
pub const GIST_FILENAME: &str = "bash_aliases";
/// Description set on created gists
pub const GIST_DESCRIPTION: &str = "Bash Aliases Backup";

/// Blocking Gist API client authenticated with a personal access token
pub struct GistClient {
    agent: ureq::Agent,
    api_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct GistResponse {
    id: String,
    #[serde(default)]
    files: HashMap<String, GistFile>,
}

#[derive(Debug, Deserialize)]
struct GistFile {
    content: Option<String>,
}

/// Which call hit a status error; decides how 403/404 are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Validate,
    Create,
    Update,
    Fetch,
}

impl GistClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            agent: http::agent(),
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
        }
    }

    /// Point the client at another API base (GitHub Enterprise, test servers)
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, RemoteError> {
        Url::parse(api_url).map_err(|_| RemoteError::InvalidUrl(api_url.to_string()))?;
        self.api_url = api_url.to_string();
        Ok(self)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let invalid = || RemoteError::InvalidUrl(self.api_url.clone());
        let mut url = Url::parse(&self.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: &str, url: &Url) -> ureq::Request {
        self.agent
            .request_url(method, url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
    }

    fn send(
        &self,
        call: Call,
        request: ureq::Request,
        body: Option<Value>,
    ) -> Result<ureq::Response, RemoteError> {
        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        };

        result.map_err(|err| match err {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_json::<Value>()
                    .ok()
                    .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
                    .unwrap_or_default();
                status_error(call, code, message)
            }
            ureq::Error::Transport(transport) => RemoteError::Transport(transport.to_string()),
        })
    }
}

impl BackupRemote for GistClient {
    fn validate(&self) -> Result<(), RemoteError> {
        let url = self.endpoint(&["user"])?;
        debug!("validating token against {}", url);
        self.send(Call::Validate, self.request("GET", &url), None)?;
        Ok(())
    }

    fn upsert_backup(&self, existing: Option<&str>, content: &[u8]) -> Result<String, RemoteError> {
        let body = gist_payload(content);

        let response = match existing {
            Some(id) => {
                let url = self.endpoint(&["gists", id])?;
                info!("updating gist {}", id);
                self.send(Call::Update, self.request("PATCH", &url), Some(body))?
            }
            None => {
                let url = self.endpoint(&["gists"])?;
                info!("creating backup gist");
                self.send(Call::Create, self.request("POST", &url), Some(body))?
            }
        };

        let gist: GistResponse = response
            .into_json()
            .map_err(|err| RemoteError::Decode(err.to_string()))?;
        Ok(gist.id)
    }

    fn fetch_backup(&self, id: &str) -> Result<Vec<u8>, RemoteError> {
        let url = self.endpoint(&["gists", id])?;
        info!("fetching gist {}", id);
        let response = self.send(Call::Fetch, self.request("GET", &url), None)?;
        let body: Value = response
            .into_json()
            .map_err(|err| RemoteError::Decode(err.to_string()))?;
        extract_backup(body).map(String::into_bytes)
    }
}

/// Request body for creating or updating the backup gist
pub fn gist_payload(content: &[u8]) -> Value {
    json!({
        "description": GIST_DESCRIPTION,
        "public": false,
        "files": {
            GIST_FILENAME: { "content": String::from_utf8_lossy(content) }
        }
    })
}

/// Pull the alias content out of a gist response body
pub fn extract_backup(body: Value) -> Result<String, RemoteError> {
    let gist: GistResponse =
        serde_json::from_value(body).map_err(|err| RemoteError::Decode(err.to_string()))?;
    gist.files
        .get(GIST_FILENAME)
        .and_then(|file| file.content.clone())
        .ok_or(RemoteError::MissingFile)
}

fn status_error(call: Call, code: u16, message: String) -> RemoteError {
    match (call, code) {
        (_, 401) => RemoteError::Unauthorized,
        (Call::Create, 403 | 404) => RemoteError::Scope { status: code },
        (Call::Update | Call::Fetch, 404) => RemoteError::NotFound,
        _ => RemoteError::Status { code, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_shape() {
        let payload = gist_payload(b"alias ll='ls -la'\n");
        assert_eq!(
            payload,
            json!({
                "description": "Bash Aliases Backup",
                "public": false,
                "files": { "bash_aliases": { "content": "alias ll='ls -la'\n" } }
            })
        );
    }

    #[test]
    fn test_extract_backup() {
        let body = json!({
            "id": "aa5a315d61ae9438b18d",
            "files": {
                "bash_aliases": { "filename": "bash_aliases", "content": "alias gs='git status'\n" }
            }
        });
        assert_eq!(extract_backup(body).unwrap(), "alias gs='git status'\n");
    }

    #[test]
    fn test_extract_backup_missing_file() {
        let body = json!({ "id": "1", "files": { "notes.txt": { "content": "hi" } } });
        assert!(matches!(extract_backup(body), Err(RemoteError::MissingFile)));
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(status_error(Call::Validate, 401, String::new()), RemoteError::Unauthorized));
        assert!(matches!(
            status_error(Call::Create, 404, String::new()),
            RemoteError::Scope { status: 404 }
        ));
        assert!(matches!(status_error(Call::Fetch, 404, String::new()), RemoteError::NotFound));
        assert!(matches!(
            status_error(Call::Update, 422, "Validation Failed".into()),
            RemoteError::Status { code: 422, .. }
        ));
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = GistClient::new("t")
            .with_api_url("https://github.example.com/api/v3/")
            .unwrap();
        assert_eq!(
            client.endpoint(&["gists", "abc"]).unwrap().as_str(),
            "https://github.example.com/api/v3/gists/abc"
        );

        let client = GistClient::new("t");
        assert_eq!(
            client.endpoint(&["user"]).unwrap().as_str(),
            "https://api.github.com/user"
        );
    }
}
