//! Blocking HTTP client shared by the release fetcher and the link checker
//!
//! Two `ureq` agents per run, sharing the user agent and timeout: one for the
//! API that follows redirects, and one for link checks that does not, so a
//! download URL is judged by its own status rather than its CDN target.

use crate::core::config::Config;
use thiserror::Error;

const USER_AGENT: &str = concat!("release-tables/", env!("CARGO_PKG_VERSION"));
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Errors from the releases listing request. All of them abort the run.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("GitHub API rate limit exceeded. Try again later or set GITHUB_TOKEN.")]
    RateLimited,

    #[error("Repository '{0}' not found")]
    NotFound(String),

    #[error("GitHub API returned HTTP {code} for {url}")]
    Status { code: u16, url: String },

    #[error("GitHub API request failed: {0}")]
    Transport(String),

    #[error("Failed to parse GitHub response: {0}")]
    Parse(String),
}

pub struct HttpClient {
    agent: ureq::Agent,
    link_agent: ureq::Agent,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.http_timeout())
            .user_agent(USER_AGENT)
            .build();
        let link_agent = ureq::AgentBuilder::new()
            .timeout(config.http_timeout())
            .user_agent(USER_AGENT)
            .redirects(0)
            .build();
        let token = config.token.clone().filter(|t| !t.trim().is_empty());
        Self {
            agent,
            link_agent,
            token,
        }
    }

    /// GET a GitHub API endpoint and decode the JSON body.
    ///
    /// `repo` is only used to phrase the 404 error.
    pub fn get_github_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        repo: &str,
    ) -> Result<serde_json::Value, FetchError> {
        let mut request = self.agent.get(url).set("Accept", GITHUB_ACCEPT);
        for (key, value) in query {
            request = request.query(key, value);
        }
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(403, _) | ureq::Error::Status(429, _) => FetchError::RateLimited,
            ureq::Error::Status(404, _) => FetchError::NotFound(repo.to_string()),
            ureq::Error::Status(code, _) => FetchError::Status {
                code,
                url: url.to_string(),
            },
            ureq::Error::Transport(t) => FetchError::Transport(t.to_string()),
        })?;

        response
            .into_json()
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// HEAD a URL and return its own HTTP status. Redirects are not
    /// followed, so a 302 is reported as 302.
    ///
    /// 4xx/5xx statuses are returned as `Ok`; only transport failures
    /// (DNS, connection, timeout) are errors.
    pub fn head_status(&self, url: &str) -> Result<u16, String> {
        match self.link_agent.head(url).call() {
            Ok(response) => Ok(response.status()),
            Err(ureq::Error::Status(code, _)) => Ok(code),
            Err(ureq::Error::Transport(t)) => Err(t.to_string()),
        }
    }
}
