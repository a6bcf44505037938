//! GitHub REST API 연동 구현.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::json;

use super::CommentProvider;
use crate::domain::comment::IssueComment;
use crate::domain::reaction::Reaction;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

pub struct GitHubClient {
    client: Client,
    owner: String,
    repo: String,
    token: Option<String>,
    api_base: String,
}

impl GitHubClient {
    /// 저장소 단위 GitHub 클라이언트를 생성한다.
    pub fn new(owner: String, repo: String, token: Option<String>, api_base: Option<String>) -> Self {
        let api_base = api_base
            .map(|base| base.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            client: Client::new(),
            owner,
            repo,
            token,
            api_base,
        }
    }

    fn repo_endpoint(&self) -> String {
        format!("{}/repos/{}/{}", self.api_base, self.owner, self.repo)
    }

    fn issue_comments_endpoint(&self, issue_number: u64) -> String {
        format!("{}/issues/{}/comments", self.repo_endpoint(), issue_number)
    }

    fn issue_comment_endpoint(&self, comment_id: &str) -> String {
        format!("{}/issues/comments/{}", self.repo_endpoint(), comment_id)
    }

    fn reactions_endpoint(&self, comment_id: &str) -> String {
        format!("{}/reactions", self.issue_comment_endpoint(comment_id))
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        // 공통 헤더/인증 적용.
        tracing::debug!(%method, %url, "github request");
        let req = self
            .client
            .request(method, url)
            .header("User-Agent", "commentpilot")
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");

        if let Some(token) = &self.token {
            req.bearer_auth(token)
        } else {
            req
        }
    }

    /// 요청을 보내고 성공 응답 본문을 문자열로 돌려준다.
    async fn send(&self, req: RequestBuilder, what: &str) -> Result<String> {
        let resp = req
            .send()
            .await
            .with_context(|| format!("github: failed to {what}"))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .with_context(|| format!("github: failed to read {what} response"))?;

        if !status.is_success() {
            anyhow::bail!(
                "github: failed to {what} ({status}): {}",
                api_error_message(status, &body)
            );
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct IssueCommentResponse {
    id: u64,
    #[serde(default)]
    body: Option<String>,
}

impl From<IssueCommentResponse> for IssueComment {
    fn from(c: IssueCommentResponse) -> Self {
        IssueComment {
            id: c.id.to_string(),
            body: c.body.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: String,
}

/// API 오류 응답에서 `message`를 꺼낸다. JSON이 아니면 원문을 쓴다.
fn api_error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(err) => err.message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("empty response")
            .to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl CommentProvider for GitHubClient {
    async fn get_comment(&self, comment_id: &str) -> Result<IssueComment> {
        let req = self.request(Method::GET, self.issue_comment_endpoint(comment_id));
        let body = self.send(req, "fetch comment").await?;

        let comment: IssueCommentResponse =
            serde_json::from_str(&body).context("github: invalid comment JSON")?;
        Ok(comment.into())
    }

    async fn update_comment(&self, comment_id: &str, body: &str) -> Result<IssueComment> {
        let req = self
            .request(Method::PATCH, self.issue_comment_endpoint(comment_id))
            .json(&json!({ "body": body }));
        let response_body = self.send(req, "update comment").await?;

        let comment: IssueCommentResponse = serde_json::from_str(&response_body)
            .context("github: invalid update-comment JSON")?;
        Ok(comment.into())
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<IssueComment> {
        let req = self
            .request(Method::POST, self.issue_comments_endpoint(issue_number))
            .json(&json!({ "body": body }));
        let response_body = self.send(req, "create comment").await?;

        let comment: IssueCommentResponse = serde_json::from_str(&response_body)
            .context("github: invalid create-comment JSON")?;
        Ok(comment.into())
    }

    async fn add_reaction(&self, comment_id: &str, reaction: Reaction) -> Result<()> {
        let req = self
            .request(Method::POST, self.reactions_endpoint(comment_id))
            .json(&json!({ "content": reaction.as_str() }));
        self.send(req, "add reaction").await?;
        Ok(())
    }
}
