//! 원격 코멘트 서비스 계층.

pub mod github;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::comment::IssueComment;
use crate::domain::reaction::Reaction;
use crate::domain::target::Repository;

#[async_trait]
pub trait CommentProvider: Send + Sync {
    /// 코멘트 단건 조회
    async fn get_comment(&self, comment_id: &str) -> Result<IssueComment>;
    /// 코멘트 본문 수정
    async fn update_comment(&self, comment_id: &str, body: &str) -> Result<IssueComment>;
    /// 이슈/PR에 코멘트 생성
    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<IssueComment>;
    /// 코멘트에 리액션 추가
    async fn add_reaction(&self, comment_id: &str, reaction: Reaction) -> Result<()>;
}

pub fn build_comment_client(
    repository: &Repository,
    api_base: Option<&str>,
    token: Option<String>,
) -> Result<Box<dyn CommentProvider>> {
    // override는 절대 URL이어야 한다.
    if let Some(base) = api_base {
        url::Url::parse(base)
            .map_err(|err| anyhow::anyhow!("invalid API base URL '{base}': {err}"))?;
    }

    Ok(Box::new(github::GitHubClient::new(
        repository.owner.clone(),
        repository.repo.clone(),
        token,
        api_base.map(ToString::to_string),
    )))
}
