//! 코멘트 게이트웨이 포트 구현 어댑터.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::{CommentGateway, GatewayFactory};
use crate::domain::comment::IssueComment;
use crate::domain::reaction::Reaction;
use crate::domain::target::Repository;
use crate::infrastructure::vcs;

/// GitHub 게이트웨이 팩토리 어댑터.
pub struct GitHubGatewayFactory;

impl GatewayFactory for GitHubGatewayFactory {
    fn build(
        &self,
        repository: &Repository,
        api_base: Option<&str>,
        token: Option<String>,
    ) -> Result<Box<dyn CommentGateway>> {
        Ok(Box::new(CommentGatewayAdapter {
            inner: vcs::build_comment_client(repository, api_base, token)?,
        }))
    }
}

/// 인프라 Provider를 애플리케이션 포트로 감싸는 래퍼.
struct CommentGatewayAdapter {
    inner: Box<dyn vcs::CommentProvider>,
}

#[async_trait]
impl CommentGateway for CommentGatewayAdapter {
    async fn get_comment(&self, comment_id: &str) -> Result<IssueComment> {
        self.inner.get_comment(comment_id).await
    }

    async fn update_comment(&self, comment_id: &str, body: &str) -> Result<IssueComment> {
        self.inner.update_comment(comment_id, body).await
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<IssueComment> {
        self.inner.create_comment(issue_number, body).await
    }

    async fn add_reaction(&self, comment_id: &str, reaction: Reaction) -> Result<()> {
        self.inner.add_reaction(comment_id, reaction).await
    }
}
