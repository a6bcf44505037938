//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::WorkflowContext;
use crate::domain::comment::IssueComment;
use crate::domain::reaction::Reaction;
use crate::domain::target::Repository;

/// 원격 코멘트 서비스 포트. 저장소는 생성 시점에 고정된다.
#[async_trait]
pub trait CommentGateway: Send + Sync {
    async fn get_comment(&self, comment_id: &str) -> Result<IssueComment>;
    async fn update_comment(&self, comment_id: &str, body: &str) -> Result<IssueComment>;
    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<IssueComment>;
    async fn add_reaction(&self, comment_id: &str, reaction: Reaction) -> Result<()>;
}

/// 저장소/인증 정보에 맞는 게이트웨이를 생성하는 팩토리 포트.
pub trait GatewayFactory: Send + Sync {
    fn build(
        &self,
        repository: &Repository,
        api_base: Option<&str>,
        token: Option<String>,
    ) -> Result<Box<dyn CommentGateway>>;
}

/// 워크플로 실행 환경 정보를 읽는 포트.
pub trait WorkflowContextSource: Send + Sync {
    fn load(&self) -> Result<WorkflowContext>;
}

/// 템플릿 파일을 본문 문자열로 렌더링하는 포트.
pub trait BodyRenderer: Send + Sync {
    fn render(&self, file: &str, vars: Option<&str>) -> Result<String>;
}

/// 실행 결과(출력값) 기록 포트.
pub trait OutputSink: Send + Sync {
    fn set_output(&self, name: &str, value: &str) -> Result<()>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}
