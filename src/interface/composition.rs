//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::upsert_comment::UpsertCommentUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, EnvWorkflowContext, GitHubGatewayFactory, HandlebarsBodyRenderer,
    WorkflowOutputWriter,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    context_source: EnvWorkflowContext,
    renderer: HandlebarsBodyRenderer,
    gateway_factory: GitHubGatewayFactory,
    outputs: WorkflowOutputWriter,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AppComposition {
    /// API base override를 받아 실행 조합을 생성한다.
    pub fn new(api_url_override: Option<String>) -> Self {
        Self {
            context_source: EnvWorkflowContext::new(api_url_override),
            renderer: HandlebarsBodyRenderer,
            gateway_factory: GitHubGatewayFactory,
            outputs: WorkflowOutputWriter,
            reporter: ConsoleReporter,
        }
    }

    /// 코멘트 생성/갱신 유스케이스를 생성한다.
    pub fn upsert_comment_usecase(&self) -> UpsertCommentUseCase<'_> {
        UpsertCommentUseCase {
            context_source: &self.context_source,
            renderer: &self.renderer,
            gateway_factory: &self.gateway_factory,
            outputs: &self.outputs,
            reporter: &self.reporter,
        }
    }
}
