//! 코멘트 생성/갱신 + 리액션 적용의 전체 오케스트레이션 유스케이스.

mod reactions;
mod resolve;
mod write;

use crate::application::config::ActionInputs;
use crate::application::ports::{
    BodyRenderer, GatewayFactory, OutputSink, Reporter, WorkflowContextSource,
};
use crate::domain::error::{CommentError, PERMISSION_DENIED_HINT};
use crate::domain::reaction::ReactionOutcome;

use reactions::apply_reactions;
use resolve::{build_plan, resolve_repository};
use write::write_body;

pub use resolve::{CommentPlan, resolve_target};

/// 후속 단계에서 참조하는 출력 이름.
pub const COMMENT_ID_OUTPUT: &str = "comment-id";

/// 한 번의 실행 결과 요약.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRunSummary {
    pub comment_id: String,
    pub created: bool,
    pub body_written: bool,
    pub reactions: Vec<ReactionOutcome>,
}

/// 입력 검증부터 본문 쓰기, 리액션 적용, 출력 기록까지 전체 흐름을 조율한다.
pub struct UpsertCommentUseCase<'a> {
    pub context_source: &'a dyn WorkflowContextSource,
    pub renderer: &'a dyn BodyRenderer,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub outputs: &'a dyn OutputSink,
    pub reporter: &'a dyn Reporter,
}

impl<'a> UpsertCommentUseCase<'a> {
    /// 실행 진입점.
    /// 로컬 검증 실패는 원격 호출 없이 즉시 종료하고, 본문 단계 실패 시 리액션은 시도하지 않는다.
    pub async fn execute(&self, inputs: ActionInputs) -> Result<CommentRunSummary, CommentError> {
        let inputs = inputs.normalized();
        if let Ok(json) = serde_json::to_string(&inputs) {
            self.reporter.debug(&format!("Inputs: {json}"));
        }

        let context = self.context_source.load().map_err(|err| {
            CommentError::InvalidConfiguration(format!(
                "failed to read workflow context: {err:#}"
            ))
        })?;

        let plan = build_plan(self, &inputs, &context)?;
        let repository = resolve_repository(&inputs, &context)?;
        self.reporter.debug(&format!("repository: {repository}"));

        let gateway = self
            .gateway_factory
            .build(&repository, context.api_url.as_deref(), inputs.token.clone())
            .map_err(|err| CommentError::InvalidConfiguration(format!("{err:#}")))?;

        let step = write_body(self, gateway.as_ref(), &plan).await?;

        if let Err(err) = self.outputs.set_output(COMMENT_ID_OUTPUT, &step.comment_id) {
            self.reporter.warning(&format!(
                "failed to record '{COMMENT_ID_OUTPUT}' output: {err:#}"
            ));
        }

        let reactions = match &plan.reactions {
            Some(normalized) => {
                apply_reactions(self, gateway.as_ref(), &step.comment_id, &normalized.set).await
            }
            None => Vec::new(),
        };

        Ok(CommentRunSummary {
            comment_id: step.comment_id,
            created: step.created,
            body_written: step.body_written,
            reactions,
        })
    }

    /// 종료 실패를 사용자에게 보고한다. 권한 부족이면 안내 문구를 덧붙인다.
    pub fn report_failure(&self, err: &CommentError) {
        self.reporter.debug(&format!("{err:?}"));
        self.reporter.error(&err.to_string());
        if err.is_permission_denied() {
            self.reporter.error(PERMISSION_DENIED_HINT);
        }
    }
}
