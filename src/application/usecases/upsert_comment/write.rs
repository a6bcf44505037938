//! 코멘트 본문 생성/갱신 단계.

use crate::application::ports::CommentGateway;
use crate::application::usecases::upsert_comment::UpsertCommentUseCase;
use crate::application::usecases::upsert_comment::resolve::CommentPlan;
use crate::domain::comment::EditPolicy;
use crate::domain::error::CommentError;
use crate::domain::target::CommentTarget;

/// 본문 단계 결과.
pub(super) struct BodyStep {
    pub comment_id: String,
    pub created: bool,
    pub body_written: bool,
}

/// 계획에 따라 본문을 쓴다. 조회 최대 1회, 쓰기 최대 1회를 순서대로 수행한다.
pub(super) async fn write_body(
    use_case: &UpsertCommentUseCase<'_>,
    gateway: &dyn CommentGateway,
    plan: &CommentPlan,
) -> Result<BodyStep, CommentError> {
    match &plan.target {
        CommentTarget::Existing { comment_id } => {
            let Some(body) = plan.body.as_deref() else {
                use_case.reporter.debug(&format!(
                    "no body given, leaving comment id '{comment_id}' unchanged"
                ));
                return Ok(BodyStep {
                    comment_id: comment_id.clone(),
                    created: false,
                    body_written: false,
                });
            };

            let comment_body =
                compose_update(gateway, comment_id, plan.edit_policy, body).await?;
            use_case
                .reporter
                .debug(&format!("Comment body: {comment_body}"));

            gateway
                .update_comment(comment_id, &comment_body)
                .await
                .map_err(|err| CommentError::remote("update comment", err))?;
            use_case
                .reporter
                .info(&format!("Updated comment id '{comment_id}'"));

            Ok(BodyStep {
                comment_id: comment_id.clone(),
                created: false,
                body_written: true,
            })
        }
        CommentTarget::Issue { issue_number } => {
            let Some(body) = plan.body.as_deref() else {
                return Err(CommentError::MissingInput(
                    "the 'body' or 'file' input is required to create a comment",
                ));
            };

            let comment = gateway
                .create_comment(*issue_number, body)
                .await
                .map_err(|err| CommentError::remote("create comment", err))?;
            use_case.reporter.info(&format!(
                "Created comment id '{}' on issue '{}'",
                comment.id, issue_number
            ));

            Ok(BodyStep {
                comment_id: comment.id,
                created: true,
                body_written: true,
            })
        }
    }
}

/// replace는 기존 본문을 읽지 않는다.
async fn compose_update(
    gateway: &dyn CommentGateway,
    comment_id: &str,
    policy: EditPolicy,
    body: &str,
) -> Result<String, CommentError> {
    if !policy.needs_previous_body() {
        return Ok(policy.compose("", body));
    }

    let current = gateway
        .get_comment(comment_id)
        .await
        .map_err(|err| CommentError::remote("fetch comment", err))?;
    Ok(policy.compose(&current.body, body))
}
