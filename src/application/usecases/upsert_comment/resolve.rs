//! 입력 검증과 대상 결정 단계.
//! 원격 호출 전에 로컬에서 판단 가능한 실패를 모두 걸러낸다.

use crate::application::config::{ActionInputs, WorkflowContext};
use crate::application::usecases::upsert_comment::UpsertCommentUseCase;
use crate::domain::comment::EditPolicy;
use crate::domain::error::CommentError;
use crate::domain::reaction::{NormalizedReactions, ReactionSet};
use crate::domain::target::{CommentTarget, Repository, parse_comment_id, parse_issue_number};

/// 원격 호출 직전의 확정된 실행 계획.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPlan {
    pub target: CommentTarget,
    pub body: Option<String>,
    pub edit_policy: EditPolicy,
    pub reactions: Option<NormalizedReactions>,
}

/// 편집 모드와 본문 입력 조합을 검증한다.
pub(super) fn validate_inputs(inputs: &ActionInputs) -> Result<EditPolicy, CommentError> {
    let edit_policy = EditPolicy::from_input(inputs.edit_mode.as_deref())?;

    if inputs.vars.is_some() && inputs.file.is_none() {
        return Err(CommentError::InvalidConfiguration(
            "the 'file' input must be provided if 'vars' is used".to_string(),
        ));
    }

    if inputs.body.is_some() && inputs.file.is_some() {
        return Err(CommentError::InvalidConfiguration(
            "only one of 'file' or 'body' may be used, not both".to_string(),
        ));
    }

    Ok(edit_policy)
}

/// 직접 입력 또는 템플릿 렌더링으로 본문을 얻는다. 빈 본문은 미지정으로 본다.
pub(super) fn resolve_body(
    use_case: &UpsertCommentUseCase<'_>,
    inputs: &ActionInputs,
) -> Result<Option<String>, CommentError> {
    let body = match (&inputs.file, &inputs.body) {
        (Some(file), _) => {
            use_case.reporter.debug(&format!("rendering body from '{file}'"));
            use_case
                .renderer
                .render(file, inputs.vars.as_deref())
                .map_err(|err| {
                    CommentError::InvalidConfiguration(format!(
                        "failed to render '{file}': {err:#}"
                    ))
                })?
        }
        (None, Some(body)) => body.clone(),
        (None, None) => return Ok(None),
    };

    Ok(Some(body).filter(|b| !b.trim().is_empty()))
}

/// 기존 코멘트 갱신인지 새 코멘트 생성인지 결정한다.
/// 명시 이슈 번호가 없으면 워크플로 이벤트의 이슈 번호를 사용한다.
pub fn resolve_target(
    comment_id: Option<&str>,
    issue_number: Option<&str>,
    fallback_issue_number: Option<u64>,
    body: Option<&str>,
    reactions: Option<&str>,
) -> Result<CommentTarget, CommentError> {
    if let Some(comment_id) = comment_id {
        let comment_id = parse_comment_id(comment_id)?;
        if body.is_none() && reactions.is_none() {
            return Err(CommentError::MissingInput(
                "missing either comment 'body' or 'reactions'; need either text or a reaction to apply",
            ));
        }
        return Ok(CommentTarget::Existing { comment_id });
    }

    let issue_number = match issue_number {
        Some(raw) => Some(parse_issue_number(raw)?),
        None => fallback_issue_number,
    };

    if let Some(issue_number) = issue_number {
        if body.is_none() {
            return Err(CommentError::MissingInput(
                "the 'body' or 'file' input is required to create a comment",
            ));
        }
        return Ok(CommentTarget::Issue { issue_number });
    }

    Err(CommentError::MissingTarget)
}

/// 검증, 본문 준비, 대상 결정, 리액션 정규화까지 수행해 실행 계획을 만든다.
pub(super) fn build_plan(
    use_case: &UpsertCommentUseCase<'_>,
    inputs: &ActionInputs,
    context: &WorkflowContext,
) -> Result<CommentPlan, CommentError> {
    let edit_policy = validate_inputs(inputs)?;
    use_case
        .reporter
        .debug(&format!("editMode: {}", edit_policy.code()));

    let body = resolve_body(use_case, inputs)?;

    if inputs.issue_number.is_none() && inputs.comment_id.is_none() {
        use_case.reporter.debug(&format!(
            "issue-number is not set, falling back to event issue number: {:?}",
            context.event_issue_number
        ));
    }

    let target = resolve_target(
        inputs.comment_id.as_deref(),
        inputs.issue_number.as_deref(),
        context.event_issue_number,
        body.as_deref(),
        inputs.reactions.as_deref(),
    )?;

    let reactions = match inputs.reactions.as_deref() {
        Some(raw) => {
            let normalized = ReactionSet::parse_non_empty(raw)?;
            for token in &normalized.invalid {
                use_case
                    .reporter
                    .info(&format!("Skipping invalid reaction '{token}'."));
            }
            Some(normalized)
        }
        None => None,
    };

    Ok(CommentPlan {
        target,
        body,
        edit_policy,
        reactions,
    })
}

/// 입력 저장소, 없으면 워크플로 기본 저장소를 해석한다.
pub(super) fn resolve_repository(
    inputs: &ActionInputs,
    context: &WorkflowContext,
) -> Result<Repository, CommentError> {
    let raw = inputs
        .repository
        .as_deref()
        .or(context.repository.as_deref())
        .ok_or_else(|| {
            CommentError::InvalidConfiguration(
                "no repository given and GITHUB_REPOSITORY is not set".to_string(),
            )
        })?;
    Repository::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_comment_with_reactions_only_is_legal() {
        let target = resolve_target(Some("77"), None, None, None, Some("eyes")).expect("target");
        assert_eq!(
            target,
            CommentTarget::Existing {
                comment_id: "77".to_string()
            }
        );
    }

    #[test]
    fn non_numeric_comment_id_is_rejected() {
        for raw in ["1/../../../../../user", "abc", "0"] {
            let err = resolve_target(Some(raw), None, None, Some("x"), None).expect_err(raw);
            assert!(matches!(err, CommentError::InvalidConfiguration(_)), "{raw}");
        }
    }

    #[test]
    fn existing_comment_needs_body_or_reactions() {
        let err = resolve_target(Some("77"), Some("5"), None, None, None).expect_err("missing");
        assert!(matches!(err, CommentError::MissingInput(_)));
    }

    #[test]
    fn comment_id_wins_over_issue_number() {
        let target = resolve_target(Some("77"), Some("5"), None, Some("hi"), None).expect("target");
        assert!(matches!(target, CommentTarget::Existing { .. }));
    }

    #[test]
    fn issue_without_body_is_missing_input() {
        let err = resolve_target(None, Some("5"), None, None, Some("heart")).expect_err("missing");
        assert!(matches!(err, CommentError::MissingInput(_)));
    }

    #[test]
    fn falls_back_to_event_issue_number() {
        let target = resolve_target(None, None, Some(9), Some("hi"), None).expect("target");
        assert_eq!(target, CommentTarget::Issue { issue_number: 9 });
    }

    #[test]
    fn explicit_issue_number_beats_fallback() {
        let target = resolve_target(None, Some("3"), Some(9), Some("hi"), None).expect("target");
        assert_eq!(target, CommentTarget::Issue { issue_number: 3 });
    }

    #[test]
    fn nothing_to_target_is_missing_target() {
        let err = resolve_target(None, None, None, Some("hi"), Some("eyes")).expect_err("target");
        assert!(matches!(err, CommentError::MissingTarget));
    }

    #[test]
    fn invalid_edit_mode_is_checked_first() {
        let inputs = ActionInputs {
            edit_mode: Some("merge".to_string()),
            vars: Some("a: 1".to_string()),
            ..ActionInputs::default()
        };
        let err = validate_inputs(&inputs).expect_err("invalid");
        assert_eq!(err.to_string(), "invalid edit-mode 'merge'");
    }

    #[test]
    fn vars_require_file_and_body_excludes_file() {
        let vars_only = ActionInputs {
            vars: Some("a: 1".to_string()),
            ..ActionInputs::default()
        };
        assert!(matches!(
            validate_inputs(&vars_only),
            Err(CommentError::InvalidConfiguration(_))
        ));

        let both = ActionInputs {
            body: Some("hi".to_string()),
            file: Some("body.md".to_string()),
            ..ActionInputs::default()
        };
        assert!(matches!(
            validate_inputs(&both),
            Err(CommentError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn repository_falls_back_to_context() {
        let inputs = ActionInputs::default();
        let context = WorkflowContext {
            repository: Some("octo/fallback".to_string()),
            ..WorkflowContext::default()
        };
        let repo = resolve_repository(&inputs, &context).expect("repository");
        assert_eq!(repo.to_string(), "octo/fallback");

        let err = resolve_repository(&inputs, &WorkflowContext::default()).expect_err("none");
        assert!(matches!(err, CommentError::InvalidConfiguration(_)));
    }
}
