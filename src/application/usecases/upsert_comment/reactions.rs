//! 리액션 일괄 적용 단계.
//! 모든 요청을 동시에 보내고 전부 끝날 때까지 기다린다. 개별 실패는 전체 실패가 아니다.

use futures::stream::{FuturesUnordered, StreamExt};

use crate::application::ports::CommentGateway;
use crate::application::usecases::upsert_comment::UpsertCommentUseCase;
use crate::domain::reaction::{ReactionOutcome, ReactionSet, ReactionStatus};

pub(super) async fn apply_reactions(
    use_case: &UpsertCommentUseCase<'_>,
    gateway: &dyn CommentGateway,
    comment_id: &str,
    reactions: &ReactionSet,
) -> Vec<ReactionOutcome> {
    let mut pending = FuturesUnordered::new();

    for reaction in reactions.iter() {
        pending.push(async move {
            let result = gateway.add_reaction(comment_id, reaction).await;
            (reaction, result)
        });
    }

    let mut outcomes = Vec::with_capacity(reactions.len());
    while let Some((reaction, result)) = pending.next().await {
        let status = match result {
            Ok(()) => ReactionStatus::Applied,
            Err(err) => ReactionStatus::Failed(format!("{err:#}")),
        };
        outcomes.push(ReactionOutcome { reaction, status });
    }

    // 완료 순서는 비결정적이므로 보고 순서만 고정한다.
    outcomes.sort_by_key(|o| o.reaction);

    for outcome in &outcomes {
        match &outcome.status {
            ReactionStatus::Applied => use_case.reporter.info(&format!(
                "Added reaction '{}' to comment id '{comment_id}'.",
                outcome.reaction
            )),
            ReactionStatus::Failed(reason) => use_case.reporter.info(&format!(
                "Adding reaction '{}' to comment id '{comment_id}' failed with {reason}.",
                outcome.reaction
            )),
        }
    }

    outcomes
}
