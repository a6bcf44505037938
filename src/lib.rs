//! commentpilot library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::config::ActionInputs;
use application::usecases::upsert_comment::CommentRunSummary;
use domain::error::CommentError;
use interface::composition::AppComposition;

/// 라이브러리 직접 호출용 실행 함수.
pub async fn run(inputs: ActionInputs) -> Result<CommentRunSummary, CommentError> {
    let composition = AppComposition::default();
    composition.upsert_comment_usecase().execute(inputs).await
}
