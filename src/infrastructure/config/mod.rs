//! 실행 환경 설정 해석 모듈.
//! 환경변수와 이벤트 payload에서 워크플로 컨텍스트를 구성한다.

mod context;

pub use context::{
    ENV_API_URL, ENV_EVENT_PATH, ENV_REPOSITORY, issue_number_from_event,
    load_workflow_context, workflow_context_from,
};
