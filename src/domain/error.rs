//! 실행 실패 분류.

use thiserror::Error;

/// GitHub Actions 통합 토큰 권한 부족 시 API가 돌려주는 메시지.
pub const PERMISSION_DENIED_MESSAGE: &str = "Resource not accessible by integration";

/// 권한 부족 실패에 덧붙이는 안내 문구.
pub const PERMISSION_DENIED_HINT: &str =
    "See the 'Token permissions' section of the commentpilot README for details about this error";

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("{0}")]
    InvalidConfiguration(String),

    #[error("{0}")]
    MissingInput(&'static str),

    #[error("neither an existing comment nor an issue to create one in was specified")]
    MissingTarget,

    #[error("no valid reactions are contained in '{raw}'")]
    NoValidReactions { raw: String },

    #[error("{operation} failed: {source:#}")]
    RemoteOperationFailed {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl CommentError {
    pub fn remote(operation: &'static str, source: anyhow::Error) -> Self {
        Self::RemoteOperationFailed { operation, source }
    }

    /// 원격 실패 원인 체인에 권한 부족 메시지가 있는지 검사한다.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::RemoteOperationFailed { source, .. } => source
                .chain()
                .any(|cause| cause.to_string().contains(PERMISSION_DENIED_MESSAGE)),
            _ => false,
        }
    }
}
