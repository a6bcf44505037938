//! 코멘트 엔티티와 본문 편집 정책.

use std::str::FromStr;

use crate::domain::error::CommentError;

/// 기존 본문과 새 본문 사이에 넣는 구분자.
pub const APPEND_SEPARATOR: &str = "\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    pub id: String,
    pub body: String,
}

/// 기존 코멘트 갱신 시 본문 병합 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPolicy {
    #[default]
    Append,
    Replace,
}

impl EditPolicy {
    /// 입력값을 정책으로 변환한다. 미지정이면 append.
    pub fn from_input(value: Option<&str>) -> Result<Self, CommentError> {
        match value {
            None => Ok(Self::default()),
            Some(raw) => raw.parse(),
        }
    }

    /// 갱신 전에 기존 본문 조회가 필요한지 여부.
    pub fn needs_previous_body(self) -> bool {
        matches!(self, Self::Append)
    }

    /// 기존 본문과 새 본문을 정책에 따라 합친다.
    pub fn compose(self, previous: &str, new_body: &str) -> String {
        match self {
            Self::Append => format!("{previous}{APPEND_SEPARATOR}{new_body}"),
            Self::Replace => new_body.to_string(),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Replace => "replace",
        }
    }
}

impl FromStr for EditPolicy {
    type Err = CommentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 대소문자/공백을 관대하게 보지 않는다. 정확히 일치해야 한다.
        match s {
            "append" => Ok(Self::Append),
            "replace" => Ok(Self::Replace),
            other => Err(CommentError::InvalidConfiguration(format!(
                "invalid edit-mode '{other}'"
            ))),
        }
    }
}
