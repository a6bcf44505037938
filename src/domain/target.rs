//! 저장소/코멘트 대상 식별자 모듈.

use std::fmt;

use crate::domain::error::CommentError;

/// `owner/repo` 형태의 저장소 식별자.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub repo: String,
}

impl Repository {
    /// `owner/repo` 문자열을 해석한다.
    pub fn parse(input: &str) -> Result<Self, CommentError> {
        let trimmed = input.trim();
        let segments: Vec<&str> = trimmed.split('/').collect();

        match segments.as_slice() {
            [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(Self {
                owner: (*owner).to_string(),
                repo: (*repo).to_string(),
            }),
            _ => Err(CommentError::InvalidConfiguration(format!(
                "repository '{trimmed}' must be in the form 'owner/repo'"
            ))),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// 원격 호출 종류를 결정하는 대상.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    /// 기존 코멘트 갱신(또는 리액션만 추가)
    Existing { comment_id: String },
    /// 이슈/PR에 새 코멘트 생성
    Issue { issue_number: u64 },
}

/// 이슈 번호 입력값을 해석한다. 양의 정수만 허용한다.
pub fn parse_issue_number(input: &str) -> Result<u64, CommentError> {
    let trimmed = input.trim();
    match trimmed.parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(CommentError::InvalidConfiguration(format!(
            "issue-number '{trimmed}' is not a positive integer"
        ))),
    }
}

/// 코멘트 ID 입력값을 해석한다. API 경로에 들어가므로 양의 정수만 허용한다.
pub fn parse_comment_id(input: &str) -> Result<String, CommentError> {
    let trimmed = input.trim();
    match trimmed.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id.to_string()),
        _ => Err(CommentError::InvalidConfiguration(format!(
            "comment-id '{trimmed}' is not a positive integer"
        ))),
    }
}
