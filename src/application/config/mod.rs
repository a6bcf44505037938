//! 애플리케이션이 사용하는 입력 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::Serialize;

/// 워크플로 입력값 묶음. 빈 문자열은 미지정과 같다.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActionInputs {
    /// API 토큰(민감정보: 로그에 남기지 않는다)
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// `owner/repo`
    pub repository: Option<String>,
    pub issue_number: Option<String>,
    pub comment_id: Option<String>,
    /// 직접 지정한 본문(공백만 있으면 미지정)
    pub body: Option<String>,
    /// 본문 템플릿 파일 경로
    pub file: Option<String>,
    /// 템플릿 변수(YAML)
    pub vars: Option<String>,
    pub edit_mode: Option<String>,
    pub reactions: Option<String>,
}

impl ActionInputs {
    /// 빈 값을 `None`으로 정리한다. `body`/`vars`를 제외한 값은 앞뒤 공백을 제거한다.
    pub fn normalized(self) -> Self {
        Self {
            token: trimmed(self.token),
            repository: trimmed(self.repository),
            issue_number: trimmed(self.issue_number),
            comment_id: trimmed(self.comment_id),
            body: self.body.filter(|v| !v.trim().is_empty()),
            file: trimmed(self.file),
            vars: self.vars.filter(|v| !v.trim().is_empty()),
            edit_mode: trimmed(self.edit_mode),
            reactions: trimmed(self.reactions),
        }
    }
}

/// 실행 환경(워크플로)에서 읽은 보조 정보.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowContext {
    /// 입력에 저장소가 없을 때 쓰는 기본 저장소
    pub repository: Option<String>,
    /// 이벤트 payload의 `issue.number`
    pub event_issue_number: Option<u64>,
    /// API base URL override
    pub api_url: Option<String>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
