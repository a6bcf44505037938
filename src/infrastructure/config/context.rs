//! 워크플로 실행 환경(환경변수/이벤트 payload) 해석.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::application::config::WorkflowContext;

pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
pub const ENV_API_URL: &str = "GITHUB_API_URL";

#[derive(Debug, Deserialize)]
struct EventPayload {
    issue: Option<EventIssue>,
}

#[derive(Debug, Deserialize)]
struct EventIssue {
    number: Option<u64>,
}

/// 현재 프로세스 환경변수에서 워크플로 컨텍스트를 읽는다.
pub fn load_workflow_context() -> Result<WorkflowContext> {
    workflow_context_from(
        non_empty_env(ENV_REPOSITORY),
        non_empty_env(ENV_EVENT_PATH).as_deref().map(Path::new),
        non_empty_env(ENV_API_URL),
    )
}

/// 주어진 값으로 컨텍스트를 구성한다. 이벤트 파일을 읽지 못하면 이슈 번호 없이 진행한다.
pub fn workflow_context_from(
    repository: Option<String>,
    event_path: Option<&Path>,
    api_url: Option<String>,
) -> Result<WorkflowContext> {
    let event_issue_number = match event_path {
        Some(path) => match read_event_issue_number(path) {
            Ok(number) => number,
            Err(err) => {
                tracing::debug!(path = %path.display(), "ignoring unreadable event payload: {err:#}");
                None
            }
        },
        None => None,
    };

    Ok(WorkflowContext {
        repository,
        event_issue_number,
        api_url,
    })
}

fn read_event_issue_number(path: &Path) -> Result<Option<u64>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read event payload at {}", path.display()))?;
    issue_number_from_event(&raw)
}

/// 이벤트 payload JSON에서 `issue.number`를 꺼낸다.
pub fn issue_number_from_event(raw: &str) -> Result<Option<u64>> {
    let payload: EventPayload =
        serde_json::from_str(raw).context("failed to parse event payload JSON")?;
    Ok(payload.issue.and_then(|issue| issue.number))
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_issue_number_from_issue_event() {
        let raw = r#"{"action":"opened","issue":{"number":17,"title":"x"}}"#;
        assert_eq!(issue_number_from_event(raw).expect("payload"), Some(17));
    }

    #[test]
    fn push_event_has_no_issue_number() {
        let raw = r#"{"ref":"refs/heads/main","commits":[]}"#;
        assert_eq!(issue_number_from_event(raw).expect("payload"), None);
    }

    #[test]
    fn context_reads_event_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{"issue":{{"number":3}}}}"#).expect("write");

        let ctx = workflow_context_from(Some("octo/hello".to_string()), Some(file.path()), None)
            .expect("context");
        assert_eq!(ctx.repository.as_deref(), Some("octo/hello"));
        assert_eq!(ctx.event_issue_number, Some(3));
    }

    #[test]
    fn unreadable_event_file_is_not_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("event.json");
        let ctx = workflow_context_from(None, Some(&missing), None).expect("context");
        assert_eq!(ctx.event_issue_number, None);

        let mut garbage = tempfile::NamedTempFile::new().expect("tempfile");
        write!(garbage, "not json").expect("write");
        let ctx = workflow_context_from(None, Some(garbage.path()), None).expect("context");
        assert_eq!(ctx.event_issue_number, None);
    }
}
