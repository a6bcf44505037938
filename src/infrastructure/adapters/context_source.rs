//! 워크플로 컨텍스트 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::WorkflowContext;
use crate::application::ports::WorkflowContextSource;
use crate::infrastructure::config;

/// 프로세스 환경변수 기반 컨텍스트 어댑터.
pub struct EnvWorkflowContext {
    /// CLI에서 지정한 API base(환경변수보다 우선)
    api_url_override: Option<String>,
}

impl EnvWorkflowContext {
    pub fn new(api_url_override: Option<String>) -> Self {
        Self { api_url_override }
    }
}

impl WorkflowContextSource for EnvWorkflowContext {
    fn load(&self) -> Result<WorkflowContext> {
        let mut ctx = config::load_workflow_context()?;
        if let Some(api_url) = &self.api_url_override {
            ctx.api_url = Some(api_url.clone());
        }
        Ok(ctx)
    }
}
