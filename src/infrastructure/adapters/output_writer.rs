//! 출력값 기록 포트 구현 어댑터.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::OutputSink;
use crate::infrastructure::workflow;

/// `$GITHUB_OUTPUT`에 기록하고, 없으면 stdout으로 출력한다.
pub struct WorkflowOutputWriter;

impl OutputSink for WorkflowOutputWriter {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match workflow::output_file_path() {
            Some(path) => workflow::append_output(Path::new(&path), name, value),
            None => {
                tracing::debug!("{} is not set, printing output", workflow::ENV_OUTPUT);
                println!("{name}={value}");
                Ok(())
            }
        }
    }
}
