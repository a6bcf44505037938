//! 워크플로 러너와의 입출력 규약(workflow command, 출력 파일).

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

pub const ENV_OUTPUT: &str = "GITHUB_OUTPUT";

/// workflow command 메시지 escape 규칙(`%`, `\r`, `\n`).
pub fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// `::debug::`, `::error::` 형태의 workflow command 한 줄을 만든다.
pub fn command_line(command: &str, message: &str) -> String {
    format!("::{command}::{}", escape_command_data(message))
}

/// 출력 파일 경로. 미설정이면 `None`.
pub fn output_file_path() -> Option<String> {
    env::var(ENV_OUTPUT).ok().filter(|v| !v.trim().is_empty())
}

/// 출력값을 `name=value` 형태로 출력 파일에 덧붙인다.
pub fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
    // 한 줄 값만 지원한다.
    if value.contains('\n') || value.contains('\r') {
        bail!("output '{name}' must be a single line");
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;
    writeln!(file, "{name}={value}")
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    Ok(())
}
