//! CLI 명령 파싱 모듈.
//! 모든 플래그는 워크플로 러너가 넘겨주는 `INPUT_*` 환경변수로도 받을 수 있다.

use clap::Parser;

use crate::application::config::ActionInputs;

#[derive(Debug, Parser)]
#[command(name = "commentpilot")]
#[command(about = "Create, update and react to GitHub issue/PR comments")]
pub struct Cli {
    /// API token
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Repository as owner/repo (defaults to GITHUB_REPOSITORY)
    #[arg(long, env = "INPUT_REPOSITORY")]
    repository: Option<String>,

    /// Issue or pull request number to create a comment in
    #[arg(long, env = "INPUT_ISSUE-NUMBER")]
    issue_number: Option<String>,

    /// Existing comment id to update or react to
    #[arg(long, env = "INPUT_COMMENT-ID")]
    comment_id: Option<String>,

    /// Comment body
    #[arg(long, env = "INPUT_BODY")]
    body: Option<String>,

    /// Template file rendered into the comment body
    #[arg(long, env = "INPUT_FILE")]
    file: Option<String>,

    /// YAML variables for the template file
    #[arg(long, env = "INPUT_VARS")]
    vars: Option<String>,

    /// append or replace
    #[arg(long, env = "INPUT_EDIT-MODE")]
    edit_mode: Option<String>,

    /// Comma separated reactions (+1, -1, laugh, confused, heart, hooray, rocket, eyes)
    #[arg(long, env = "INPUT_REACTIONS")]
    reactions: Option<String>,

    /// Deprecated alias of --reactions
    #[arg(long, env = "INPUT_REACTION-TYPE", hide = true)]
    reaction_type: Option<String>,

    /// API base URL override (defaults to GITHUB_API_URL, then https://api.github.com)
    #[arg(long)]
    api_url: Option<String>,
}

pub struct CliRun {
    pub inputs: ActionInputs,
    pub api_url: Option<String>,
}

impl Cli {
    pub fn parse_run() -> CliRun {
        Cli::parse().into_run()
    }

    fn into_run(self) -> CliRun {
        // reactions가 비어 있을 때만 구 이름을 사용한다.
        let reactions = self
            .reactions
            .filter(|v| !v.trim().is_empty())
            .or(self.reaction_type);

        CliRun {
            inputs: ActionInputs {
                token: self.token,
                repository: self.repository,
                issue_number: self.issue_number,
                comment_id: self.comment_id,
                body: self.body,
                file: self.file,
                vars: self.vars,
                edit_mode: self.edit_mode,
                reactions,
            },
            api_url: self.api_url.filter(|v| !v.trim().is_empty()),
        }
    }
}
