//! `commentpilot` 바이너리 진입점.

use commentpilot::interface::cli::Cli;
use commentpilot::interface::composition::AppComposition;

#[tokio::main]
async fn main() {
    // stdout은 워크플로 로그/출력 규약에 쓰므로 진단 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let run = Cli::parse_run();
    let composition = AppComposition::new(run.api_url);
    let use_case = composition.upsert_comment_usecase();

    if let Err(err) = use_case.execute(run.inputs).await {
        use_case.report_failure(&err);
        std::process::exit(1);
    }
}
