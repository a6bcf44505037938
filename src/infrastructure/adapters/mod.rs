//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod context_source;
mod gateway_factory;
mod output_writer;
mod reporter;
mod template_renderer;

pub use context_source::EnvWorkflowContext;
pub use gateway_factory::GitHubGatewayFactory;
pub use output_writer::WorkflowOutputWriter;
pub use reporter::ConsoleReporter;
pub use template_renderer::HandlebarsBodyRenderer;
