//! 본문 템플릿 렌더링 포트 구현 어댑터.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::BodyRenderer;
use crate::infrastructure::render;

/// Handlebars 템플릿 파일 렌더링 어댑터.
pub struct HandlebarsBodyRenderer;

impl BodyRenderer for HandlebarsBodyRenderer {
    fn render(&self, file: &str, vars: Option<&str>) -> Result<String> {
        render::render_template_file(Path::new(file), vars)
    }
}
