//! 템플릿 파일 기반 코멘트 본문 렌더링 모듈.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Deserialize;
use serde_yaml::Value;

/// 템플릿 파일을 읽어 YAML 변수로 렌더링한다.
pub fn render_template_file(path: &Path, vars: Option<&str>) -> Result<String> {
    let template = fs::read_to_string(path)
        .with_context(|| format!("failed to read template at {}", path.display()))?;
    render_template(&template, vars)
}

/// HTML escape를 켠 상태로 렌더링한다. 없는 변수는 빈 문자열이 된다.
pub fn render_template(template: &str, vars: Option<&str>) -> Result<String> {
    let data = parse_vars(vars)?;

    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(false);
    handlebars
        .register_template_string("body", template)
        .context("failed to parse template")?;

    handlebars
        .render("body", &data)
        .context("failed to render template")
}

/// 여러 YAML 문서가 와도 첫 문서만 사용한다.
fn parse_vars(vars: Option<&str>) -> Result<Value> {
    let Some(raw) = vars else {
        return Ok(empty_map());
    };

    let Some(document) = serde_yaml::Deserializer::from_str(raw).next() else {
        return Ok(empty_map());
    };

    let value = Value::deserialize(document).context("failed to parse 'vars' as YAML")?;
    Ok(match value {
        Value::Null => empty_map(),
        other => other,
    })
}

fn empty_map() -> Value {
    Value::Mapping(serde_yaml::Mapping::new())
}
