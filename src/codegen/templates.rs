//! Liquid templates for generated sources.
//!
//! Templates only loop and substitute; every identifier, literal and
//! argument-building statement is precomputed by the emitters.

use serde::Serialize;

use crate::error::RenderError;

pub const COMMAND_TEMPLATE_NAME: &str = "command";
pub const REGISTRY_TEMPLATE_NAME: &str = "registry";

pub const COMMAND_TEMPLATE: &str = r#"//! Code generated by gh-mcp-gen. DO NOT EDIT.
//!
{% for line in doc %}//!{% if line != "" %} {{ line }}{% endif %}
{% endfor %}
{% if has_subcommands %}{% if uses_map %}use std::collections::BTreeMap;
{% endif %}use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;

use {{ runtime_path }}::{Executor, ToolRegistrar, input_schema, typed_handler};
{% endif %}{% for sub in subcommands %}
{% for line in sub.doc %}///{% if line != "" %} {{ line }}{% endif %}
{% endfor %}#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct {{ sub.type_name }} {
{% for field in sub.fields %}{% for line in field.doc %}    ///{% if line != "" %} {{ line }}{% endif %}
{% endfor %}{% if field.serde_attr %}    {{ field.serde_attr }}
{% endif %}    pub {{ field.ident }}: {{ field.ty }},
{% endfor %}}

impl {{ sub.type_name }} {
    /// Arguments for `gh {{ sub.invocation }}`.
    pub fn to_args(&self) -> Vec<String> {
{% if sub.has_steps %}        let mut args = vec![{{ sub.base_args }}];
{% for step in sub.steps %}        {{ step }}
{% endfor %}        args
{% else %}        vec![{{ sub.base_args }}]
{% endif %}    }
}

/// Registers the `{{ sub.tool_name }}` tool.
pub fn {{ sub.register_fn }}(registrar: &mut dyn ToolRegistrar, executor: Arc<dyn Executor>) {
    registrar.register(
        {{ sub.tool_name_lit }},
        {{ sub.description_lit }},
        input_schema::<{{ sub.type_name }}>(),
        typed_handler(executor, {{ sub.type_name }}::to_args),
    );
}
{% endfor %}"#;

pub const REGISTRY_TEMPLATE: &str = r#"//! Code generated by gh-mcp-gen. DO NOT EDIT.
//!
//! Registers every generated `gh` tool.
{% for group in groups %}
#[path = {{ group.file_lit }}]
pub mod {{ group.module }};
{% endfor %}
use std::sync::Arc;

use {{ runtime_path }}::{Executor, ToolRegistrar};

/// Registers all {{ tool_count }} generated tools, in definition order.
pub fn register_all_tools({{ registrar_param }}: &mut dyn ToolRegistrar, {{ executor_param }}: Arc<dyn Executor>) {
{% for call in calls %}    {{ call }}
{% endfor %}}
"#;

/// Parse `source` and render it against `view`.
pub fn render<T: Serialize>(
    template: &'static str,
    source: &str,
    unit: &str,
    view: &T,
) -> Result<String, RenderError> {
    let parser = liquid::ParserBuilder::with_stdlib()
        .build()
        .map_err(|source| RenderError::Parse { template, source })?;
    let parsed = parser
        .parse(source)
        .map_err(|source| RenderError::Parse { template, source })?;

    let globals = liquid::to_object(view).map_err(|source| RenderError::Context {
        unit: unit.to_string(),
        source,
    })?;

    parsed.render(&globals).map_err(|source| RenderError::Render {
        template,
        unit: unit.to_string(),
        source,
    })
}

/// Rust string literal for `s`.
pub fn literal(s: &str) -> String {
    format!("{s:?}")
}

/// Split free text into doc-comment lines.
pub fn doc_lines(text: &str) -> Vec<String> {
    let lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    let start = lines
        .iter()
        .position(|l| !l.is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(start, |i| i + 1);
    lines[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct View {
        name: String,
        items: Vec<String>,
        flag: Option<String>,
    }

    #[test]
    fn renders_loops_and_conditionals() {
        let view = View {
            name: "x".into(),
            items: vec!["a".into(), "b".into()],
            flag: None,
        };
        let out = render(
            "test",
            "{{ name }}:{% for i in items %}[{{ i }}]{% endfor %}{% if flag %}!{% endif %}",
            "unit",
            &view,
        )
        .unwrap();
        assert_eq!(out, "x:[a][b]");
    }

    #[test]
    fn broken_template_is_a_render_error() {
        let view = View {
            name: "x".into(),
            items: vec![],
            flag: None,
        };
        let err = render("broken", "{% for i in items %}", "unit", &view).unwrap_err();
        assert!(matches!(err, RenderError::Parse { template: "broken", .. }));
    }

    #[test]
    fn literals_escape_quotes() {
        assert_eq!(literal(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(literal("a\\b"), r#""a\\b""#);
    }

    #[test]
    fn doc_lines_trim_blank_edges() {
        assert_eq!(doc_lines("\nfirst\n\nsecond  \n\n"), ["first", "", "second"]);
        assert!(doc_lines("").is_empty());
    }

    #[test]
    fn builtin_templates_parse() {
        let parser = liquid::ParserBuilder::with_stdlib().build().unwrap();
        parser.parse(COMMAND_TEMPLATE).unwrap();
        parser.parse(REGISTRY_TEMPLATE).unwrap();
    }
}
