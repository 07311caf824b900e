// ABOUTME: Template compiler turning source bytes into compiled templates
// ABOUTME: Stateless per compile; the static flag selects the compilation strategy

use handlebars::template::Template;
use tracing::debug;

use super::error::{CompileError, Result};
use super::template::{CompiledTemplate, TemplateBody};

/// Compiles template source into an executable form.
///
/// One compiler value is created per render pipeline invocation; it holds no
/// shared mutable state and never touches the cache.
#[derive(Debug, Clone, Copy)]
pub struct TemplateCompiler {
    statically_compile: bool,
}

impl TemplateCompiler {
    pub fn new(statically_compile: bool) -> Self {
        Self { statically_compile }
    }

    /// Compile raw source bytes into a template named `name`.
    ///
    /// The source is parsed in both modes so grammar violations surface here
    /// rather than mid-render; dynamic mode then discards the parsed form and
    /// re-parses at each render.
    pub fn compile(&self, source: &[u8], name: &str) -> Result<CompiledTemplate> {
        let text = std::str::from_utf8(source).map_err(|e| CompileError::InvalidEncoding {
            name: name.to_string(),
            source: e,
        })?;

        let parsed = Template::compile(text).map_err(|e| CompileError::SyntaxError {
            name: name.to_string(),
            message: e.to_string(),
        })?;

        let references = partial_references(text);

        debug!(
            "Compiled template {} ({} mode, {} nested references)",
            name,
            if self.statically_compile {
                "static"
            } else {
                "dynamic"
            },
            references.len()
        );

        let body = if self.statically_compile {
            TemplateBody::Parsed(parsed)
        } else {
            TemplateBody::Source(text.to_string())
        };

        Ok(CompiledTemplate::new(name.to_string(), body, references))
    }
}

/// Extract the names of nested templates referenced with `{{> name}}` syntax.
///
/// Comment spans are skipped, since partial syntax inside them never renders.
/// Only literal partial names are collected; dynamically computed names
/// cannot be resolved ahead of render and fail there instead.
fn partial_references(source: &str) -> Vec<String> {
    let mut references = Vec::new();
    let mut rest = source;

    while let Some(open) = rest.find("{{") {
        rest = &rest[open + 2..];
        let inner = rest.trim_start_matches('~').trim_start();

        if let Some(comment) = inner.strip_prefix("!--") {
            rest = match comment.find("--}}") {
                Some(end) => &comment[end + 4..],
                None => "",
            };
            continue;
        }
        if let Some(comment) = inner.strip_prefix('!') {
            rest = match comment.find("}}") {
                Some(end) => &comment[end + 2..],
                None => "",
            };
            continue;
        }

        if let Some(expr) = inner.strip_prefix('>') {
            let name: String = expr
                .trim_start()
                .chars()
                .take_while(|c| !c.is_whitespace() && *c != '}' && *c != '~' && *c != '(')
                .collect();

            if !name.is_empty() && !references.contains(&name) {
                references.push(name);
            }
        }
    }

    references
}
