// ABOUTME: Compiled template representation and metadata
// ABOUTME: Immutable after construction and safe to share across concurrent renders

use handlebars::template::Template;

/// Executable form of a compiled template.
///
/// Static compilation keeps the parsed template so renders skip the parse
/// step; dynamic compilation keeps the source verbatim and parses again at
/// each render.
#[derive(Debug, Clone)]
pub enum TemplateBody {
    Parsed(Template),
    Source(String),
}

/// A template compiled from source, along with the identifier it was
/// compiled from and the nested templates it references.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    name: String,
    body: TemplateBody,
    references: Vec<String>,
}

impl CompiledTemplate {
    pub(crate) fn new(name: String, body: TemplateBody, references: Vec<String>) -> Self {
        Self {
            name,
            body,
            references,
        }
    }

    /// The identifier this template was compiled from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &TemplateBody {
        &self.body
    }

    /// Names of nested templates referenced via partial syntax
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// True when the parsed form was produced ahead of execution
    pub fn is_static(&self) -> bool {
        matches!(self.body, TemplateBody::Parsed(_))
    }
}
