use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DocsectError {
	/// A tagged section was recognized by its sentinel but its JSON payload
	/// does not conform to the expected shape. This indicates document
	/// authoring corruption rather than absence of optional metadata, so it
	/// propagates instead of degrading to a default value.
	#[error("cannot validate JSON content for `{sentinel}`")]
	#[diagnostic(
		code(docsect::invalid_section_json),
		help("fix the JSON payload following the `{sentinel}` marker in the document")
	)]
	InvalidSectionJson { sentinel: String },

	#[error("template rendering failed: {0}")]
	#[diagnostic(code(docsect::template_render))]
	TemplateRender(String),
}

pub type DocsectResult<T> = Result<T, DocsectError>;
