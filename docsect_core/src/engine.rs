use std::collections::HashMap;

use crate::DocsectError;
use crate::DocsectResult;
use crate::partials::PartialTemplateContent;
use crate::partials::resolve_partial_templates;
use crate::sanitize::strip_tagged_blocks;
use crate::scanner::DOC_NAV;
use crate::scanner::DOC_PARAMS;

/// Variables bound when evaluating a document template. The bag is passed
/// through to the template engine untouched; this crate attaches no meaning
/// to its keys or values.
pub type RenderParameters = HashMap<String, serde_json::Value>;

/// Render a document end to end: resolve partial templates, evaluate the
/// template, and strip metadata sections from the output.
///
/// Steps, in order:
///
/// 1. When `partial_templates` is non-empty, every partial-template
///    reference block is replaced with its supplied content before
///    evaluation.
/// 2. The document is evaluated through the template engine. With no
///    `parameters` the template runs with no bound variables; undefined
///    variables expand to empty text.
/// 3. When `parameters` were supplied, the parameters and navigation
///    metadata blocks are stripped from the rendered output. With no
///    `parameters` the evaluated text is returned unsanitized — metadata
///    stripping only activates once the caller demonstrates
///    parameter-awareness.
pub fn render(
	document: &str,
	parameters: Option<&RenderParameters>,
	partial_templates: &[PartialTemplateContent],
) -> DocsectResult<String> {
	let document = if partial_templates.is_empty() {
		document.to_string()
	} else {
		resolve_partial_templates(document, partial_templates)?
	};

	let rendered = evaluate_template(&document, parameters)?;

	match parameters {
		Some(_) => Ok(strip_tagged_blocks(&rendered, &[DOC_PARAMS, DOC_NAV])),
		None => Ok(rendered),
	}
}

/// Evaluate document text through minijinja with the given variables bound.
fn evaluate_template(
	document: &str,
	parameters: Option<&RenderParameters>,
) -> DocsectResult<String> {
	let mut env = minijinja::Environment::new();
	env.set_keep_trailing_newline(true);
	env.set_undefined_behavior(minijinja::UndefinedBehavior::Chainable);
	env.add_template("__document__", document)
		.map_err(|e| DocsectError::TemplateRender(e.to_string()))?;

	let template = env
		.get_template("__document__")
		.map_err(|e| DocsectError::TemplateRender(e.to_string()))?;

	let ctx = match parameters {
		Some(parameters) => minijinja::Value::from_serialize(parameters),
		None => minijinja::Value::UNDEFINED,
	};

	template
		.render(ctx)
		.map_err(|e| DocsectError::TemplateRender(e.to_string()))
}
