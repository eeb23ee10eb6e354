use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::DocsectError;
use crate::DocsectResult;
use crate::scanner::DOC_TEMPLATE;
use crate::scanner::JSON_CLOSER;
use crate::scanner::next_block;

/// A partial-template reference declared inside a `//[doc-template]` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTemplateReference {
	/// Path identifying the external partial template.
	pub path: String,
	/// Values the document binds for the partial's own parameters.
	pub parameters: HashMap<String, String>,
}

/// Caller-supplied content for a partial template path. Each reference in a
/// document resolves to the first content entry with an equal path;
/// unmatched references resolve to empty content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialTemplateContent {
	pub path: String,
	pub content: String,
}

impl PartialTemplateContent {
	pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			content: content.into(),
		}
	}
}

/// Replace every partial-template reference block with its supplied content
/// in a single left-to-right pass.
///
/// Blocks without the `//[doc-template]` sentinel pass through verbatim,
/// opener and closer included. For a reference block, the opener and inner
/// text are consumed but the closer token is kept after the resolved
/// content, so downstream consumers still see closer tokens as separators.
/// A reference whose path has no matching content resolves to the empty
/// string. An opener with no closer after it ends the scan and the remainder
/// is appended verbatim.
///
/// A block that carries the sentinel but whose payload is not a valid
/// reference is a hard [`DocsectError::InvalidSectionJson`]: a recognized but
/// malformed reference means the document itself is corrupt.
pub fn resolve_partial_templates(
	document: &str,
	contents: &[PartialTemplateContent],
) -> DocsectResult<String> {
	let mut output = String::with_capacity(document.len());
	let mut cursor = 0;

	while let Some(block) = next_block(document, cursor) {
		let inner = &document[block.inner_start..block.inner_end];

		let Some(at) = inner.find(DOC_TEMPLATE) else {
			output.push_str(&document[cursor..block.end()]);
			cursor = block.end();
			continue;
		};

		let reference = decode_reference(&inner[at + DOC_TEMPLATE.len()..])?;
		let resolved = contents
			.iter()
			.find(|content| content.path == reference.path)
			.map_or("", |content| content.content.as_str());

		output.push_str(&document[cursor..block.opener_start]);
		output.push_str(resolved);
		output.push_str(JSON_CLOSER);
		cursor = block.end();
	}

	output.push_str(&document[cursor..]);

	Ok(output)
}

/// Collect every partial-template reference in a document without
/// substituting anything. Raises the same hard error as
/// [`resolve_partial_templates`] on a malformed reference.
pub fn partial_template_references(
	document: &str,
) -> DocsectResult<Vec<PartialTemplateReference>> {
	let mut references = Vec::new();
	let mut cursor = 0;

	while let Some(block) = next_block(document, cursor) {
		let inner = &document[block.inner_start..block.inner_end];

		if let Some(at) = inner.find(DOC_TEMPLATE) {
			references.push(decode_reference(&inner[at + DOC_TEMPLATE.len()..])?);
		}

		cursor = block.end();
	}

	Ok(references)
}

fn decode_reference(json: &str) -> DocsectResult<PartialTemplateReference> {
	serde_json::from_str(json).map_err(|_| {
		DocsectError::InvalidSectionJson {
			sentinel: DOC_TEMPLATE.to_string(),
		}
	})
}
