use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::scanner::DOC_NAV;
use crate::scanner::DOC_PARAMS;
use crate::scanner::locate_tagged_block;

/// Allowed values for each document parameter, keyed by parameter name, as
/// declared by a document's `//[doc-params]` section.
pub type AvailableParameters = HashMap<String, Vec<String>>;

/// Navigation tree declared by a document's `//[doc-nav]` section. Intended
/// for UI chrome and never rendered as literal document output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentNavigation {
	pub items: Vec<NavigationNode>,
}

/// A single entry in a document navigation tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationNode {
	pub text: Option<String>,
	pub path: Option<String>,
	pub items: Vec<NavigationNode>,
}

/// Outcome of decoding a tagged metadata section. Benign absence and a
/// present-but-invalid section are distinct so call sites are never tempted
/// to treat structural failures as absence.
pub(crate) enum SectionOutcome<T> {
	Found(T),
	Absent,
	Invalid,
}

/// Locate the first section tagged with `sentinel` and decode its JSON
/// payload into `T`. Every occurrence of the sentinel substring is removed
/// from the inner text and the remainder is whitespace-trimmed before
/// decoding.
pub(crate) fn decode_section<T: DeserializeOwned>(
	document: &str,
	sentinel: &str,
) -> SectionOutcome<T> {
	let Some(block) = locate_tagged_block(document, sentinel) else {
		return SectionOutcome::Absent;
	};

	let json = block.inner.replace(sentinel, "");

	match serde_json::from_str(json.trim()) {
		Ok(value) => SectionOutcome::Found(value),
		Err(_) => SectionOutcome::Invalid,
	}
}

/// Total extraction: any failure collapses to the type's empty default. A
/// diagnostic is logged distinguishing absence from invalid content; neither
/// surfaces to the caller.
fn section_or_default<T: DeserializeOwned + Default>(document: &str, sentinel: &str) -> T {
	match decode_section(document, sentinel) {
		SectionOutcome::Found(value) => value,
		SectionOutcome::Absent => {
			tracing::debug!(sentinel, "no tagged section found in document");
			T::default()
		}
		SectionOutcome::Invalid => {
			tracing::warn!(sentinel, "unable to parse tagged section of document");
			T::default()
		}
	}
}

/// Extract the parameters a document declares as available, without
/// evaluating the template. Returns an empty map when the section is absent
/// or its JSON is malformed.
pub fn available_parameters(document: &str) -> AvailableParameters {
	section_or_default(document, DOC_PARAMS)
}

/// Extract the navigation tree a document declares, without evaluating the
/// template. Returns an empty tree when the section is absent or its JSON is
/// malformed.
pub fn document_navigation(document: &str) -> DocumentNavigation {
	section_or_default(document, DOC_NAV)
}
