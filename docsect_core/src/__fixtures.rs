use crate::scanner::DOC_NAV;
use crate::scanner::DOC_PARAMS;
use crate::scanner::DOC_TEMPLATE;

/// Build a fenced JSON block tagged with `sentinel` and carrying `payload`,
/// each on its own line the way documents are normally authored.
pub(crate) fn tagged_block(sentinel: &str, payload: &str) -> String {
	format!("````json\n{sentinel}\n{payload}\n````")
}

pub(crate) fn params_block(payload: &str) -> String {
	tagged_block(DOC_PARAMS, payload)
}

pub(crate) fn nav_block(payload: &str) -> String {
	tagged_block(DOC_NAV, payload)
}

pub(crate) fn template_block(payload: &str) -> String {
	tagged_block(DOC_TEMPLATE, payload)
}

/// A fenced JSON block with no sentinel — an ordinary code sample that every
/// pass must leave untouched.
pub(crate) fn untagged_block(payload: &str) -> String {
	format!("````json\n{payload}\n````")
}
