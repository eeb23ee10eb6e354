use crate::scanner::locate_tagged_block;

/// Remove the first block tagged with each sentinel from the document,
/// deleting the full literal span from the start of the opener token through
/// the end of the closer token inclusive.
///
/// Sentinels are processed independently and in order; later removals
/// operate on the already-shortened document. A sentinel with no tagged
/// block leaves the document untouched for that sentinel only. Sanitizing a
/// document with no remaining tagged blocks is a no-op.
pub fn strip_tagged_blocks(document: &str, sentinels: &[&str]) -> String {
	let mut document = document.to_string();

	for sentinel in sentinels {
		let Some(block) = locate_tagged_block(&document, sentinel) else {
			continue;
		};

		let start = block.outer_start();
		let end = block.outer_end();
		document.replace_range(start..end, "");
	}

	document
}
