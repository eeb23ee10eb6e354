/// Opening fence of a JSON metadata block.
pub const JSON_OPENER: &str = "````json";
/// Closing fence of a JSON metadata block.
pub const JSON_CLOSER: &str = "````";
/// Sentinel marking a parameters section.
pub const DOC_PARAMS: &str = "//[doc-params]";
/// Sentinel marking a partial-template reference section.
pub const DOC_TEMPLATE: &str = "//[doc-template]";
/// Sentinel marking a navigation section.
pub const DOC_NAV: &str = "//[doc-nav]";

/// Byte span of a single fenced JSON block within a document. All offsets
/// index into the original document text.
pub(crate) struct BlockSpan {
	/// Offset of the first byte of the opener token.
	pub(crate) opener_start: usize,
	/// Offset of the first byte after the opener token.
	pub(crate) inner_start: usize,
	/// Offset of the first byte of the closer token.
	pub(crate) inner_end: usize,
}

impl BlockSpan {
	/// Offset just past the closer token.
	pub(crate) fn end(&self) -> usize {
		self.inner_end + JSON_CLOSER.len()
	}
}

/// Find the next fenced JSON block at or after `from`. Returns `None` when no
/// opener remains, or when an opener has no matching closer after it — a
/// malformed trailing block is not a block.
///
/// This is the single span-location primitive shared by metadata extraction,
/// partial-template resolution, and output sanitization, so all three passes
/// agree on where a block begins and ends.
pub(crate) fn next_block(document: &str, from: usize) -> Option<BlockSpan> {
	let opener_start = from + document[from..].find(JSON_OPENER)?;
	let inner_start = opener_start + JSON_OPENER.len();
	let inner_end = inner_start + document[inner_start..].find(JSON_CLOSER)?;

	Some(BlockSpan {
		opener_start,
		inner_start,
		inner_end,
	})
}

/// A fenced JSON block whose inner text contains a sentinel marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedBlock<'a> {
	/// Text strictly between the opener and closer tokens.
	pub inner: &'a str,
	/// Byte offset of the first byte after the opener token.
	pub inner_start: usize,
	/// Byte offset of the first byte of the closer token.
	pub inner_end: usize,
}

impl TaggedBlock<'_> {
	/// Byte offset of the first byte of the opener token. Removing a block
	/// from the document must start here, not at the inner span, or the
	/// opener is left behind.
	pub fn outer_start(&self) -> usize {
		self.inner_start - JSON_OPENER.len()
	}

	/// Byte offset just past the closer token.
	pub fn outer_end(&self) -> usize {
		self.inner_end + JSON_CLOSER.len()
	}
}

/// Locate the first fenced JSON block whose inner text contains `sentinel`.
///
/// The scan is a single cursor-based pass over byte offsets: find the next
/// opener, find the next closer after it, test the inner text for the
/// sentinel, otherwise resume past the closer. Untagged and
/// differently-tagged blocks are skipped. Sentinels match by substring
/// containment anywhere in the inner text, not only at its start.
///
/// Total over arbitrary input: a document with no opener, no closer after an
/// opener, or no tagged block anywhere yields `None`, never an error.
pub fn locate_tagged_block<'a>(document: &'a str, sentinel: &str) -> Option<TaggedBlock<'a>> {
	let mut cursor = 0;

	while cursor < document.len() {
		let block = next_block(document, cursor)?;
		let inner = &document[block.inner_start..block.inner_end];

		if inner.contains(sentinel) {
			return Some(TaggedBlock {
				inner,
				inner_start: block.inner_start,
				inner_end: block.inner_end,
			});
		}

		cursor = block.end();
	}

	None
}
