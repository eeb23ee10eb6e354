//! `docsect_core` is the core library for docsect, a structured-section
//! preprocessor for documentation written in a templating language
//! interleaved with fenced JSON metadata blocks. It extracts named metadata
//! sections (available parameters, navigation trees) without evaluating the
//! template, substitutes partial-template placeholders with caller-supplied
//! content before evaluation, renders the final template against a parameter
//! set, and strips the metadata-only blocks from the rendered output so they
//! never reach the end user.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Raw document text
//!   → Partial-template resolver (replaces //[doc-template] blocks with supplied content)
//!   → Template engine (minijinja evaluation against bound parameters)
//!   → Output sanitizer (strips //[doc-params] and //[doc-nav] blocks)
//!   → Final text
//! ```
//!
//! Metadata extraction ([`available_parameters`], [`document_navigation`],
//! [`partial_template_references`]) operates on the raw, unrendered document
//! independently of the render pipeline.
//!
//! ## Wire Format
//!
//! A metadata block is a fenced span opened by the literal `` ````json `` and
//! closed by the next `` ```` ``. A block belongs to a section type when the
//! matching sentinel appears anywhere in its inner text: `//[doc-params]`
//! for parameters, `//[doc-nav]` for navigation, `//[doc-template]` for a
//! partial-template reference. An opener with no following closer is
//! malformed and ignored.
//!
//! ## Key Types
//!
//! - [`AvailableParameters`] — parameter name → allowed values, from a
//!   `//[doc-params]` section.
//! - [`DocumentNavigation`] — navigation tree from a `//[doc-nav]` section.
//! - [`PartialTemplateReference`] / [`PartialTemplateContent`] — a
//!   `//[doc-template]` reference and the caller-supplied content that
//!   resolves it.
//! - [`RenderParameters`] — opaque variable bag bound during evaluation.
//!
//! ## Error Model
//!
//! Metadata extraction is total: an absent section, malformed JSON, or a
//! shape mismatch collapses to the type's empty default, with a diagnostic
//! logged via [`tracing`]. A recognized partial-template block with a
//! malformed reference is different — it signals document corruption and
//! propagates as [`DocsectError::InvalidSectionJson`].
//!
//! ## Quick Start
//!
//! ```rust
//! use docsect_core::DocsectResult;
//! use docsect_core::RenderParameters;
//! use docsect_core::available_parameters;
//! use docsect_core::render;
//!
//! # fn main() -> DocsectResult<()> {
//! let document = "Version: {{ version }}\n\n````json\n//[doc-params]\n{\"version\": [\"1.0\", \"2.0\"]}\n````\n";
//!
//! let parameters = available_parameters(document);
//! assert_eq!(parameters["version"], vec!["1.0", "2.0"]);
//!
//! let mut bound = RenderParameters::new();
//! bound.insert("version".into(), "2.0".into());
//! let rendered = render(document, Some(&bound), &[])?;
//! assert!(rendered.starts_with("Version: 2.0"));
//! assert!(!rendered.contains("//[doc-params]"));
//! # Ok(())
//! # }
//! ```

pub use engine::*;
pub use error::*;
pub use partials::*;
pub use sanitize::*;
pub use scanner::*;
pub use sections::*;

mod engine;
mod error;
mod partials;
mod sanitize;
mod scanner;
mod sections;

#[cfg(test)]
mod __fixtures;
