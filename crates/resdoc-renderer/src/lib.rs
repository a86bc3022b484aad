//! Documentation renderers for resdoc.
//!
//! Turns [`resdoc_model::Resource`]s into Unix manual pages (troff) and
//! static-site Markdown pages.
//!
//! # Architecture
//!
//! - [`transcode`] walks the rich-text subset (`a`, `i`, `b` and text) found in
//!   description fields and re-emits it for a [`Target`]. The troff target has
//!   no hyperlinks, so anchors are recorded in a [`LinkRegistry`] and replaced
//!   by numbered footnote markers.
//! - [`reformat`] strips the shared indentation from example sources.
//! - [`ManPageRenderer`] and [`MarkdownRenderer`] implement
//!   [`DocumentRenderer`], composing one complete document per resource.
//!
//! # Example
//!
//! ```
//! use resdoc_renderer::{LinkRegistry, Target, transcode};
//!
//! let mut links = LinkRegistry::new();
//! let troff = transcode(r#"See <a href="https://example.com">docs</a>"#, Target::ManPage, Some(&mut links)).unwrap();
//! assert_eq!(troff, "See docs[1]");
//! assert_eq!(links.as_slice(), ["https://example.com"]);
//!
//! let markdown = transcode(r#"See <a href="https://example.com">docs</a>"#, Target::Markdown, None).unwrap();
//! assert_eq!(markdown, "See [docs](https://example.com)");
//! ```

mod document;
mod error;
mod example;
mod links;
mod man;
mod markdown;
mod target;
mod transcode;

pub use document::{DocumentRenderer, RenderedDocument};
pub use error::RenderError;
pub use example::reformat;
pub use links::LinkRegistry;
pub use man::{ManPageOptions, ManPageRenderer};
pub use markdown::{MarkdownOptions, MarkdownRenderer};
pub use target::{AnchorMode, Target};
pub use transcode::transcode;
