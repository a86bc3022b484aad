//! Resource model for resdoc.
//!
//! A [`Provider`] owns an ordered list of [`Resource`]s, each describing one
//! API surface with its arguments, exported attributes and usage examples.
//! Description fields hold rich text (a small HTML subset) that the renderers
//! transcode into their own markup.
//!
//! Models are loaded from XML provider documents with [`Provider::from_xml`]
//! or [`load_files`]. Once loaded they are read-only.
//!
//! # Example
//!
//! ```
//! use resdoc_model::Provider;
//!
//! let xml = r#"<provider name="demo">
//!   <resources>
//!     <resource name="demo_thing">
//!       <description>A thing.</description>
//!     </resource>
//!   </resources>
//! </provider>"#;
//!
//! let provider = Provider::from_xml(xml).unwrap();
//! assert_eq!(provider.name, "demo");
//! assert_eq!(provider.resources[0].description, "A thing.");
//! ```

pub mod entities;
mod error;
mod loader;
mod model;

pub use error::ModelError;
pub use loader::{load_file, load_files};
pub use model::{Argument, Attribute, Example, Provider, Resource};
