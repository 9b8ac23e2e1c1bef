//! Typed HTML elements for the Trellis HTML model.
//!
//! # Scope
//!
//! This crate implements:
//! - **Element identity** ([WHATWG § 4](https://html.spec.whatwg.org/multipage/semantics.html))
//!   - One type per element, with its tag as a constant
//!   - Optional typed attribute fields plus the shared global block
//!   - Void elements marked at the type level
//! - **Tag emission** ([WHATWG § 13.1.2](https://html.spec.whatwg.org/multipage/syntax.html#elements-2))
//!   - Start tags with space-separated attributes, false booleans omitted
//!   - End tags for everything but void elements
//! - **Structural metadata** from `trellis-content`: categories, content
//!   model, and per-instance conditional categories
//!
//! # Not Yet Implemented
//!
//! - Element trees and child serialization
//! - Obsolete and SVG/MathML elements

#[macro_use]
mod macros;

/// The `Element` and `VoidElement` traits.
pub mod element;
/// Global attributes shared by every element.
pub mod global;

/// Form elements.
pub mod forms;
/// Grouping content: paragraphs, lists, `div`, ...
pub mod grouping;
/// Interactive elements: `details`, `summary`, `dialog`.
pub mod interactive;
/// Embedded content: images, media, frames, image maps.
pub mod media;
/// Root, document metadata, and `body`.
pub mod metadata;
/// Scripting elements.
pub mod scripting;
/// Sectioning and heading elements.
pub mod sections;
/// Table elements.
pub mod tabular;
/// Text-level semantics and edits.
pub mod text;

pub use element::{Element, VoidElement};
pub use global::GlobalAttributes;
pub use trellis_attributes::AttributeBytes;
