//! Host adapter for engine state inspection.
//!
//! A host (debugger, logger, test harness) sees engine values as untyped
//! trees of named fields. This crate reads those trees through the
//! [`FieldSource`] trait, rebuilds the typed snapshots from `lens-codec`,
//! and renders them.
//!
//! Two layers are exposed:
//! - `read_*` methods on [`Inspector`] return `Result<_, HostError>` and fail
//!   only when a field is structurally missing or has the wrong shape.
//! - `format_*` methods never fail; a structural error becomes a short
//!   `"Error: ..."` string so the host stays responsive.
//!
//! # Example
//!
//! ```
//! use lens_host::Inspector;
//! use serde_json::json;
//!
//! let inspector = Inspector::default();
//! assert_eq!(inspector.format_move(&json!({ "mask": 1804 })), "e2e4");
//! assert_eq!(
//!     inspector.format_move(&json!({})),
//!     "Error: Could not find 'mask' field"
//! );
//! ```

mod error;
mod inspector;
mod layout;
mod source;

pub use error::HostError;
pub use inspector::Inspector;
pub use layout::SnapshotLayout;
pub use source::{parse_unsigned, FieldSource};
