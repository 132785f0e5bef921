//! Build CAML filter fragments for SharePoint list queries.
//!
//! Each builder produces one self-contained filter fragment, ready to be
//! nested under `<And>`/`<Or>` by whatever assembles the full query:
//!
//! ```
//! use camlq::{FieldType, Filter, Operator};
//!
//! let filter = Filter::scalar("Status", FieldType::Text, "Active", Operator::Equal);
//! assert_eq!(
//!     filter.as_str(),
//!     r#"<Eq><FieldRef Name="Status" /><Value Type="Text">Active</Value></Eq>"#
//! );
//! ```
//!
//! Values are inserted verbatim; callers must escape reserved XML
//! characters themselves.

mod datetime;
mod markup;
mod scalar;
mod types;

pub use types::{FieldType, Filter, Operator};
