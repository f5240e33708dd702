//! Circuit component identities.
//!
//! Replacement relations never look inside a component; they only hold the
//! [`ComponentId`] handles defined here. [`ComponentNames`] maps the names
//! used in edit scripts onto those handles.

mod names;
mod types;

pub use names::ComponentNames;
pub use types::ComponentId;
