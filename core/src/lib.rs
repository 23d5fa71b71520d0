//! Generic minimum/maximum selection and NaN-aware ordering utilities.

#![warn(clippy::all)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]

mod compare;
mod minmax;
mod ordered;

pub use {compare::*, minmax::*, ordered::*};
