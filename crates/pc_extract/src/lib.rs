#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod extract;
pub mod registry;
pub mod value;

#[doc(hidden)]
pub mod __macro_exports;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use error::DerefError;
pub use extract::{ExtractPointer, Pointer, extract_pointer, try_extract_pointer};
pub use registry::{DerefRegistry, Indirect};
pub use value::{Scalar, Value};
