#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod hasher;
mod typeid_map;

// -----------------------------------------------------------------------------
// Top-level exports

pub use hasher::{TypeIdHashState, TypeIdHasher};
pub use typeid_map::TypeIdMap;
