#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pc_extract as extract;
pub use pc_utils as utils;

pub use pc_extract::{
    DerefError, DerefRegistry, ExtractPointer, Indirect, Pointer, Scalar, Value, extract_pointer,
    impl_terminal, register_pointer, try_extract_pointer,
};
