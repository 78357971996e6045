#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod constants;
mod data;
mod error;
mod stats;

pub use constants::*;
pub use data::*;
pub use error::*;
pub use stats::*;
