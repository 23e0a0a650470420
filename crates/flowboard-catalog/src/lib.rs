#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod catalog;
mod category;
mod descriptor;
mod value;

pub use catalog::OperationCatalog;
pub use category::OperationCategory;
pub use descriptor::{OperationDescriptor, ParameterSpec};
pub use value::{ParamValue, ValueType};
