// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod constants;
pub mod error;
mod registry;
pub mod r#type;
pub mod value;

pub use error::{Error, ErrorKind};
pub use registry::{StandardTypes, TypeRegistry};
pub use r#type::{Operation, TypeDescriptor, TypeDescriptorBuilder};
pub use value::{OrderedF32, Value, ValueKind};

pub type Result<T> = std::result::Result<T, Error>;
