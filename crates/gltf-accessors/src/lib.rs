//! glTF Accessors Library
//!
//! Builds typed accessor models over little-endian byte buffers and computes
//! the alignment and byte stride needed to pack several accessors into one
//! shared buffer.
//!
//! ```
//! use gltf_accessors::{accessor_models, packing};
//!
//! let positions = accessor_models::create_float_3d(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0])?;
//! let indices = accessor_models::create_unsigned_short_scalar(&[0, 1, 1])?;
//!
//! assert_eq!(packing::common_alignment_bytes([&positions, &indices]), 4);
//! assert_eq!(packing::common_byte_stride([&positions, &indices]), 12);
//! # Ok::<(), gltf_accessors::AccessorError>(())
//! ```

pub mod accessor_model;
pub mod accessor_models;
pub mod buffers;
pub mod component_type;
pub mod element_type;
pub mod error;
pub mod math_utils;
pub mod packing;

#[cfg(feature = "c-api")]
pub mod c_api;

pub use accessor_model::AccessorModel;
pub use buffers::Component;
pub use component_type::ComponentType;
pub use element_type::ElementType;
pub use error::{AccessorError, Result};
