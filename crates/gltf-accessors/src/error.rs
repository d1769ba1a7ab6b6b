//! Error handling for accessor construction
//!
//! Every failure in this crate is a caller-input error: it is raised
//! synchronously, never partially applied, and retrying with the same input
//! fails the same way.

use thiserror::Error;

use crate::component_type::ComponentType;

/// Errors that can occur when building or reading accessor models.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessorError {
    /// The byte length is not a multiple of the element size.
    #[error(
        "Invalid data for type {element_type} accessor with {component_type} components: \
         the data length is {actual_length} which is not divisible by {expected_divisor}"
    )]
    InvalidBufferSize {
        element_type: String,
        component_type: String,
        expected_divisor: usize,
        actual_length: usize,
    },

    #[error("Unknown element type: {0:?}")]
    UnknownElementType(String),

    #[error("Unknown component type: {0}")]
    UnknownComponentType(u32),

    /// The accessor was read back as a Rust type of a different component type.
    #[error("Component type mismatch: accessor has {actual}, requested {expected}")]
    ComponentTypeMismatch {
        expected: ComponentType,
        actual: ComponentType,
    },
}

pub type Result<T> = std::result::Result<T, AccessorError>;
