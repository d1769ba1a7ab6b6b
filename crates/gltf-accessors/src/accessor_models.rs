//! Functions to create [`AccessorModel`] instances
//!
//! All entry points funnel into [`create_with_element_type`], which checks
//! that the byte length is divisible by the element size implied by the
//! component type and element type, and derives the element count from it.
//!
//! # Example
//!
//! ```
//! use gltf_accessors::{accessor_models, ComponentType, ElementType};
//!
//! let indices = accessor_models::create_unsigned_int_scalar(&[0, 1, 2])?;
//! assert_eq!(indices.component_type(), ComponentType::UnsignedInt);
//! assert_eq!(indices.element_type(), ElementType::Scalar);
//! assert_eq!(indices.count(), 3);
//!
//! let positions = accessor_models::create_float_3d(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
//! assert_eq!(positions.count(), 2);
//! assert_eq!(positions.byte_length(), 24);
//! # Ok::<(), gltf_accessors::AccessorError>(())
//! ```

use crate::accessor_model::AccessorModel;
use crate::buffers::{self, Component};
use crate::component_type::ComponentType;
use crate::element_type::ElementType;
use crate::error::{AccessorError, Result};

/// Creates an accessor with component type `GL_UNSIGNED_INT` and type `SCALAR`
pub fn create_unsigned_int_scalar(data: &[u32]) -> Result<AccessorModel> {
    create_typed(ElementType::Scalar, data)
}

/// Creates an accessor with component type `GL_UNSIGNED_SHORT` and type `SCALAR`
pub fn create_unsigned_short_scalar(data: &[u16]) -> Result<AccessorModel> {
    create_typed(ElementType::Scalar, data)
}

/// Creates an accessor with component type `GL_UNSIGNED_SHORT` and type
/// `SCALAR` from 32-bit values.
///
/// Each value is truncated to its low 16 bits, see
/// [`buffers::narrow_int_to_short_bytes`].
pub fn create_unsigned_short_scalar_from_ints(data: &[i32]) -> Result<AccessorModel> {
    create(
        ComponentType::UnsignedShort,
        ElementType::Scalar.name(),
        buffers::narrow_int_to_short_bytes(data),
    )
}

/// Creates an accessor with component type `GL_FLOAT` and type `VEC2`
pub fn create_float_2d(data: &[f32]) -> Result<AccessorModel> {
    create_typed(ElementType::Vec2, data)
}

/// Creates an accessor with component type `GL_FLOAT` and type `VEC3`
pub fn create_float_3d(data: &[f32]) -> Result<AccessorModel> {
    create_typed(ElementType::Vec3, data)
}

/// Creates an accessor with component type `GL_FLOAT` and type `VEC4`
pub fn create_float_4d(data: &[f32]) -> Result<AccessorModel> {
    create_typed(ElementType::Vec4, data)
}

/// Creates an accessor whose component type is implied by `T`
pub fn create_typed<T: Component>(
    element_type: ElementType,
    data: &[T],
) -> Result<AccessorModel> {
    create_with_element_type(T::COMPONENT_TYPE, element_type, buffers::bytes_from(data))
}

/// Creates an accessor from raw little-endian bytes.
///
/// `element_type` is the glTF name of the element type (`"SCALAR"`,
/// `"VEC3"`, ...).
///
/// # Errors
///
/// [`AccessorError::UnknownElementType`] if the name is not known, and
/// [`AccessorError::InvalidBufferSize`] if the length of `data` is not
/// divisible by the element size.
pub fn create(
    component_type: ComponentType,
    element_type: &str,
    data: Vec<u8>,
) -> Result<AccessorModel> {
    let element_type: ElementType = element_type.parse()?;
    create_with_element_type(component_type, element_type, data)
}

/// Like [`create`], with an already resolved element type
pub fn create_with_element_type(
    component_type: ComponentType,
    element_type: ElementType,
    data: Vec<u8>,
) -> Result<AccessorModel> {
    let bytes_per_element = element_type.num_components() * component_type.size();
    if data.len() % bytes_per_element != 0 {
        return Err(AccessorError::InvalidBufferSize {
            element_type: element_type.name().to_string(),
            component_type: component_type.name().to_string(),
            expected_divisor: bytes_per_element,
            actual_length: data.len(),
        });
    }
    let count = data.len() / bytes_per_element;
    log::debug!(
        "Created {} accessor with {} components, count {}",
        element_type,
        component_type,
        count
    );
    Ok(AccessorModel::from_validated(
        component_type,
        element_type,
        count,
        data,
    ))
}
