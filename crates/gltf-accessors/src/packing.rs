//! Alignment and stride for accessors that share one buffer
//!
//! When several accessors are laid out in a single buffer (one after the
//! other, or interleaved), every accessor has to start at an offset that is
//! a multiple of its component size, and interleaved elements have to be at
//! least as far apart as the largest element. These functions compute both
//! numbers; they never fail and never modify their input.

use crate::accessor_model::AccessorModel;
use crate::math_utils;

/// The alignment that the data of `accessor` needs, which is its component size
pub fn alignment_bytes(accessor: &AccessorModel) -> usize {
    accessor.component_size_in_bytes()
}

/// The alignment that satisfies all given accessors.
///
/// This is the least common multiple of their alignments, or 1 if there are none.
///
/// # Examples
/// ```
/// use gltf_accessors::{accessor_models, packing, ComponentType};
///
/// let a = accessor_models::create_float_3d(&[0.0; 3])?;
/// let b = accessor_models::create_unsigned_short_scalar(&[0])?;
/// let c = accessor_models::create(ComponentType::UnsignedByte, "SCALAR", vec![0])?;
/// assert_eq!(packing::common_alignment_bytes([&a, &b, &c]), 4);
/// # Ok::<(), gltf_accessors::AccessorError>(())
/// ```
pub fn common_alignment_bytes<'a, I>(accessors: I) -> usize
where
    I: IntoIterator<Item = &'a AccessorModel>,
{
    accessors
        .into_iter()
        .fold(1, |alignment, accessor| {
            math_utils::lcm(alignment, alignment_bytes(accessor))
        })
}

/// The byte stride that is common for all given accessors.
///
/// This is the largest element size among them, or 1 if there are none.
pub fn common_byte_stride<'a, I>(accessors: I) -> usize
where
    I: IntoIterator<Item = &'a AccessorModel>,
{
    accessors
        .into_iter()
        .map(AccessorModel::element_size_in_bytes)
        .fold(1, usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor_models;
    use crate::component_type::ComponentType;

    fn scalar(component_type: ComponentType) -> AccessorModel {
        accessor_models::create(component_type, "SCALAR", vec![0u8; component_type.size()])
            .unwrap()
    }

    #[test]
    fn test_alignment_bytes() {
        assert_eq!(alignment_bytes(&scalar(ComponentType::UnsignedByte)), 1);
        assert_eq!(alignment_bytes(&scalar(ComponentType::Short)), 2);
        assert_eq!(alignment_bytes(&scalar(ComponentType::Float)), 4);
    }

    #[test]
    fn test_common_alignment_bytes() {
        let accessors = [
            scalar(ComponentType::Float),
            scalar(ComponentType::UnsignedShort),
            scalar(ComponentType::UnsignedByte),
        ];
        assert_eq!(common_alignment_bytes(&accessors), 4);
        assert_eq!(common_alignment_bytes(accessors.iter().rev()), 4);
        assert_eq!(common_alignment_bytes(&accessors[1..]), 2);
    }

    #[test]
    fn test_common_byte_stride() {
        let accessors = [
            accessor_models::create_float_2d(&[0.0; 2]).unwrap(),
            accessor_models::create_float_3d(&[0.0; 3]).unwrap(),
            accessor_models::create_typed(crate::ElementType::Scalar, &[0.0f32]).unwrap(),
        ];
        assert_eq!(common_byte_stride(&accessors), 12);
    }

    #[test]
    fn test_empty() {
        let none: [AccessorModel; 0] = [];
        assert_eq!(common_alignment_bytes(&none), 1);
        assert_eq!(common_byte_stride(&none), 1);
    }

    #[test]
    fn test_stride_ignores_count() {
        // An empty accessor still contributes its element size
        let empty = accessor_models::create_float_4d(&[]).unwrap();
        assert_eq!(common_byte_stride([&empty]), 16);
        assert_eq!(common_alignment_bytes([&empty]), 4);
    }
}
