//! Property-based tests for accessor size validation, narrowing and
//! packing arithmetic.

use gltf_accessors::accessor_models;
use gltf_accessors::buffers::narrow_int_to_short_bytes;
use gltf_accessors::packing;
use gltf_accessors::{AccessorError, AccessorModel, ComponentType, ElementType};
use proptest::prelude::*;

fn component_type() -> impl Strategy<Value = ComponentType> {
    prop::sample::select(ComponentType::ALL.to_vec())
}

fn element_type() -> impl Strategy<Value = ElementType> {
    prop::sample::select(ElementType::ALL.to_vec())
}

fn accessor() -> impl Strategy<Value = AccessorModel> {
    (component_type(), element_type(), 0usize..8).prop_map(|(component_type, element_type, count)| {
        let size = count * component_type.size() * element_type.num_components();
        accessor_models::create_with_element_type(component_type, element_type, vec![0u8; size])
            .unwrap()
    })
}

// ---------------------------------------------------------------------------
// Factory size validation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn exact_size_yields_count(
        component_type in component_type(),
        element_type in element_type(),
        count in 0usize..64,
    ) {
        let element_size = component_type.size() * element_type.num_components();
        let accessor = accessor_models::create(
            component_type,
            element_type.name(),
            vec![0u8; count * element_size],
        ).unwrap();
        prop_assert_eq!(accessor.count(), count);
        prop_assert_eq!(accessor.byte_length(), count * element_size);
    }

    #[test]
    fn remainder_is_rejected(
        component_type in component_type(),
        element_type in element_type(),
        count in 0usize..64,
        remainder_seed in any::<usize>(),
    ) {
        let element_size = component_type.size() * element_type.num_components();
        prop_assume!(element_size > 1);
        let remainder = 1 + remainder_seed % (element_size - 1);
        let length = count * element_size + remainder;

        let result = accessor_models::create(component_type, element_type.name(), vec![0u8; length]);
        prop_assert_eq!(
            result,
            Err(AccessorError::InvalidBufferSize {
                element_type: element_type.name().to_string(),
                component_type: component_type.name().to_string(),
                expected_divisor: element_size,
                actual_length: length,
            })
        );
    }
}

// ---------------------------------------------------------------------------
// Narrowing keeps the low 16 bits
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn narrowing_truncates(value: i32) {
        let expected = (value.rem_euclid(65536) as u16).to_le_bytes();
        prop_assert_eq!(narrow_int_to_short_bytes(&[value]), expected.to_vec());
    }

    #[test]
    fn narrowing_preserves_length(values in prop::collection::vec(any::<i32>(), 0..32)) {
        prop_assert_eq!(narrow_int_to_short_bytes(&values).len(), values.len() * 2);
    }
}

// ---------------------------------------------------------------------------
// Packing
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn alignment_is_order_independent(accessors in prop::collection::vec(accessor(), 0..8)) {
        let forward = packing::common_alignment_bytes(&accessors);
        let backward = packing::common_alignment_bytes(accessors.iter().rev());
        prop_assert_eq!(forward, backward);

        let mut rotated = accessors.clone();
        if !rotated.is_empty() {
            rotated.rotate_left(1);
        }
        prop_assert_eq!(packing::common_alignment_bytes(&rotated), forward);
    }

    #[test]
    fn alignment_is_multiple_of_each_component_size(accessors in prop::collection::vec(accessor(), 0..8)) {
        let alignment = packing::common_alignment_bytes(&accessors);
        prop_assert!(alignment >= 1);
        for accessor in &accessors {
            prop_assert_eq!(alignment % accessor.component_size_in_bytes(), 0);
        }
    }

    #[test]
    fn stride_is_largest_element(accessors in prop::collection::vec(accessor(), 0..8)) {
        let expected = accessors
            .iter()
            .map(AccessorModel::element_size_in_bytes)
            .max()
            .unwrap_or(1);
        prop_assert_eq!(packing::common_byte_stride(&accessors), expected);
    }
}
