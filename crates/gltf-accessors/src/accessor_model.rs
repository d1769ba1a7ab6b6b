use num_traits::AsPrimitive;

use crate::buffers::{self, Component};
use crate::component_type::ComponentType;
use crate::element_type::ElementType;
use crate::error::{AccessorError, Result};

/// A typed view over an owned little-endian byte buffer.
///
/// The shape (component type, element type and count) is fixed at
/// construction. The bytes may be overwritten through [`data_mut`], but the
/// buffer can never be resized, so `data().len()` always equals
/// `count() * element_size_in_bytes()`.
///
/// Instances are created by the functions in [`crate::accessor_models`].
///
/// [`data_mut`]: AccessorModel::data_mut
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorModel {
    component_type: ComponentType,
    element_type: ElementType,
    count: usize,
    data: Vec<u8>,
}

impl AccessorModel {
    /// Callers must have checked that `data` holds exactly `count` elements.
    pub(crate) fn from_validated(
        component_type: ComponentType,
        element_type: ElementType,
        count: usize,
        data: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(
            data.len(),
            count * element_type.num_components() * component_type.size()
        );
        Self {
            component_type,
            element_type,
            count,
            data,
        }
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Number of elements
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn component_size_in_bytes(&self) -> usize {
        self.component_type.size()
    }

    pub fn element_size_in_bytes(&self) -> usize {
        self.element_type.num_components() * self.component_type.size()
    }

    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the bytes of the element at `index`
    pub fn element(&self, index: usize) -> Option<&[u8]> {
        if index >= self.count {
            return None;
        }
        let size = self.element_size_in_bytes();
        let start = index * size;
        Some(&self.data[start..start + size])
    }

    /// Decodes all components as values of type `T`.
    ///
    /// `T` must correspond to the accessor's component type, e.g. `f32` for
    /// [`ComponentType::Float`] or `u16` for [`ComponentType::UnsignedShort`].
    pub fn values<T: Component>(&self) -> Result<Vec<T>> {
        if T::COMPONENT_TYPE != self.component_type {
            return Err(AccessorError::ComponentTypeMismatch {
                expected: T::COMPONENT_TYPE,
                actual: self.component_type,
            });
        }
        buffers::values_from(&self.data)
    }

    /// Reads one component of one element, widened to `f64`
    pub fn component_as_f64(&self, element: usize, component: usize) -> Option<f64> {
        if component >= self.element_type.num_components() {
            return None;
        }
        let size = self.component_size_in_bytes();
        let bytes = self.element(element)?;
        let start = component * size;
        Some(read_as_f64(self.component_type, &bytes[start..start + size]))
    }

    /// Per-component minimum over all elements.
    ///
    /// Returns an empty vector when the accessor has no elements.
    pub fn min(&self) -> Vec<f64> {
        self.fold_components(f64::min)
    }

    /// Per-component maximum over all elements.
    ///
    /// Returns an empty vector when the accessor has no elements.
    pub fn max(&self) -> Vec<f64> {
        self.fold_components(f64::max)
    }

    fn fold_components(&self, f: fn(f64, f64) -> f64) -> Vec<f64> {
        if self.count == 0 {
            return Vec::new();
        }
        let size = self.component_size_in_bytes();
        let num_components = self.element_type.num_components();
        let mut result: Vec<f64> = Vec::with_capacity(num_components);
        for (i, bytes) in self.data.chunks_exact(size).enumerate() {
            let value = read_as_f64(self.component_type, bytes);
            let c = i % num_components;
            if i < num_components {
                result.push(value);
            } else {
                result[c] = f(result[c], value);
            }
        }
        result
    }
}

fn read_as_f64(component_type: ComponentType, bytes: &[u8]) -> f64 {
    fn widen<T: Component>(bytes: &[u8]) -> f64 {
        T::read_le(bytes).as_()
    }

    match component_type {
        ComponentType::Byte => widen::<i8>(bytes),
        ComponentType::UnsignedByte => widen::<u8>(bytes),
        ComponentType::Short => widen::<i16>(bytes),
        ComponentType::UnsignedShort => widen::<u16>(bytes),
        ComponentType::UnsignedInt => widen::<u32>(bytes),
        ComponentType::Float => widen::<f32>(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor_models;

    #[test]
    fn test_shape_queries() {
        let accessor = accessor_models::create_float_3d(&[0.0; 6]).unwrap();
        assert_eq!(accessor.component_size_in_bytes(), 4);
        assert_eq!(accessor.element_size_in_bytes(), 12);
        assert_eq!(accessor.byte_length(), 24);
        assert_eq!(accessor.count(), 2);
    }

    #[test]
    fn test_element() {
        let accessor = accessor_models::create_unsigned_short_scalar(&[1, 2, 3]).unwrap();
        assert_eq!(accessor.element(1), Some(&[2u8, 0][..]));
        assert_eq!(accessor.element(3), None);
    }

    #[test]
    fn test_values() {
        let accessor = accessor_models::create_unsigned_short_scalar(&[4, 5, 6]).unwrap();
        assert_eq!(accessor.values::<u16>().unwrap(), vec![4, 5, 6]);
        assert_eq!(
            accessor.values::<f32>(),
            Err(AccessorError::ComponentTypeMismatch {
                expected: ComponentType::Float,
                actual: ComponentType::UnsignedShort,
            })
        );
    }

    #[test]
    fn test_component_as_f64() {
        let accessor =
            accessor_models::create_float_2d(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(accessor.component_as_f64(1, 0), Some(3.0));
        assert_eq!(accessor.component_as_f64(1, 1), Some(4.0));
        assert_eq!(accessor.component_as_f64(1, 2), None);
        assert_eq!(accessor.component_as_f64(2, 0), None);
    }

    #[test]
    fn test_min_max() {
        let accessor = accessor_models::create_float_3d(&[
            1.0, -2.0, 3.0, //
            -4.0, 5.0, 0.5, //
            2.0, 0.0, -6.0,
        ])
        .unwrap();
        assert_eq!(accessor.min(), vec![-4.0, -2.0, -6.0]);
        assert_eq!(accessor.max(), vec![2.0, 5.0, 3.0]);
    }

    #[test]
    fn test_min_max_signed_bytes() {
        let accessor =
            accessor_models::create_typed(ElementType::Vec2, &[-3i8, 7, 4, -8]).unwrap();
        assert_eq!(accessor.min(), vec![-3.0, -8.0]);
        assert_eq!(accessor.max(), vec![4.0, 7.0]);
    }

    #[test]
    fn test_min_max_empty() {
        let accessor = accessor_models::create_float_4d(&[]).unwrap();
        assert!(accessor.min().is_empty());
        assert!(accessor.max().is_empty());
    }

    #[test]
    fn test_data_mut_keeps_shape() {
        let mut accessor = accessor_models::create_unsigned_int_scalar(&[0, 0]).unwrap();
        accessor.data_mut()[4] = 9;
        assert_eq!(accessor.values::<u32>().unwrap(), vec![0, 9]);
        assert_eq!(accessor.count(), 2);
    }
}
