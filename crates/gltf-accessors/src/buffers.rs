//! Conversions between typed numeric slices and little-endian byte buffers
//!
//! glTF binary buffers are always little-endian, independent of the host.
//! All functions here allocate a fresh buffer and never alias their input.

use byteorder::{ByteOrder, LittleEndian};
use num_traits::AsPrimitive;

use crate::component_type::ComponentType;
use crate::element_type::ElementType;
use crate::error::{AccessorError, Result};

mod private {
    pub trait Sealed {}
}

/// A Rust numeric type that can be stored as an accessor component.
///
/// `i32` is stored as [`ComponentType::UnsignedInt`]: its bits are written
/// unchanged, so negative values read back as large unsigned values.
pub trait Component: private::Sealed + Copy + AsPrimitive<f64> {
    const COMPONENT_TYPE: ComponentType;

    /// Writes `self` into the first `COMPONENT_TYPE.size()` bytes of `dst`
    fn write_le(self, dst: &mut [u8]);

    /// Reads a value from the first `COMPONENT_TYPE.size()` bytes of `src`
    fn read_le(src: &[u8]) -> Self;
}

macro_rules! impl_component {
    ($ty:ty, $component_type:expr, $write:ident, $read:ident) => {
        impl private::Sealed for $ty {}

        impl Component for $ty {
            const COMPONENT_TYPE: ComponentType = $component_type;

            #[inline]
            fn write_le(self, dst: &mut [u8]) {
                LittleEndian::$write(dst, self);
            }

            #[inline]
            fn read_le(src: &[u8]) -> Self {
                LittleEndian::$read(src)
            }
        }
    };
}

impl private::Sealed for u8 {}

impl Component for u8 {
    const COMPONENT_TYPE: ComponentType = ComponentType::UnsignedByte;

    #[inline]
    fn write_le(self, dst: &mut [u8]) {
        dst[0] = self;
    }

    #[inline]
    fn read_le(src: &[u8]) -> Self {
        src[0]
    }
}

impl private::Sealed for i8 {}

impl Component for i8 {
    const COMPONENT_TYPE: ComponentType = ComponentType::Byte;

    #[inline]
    fn write_le(self, dst: &mut [u8]) {
        dst[0] = self as u8;
    }

    #[inline]
    fn read_le(src: &[u8]) -> Self {
        src[0] as i8
    }
}

impl_component!(i16, ComponentType::Short, write_i16, read_i16);
impl_component!(u16, ComponentType::UnsignedShort, write_u16, read_u16);
impl_component!(i32, ComponentType::UnsignedInt, write_i32, read_i32);
impl_component!(u32, ComponentType::UnsignedInt, write_u32, read_u32);
impl_component!(f32, ComponentType::Float, write_f32, read_f32);

/// Encodes `values` as a little-endian byte buffer.
///
/// The result has `values.len() * size_of::<T>()` bytes.
///
/// # Examples
/// ```
/// use gltf_accessors::buffers::bytes_from;
/// assert_eq!(bytes_from(&[1u16, 0x0203]), vec![1, 0, 3, 2]);
/// ```
pub fn bytes_from<T: Component>(values: &[T]) -> Vec<u8> {
    let size = T::COMPONENT_TYPE.size();
    let mut bytes = vec![0u8; values.len() * size];
    for (chunk, value) in bytes.chunks_exact_mut(size).zip(values) {
        value.write_le(chunk);
    }
    bytes
}

/// Encodes `values` as little-endian unsigned shorts, keeping only the low
/// 16 bits of each value.
///
/// This is a plain truncating cast: `v` is stored as `v mod 65536`, so
/// `65537` becomes `1` and `-1` becomes `65535`.
pub fn narrow_int_to_short_bytes(values: &[i32]) -> Vec<u8> {
    let mut bytes = vec![0u8; values.len() * 2];
    let mut truncated = 0usize;
    for (chunk, &value) in bytes.chunks_exact_mut(2).zip(values) {
        let narrowed = value as u16;
        if i32::from(narrowed) != value {
            truncated += 1;
        }
        LittleEndian::write_u16(chunk, narrowed);
    }
    if truncated > 0 {
        log::warn!(
            "{} of {} values did not fit into an unsigned short and were truncated",
            truncated,
            values.len()
        );
    }
    bytes
}

/// Decodes a little-endian byte buffer into values of type `T`.
///
/// Fails with [`AccessorError::InvalidBufferSize`] if the length is not a
/// multiple of `size_of::<T>()`.
pub fn values_from<T: Component>(bytes: &[u8]) -> Result<Vec<T>> {
    let size = T::COMPONENT_TYPE.size();
    if bytes.len() % size != 0 {
        return Err(AccessorError::InvalidBufferSize {
            element_type: ElementType::Scalar.name().to_string(),
            component_type: T::COMPONENT_TYPE.name().to_string(),
            expected_divisor: size,
            actual_length: bytes.len(),
        });
    }
    Ok(bytes.chunks_exact(size).map(T::read_le).collect())
}
