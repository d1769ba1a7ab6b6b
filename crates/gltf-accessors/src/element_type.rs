//! Accessor element types
//!
//! The shape of a single accessor element, as written in `accessor.type`.

use std::fmt;
use std::str::FromStr;

use crate::error::AccessorError;

/// Element shapes of a glTF accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl ElementType {
    pub const ALL: [ElementType; 7] = [
        ElementType::Scalar,
        ElementType::Vec2,
        ElementType::Vec3,
        ElementType::Vec4,
        ElementType::Mat2,
        ElementType::Mat3,
        ElementType::Mat4,
    ];

    /// Returns the number of components in one element
    ///
    /// # Examples
    /// ```
    /// use gltf_accessors::ElementType;
    /// assert_eq!(ElementType::Scalar.num_components(), 1);
    /// assert_eq!(ElementType::Vec3.num_components(), 3);
    /// assert_eq!(ElementType::Mat4.num_components(), 16);
    /// ```
    pub const fn num_components(self) -> usize {
        match self {
            ElementType::Scalar => 1,
            ElementType::Vec2 => 2,
            ElementType::Vec3 => 3,
            ElementType::Vec4 | ElementType::Mat2 => 4,
            ElementType::Mat3 => 9,
            ElementType::Mat4 => 16,
        }
    }

    /// Returns the name used for this element type in glTF JSON
    pub const fn name(self) -> &'static str {
        match self {
            ElementType::Scalar => "SCALAR",
            ElementType::Vec2 => "VEC2",
            ElementType::Vec3 => "VEC3",
            ElementType::Vec4 => "VEC4",
            ElementType::Mat2 => "MAT2",
            ElementType::Mat3 => "MAT3",
            ElementType::Mat4 => "MAT4",
        }
    }

    pub const fn is_matrix(self) -> bool {
        matches!(self, ElementType::Mat2 | ElementType::Mat3 | ElementType::Mat4)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses the exact glTF name. Matching is case-sensitive.
impl FromStr for ElementType {
    type Err = AccessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCALAR" => Ok(ElementType::Scalar),
            "VEC2" => Ok(ElementType::Vec2),
            "VEC3" => Ok(ElementType::Vec3),
            "VEC4" => Ok(ElementType::Vec4),
            "MAT2" => Ok(ElementType::Mat2),
            "MAT3" => Ok(ElementType::Mat3),
            "MAT4" => Ok(ElementType::Mat4),
            _ => Err(AccessorError::UnknownElementType(s.to_string())),
        }
    }
}
