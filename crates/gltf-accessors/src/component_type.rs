//! Accessor component types
//!
//! The numeric type of each scalar component of an accessor, identified by
//! the OpenGL constant that glTF uses for `accessor.componentType`.

use std::fmt;

use crate::error::AccessorError;

/// The `GL_BYTE` constant
pub const GL_BYTE: u32 = 5120;
/// The `GL_UNSIGNED_BYTE` constant
pub const GL_UNSIGNED_BYTE: u32 = 5121;
/// The `GL_SHORT` constant
pub const GL_SHORT: u32 = 5122;
/// The `GL_UNSIGNED_SHORT` constant
pub const GL_UNSIGNED_SHORT: u32 = 5123;
/// The `GL_UNSIGNED_INT` constant
pub const GL_UNSIGNED_INT: u32 = 5125;
/// The `GL_FLOAT` constant
pub const GL_FLOAT: u32 = 5126;

/// Component types that a glTF accessor may use.
///
/// The discriminants are the GL constants, so `ComponentType::Float as u32`
/// is `5126`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ComponentType {
    /// 8-bit signed integer
    Byte = GL_BYTE,
    /// 8-bit unsigned integer
    UnsignedByte = GL_UNSIGNED_BYTE,
    /// 16-bit signed integer
    Short = GL_SHORT,
    /// 16-bit unsigned integer
    UnsignedShort = GL_UNSIGNED_SHORT,
    /// 32-bit unsigned integer
    UnsignedInt = GL_UNSIGNED_INT,
    /// 32-bit floating point number
    Float = GL_FLOAT,
}

impl ComponentType {
    /// All component types, in GL constant order
    pub const ALL: [ComponentType; 6] = [
        ComponentType::Byte,
        ComponentType::UnsignedByte,
        ComponentType::Short,
        ComponentType::UnsignedShort,
        ComponentType::UnsignedInt,
        ComponentType::Float,
    ];

    /// Returns the size of one component in bytes
    ///
    /// # Examples
    /// ```
    /// use gltf_accessors::ComponentType;
    /// assert_eq!(ComponentType::UnsignedByte.size(), 1);
    /// assert_eq!(ComponentType::UnsignedShort.size(), 2);
    /// assert_eq!(ComponentType::Float.size(), 4);
    /// ```
    pub const fn size(self) -> usize {
        match self {
            ComponentType::Byte | ComponentType::UnsignedByte => 1,
            ComponentType::Short | ComponentType::UnsignedShort => 2,
            ComponentType::UnsignedInt | ComponentType::Float => 4,
        }
    }

    /// Returns the name of the data type that this component type stands for
    pub const fn name(self) -> &'static str {
        match self {
            ComponentType::Byte => "byte",
            ComponentType::UnsignedByte => "unsigned byte",
            ComponentType::Short => "short",
            ComponentType::UnsignedShort => "unsigned short",
            ComponentType::UnsignedInt => "unsigned int",
            ComponentType::Float => "float",
        }
    }

    /// Returns the GL constant of this component type
    pub const fn gl_constant(self) -> u32 {
        self as u32
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(self, ComponentType::Float)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolves a GL constant
impl TryFrom<u32> for ComponentType {
    type Error = AccessorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            GL_BYTE => Ok(ComponentType::Byte),
            GL_UNSIGNED_BYTE => Ok(ComponentType::UnsignedByte),
            GL_SHORT => Ok(ComponentType::Short),
            GL_UNSIGNED_SHORT => Ok(ComponentType::UnsignedShort),
            GL_UNSIGNED_INT => Ok(ComponentType::UnsignedInt),
            GL_FLOAT => Ok(ComponentType::Float),
            _ => Err(AccessorError::UnknownComponentType(value)),
        }
    }
}

impl From<ComponentType> for u32 {
    fn from(component_type: ComponentType) -> Self {
        component_type.gl_constant()
    }
}
