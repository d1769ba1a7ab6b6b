//! C API layer for accessor construction and packing
//!
//! Accessors cross the boundary as opaque `AccessorModel` pointers that are
//! owned by the caller until passed to [`gltf_accessors_free`]. Failing calls
//! return a status code and record a message retrievable through
//! [`gltf_accessors_get_last_error`].

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_uint};
use std::ptr;
use std::slice;

use crate::accessor_model::AccessorModel;
use crate::accessor_models;
use crate::component_type::ComponentType;
use crate::error::AccessorError;
use crate::packing;

/// Status codes for the C API
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum gltf_accessors_status_t {
    GLTF_ACCESSORS_STATUS_OK = 0,
    GLTF_ACCESSORS_STATUS_INVALID_PARAMETER = -3,
    GLTF_ACCESSORS_STATUS_INVALID_BUFFER_SIZE = -7,
    GLTF_ACCESSORS_STATUS_UNKNOWN_ELEMENT_TYPE = -8,
    GLTF_ACCESSORS_STATUS_UNKNOWN_COMPONENT_TYPE = -9,
}

impl Default for gltf_accessors_status_t {
    fn default() -> Self {
        gltf_accessors_status_t::GLTF_ACCESSORS_STATUS_OK
    }
}

impl From<&AccessorError> for gltf_accessors_status_t {
    fn from(error: &AccessorError) -> Self {
        match error {
            AccessorError::InvalidBufferSize { .. } => {
                gltf_accessors_status_t::GLTF_ACCESSORS_STATUS_INVALID_BUFFER_SIZE
            }
            AccessorError::UnknownElementType(_) => {
                gltf_accessors_status_t::GLTF_ACCESSORS_STATUS_UNKNOWN_ELEMENT_TYPE
            }
            AccessorError::UnknownComponentType(_) => {
                gltf_accessors_status_t::GLTF_ACCESSORS_STATUS_UNKNOWN_COMPONENT_TYPE
            }
            AccessorError::ComponentTypeMismatch { .. } => {
                gltf_accessors_status_t::GLTF_ACCESSORS_STATUS_INVALID_PARAMETER
            }
        }
    }
}

// ===== Accessor C API =====

/// Creates an accessor from `len` bytes at `data`.
///
/// `component_type` is a GL constant and `type_name` a NUL-terminated glTF
/// element type name. The bytes are copied. On success `*out` receives a new
/// accessor that must be released with `gltf_accessors_free`.
///
/// # Safety
///
/// `type_name` must be a valid C string, `data` must point to `len` readable
/// bytes (or be null when `len` is 0) and `out` must be writable.
#[no_mangle]
pub unsafe extern "C" fn gltf_accessors_create(
    component_type: c_uint,
    type_name: *const c_char,
    data: *const u8,
    len: usize,
    out: *mut *mut AccessorModel,
) -> gltf_accessors_status_t {
    if type_name.is_null() || out.is_null() || (data.is_null() && len > 0) {
        set_last_error("Null pointer passed to gltf_accessors_create");
        return gltf_accessors_status_t::GLTF_ACCESSORS_STATUS_INVALID_PARAMETER;
    }

    let type_name = match CStr::from_ptr(type_name).to_str() {
        Ok(name) => name,
        Err(_) => {
            set_last_error("Element type name is not valid UTF-8");
            return gltf_accessors_status_t::GLTF_ACCESSORS_STATUS_INVALID_PARAMETER;
        }
    };

    let bytes = if len == 0 {
        Vec::new()
    } else {
        slice::from_raw_parts(data, len).to_vec()
    };

    let result = ComponentType::try_from(component_type)
        .and_then(|component_type| accessor_models::create(component_type, type_name, bytes));

    match result {
        Ok(accessor) => {
            *out = Box::into_raw(Box::new(accessor));
            gltf_accessors_status_t::GLTF_ACCESSORS_STATUS_OK
        }
        Err(error) => {
            set_last_error(&error.to_string());
            *out = ptr::null_mut();
            gltf_accessors_status_t::from(&error)
        }
    }
}

/// Releases an accessor created by `gltf_accessors_create`
///
/// # Safety
///
/// `accessor` must be null or a pointer returned by `gltf_accessors_create`
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn gltf_accessors_free(accessor: *mut AccessorModel) {
    if !accessor.is_null() {
        drop(Box::from_raw(accessor));
    }
}

/// Returns the number of elements, or 0 for a null accessor
///
/// # Safety
///
/// `accessor` must be null or a live accessor pointer.
#[no_mangle]
pub unsafe extern "C" fn gltf_accessors_count(accessor: *const AccessorModel) -> usize {
    accessor.as_ref().map_or(0, AccessorModel::count)
}

/// Returns the element size in bytes, or 0 for a null accessor
///
/// # Safety
///
/// `accessor` must be null or a live accessor pointer.
#[no_mangle]
pub unsafe extern "C" fn gltf_accessors_element_size(accessor: *const AccessorModel) -> usize {
    accessor
        .as_ref()
        .map_or(0, AccessorModel::element_size_in_bytes)
}

/// Returns the GL component type constant, or 0 for a null accessor
///
/// # Safety
///
/// `accessor` must be null or a live accessor pointer.
#[no_mangle]
pub unsafe extern "C" fn gltf_accessors_component_type(accessor: *const AccessorModel) -> c_uint {
    accessor
        .as_ref()
        .map_or(0, |accessor| accessor.component_type().gl_constant())
}

/// Returns a pointer to the accessor bytes and writes their length to `len`
///
/// # Safety
///
/// `accessor` must be null or a live accessor pointer and `len` must be
/// writable. The returned pointer is valid until the accessor is freed.
#[no_mangle]
pub unsafe extern "C" fn gltf_accessors_data(
    accessor: *const AccessorModel,
    len: *mut usize,
) -> *const u8 {
    if len.is_null() {
        return ptr::null();
    }
    match accessor.as_ref() {
        Some(accessor) => {
            *len = accessor.byte_length();
            accessor.data().as_ptr()
        }
        None => {
            *len = 0;
            ptr::null()
        }
    }
}

// ===== Packing C API =====

/// Collects the non-null accessors of a C array
unsafe fn accessors_from_raw<'a>(
    accessors: *const *const AccessorModel,
    count: usize,
) -> Vec<&'a AccessorModel> {
    if accessors.is_null() || count == 0 {
        return Vec::new();
    }
    slice::from_raw_parts(accessors, count)
        .iter()
        .filter_map(|accessor| accessor.as_ref())
        .collect()
}

/// Least common multiple of the component sizes of `count` accessors
///
/// # Safety
///
/// `accessors` must be null or point to `count` accessor pointers, each null
/// or live. Null entries are skipped.
#[no_mangle]
pub unsafe extern "C" fn gltf_accessors_common_alignment(
    accessors: *const *const AccessorModel,
    count: usize,
) -> usize {
    packing::common_alignment_bytes(accessors_from_raw(accessors, count))
}

/// Largest element size of `count` accessors
///
/// # Safety
///
/// Same requirements as `gltf_accessors_common_alignment`.
#[no_mangle]
pub unsafe extern "C" fn gltf_accessors_common_byte_stride(
    accessors: *const *const AccessorModel,
    count: usize,
) -> usize {
    packing::common_byte_stride(accessors_from_raw(accessors, count))
}

// ===== Error Handling C API =====

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = RefCell::new(None);
}

/// Gets the last error message of the calling thread.
///
/// Returns null if there is none. A non-null result must be released with
/// `gltf_accessors_free_string`.
#[no_mangle]
pub extern "C" fn gltf_accessors_get_last_error() -> *mut c_char {
    LAST_ERROR.with(|error| match error.borrow().as_deref() {
        Some(msg) => CString::new(msg).map_or(ptr::null_mut(), CString::into_raw),
        None => ptr::null_mut(),
    })
}

/// Clears the last error message
#[no_mangle]
pub extern "C" fn gltf_accessors_clear_error() {
    LAST_ERROR.with(|error| {
        *error.borrow_mut() = None;
    });
}

/// Releases a string returned by `gltf_accessors_get_last_error`
///
/// # Safety
///
/// `s` must be null or a pointer returned by `gltf_accessors_get_last_error`
/// that has not been released yet.
#[no_mangle]
pub unsafe extern "C" fn gltf_accessors_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

fn set_last_error(error_msg: &str) {
    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = Some(error_msg.to_string());
    });
}
