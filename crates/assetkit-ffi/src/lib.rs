//! assetkit FFI - C ABI over the embedded asset bundle
//!
//! Every export is total: a missing asset, a null pointer, an empty path or
//! a path that is not valid UTF-8 all produce the same "absent" result
//! (`false`, `NULL` or `-1`). Nothing here panics across the boundary.
//!
//! # Ownership
//!
//! Pointers returned by `assetkit_get_data`, `assetkit_get_mime_type`,
//! `assetkit_get_metadata`, `assetkit_list_paths` and
//! `assetkit_list_paths_joined` are owned by the caller and must be passed
//! to `assetkit_release_buffer` exactly once. `NULL` results need no
//! release. See `include/assetkit.h` for the C declarations.

mod alloc;
pub mod bundle;

pub use bundle::{init_logging, store};

use assetkit_asset::Asset;
use std::ffi::{c_char, c_void, CStr};
use std::ptr;

/// Returned by `assetkit_get_size` when no asset matches
pub const SIZE_NOT_FOUND: i64 = -1;

/// An asset's MIME type, size and bytes, returned as one block
///
/// `mime_type` and `data` point into the same allocation as the record
/// itself; release only the record.
#[repr(C)]
#[derive(Debug)]
pub struct AssetMetadata {
    pub mime_type: *const c_char,
    pub data: *const u8,
    pub size: u64,
}

/// Borrow a caller-supplied path, or `None` for null, empty or non-UTF-8 input
unsafe fn path_arg<'a>(path: *const c_char) -> Option<&'a str> {
    if path.is_null() {
        return None;
    }
    match CStr::from_ptr(path).to_str() {
        Ok("") | Err(_) => None,
        Ok(s) => Some(s),
    }
}

unsafe fn lookup(path: *const c_char) -> Option<&'static Asset> {
    path_arg(path).and_then(|p| store().get(p))
}

/// Build the store now instead of on first query. Returns the asset count.
#[no_mangle]
pub extern "C" fn assetkit_init() -> usize {
    store().len()
}

/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn assetkit_exists(path: *const c_char) -> bool {
    lookup(path).is_some()
}

/// Copy an asset's bytes into a caller-owned buffer.
///
/// Writes the length to `len_out` (0 when absent). An empty asset returns
/// a non-null buffer with length 0.
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string; `len_out` must be
/// null or writable.
#[no_mangle]
pub unsafe extern "C" fn assetkit_get_data(path: *const c_char, len_out: *mut usize) -> *mut u8 {
    let (buf, len) = match lookup(path) {
        Some(asset) => {
            let buf = alloc::copy_bytes(asset.data());
            let len = if buf.is_null() { 0 } else { asset.size() };
            (buf, len)
        }
        None => (ptr::null_mut(), 0),
    };

    if !len_out.is_null() {
        *len_out = len;
    }
    buf
}

/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn assetkit_get_mime_type(path: *const c_char) -> *mut c_char {
    match lookup(path) {
        Some(asset) => alloc::copy_c_str(asset.mime_type()),
        None => ptr::null_mut(),
    }
}

/// Size in bytes, or `SIZE_NOT_FOUND` (-1).
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn assetkit_get_size(path: *const c_char) -> i64 {
    lookup(path)
        .and_then(|asset| i64::try_from(asset.size()).ok())
        .unwrap_or(SIZE_NOT_FOUND)
}

/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn assetkit_get_metadata(path: *const c_char) -> *mut AssetMetadata {
    match lookup(path) {
        Some(asset) => alloc::metadata_record(asset.mime_type(), asset.data()),
        None => ptr::null_mut(),
    }
}

/// All asset paths, sorted, as an array of `*count_out` C strings.
///
/// The array and its strings are one allocation. Returns null (count 0)
/// only if allocation fails.
///
/// # Safety
/// `count_out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn assetkit_list_paths(count_out: *mut usize) -> *mut *mut c_char {
    let paths: Vec<&str> = store().paths().collect();
    let list = alloc::string_array(&paths);

    if !count_out.is_null() {
        *count_out = if list.is_null() { 0 } else { paths.len() };
    }
    list
}

/// All asset paths, sorted, joined with `\n`.
#[no_mangle]
pub extern "C" fn assetkit_list_paths_joined() -> *mut c_char {
    let joined = store().paths().collect::<Vec<_>>().join("\n");
    alloc::copy_c_str(&joined)
}

/// Release a buffer returned by any other export. Null is ignored.
///
/// # Safety
/// `buf` must be null or an unreleased pointer returned by this library.
#[no_mangle]
pub unsafe extern "C" fn assetkit_release_buffer(buf: *mut c_void) {
    alloc::release(buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::counter;
    use serial_test::serial;
    use std::collections::BTreeSet;
    use std::ffi::CString;
    use std::slice;

    fn c(path: &str) -> CString {
        CString::new(path).unwrap()
    }

    unsafe fn data_of(path: &str) -> Option<Vec<u8>> {
        let path = c(path);
        let mut len = usize::MAX;
        let buf = assetkit_get_data(path.as_ptr(), &mut len);
        if buf.is_null() {
            assert_eq!(len, 0);
            return None;
        }
        let bytes = slice::from_raw_parts(buf, len).to_vec();
        assetkit_release_buffer(buf.cast());
        Some(bytes)
    }

    #[test]
    #[serial]
    fn test_init_counts_assets() {
        assert_eq!(assetkit_init(), 3);
    }

    #[test]
    #[serial]
    fn test_exists() {
        unsafe {
            assert!(assetkit_exists(c("notes.txt").as_ptr()));
            assert!(assetkit_exists(c("/notes.txt").as_ptr()));
            assert!(assetkit_exists(c("icons/logo.png").as_ptr()));
            assert!(assetkit_exists(c("empty.txt").as_ptr()));
            assert!(!assetkit_exists(c("missing.bin").as_ptr()));
            assert!(!assetkit_exists(c("").as_ptr()));
            assert!(!assetkit_exists(ptr::null()));
        }
    }

    #[test]
    #[serial]
    fn test_invalid_utf8_is_absent() {
        let path = CString::new(vec![0xffu8, 0xfe]).unwrap();
        unsafe {
            assert!(!assetkit_exists(path.as_ptr()));
            assert_eq!(assetkit_get_size(path.as_ptr()), SIZE_NOT_FOUND);
        }
    }

    #[test]
    #[serial]
    fn test_get_data() {
        let before = counter::live();
        unsafe {
            assert_eq!(data_of("notes.txt").as_deref(), Some(&b"hello"[..]));
            assert_eq!(data_of("/notes.txt"), data_of("notes.txt"));
            assert_eq!(data_of("icons/logo.png").map(|d| d.len()), Some(37));
        }
        assert_eq!(counter::live(), before);
    }

    #[test]
    #[serial]
    fn test_get_data_empty_asset() {
        unsafe {
            let path = c("empty.txt");
            let mut len = usize::MAX;
            let buf = assetkit_get_data(path.as_ptr(), &mut len);
            assert!(!buf.is_null());
            assert_eq!(len, 0);
            assetkit_release_buffer(buf.cast());
        }
    }

    #[test]
    #[serial]
    fn test_get_data_missing_allocates_nothing() {
        let before = counter::live();
        unsafe {
            assert!(data_of("missing.bin").is_none());
            assert!(assetkit_get_data(ptr::null(), ptr::null_mut()).is_null());
            assert!(assetkit_get_mime_type(c("missing.bin").as_ptr()).is_null());
            assert!(assetkit_get_metadata(c("missing.bin").as_ptr()).is_null());
        }
        assert_eq!(counter::live(), before);
    }

    #[test]
    #[serial]
    fn test_get_mime_type() {
        unsafe {
            let mime = assetkit_get_mime_type(c("notes.txt").as_ptr());
            assert_eq!(CStr::from_ptr(mime).to_str().unwrap(), "text/plain");
            assetkit_release_buffer(mime.cast());

            let mime = assetkit_get_mime_type(c("/icons/logo.png").as_ptr());
            assert_eq!(CStr::from_ptr(mime).to_str().unwrap(), "image/png");
            assetkit_release_buffer(mime.cast());
        }
    }

    #[test]
    #[serial]
    fn test_get_size() {
        unsafe {
            assert_eq!(assetkit_get_size(c("notes.txt").as_ptr()), 5);
            assert_eq!(assetkit_get_size(c("icons/logo.png").as_ptr()), 37);
            assert_eq!(assetkit_get_size(c("empty.txt").as_ptr()), 0);
            assert_eq!(assetkit_get_size(c("missing.bin").as_ptr()), SIZE_NOT_FOUND);
            assert_eq!(assetkit_get_size(ptr::null()), SIZE_NOT_FOUND);
        }
    }

    #[test]
    #[serial]
    fn test_size_matches_data() {
        for path in store().paths() {
            unsafe {
                let size = assetkit_get_size(c(path).as_ptr());
                assert_eq!(data_of(path).map(|d| d.len() as i64), Some(size));
            }
        }
    }

    #[test]
    #[serial]
    fn test_get_metadata_single_release() {
        let before = counter::live();
        unsafe {
            let record = assetkit_get_metadata(c("icons/logo.png").as_ptr());
            assert!(!record.is_null());
            assert_eq!(counter::live(), before + 1);

            let meta = &*record;
            assert_eq!(CStr::from_ptr(meta.mime_type).to_str().unwrap(), "image/png");
            assert_eq!(meta.size, 37);
            assert_eq!(
                slice::from_raw_parts(meta.data, meta.size as usize),
                store().data("icons/logo.png").unwrap()
            );

            assetkit_release_buffer(record.cast());
        }
        assert_eq!(counter::live(), before);
    }

    #[test]
    #[serial]
    fn test_get_metadata_empty_asset() {
        unsafe {
            let record = assetkit_get_metadata(c("empty.txt").as_ptr());
            assert!(!record.is_null());
            assert_eq!((*record).size, 0);
            assert_eq!(CStr::from_ptr((*record).mime_type).to_str().unwrap(), "text/plain");
            assetkit_release_buffer(record.cast());
        }
    }

    #[test]
    #[serial]
    fn test_list_paths() {
        let before = counter::live();
        unsafe {
            let mut count = usize::MAX;
            let list = assetkit_list_paths(&mut count);
            assert!(!list.is_null());
            assert_eq!(count, 3);
            assert_eq!(counter::live(), before + 1);

            let listed: BTreeSet<String> = (0..count)
                .map(|i| CStr::from_ptr(*list.add(i)).to_str().unwrap().to_string())
                .collect();
            let expected: BTreeSet<String> = ["empty.txt", "icons/logo.png", "notes.txt"]
                .into_iter()
                .map(String::from)
                .collect();
            assert_eq!(listed, expected);
            assert!(listed.iter().all(|p| assetkit_exists(c(p).as_ptr())));

            assetkit_release_buffer(list.cast());
        }
        assert_eq!(counter::live(), before);
    }

    #[test]
    #[serial]
    fn test_list_paths_joined() {
        unsafe {
            let joined = assetkit_list_paths_joined();
            assert_eq!(
                CStr::from_ptr(joined).to_str().unwrap(),
                "empty.txt\nicons/logo.png\nnotes.txt"
            );
            assetkit_release_buffer(joined.cast());
        }
    }

    #[test]
    #[serial]
    fn test_release_null_is_noop() {
        let before = counter::live();
        unsafe { assetkit_release_buffer(ptr::null_mut()) };
        assert_eq!(counter::live(), before);
    }

    #[test]
    #[serial]
    fn test_concurrent_callers() {
        let before = counter::live();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| unsafe {
                    for _ in 0..50 {
                        assert_eq!(data_of("notes.txt").as_deref(), Some(&b"hello"[..]));
                        assert_eq!(assetkit_get_size(c("icons/logo.png").as_ptr()), 37);
                    }
                });
            }
        });
        assert_eq!(counter::live(), before);
    }
}
