//! Buffers handed to native callers
//!
//! Everything returned across the boundary comes from the C allocator, so
//! `assetkit_release_buffer` (a plain `free`) can reclaim it. Each returned
//! object is a single allocation: strings and payloads that belong to a
//! record or list are packed into the same block.

use crate::AssetMetadata;
use std::ffi::{c_char, c_void};
use std::mem::size_of;
use std::ptr;

fn malloc(len: usize) -> *mut u8 {
    // malloc(0) may return NULL, which callers would read as "absent"
    let buf = unsafe { libc::malloc(len.max(1)) }.cast::<u8>();
    if buf.is_null() {
        log::warn!("Foreign allocation of {} bytes failed", len);
    } else {
        counter::allocated();
    }
    buf
}

/// Write `s` followed by a NUL terminator at `dst`; returns the byte after it
unsafe fn write_c_str(dst: *mut u8, s: &str) -> *mut u8 {
    ptr::copy_nonoverlapping(s.as_ptr(), dst, s.len());
    *dst.add(s.len()) = 0;
    dst.add(s.len() + 1)
}

/// Copy bytes into a fresh buffer. Empty input still yields a non-null buffer.
pub(crate) fn copy_bytes(bytes: &[u8]) -> *mut u8 {
    let buf = malloc(bytes.len());
    if !buf.is_null() {
        unsafe { ptr::copy_nonoverlapping(bytes.as_ptr(), buf, bytes.len()) };
    }
    buf
}

/// Copy a string into a fresh NUL-terminated buffer
pub(crate) fn copy_c_str(s: &str) -> *mut c_char {
    let buf = malloc(s.len() + 1);
    if !buf.is_null() {
        unsafe { write_c_str(buf, s) };
    }
    buf.cast()
}

/// Pack a metadata record, its MIME string and its payload into one block
///
/// Layout: `[AssetMetadata][mime_type\0][data]`. The record's pointers
/// refer into the same block.
pub(crate) fn metadata_record(mime_type: &str, data: &[u8]) -> *mut AssetMetadata {
    let header = size_of::<AssetMetadata>();
    let block = malloc(header + mime_type.len() + 1 + data.len());
    if block.is_null() {
        return ptr::null_mut();
    }

    unsafe {
        let mime_ptr = block.add(header);
        let data_ptr = write_c_str(mime_ptr, mime_type);
        ptr::copy_nonoverlapping(data.as_ptr(), data_ptr, data.len());

        let record = block.cast::<AssetMetadata>();
        record.write(AssetMetadata {
            mime_type: mime_ptr.cast_const().cast(),
            data: data_ptr.cast_const(),
            size: data.len() as u64,
        });
        record
    }
}

/// Pack a list of strings into one block
///
/// Layout: `[ptr_0 .. ptr_n-1][s_0\0 .. s_n-1\0]`. The leading pointer
/// table refers into the string area of the same block.
pub(crate) fn string_array(items: &[&str]) -> *mut *mut c_char {
    let table = items.len() * size_of::<*mut c_char>();
    let strings: usize = items.iter().map(|s| s.len() + 1).sum();
    let block = malloc(table + strings);
    if block.is_null() {
        return ptr::null_mut();
    }

    unsafe {
        let slots = block.cast::<*mut c_char>();
        let mut cursor = block.add(table);
        for (i, item) in items.iter().enumerate() {
            slots.add(i).write(cursor.cast());
            cursor = write_c_str(cursor, item);
        }
        slots
    }
}

/// Free a buffer produced by this module. Null is ignored.
///
/// # Safety
/// `buf` must be null or a pointer returned by this module that has not
/// been released yet.
pub(crate) unsafe fn release(buf: *mut c_void) {
    if buf.is_null() {
        return;
    }
    counter::released();
    libc::free(buf);
}


#[cfg(not(test))]
mod counter {
    #[inline]
    pub fn allocated() {}

    #[inline]
    pub fn released() {}
}
