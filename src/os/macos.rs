use libc::{arc4random_buf, c_void};

/// Fills `buf` with random bytes from `arc4random_buf`, which cannot fail.
pub(crate) fn sys_random(buf: &mut [u8]) {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut c_void, buf.len());
    }
}
