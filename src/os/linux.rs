use libc::{c_void, getrandom};

/// Fills `buf` from the kernel entropy pool via `getrandom(2)`.
///
/// Short reads are retried until the buffer is full.
///
/// # Panics
/// Panics if `getrandom` fails for any reason other than an interrupted
/// call. Without entropy no key can be generated safely.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = std::io::Error::last_os_error();
            if err.kind() == std::io::ErrorKind::Interrupted {
                continue;
            }
            panic!("getrandom() failed: {err}");
        }

        filled += ret as usize;
    }
}
