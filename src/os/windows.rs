use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// Fills `buf` from the system preferred RNG.
///
/// # Panics
/// Panics if `BCryptGenRandom` reports a failure status.
pub(crate) fn sys_random(buf: &mut [u8]) {
    for chunk in buf.chunks_mut(u32::MAX as usize) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            panic!("BCryptGenRandom failed with status {status}");
        }
    }
}
