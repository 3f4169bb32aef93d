//! Linux entropy via the `getrandom(2)` system call.
//!
//! `getrandom` reads from the kernel CSPRNG and blocks only until the pool
//! has been initialized once after boot.

use std::io;

use libc::{c_void, getrandom};

/// Fills `buf` with random bytes from the kernel.
///
/// Short reads and `EINTR` are retried until the buffer is full. Any other
/// error is returned as-is.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let rest = &mut buf[filled..];
        let ret = unsafe { getrandom(rest.as_mut_ptr() as *mut c_void, rest.len(), 0) };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
