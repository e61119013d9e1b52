// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Support for formatted debug output.
//!
//! Drivers call the [`debug!`](crate::debug!) macro. Each message is prefixed
//! with the source location of the call and terminated by `\r\n`, then handed
//! to the sink the board registered with [`set_debug_writer`]. Until a sink
//! is registered, messages are discarded.
//!
//! ```rust,ignore
//! struct Semihost;
//!
//! impl kernel::debug::IoWrite for Semihost {
//!     fn write(&mut self, buf: &[u8]) -> usize {
//!         // push `buf` out of the chip
//!         buf.len()
//!     }
//! }
//!
//! static mut SEMIHOST: Semihost = Semihost;
//! unsafe { kernel::debug::set_debug_writer(&mut *core::ptr::addr_of_mut!(SEMIHOST)) };
//! kernel::debug!("PLL locked after {} polls", 12);
//! ```

use core::fmt::{write, Arguments, Result, Write};
use core::ptr::addr_of_mut;

/// A byte sink that receives formatted debug output.
pub trait IoWrite {
    /// Write `buf` and return the number of bytes consumed.
    fn write(&mut self, buf: &[u8]) -> usize;
}

static mut DEBUG_WRITER: Option<&'static mut dyn IoWrite> = None;

/// Register the sink that [`debug!`](crate::debug!) output goes to.
///
/// ## Safety
///
/// Must not be called while another context is emitting debug output.
pub unsafe fn set_debug_writer(writer: &'static mut dyn IoWrite) {
    // SAFETY: exclusive access is promised by the caller.
    unsafe {
        *addr_of_mut!(DEBUG_WRITER) = Some(writer);
    }
}

/// Drop the registered sink, if any, so later output is discarded.
///
/// ## Safety
///
/// Same requirements as [`set_debug_writer`].
pub unsafe fn clear_debug_writer() {
    // SAFETY: exclusive access is promised by the caller.
    unsafe {
        *addr_of_mut!(DEBUG_WRITER) = None;
    }
}

struct DebugWriter<'a> {
    sink: &'a mut dyn IoWrite,
}

impl Write for DebugWriter<'_> {
    fn write_str(&mut self, s: &str) -> Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let written = self.sink.write(bytes);
            if written == 0 {
                return Err(core::fmt::Error);
            }
            bytes = &bytes[written.min(bytes.len())..];
        }
        Ok(())
    }
}

/// Format `args` to the debug sink, prefixed by `file:line: `.
pub fn debug_fmt(args: Arguments, file_line: &(&'static str, u32)) {
    // SAFETY: debug output is emitted from a single thread of execution.
    let sink = unsafe { (*addr_of_mut!(DEBUG_WRITER)).as_deref_mut() };
    if let Some(sink) = sink {
        let mut writer = DebugWriter { sink };
        let (file, line) = *file_line;
        let _ = writer.write_fmt(format_args!("{}:{}: ", file, line));
        let _ = write(&mut writer, args);
        let _ = writer.write_str("\r\n");
    }
}

/// In-kernel `println()` debugging.
#[macro_export]
macro_rules! debug {
    () => ({
        // Allow an empty debug!() to print the location when hit
        $crate::debug!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_fmt(format_args!($msg), &(file!(), line!()))
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_fmt(format_args!($fmt, $($arg)+), &(file!(), line!()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static CAPTURED: Mutex<Vec<u8>> = Mutex::new(Vec::new());

    // Accepts at most three bytes per call to exercise partial writes.
    struct Capture;

    impl IoWrite for Capture {
        fn write(&mut self, buf: &[u8]) -> usize {
            let n = buf.len().min(3);
            CAPTURED.lock().unwrap().extend_from_slice(&buf[..n]);
            n
        }
    }

    #[test]
    fn output_reaches_registered_writer_only() {
        debug!("dropped {}", 1);
        assert!(CAPTURED.lock().unwrap().is_empty());

        unsafe { set_debug_writer(Box::leak(Box::new(Capture))) };
        debug!("divider {} of {}", 3, 4);
        let line = String::from_utf8(CAPTURED.lock().unwrap().clone()).unwrap();
        assert!(line.starts_with(file!()));
        assert!(line.ends_with(": divider 3 of 4\r\n"));

        unsafe { clear_debug_writer() };
        CAPTURED.lock().unwrap().clear();
        debug!();
        assert!(CAPTURED.lock().unwrap().is_empty());
    }
}
