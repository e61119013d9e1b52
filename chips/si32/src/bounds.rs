// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Argument checks for values written into register fields.

use kernel::debug;
use kernel::ErrorCode;

use crate::config::CONFIG;

/// Accept `value` if it is no larger than `max`.
pub(crate) fn at_most(what: &str, value: u32, max: u32) -> Result<(), ErrorCode> {
    if value > max {
        if CONFIG.debug_rejected_arguments {
            debug!("si32: rejected {} = {:#x} (max {:#x})", what, value, max);
        }
        return Err(ErrorCode::INVAL);
    }
    Ok(())
}

/// Accept `value` if it fits in a field `bits` wide.
pub(crate) fn fits(what: &str, value: u32, bits: u32) -> Result<(), ErrorCode> {
    at_most(what, value, (1 << bits) - 1)
}

/// Accept `value` if it lies within `min..=max`.
pub(crate) fn within(what: &str, value: u32, min: u32, max: u32) -> Result<(), ErrorCode> {
    if value < min {
        if CONFIG.debug_rejected_arguments {
            debug!("si32: rejected {} = {:#x} (min {:#x})", what, value, min);
        }
        return Err(ErrorCode::INVAL);
    }
    at_most(what, value, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_widths() {
        assert_eq!(fits("n", 0xFFF, 12), Ok(()));
        assert_eq!(fits("n", 0x1000, 12), Err(ErrorCode::INVAL));
        assert_eq!(fits("bit", 1, 1), Ok(()));
        assert_eq!(fits("bit", 2, 1), Err(ErrorCode::INVAL));
    }

    #[test]
    fn ranges() {
        assert_eq!(within("m", 0, 1, 4096), Err(ErrorCode::INVAL));
        assert_eq!(within("m", 1, 1, 4096), Ok(()));
        assert_eq!(within("m", 4096, 1, 4096), Ok(()));
        assert_eq!(within("m", 4097, 1, 4096), Err(ErrorCode::INVAL));
    }
}
