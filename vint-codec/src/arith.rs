//! Checked arithmetic used during encode and decode.
//!
//! Value reconstruction (tagged add, delta chains, FOR offsets) must not
//! wrap silently on malformed or adversarial input; these helpers map a
//! failed checked operation onto the `Overflow` error code.

use vint_types::{ErrorCode, VintError};

/// `a + b`, or `Overflow` if the sum leaves the u64 domain.
#[inline]
pub fn checked_add(a: u64, b: u64) -> Result<u64, VintError> {
    a.checked_add(b)
        .ok_or(VintError::Code(ErrorCode::Overflow))
}

/// `a - b`, or `Overflow` if the difference leaves the u64 domain.
#[inline]
pub fn checked_sub(a: u64, b: u64) -> Result<u64, VintError> {
    a.checked_sub(b)
        .ok_or(VintError::Code(ErrorCode::Overflow))
}

/// `a + b` on signed values, or `Overflow` on i64 wrap.
#[inline]
pub fn checked_add_signed(a: i64, b: i64) -> Result<i64, VintError> {
    a.checked_add(b)
        .ok_or(VintError::Code(ErrorCode::Overflow))
}
