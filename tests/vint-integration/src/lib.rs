//! Integration test crate for the VINT workspace. All tests live under
//! `tests/`; this library is intentionally empty.
