//! Benchmark crate for the VINT workspace. All benchmarks live under
//! `benches/`; this library is intentionally empty.
