//! Test-only helpers shared by the engine crate's unit tests and its
//! `tests/` integration binaries.

pub mod logging;
