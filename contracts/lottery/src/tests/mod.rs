//! Test modules for the swap lottery contract.

mod common;
