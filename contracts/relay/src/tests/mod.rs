//! Test modules for the randomness relay contract.

mod common;

mod initialization;
