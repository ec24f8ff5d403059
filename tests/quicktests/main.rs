//! Randomized property tests. Each submodule covers one public type.

mod quaternion;
mod tree;
