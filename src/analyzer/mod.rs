//! Analysis engines.

pub mod meshconfig;
