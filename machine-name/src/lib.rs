//! Generates localized Heroku-style machine names from 32-bit serial numbers.
//!
//! See the [`haikunator`] crate for how names are composed and the
//! [`wordlists`] crate for where the words come from.

pub mod cli;
pub mod or_env;
pub mod serial;
