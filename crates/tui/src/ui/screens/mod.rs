//! Screen rendering modules.

pub mod cheatsheet;
pub mod editor;
