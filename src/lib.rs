//! Navlink library exports for testing

pub mod core;
pub mod linking;

#[cfg(test)]
pub mod test_support;
