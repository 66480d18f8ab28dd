//! Stateless string helpers shared by the template rendering tools
//!
//! All functions here are total: any input, including the empty string,
//! produces a result rather than an error. Inputs are never mutated.

pub mod normalize;
pub mod scan;

pub use normalize::{remove_parentheses, to_lower_case, trim, trim_left, trim_right};
pub use scan::{multi_find_between, replace_all};
