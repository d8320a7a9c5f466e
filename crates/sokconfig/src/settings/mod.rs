//! Settings registry
//!
//! Values are declared on a [`Settings`] registry under an identifier. The
//! identifier doubles as the default external name: [`Settings::fill_empty_names`]
//! binds it to every value constructed without an explicit name, after which
//! [`Settings::set_values`] routes incoming `name -> value` pairs by bound name.

pub mod registry;

pub use registry::Settings;

// vim: ts=4
