//! Domain services used by the HTTP routes.

pub mod csrf;
pub mod handbook;
