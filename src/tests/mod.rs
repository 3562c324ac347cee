//! Internal unit tests, grouped by module.

mod format;
mod request;
mod support;

#[cfg(feature = "json")]
mod provider;
