//! InputProvider tests.
