//! Record normalizer tests.
