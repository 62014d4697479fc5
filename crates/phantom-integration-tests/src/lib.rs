//! Cross-crate integration tests for the Phantom Year workspace live in `tests/`.
