//! Cross-crate tests for the file → conversion → CSV pipeline.

#[cfg(test)]
mod batch;
