// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Turn free text into a slug candidate; may return an empty string.
    fn slugify(&self, input: &str) -> String;
}
