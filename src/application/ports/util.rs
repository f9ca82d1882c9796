// src/application/ports/util.rs

/// Turns a human-readable name into a lowercase, hyphenated, URL-safe token.
/// May return an empty string when nothing in the input survives.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
