//! Shared traits implemented by expense records.

/// Associates entities with the free-text category they are filed under.
pub trait BelongsToCategory {
    fn category(&self) -> &str;

    /// Compares categories the way filters do: case-insensitively.
    fn in_category(&self, candidate: &str) -> bool {
        self.category().to_lowercase() == candidate.to_lowercase()
    }
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
