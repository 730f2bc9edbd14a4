//! User-facing notification channel
//!
//! The toast surface of the admin dashboard, rendered for a terminal:
//! mutations report success or failure through a [`Notify`] implementation,
//! with per-resource message sets replacing the generic defaults.

use colored::Colorize;

/// Sink for user-facing success/error messages
pub trait Notify: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints colored notifications to stderr, keeping stdout clean for
/// table/JSON output.
pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green().bold(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message);
    }
}

/// Discards every notification; used with `--quiet` and in tests.
pub struct SilentNotifier;

impl Notify for SilentNotifier {
    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Default messages per mutation type, overridable per resource.
#[derive(Debug, Clone)]
pub struct Messages {
    pub create_ok: String,
    pub create_err: String,
    pub update_ok: String,
    pub update_err: String,
    pub delete_ok: String,
    pub delete_err: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            create_ok: "Created!".to_string(),
            create_err: "Create failed!".to_string(),
            update_ok: "Updated!".to_string(),
            update_err: "Update failed!".to_string(),
            delete_ok: "Deleted!".to_string(),
            delete_err: "Delete failed!".to_string(),
        }
    }
}

impl Messages {
    /// Message set naming the resource, e.g. `for_noun("Category")` gives
    /// "Category created!" / "Category create failed!" and so on.
    pub fn for_noun(noun: &str) -> Self {
        Self {
            create_ok: format!("{} created!", noun),
            create_err: format!("{} create failed!", noun),
            update_ok: format!("{} updated!", noun),
            update_err: format!("{} update failed!", noun),
            delete_ok: format!("{} deleted!", noun),
            delete_err: format!("{} delete failed!", noun),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        let messages = Messages::default();
        assert_eq!(messages.create_ok, "Created!");
        assert_eq!(messages.delete_err, "Delete failed!");
    }

    #[test]
    fn test_for_noun() {
        let messages = Messages::for_noun("Category");
        assert_eq!(messages.create_ok, "Category created!");
        assert_eq!(messages.update_err, "Category update failed!");
        assert_eq!(messages.delete_ok, "Category deleted!");
    }
}
