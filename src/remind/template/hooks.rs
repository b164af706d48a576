//! Render hooks: the dynamic half of a template.
//!
//! A placeholder like `{{date}}` resolves by calling a named hook with the
//! notebook and note name. Hooks are declared capabilities registered in a
//! [`HookRegistry`], never code loaded from the notes tree, and each
//! notebook's `.hooks` file allow-lists the names its template may call.

use chrono::Local;
use std::collections::HashMap;
use thiserror::Error;

/// Why a placeholder failed to render. Every variant collapses to the same
/// recovery at the render site: the literal placeholder text is emitted and
/// rendering continues.
#[derive(Debug, Error)]
pub enum RenderFailure {
    #[error("hook {0:?} is not declared in the allow-list")]
    NotAllowed(String),

    #[error("no hook named {0:?}")]
    UnknownHook(String),

    #[error("hook failed: {0}")]
    HookFailed(String),
}

/// A provider of named render functions for `(notebook, note)` pairs
pub trait RenderHooks {
    fn render(
        &self,
        name: &str,
        notebook: &str,
        note: &str,
    ) -> std::result::Result<String, RenderFailure>;
}

/// Explicit mapping from notebook name to its hook provider, with the
/// built-in hooks as a shared fallback. Providers extend the built-ins:
/// a name the provider does not know falls through to them.
pub struct HookRegistry {
    providers: HashMap<String, Box<dyn RenderHooks>>,
    builtins: BuiltinHooks,
}

impl HookRegistry {
    pub fn with_builtins() -> Self {
        Self {
            providers: HashMap::new(),
            builtins: BuiltinHooks,
        }
    }

    /// Register a hook provider for one notebook
    pub fn register(&mut self, notebook: &str, hooks: Box<dyn RenderHooks>) {
        self.providers.insert(notebook.to_string(), hooks);
    }

    pub fn call(
        &self,
        notebook: &str,
        name: &str,
        note: &str,
    ) -> std::result::Result<String, RenderFailure> {
        if let Some(provider) = self.providers.get(notebook) {
            match provider.render(name, notebook, note) {
                Err(RenderFailure::UnknownHook(_)) => {}
                other => return other,
            }
        }
        self.builtins.render(name, notebook, note)
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Hook names available to every notebook without registration
pub const BUILTIN_HOOKS: &[&str] = &["date", "time", "datetime", "notebook", "note"];

struct BuiltinHooks;

impl RenderHooks for BuiltinHooks {
    fn render(
        &self,
        name: &str,
        notebook: &str,
        note: &str,
    ) -> std::result::Result<String, RenderFailure> {
        let value = match name {
            "date" => Local::now().format("%Y-%m-%d").to_string(),
            "time" => Local::now().format("%H:%M").to_string(),
            "datetime" => Local::now().format("%Y-%m-%d %H:%M").to_string(),
            "notebook" => notebook.to_string(),
            "note" => note.to_string(),
            _ => return Err(RenderFailure::UnknownHook(name.to_string())),
        };
        Ok(value)
    }
}

/// Seed content for a freshly created `.hooks` file: every built-in enabled,
/// with a short explanation on top.
pub fn starter_allow_list() -> String {
    let mut out = String::from(
        "# Hooks this notebook's template may call, one name per line.\n\
         # Remove a line to forbid the hook. Built-ins:\n",
    );
    for name in BUILTIN_HOOKS {
        out.push_str(name);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_cover_notebook_and_note() {
        let registry = HookRegistry::with_builtins();
        assert_eq!(registry.call("work", "notebook", "a.md").unwrap(), "work");
        assert_eq!(registry.call("work", "note", "a.md").unwrap(), "a.md");
    }

    #[test]
    fn builtin_date_looks_like_a_date() {
        let registry = HookRegistry::with_builtins();
        let date = registry.call("work", "date", "a.md").unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(date.chars().filter(|c| *c == '-').count(), 2);
    }

    #[test]
    fn unknown_hook_is_an_error() {
        let registry = HookRegistry::with_builtins();
        let err = registry.call("work", "missing_fn", "a.md").unwrap_err();
        assert!(matches!(err, RenderFailure::UnknownHook(_)));
    }

    struct Upcase;

    impl RenderHooks for Upcase {
        fn render(
            &self,
            name: &str,
            _notebook: &str,
            note: &str,
        ) -> std::result::Result<String, RenderFailure> {
            match name {
                "upcase" => Ok(note.to_uppercase()),
                "boom" => Err(RenderFailure::HookFailed("boom".to_string())),
                other => Err(RenderFailure::UnknownHook(other.to_string())),
            }
        }
    }

    #[test]
    fn registered_provider_extends_builtins() {
        let mut registry = HookRegistry::with_builtins();
        registry.register("work", Box::new(Upcase));

        // provider hook on its notebook
        assert_eq!(registry.call("work", "upcase", "a.md").unwrap(), "A.MD");
        // unknown to the provider, falls through to builtins
        assert_eq!(registry.call("work", "note", "a.md").unwrap(), "a.md");
        // provider not registered for this notebook
        let err = registry.call("personal", "upcase", "a.md").unwrap_err();
        assert!(matches!(err, RenderFailure::UnknownHook(_)));
    }

    #[test]
    fn provider_failure_does_not_fall_through() {
        let mut registry = HookRegistry::with_builtins();
        registry.register("work", Box::new(Upcase));

        let err = registry.call("work", "boom", "a.md").unwrap_err();
        assert!(matches!(err, RenderFailure::HookFailed(_)));
    }

    #[test]
    fn starter_allow_list_enables_builtins() {
        let starter = starter_allow_list();
        for name in BUILTIN_HOOKS {
            assert!(starter.lines().any(|l| l == *name));
        }
    }
}
