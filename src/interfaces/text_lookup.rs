// ============================================================================
// Text Lookup Interface
// Defines the contract for producing localized error messages
// ============================================================================

use std::collections::HashMap;

/// Localized text provider used to build user-facing error messages.
///
/// Implementations resolve `key` within `catalog`/`namespace` and fall back
/// to `default_text` when they have no translation. `%NAME%` placeholders in
/// the resolved text are replaced from `vars`.
pub trait TextLookup: Send + Sync {
    fn lookup(
        &self,
        key: &str,
        catalog: &str,
        namespace: &str,
        default_text: &str,
        vars: &HashMap<String, String>,
    ) -> String;
}

/// Replace every `%NAME%` placeholder whose name is in `vars`.
///
/// Unknown placeholders are left untouched.
pub fn substitute_vars(text: &str, vars: &HashMap<String, String>) -> String {
    if vars.is_empty() || !text.contains('%') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('%') {
            Some(end) => match vars.get(&after[..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 1..];
                }
                None => {
                    // not a known placeholder; keep the '%' and rescan from the next one
                    out.push('%');
                    rest = after;
                }
            },
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Lookup that always uses the default text.
///
/// For environments without i18n, and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTextLookup;

impl TextLookup for DefaultTextLookup {
    fn lookup(
        &self,
        _key: &str,
        _catalog: &str,
        _namespace: &str,
        default_text: &str,
        vars: &HashMap<String, String>,
    ) -> String {
        substitute_vars(default_text, vars)
    }
}

/// Logging decorator around another lookup
pub struct LoggingTextLookup<L> {
    inner: L,
}

impl<L: TextLookup> LoggingTextLookup<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: TextLookup> TextLookup for LoggingTextLookup<L> {
    fn lookup(
        &self,
        key: &str,
        catalog: &str,
        namespace: &str,
        default_text: &str,
        vars: &HashMap<String, String>,
    ) -> String {
        let text = self.inner.lookup(key, catalog, namespace, default_text, vars);
        tracing::debug!(key, catalog, namespace, ?vars, text = %text, "Text lookup");
        text
    }
}
