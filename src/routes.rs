//! Named route registry with URL template substitution

use serde_json::Value;
use std::collections::HashMap;

/// Name to URL template table, resolved at call sites.
///
/// Templates contain `{param}` placeholders. Unknown names resolve to
/// themselves as literal URLs, so resolving is always safe. The table is
/// owned by the caller and immutable after setup; there is no global
/// registry.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named template; chainable for table setup
    pub fn register(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.routes.insert(name.into(), template.into());
        self
    }

    /// Whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Resolve a route name into a URL.
    ///
    /// Object params substitute placeholders by key; a non-object param is
    /// shorthand for `{"id": value}`. Unregistered names are returned
    /// unchanged as literal URLs.
    pub fn resolve(&self, name: &str, params: Option<&Value>) -> String {
        let Some(template) = self.routes.get(name) else {
            return name.to_string();
        };
        let mut url = template.clone();
        match params {
            Some(Value::Object(map)) => {
                for (key, value) in map {
                    url = url.replace(&format!("{{{key}}}"), &render(value));
                }
            }
            Some(value) => {
                url = url.replace("{id}", &render(value));
            }
            None => {}
        }
        url
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
