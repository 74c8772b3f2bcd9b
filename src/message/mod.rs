//! Message bodies and their context values.
//!
//! The core never rejects a payload: anything implementing [`Render`] can be
//! logged or attached as context. `{key}` placeholders in a message are
//! replaced by scalar context values; whatever context is left over is
//! appended to the body.

mod render;

pub use render::{Dump, Render};

use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;

/// `{key}` where the key is any run of characters other than braces.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("Invalid placeholder regex"));

/// Separator between a positional context value and the body.
const SEPARATOR: &str = " - ";

type Value = Box<dyn Render + Send + Sync>;

/// Ordered context attached to a log call: keyed values can fill `{key}`
/// placeholders, positional ones are only ever appended.
#[derive(Default)]
pub struct Context {
    items: Vec<(Option<String>, Value)>,
}

impl Context {
    /// Empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a keyed value.
    #[must_use]
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Render + Send + Sync + 'static,
    ) -> Self {
        self.items.push((Some(key.into()), Box::new(value)));
        self
    }

    /// Adds a positional value.
    #[must_use]
    pub fn push(mut self, value: impl Render + Send + Sync + 'static) -> Self {
        self.items.push((None, Box::new(value)));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn scalar(&self, key: &str) -> Option<(&str, &Value)> {
        self.items.iter().find_map(|(k, v)| match k.as_deref() {
            Some(k) if k == key && v.is_scalar() => Some((k, v)),
            _ => None,
        })
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.items.iter().map(|(k, v)| (k, v.render())))
            .finish()
    }
}

/// Substitutes placeholders and appends the remaining context.
///
/// A placeholder whose key is missing, or whose value isn't scalar, is left
/// untouched. Keys consumed by a placeholder are not repeated in the tail.
#[must_use]
pub fn interpolate(message: &str, context: &Context) -> String {
    let mut used: HashSet<&str> = HashSet::new();

    let mut body = PLACEHOLDER
        .replace_all(message, |caps: &Captures<'_>| {
            let key = &caps[1];
            context.scalar(key).map_or_else(
                || caps[0].to_string(),
                |(k, value)| {
                    used.insert(k);
                    value.render()
                },
            )
        })
        .into_owned();

    for (key, value) in &context.items {
        match key.as_deref() {
            Some(k) if used.contains(k) => {}
            Some(k) => {
                body.push_str(SEPARATOR);
                body.push_str(k);
                body.push_str(": ");
                body.push_str(&value.render());
            }
            None => {
                body.push_str(SEPARATOR);
                body.push_str(&value.render());
            }
        }
    }

    body
}
