//! The one capability the core needs from caller-supplied values.

use std::fmt::Debug;

/// Turns a value into log text.
///
/// Scalars can fill `{key}` placeholders; compound values (maps, lists,
/// debug dumps) are only ever appended after the body.
pub trait Render {
    /// Human-readable text for the log line.
    fn render(&self) -> String;

    /// Whether the value may replace a `{key}` placeholder.
    fn is_scalar(&self) -> bool {
        true
    }
}

impl Render for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Render for &'static str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! render_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Render for $t {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<T: Render> Render for Option<T> {
    fn render(&self) -> String {
        self.as_ref().map(Render::render).unwrap_or_default()
    }

    fn is_scalar(&self) -> bool {
        self.as_ref().is_none_or(Render::is_scalar)
    }
}

/// Strings render bare, other scalars as JSON literals, and arrays or
/// objects as pretty-printed JSON.
impl Render for serde_json::Value {
    fn render(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::String(s) => s.clone(),
            Self::Bool(_) | Self::Number(_) => self.to_string(),
            Self::Array(_) | Self::Object(_) => {
                serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
            }
        }
    }

    fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array(_) | Self::Object(_))
    }
}

/// Logs any `Debug` value as a pretty debug print.
#[derive(Debug, Clone)]
pub struct Dump<T>(pub T);

impl<T: Debug> Render for Dump<T> {
    fn render(&self) -> String {
        format!("{:#?}", self.0)
    }

    fn is_scalar(&self) -> bool {
        false
    }
}
