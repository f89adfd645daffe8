//! Structured key/value pairs attached to a log emission.

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

/// A value carried by a [`Field`].
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Duration(Duration),
    I64(i64),
    U64(u64),
    /// The original error value, not a rendering of it.
    Error(&'a (dyn StdError + 'static)),
}

impl FieldValue<'_> {
    /// Short name of the variant, used by structured sinks that keep type info.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "str",
            Self::Duration(_) => "duration",
            Self::I64(_) => "i64",
            Self::U64(_) => "u64",
            Self::Error(_) => "error",
        }
    }

    /// The wrapped error, if this value is one.
    #[must_use]
    pub fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Error(err) => Some(*err),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Duration(d) => write!(f, "{d:?}"),
            Self::I64(n) => write!(f, "{n}"),
            Self::U64(n) => write!(f, "{n}"),
            Self::Error(err) => write!(f, "{:?}", err.to_string()),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl From<Duration> for FieldValue<'_> {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<u64> for FieldValue<'_> {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

impl<'a> From<&'a (dyn StdError + 'static)> for FieldValue<'a> {
    fn from(value: &'a (dyn StdError + 'static)) -> Self {
        Self::Error(value)
    }
}

/// One structured key/value pair.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub key: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    #[must_use]
    pub fn new(key: &'static str, value: impl Into<FieldValue<'a>>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Renders a field list as space-separated `key=value` pairs.
pub struct Fields<'s, 'a>(pub &'s [Field<'a>]);

impl fmt::Display for Fields<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn strings_are_quoted() {
        let field = Field::new("sql", "SELECT 1");
        assert_eq!(field.to_string(), r#"sql="SELECT 1""#);
    }

    #[test]
    fn durations_use_debug_rendering() {
        let field = Field::new("duration", Duration::from_millis(250));
        assert_eq!(field.to_string(), "duration=250ms");
    }

    #[test]
    fn error_value_keeps_original() {
        let err = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset");
        let value = FieldValue::from(&err as &(dyn StdError + 'static));

        assert_eq!(value.kind(), "error");
        let inner = value.as_error().unwrap();
        assert!(std::ptr::eq(
            inner as *const dyn StdError as *const (),
            &err as *const io::Error as *const ()
        ));
        assert_eq!(value.to_string(), r#""connection reset""#);
    }

    #[test]
    fn field_list_renders_in_order() {
        let fields = [
            Field::new("duration", Duration::from_millis(3)),
            Field::new("sql", "SELECT 1"),
            Field::new("rows", 2u64),
        ];
        assert_eq!(
            Fields(&fields).to_string(),
            r#"duration=3ms sql="SELECT 1" rows=2"#
        );
    }

    #[test]
    fn empty_field_list_renders_empty() {
        assert_eq!(Fields(&[]).to_string(), "");
    }
}
