//! Text → `Coord`. Accepts the rendered form `(x, y)` and the bare form `x,y`.

use std::fmt::Display;
use std::str::FromStr;

use super::types::Coord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCoordError {
    #[error("expected `(x, y)` or `x,y`, got {0:?}")]
    Shape(String),
    #[error("invalid component {text:?}: {reason}")]
    Component { text: String, reason: String },
}

fn component<T>(text: &str) -> Result<T, ParseCoordError>
where
    T: FromStr,
    T::Err: Display,
{
    let text = text.trim();
    text.parse().map_err(|e: T::Err| ParseCoordError::Component {
        text: text.to_string(),
        reason: e.to_string(),
    })
}

impl<T> FromStr for Coord<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('('), trimmed.ends_with(')')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => trimmed,
            _ => return Err(ParseCoordError::Shape(s.to_string())),
        };
        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| ParseCoordError::Shape(s.to_string()))?;
        if y.contains(',') {
            return Err(ParseCoordError::Shape(s.to_string()));
        }
        Ok(Coord::new(component(x)?, component(y)?))
    }
}
