//! ChosenAttributes - the split order produced by an induction run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, append-only record of the attributes chosen as split points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChosenAttributes(Vec<String>);

impl ChosenAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attribute: impl Into<String>) {
        self.0.push(attribute.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ChosenAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_in_order() {
        let mut chosen = ChosenAttributes::new();
        chosen.push("pat");
        chosen.push("alt");
        assert_eq!(chosen.to_string(), "[pat, alt]");
    }
}
