//! Literals in generated expressions

use serde::{Deserialize, Serialize};

/// Render a string as a single-quoted template literal
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Value a state is compared against: one state, or a list of states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    One(String),
    Many(Vec<String>),
}

impl StateValue {
    /// Render as a template literal
    ///
    /// Lists are rendered compactly with single-quoted items
    /// (`['on','open']`), which is what existing dashboards contain.
    pub fn render(&self) -> String {
        match self {
            StateValue::One(value) => quote(value),
            StateValue::Many(values) => {
                let items: Vec<String> = values.iter().map(|v| quote(v)).collect();
                format!("[{}]", items.join(","))
            }
        }
    }

    pub fn is_many(&self) -> bool {
        matches!(self, StateValue::Many(_))
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::One(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::One(value)
    }
}

impl From<Vec<String>> for StateValue {
    fn from(values: Vec<String>) -> Self {
        StateValue::Many(values)
    }
}

impl From<&[&str]> for StateValue {
    fn from(values: &[&str]) -> Self {
        StateValue::Many(values.iter().map(|v| v.to_string()).collect())
    }
}
