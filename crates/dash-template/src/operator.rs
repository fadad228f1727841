//! Comparison operators usable in state filters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[default]
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    In,
    NotIn,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Lt => "lt",
            Operator::Le => "le",
            Operator::Gt => "gt",
            Operator::Ge => "ge",
            Operator::In => "in",
            Operator::NotIn => "not_in",
        }
    }

    /// Render the filter step keeping the states matching `value`
    ///
    /// `not_in` has no test of its own and becomes `rejectattr(.., 'in', ..)`.
    pub fn filter(&self, value: &str) -> String {
        match self {
            Operator::NotIn => format!("rejectattr('state','in',{})", value),
            op => format!("selectattr('state','{}',{})", op.as_str(), value),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" | "==" => Ok(Operator::Eq),
            "ne" | "!=" => Ok(Operator::Ne),
            "lt" | "<" => Ok(Operator::Lt),
            "le" | "<=" => Ok(Operator::Le),
            "gt" | ">" => Ok(Operator::Gt),
            "ge" | ">=" => Ok(Operator::Ge),
            "in" => Ok(Operator::In),
            "not_in" | "not in" => Ok(Operator::NotIn),
            other => Err(TemplateError::UnknownOperator {
                operator: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_rendering() {
        assert_eq!(
            Operator::Eq.filter("'21.4'"),
            "selectattr('state','eq','21.4')"
        );
        assert_eq!(
            Operator::NotIn.filter("['off']"),
            "rejectattr('state','in',['off'])"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("ne".parse::<Operator>().unwrap(), Operator::Ne);
        assert_eq!(">=".parse::<Operator>().unwrap(), Operator::Ge);
        assert!("like".parse::<Operator>().is_err());
    }
}
