//! Operation parsing from positional arguments.

use crate::error::ProjectorError;

/// The single operation an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Print one resolved key, or every scope when `None`
    Print(Option<String>),
    Add(String, String),
    Remove(String),
}

impl Operation {
    /// Operation name for logging (e.g. "print", "print.all", "add").
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Print(None) => "print.all",
            Operation::Print(Some(_)) => "print",
            Operation::Add(..) => "add",
            Operation::Remove(_) => "rm",
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(self, Operation::Print(_))
    }
}

impl TryFrom<Vec<String>> for Operation {
    type Error = ProjectorError;

    fn try_from(args: Vec<String>) -> Result<Self, Self::Error> {
        let mut args = args.into_iter();
        let Some(first) = args.next() else {
            return Ok(Operation::Print(None));
        };
        let rest: Vec<String> = args.collect();

        match first.as_str() {
            "add" => match <[String; 2]>::try_from(rest) {
                Ok([key, value]) => Ok(Operation::Add(key, value)),
                Err(rest) => Err(arity_error("add", "2 arguments", rest.len())),
            },
            "rm" => match <[String; 1]>::try_from(rest) {
                Ok([key]) => Ok(Operation::Remove(key)),
                Err(rest) => Err(arity_error("rm", "1 argument", rest.len())),
            },
            _ if !rest.is_empty() => Err(arity_error("print", "0 or 1 arguments", rest.len() + 1)),
            _ => Ok(Operation::Print(Some(first))),
        }
    }
}

fn arity_error(operation: &str, expected: &str, got: usize) -> ProjectorError {
    ProjectorError::ConfigError(format!(
        "{} expects {}, but got {}",
        operation, expected, got
    ))
}
