//! Path notations: a token sequence or a single delimited string.

use serde_json::Value;

use crate::PathError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    Tokens(Vec<String>),
    Joined(String),
}

impl Path {
    /// Splits the path into tokens. A joined path is split on `delimiter`.
    pub fn tokens(&self, delimiter: &str) -> Result<Vec<String>, PathError> {
        let tokens = match self {
            Path::Tokens(tokens) => tokens.clone(),
            Path::Joined(joined) => {
                if delimiter.is_empty() {
                    return Err(PathError::InvalidDelimiter);
                }
                joined.split(delimiter).map(str::to_owned).collect()
            }
        };
        if tokens.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(tokens)
    }
}

impl TryFrom<&Path> for Path {
    type Error = PathError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        Ok(path.clone())
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(joined: &str) -> Result<Self, Self::Error> {
        Ok(Path::Joined(joined.to_owned()))
    }
}

impl TryFrom<String> for Path {
    type Error = PathError;

    fn try_from(joined: String) -> Result<Self, Self::Error> {
        Ok(Path::Joined(joined))
    }
}

impl TryFrom<Vec<String>> for Path {
    type Error = PathError;

    fn try_from(tokens: Vec<String>) -> Result<Self, Self::Error> {
        Ok(Path::Tokens(tokens))
    }
}

impl TryFrom<&[String]> for Path {
    type Error = PathError;

    fn try_from(tokens: &[String]) -> Result<Self, Self::Error> {
        Ok(Path::Tokens(tokens.to_vec()))
    }
}

impl TryFrom<&[&str]> for Path {
    type Error = PathError;

    fn try_from(tokens: &[&str]) -> Result<Self, Self::Error> {
        Ok(Path::Tokens(tokens.iter().map(|t| (*t).to_owned()).collect()))
    }
}

impl<const N: usize> TryFrom<[&str; N]> for Path {
    type Error = PathError;

    fn try_from(tokens: [&str; N]) -> Result<Self, Self::Error> {
        Path::try_from(&tokens[..])
    }
}

/// Accepts a JSON string (joined form) or an array of strings and
/// non-negative integers (token form).
impl TryFrom<&Value> for Path {
    type Error = PathError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(joined) => Ok(Path::Joined(joined.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(token) => Ok(token.clone()),
                    Value::Number(n) => n
                        .as_u64()
                        .map(|i| i.to_string())
                        .ok_or(PathError::InvalidToken),
                    _ => Err(PathError::InvalidToken),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Path::Tokens),
            _ => Err(PathError::InvalidShape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joined_paths_split_on_delimiter() {
        let path = Path::try_from("a.b.0").unwrap();
        assert_eq!(path.tokens(".").unwrap(), vec!["a", "b", "0"]);
        assert_eq!(path.tokens("/").unwrap(), vec!["a.b.0"]);
        assert_eq!(path.tokens(""), Err(PathError::InvalidDelimiter));
    }

    #[test]
    fn json_paths() {
        let path = Path::try_from(&json!(["a", 0, "b"])).unwrap();
        assert_eq!(path, Path::Tokens(vec!["a".into(), "0".into(), "b".into()]));
        assert_eq!(Path::try_from(&json!(123)), Err(PathError::InvalidShape));
        assert_eq!(Path::try_from(&json!(["a", -1])), Err(PathError::InvalidToken));
        assert_eq!(Path::try_from(&json!(["a", null])), Err(PathError::InvalidToken));
    }

    #[test]
    fn empty_token_list() {
        let path = Path::Tokens(vec![]);
        assert_eq!(path.tokens("."), Err(PathError::Empty));
    }
}
