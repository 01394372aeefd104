use std::{convert::TryFrom, fmt};

/// For faster error handling in "type" keyword validators we have this enum, to match
/// with it instead of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    /// JSON array
    Array,
    /// JSON boolean
    Boolean,
    /// JSON integer
    Integer,
    /// JSON null
    Null,
    /// JSON number
    Number,
    /// JSON object
    Object,
    /// JSON string
    String,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Array => f.write_str("array"),
            PrimitiveType::Boolean => f.write_str("boolean"),
            PrimitiveType::Integer => f.write_str("integer"),
            PrimitiveType::Null => f.write_str("null"),
            PrimitiveType::Number => f.write_str("number"),
            PrimitiveType::Object => f.write_str("object"),
            PrimitiveType::String => f.write_str("string"),
        }
    }
}

impl TryFrom<&str> for PrimitiveType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(PrimitiveType::Array),
            "boolean" => Ok(PrimitiveType::Boolean),
            "integer" => Ok(PrimitiveType::Integer),
            "null" => Ok(PrimitiveType::Null),
            "number" => Ok(PrimitiveType::Number),
            "object" => Ok(PrimitiveType::Object),
            "string" => Ok(PrimitiveType::String),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("integer", Ok(PrimitiveType::Integer))]
    #[test_case("number", Ok(PrimitiveType::Number))]
    #[test_case("integerr", Err(()))]
    fn parsing(input: &str, expected: Result<PrimitiveType, ()>) {
        assert_eq!(PrimitiveType::try_from(input), expected);
    }
}
