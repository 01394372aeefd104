//! Error types
use crate::{
    paths::JSONPointer,
    primitive_type::PrimitiveType,
};
use ahash::AHashMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;
use std::{
    borrow::Cow,
    error, fmt, io,
};

/// The error type for everything that can go wrong before validation
/// starts: schema parsing and reference resolution.
///
/// These errors are fatal. Validation cannot run on a schema whose
/// references did not fully resolve.
#[derive(Debug)]
pub enum SchemaError {
    /// The schema document violates a structural constraint.
    SchemaParse {
        /// What exactly is malformed.
        reason: String,
    },
    /// A relative `$ref` cannot be resolved because no ancestor supplies an
    /// absolute base URI.
    NoBaseUri {
        /// The reference or `id` that needed a base.
        reference: String,
    },
    /// A fragment pointer does not resolve to any subtree.
    RefNotFound {
        /// The offending reference.
        reference: String,
    },
    /// Resolution produced a non-object JSON value.
    RefNotASchema {
        /// The offending reference.
        reference: String,
    },
    /// Reference URI uses a scheme other than `http(s)` or `file`.
    UnsupportedScheme {
        /// The scheme in question.
        scheme: String,
    },
    /// Reading a `file://` document failed.
    File {
        /// The document URL.
        url: String,
        /// Underlying cause.
        error: io::Error,
    },
    /// Fetching an `http(s)://` document failed, including non-2xx responses.
    #[cfg(any(feature = "reqwest", test))]
    Http {
        /// The document URL.
        url: String,
        /// Underlying cause.
        error: reqwest::Error,
    },
    /// A fetched document is not valid JSON.
    JSONParse {
        /// Underlying cause.
        error: serde_json::Error,
    },
    /// A reference or `id` is not a valid URL.
    InvalidUrl {
        /// Underlying cause.
        error: url::ParseError,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::SchemaParse { reason } => write!(f, "Invalid schema: {}", reason),
            SchemaError::NoBaseUri { reference } => write!(
                f,
                "No absolute base URI could be determined to resolve '{}'",
                reference
            ),
            SchemaError::RefNotFound { reference } => {
                write!(f, "Reference '{}' does not resolve to any subtree", reference)
            }
            SchemaError::RefNotASchema { reference } => {
                write!(f, "Reference '{}' resolves to a non-schema value", reference)
            }
            SchemaError::UnsupportedScheme { scheme } => {
                write!(f, "Unsupported reference scheme: '{}'", scheme)
            }
            SchemaError::File { url, error } => write!(f, "Error reading {}: {}", url, error),
            #[cfg(any(feature = "reqwest", test))]
            SchemaError::Http { url, error } => write!(f, "Error fetching {}: {}", url, error),
            SchemaError::JSONParse { error } => write!(f, "Document is not valid JSON: {}", error),
            SchemaError::InvalidUrl { error } => write!(f, "Invalid URL: {}", error),
        }
    }
}

impl error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SchemaError::File { error, .. } => Some(error),
            #[cfg(any(feature = "reqwest", test))]
            SchemaError::Http { error, .. } => Some(error),
            SchemaError::JSONParse { error } => Some(error),
            SchemaError::InvalidUrl { error } => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        SchemaError::JSONParse { error }
    }
}
impl From<url::ParseError> for SchemaError {
    #[inline]
    fn from(error: url::ParseError) -> Self {
        SchemaError::InvalidUrl { error }
    }
}

/// Kinds of errors that may happen during validation
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum ValidationErrorKind {
    /// The input array contains more items than expected.
    AdditionalItems { limit: usize },
    /// The input object contains a property forbidden by `additionalProperties: false`.
    AdditionalProperties { property: String },
    /// The input value is not valid under all of the given schemas.
    AllOf,
    /// The input value is not valid under any of the given schemas.
    AnyOf,
    /// A property required by an array-form dependency is missing.
    Dependency { property: String, dependency: String },
    /// The instance does not satisfy a schema-form dependency.
    DependencySchema { property: String },
    /// The input value doesn't match any of the specified options.
    Enum { options: Value },
    /// Value is too large.
    ExclusiveMaximum { limit: f64 },
    /// Value is too small.
    ExclusiveMinimum { limit: f64 },
    /// The input doesn't match the specified format.
    Format { format: String },
    /// The subschema at this position is malformed, e.g. a non-positive
    /// `multipleOf` or an invalid `pattern`.
    InvalidSchema { reason: String },
    /// An array element does not match the `items`/`additionalItems` schema
    /// applying to its position.
    Items,
    /// Value is too large.
    Maximum { limit: f64 },
    /// Too many items in an array.
    MaxItems { limit: u64 },
    /// String is too long.
    MaxLength { limit: u64 },
    /// Too many properties in an object.
    MaxProperties { limit: u64 },
    /// Value is too small.
    Minimum { limit: f64 },
    /// Too few items in an array.
    MinItems { limit: u64 },
    /// String is too short.
    MinLength { limit: u64 },
    /// Not enough properties in an object.
    MinProperties { limit: u64 },
    /// Number is not a multiple of another number.
    MultipleOf { multiple_of: f64 },
    /// Negated schema failed validation.
    Not { schema: Value },
    /// The given instance is valid under more than one of the given schemas.
    OneOfMultipleValid { valid_indices: Vec<usize> },
    /// The given instance is not valid under any of the given schemas.
    OneOfNotValid,
    /// The input doesn't match a pattern.
    Pattern { pattern: String },
    /// An object member does not match the schemas collected for its key.
    Property { property: String },
    /// A required property is missing.
    Required { property: String },
    /// The input value doesn't match one or multiple required types.
    Type { kind: TypeKind },
    /// The input array has non-unique elements.
    UniqueItems,
    /// A reference that resolution left in place (reference cycles across
    /// documents) cannot be followed at validation time.
    UnresolvedReference { reference: String },
}

#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum TypeKind {
    Single(PrimitiveType),
    Multiple(Vec<PrimitiveType>),
}

/// A single violation of an instance-level rule.
///
/// Aggregating keywords (`allOf`, `anyOf`, `oneOf`, `not` and the container
/// passes) attach the contributing failures as a nested [`ErrorBag`].
#[derive(Debug)]
pub struct ValidationError<'a> {
    /// Value of the instance fragment that failed validation.
    pub instance: Cow<'a, Value>,
    /// Type of validation error.
    pub kind: ValidationErrorKind,
    /// Location of the fragment within the instance.
    pub instance_path: JSONPointer,
    /// Contributing subschema failures; empty for leaf violations.
    pub sub_errors: ErrorBag<'a>,
}

/// Shortcuts for creation of specific error kinds.
impl<'a> ValidationError<'a> {
    fn new(
        instance: &'a Value,
        instance_path: JSONPointer,
        kind: ValidationErrorKind,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind,
            instance_path,
            sub_errors: ErrorBag::new(),
        }
    }

    fn aggregated(
        instance: &'a Value,
        instance_path: JSONPointer,
        kind: ValidationErrorKind,
        sub_errors: ErrorBag<'a>,
    ) -> ValidationError<'a> {
        ValidationError {
            instance: Cow::Borrowed(instance),
            kind,
            instance_path,
            sub_errors,
        }
    }

    /// Convert the borrowed instance data into owned, untying the error from
    /// the validated value's lifetime.
    pub fn into_owned(self) -> ValidationError<'static> {
        ValidationError {
            instance: Cow::Owned(self.instance.into_owned()),
            kind: self.kind,
            instance_path: self.instance_path,
            sub_errors: self.sub_errors.into_owned(),
        }
    }

    pub(crate) fn additional_items(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: usize,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::AdditionalItems { limit },
        )
    }
    pub(crate) fn additional_properties(
        instance: &'a Value,
        instance_path: JSONPointer,
        property: String,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::AdditionalProperties { property },
        )
    }
    pub(crate) fn all_of(
        instance: &'a Value,
        instance_path: JSONPointer,
        sub_errors: ErrorBag<'a>,
    ) -> ValidationError<'a> {
        ValidationError::aggregated(instance, instance_path, ValidationErrorKind::AllOf, sub_errors)
    }
    pub(crate) fn any_of(
        instance: &'a Value,
        instance_path: JSONPointer,
        sub_errors: ErrorBag<'a>,
    ) -> ValidationError<'a> {
        ValidationError::aggregated(instance, instance_path, ValidationErrorKind::AnyOf, sub_errors)
    }
    pub(crate) fn dependency(
        instance: &'a Value,
        instance_path: JSONPointer,
        property: String,
        dependency: String,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::Dependency {
                property,
                dependency,
            },
        )
    }
    pub(crate) fn dependency_schema(
        instance: &'a Value,
        instance_path: JSONPointer,
        property: String,
        sub_errors: ErrorBag<'a>,
    ) -> ValidationError<'a> {
        ValidationError::aggregated(
            instance,
            instance_path,
            ValidationErrorKind::DependencySchema { property },
            sub_errors,
        )
    }
    pub(crate) fn enumeration(
        instance: &'a Value,
        instance_path: JSONPointer,
        options: &Value,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::Enum {
                options: options.clone(),
            },
        )
    }
    pub(crate) fn exclusive_maximum(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: f64,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::ExclusiveMaximum { limit },
        )
    }
    pub(crate) fn exclusive_minimum(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: f64,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::ExclusiveMinimum { limit },
        )
    }
    pub(crate) fn format(
        instance: &'a Value,
        instance_path: JSONPointer,
        format: &str,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::Format {
                format: format.to_string(),
            },
        )
    }
    pub(crate) fn invalid_schema(
        instance: &'a Value,
        instance_path: JSONPointer,
        reason: String,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::InvalidSchema { reason },
        )
    }
    pub(crate) fn items_mismatch(
        instance: &'a Value,
        instance_path: JSONPointer,
        sub_errors: ErrorBag<'a>,
    ) -> ValidationError<'a> {
        ValidationError::aggregated(instance, instance_path, ValidationErrorKind::Items, sub_errors)
    }
    pub(crate) fn maximum(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: f64,
    ) -> ValidationError<'a> {
        ValidationError::new(instance, instance_path, ValidationErrorKind::Maximum { limit })
    }
    pub(crate) fn max_items(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError::new(instance, instance_path, ValidationErrorKind::MaxItems { limit })
    }
    pub(crate) fn max_length(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError::new(instance, instance_path, ValidationErrorKind::MaxLength { limit })
    }
    pub(crate) fn max_properties(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::MaxProperties { limit },
        )
    }
    pub(crate) fn minimum(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: f64,
    ) -> ValidationError<'a> {
        ValidationError::new(instance, instance_path, ValidationErrorKind::Minimum { limit })
    }
    pub(crate) fn min_items(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError::new(instance, instance_path, ValidationErrorKind::MinItems { limit })
    }
    pub(crate) fn min_length(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError::new(instance, instance_path, ValidationErrorKind::MinLength { limit })
    }
    pub(crate) fn min_properties(
        instance: &'a Value,
        instance_path: JSONPointer,
        limit: u64,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::MinProperties { limit },
        )
    }
    pub(crate) fn multiple_of(
        instance: &'a Value,
        instance_path: JSONPointer,
        multiple_of: f64,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::MultipleOf { multiple_of },
        )
    }
    pub(crate) fn not(
        instance: &'a Value,
        instance_path: JSONPointer,
        schema: &Value,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::Not {
                schema: schema.clone(),
            },
        )
    }
    pub(crate) fn one_of_multiple_valid(
        instance: &'a Value,
        instance_path: JSONPointer,
        valid_indices: Vec<usize>,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::OneOfMultipleValid { valid_indices },
        )
    }
    pub(crate) fn one_of_not_valid(
        instance: &'a Value,
        instance_path: JSONPointer,
        sub_errors: ErrorBag<'a>,
    ) -> ValidationError<'a> {
        ValidationError::aggregated(
            instance,
            instance_path,
            ValidationErrorKind::OneOfNotValid,
            sub_errors,
        )
    }
    pub(crate) fn pattern(
        instance: &'a Value,
        instance_path: JSONPointer,
        pattern: String,
    ) -> ValidationError<'a> {
        ValidationError::new(instance, instance_path, ValidationErrorKind::Pattern { pattern })
    }
    pub(crate) fn property_mismatch(
        instance: &'a Value,
        instance_path: JSONPointer,
        property: String,
        sub_errors: ErrorBag<'a>,
    ) -> ValidationError<'a> {
        ValidationError::aggregated(
            instance,
            instance_path,
            ValidationErrorKind::Property { property },
            sub_errors,
        )
    }
    pub(crate) fn required(
        instance: &'a Value,
        instance_path: JSONPointer,
        property: String,
    ) -> ValidationError<'a> {
        ValidationError::new(instance, instance_path, ValidationErrorKind::Required { property })
    }
    pub(crate) fn single_type_error(
        instance: &'a Value,
        instance_path: JSONPointer,
        type_: PrimitiveType,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::Type {
                kind: TypeKind::Single(type_),
            },
        )
    }
    pub(crate) fn multiple_type_error(
        instance: &'a Value,
        instance_path: JSONPointer,
        types: Vec<PrimitiveType>,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::Type {
                kind: TypeKind::Multiple(types),
            },
        )
    }
    pub(crate) fn unique_items(
        instance: &'a Value,
        instance_path: JSONPointer,
    ) -> ValidationError<'a> {
        ValidationError::new(instance, instance_path, ValidationErrorKind::UniqueItems)
    }
    pub(crate) fn unresolved_reference(
        instance: &'a Value,
        instance_path: JSONPointer,
        reference: String,
    ) -> ValidationError<'a> {
        ValidationError::new(
            instance,
            instance_path,
            ValidationErrorKind::UnresolvedReference { reference },
        )
    }
    pub(crate) fn with_sub_errors(
        instance: &'a Value,
        instance_path: JSONPointer,
        kind: ValidationErrorKind,
        sub_errors: ErrorBag<'a>,
    ) -> ValidationError<'a> {
        ValidationError::aggregated(instance, instance_path, kind, sub_errors)
    }
}

impl error::Error for ValidationError<'_> {}

impl fmt::Display for ValidationError<'_> {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::AdditionalItems { limit } => write!(
                f,
                "Additional items are not allowed ({} items are expected at most)",
                limit
            ),
            ValidationErrorKind::AdditionalProperties { property } => write!(
                f,
                "Additional properties are not allowed ('{}' was unexpected)",
                property
            ),
            ValidationErrorKind::AllOf => write!(
                f,
                "'{}' is not valid under all of the given schemas",
                self.instance
            ),
            ValidationErrorKind::AnyOf | ValidationErrorKind::OneOfNotValid => write!(
                f,
                "'{}' is not valid under any of the given schemas",
                self.instance
            ),
            ValidationErrorKind::Dependency {
                property,
                dependency,
            } => write!(f, "'{}' is a dependency of '{}'", dependency, property),
            ValidationErrorKind::DependencySchema { property } => write!(
                f,
                "'{}' does not satisfy the dependency schema of '{}'",
                self.instance, property
            ),
            ValidationErrorKind::Enum { options } => {
                write!(f, "'{}' is not one of '{}'", self.instance, options)
            }
            ValidationErrorKind::ExclusiveMaximum { limit } => write!(
                f,
                "{} is greater than or equal to the maximum of {}",
                self.instance, limit
            ),
            ValidationErrorKind::ExclusiveMinimum { limit } => write!(
                f,
                "{} is less than or equal to the minimum of {}",
                self.instance, limit
            ),
            ValidationErrorKind::Format { format } => {
                write!(f, "'{}' is not a '{}'", self.instance, format)
            }
            ValidationErrorKind::InvalidSchema { reason } => {
                write!(f, "Invalid schema: {}", reason)
            }
            ValidationErrorKind::Items => write!(
                f,
                "'{}' is not valid under the schema for its position",
                self.instance
            ),
            ValidationErrorKind::Maximum { limit } => write!(
                f,
                "{} is greater than the maximum of {}",
                self.instance, limit
            ),
            ValidationErrorKind::Minimum { limit } => {
                write!(f, "{} is less than the minimum of {}", self.instance, limit)
            }
            ValidationErrorKind::MaxItems { limit } => write!(
                f,
                "{} has more than {} item{}",
                self.instance,
                limit,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::MinItems { limit } => write!(
                f,
                "{} has less than {} item{}",
                self.instance,
                limit,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::MaxLength { limit } => write!(
                f,
                "'{}' is longer than {} character{}",
                self.instance,
                limit,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::MinLength { limit } => write!(
                f,
                "'{}' is shorter than {} character{}",
                self.instance,
                limit,
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::MaxProperties { limit } => write!(
                f,
                "{} has more than {} propert{}",
                self.instance,
                limit,
                if *limit == 1 { "y" } else { "ies" }
            ),
            ValidationErrorKind::MinProperties { limit } => write!(
                f,
                "{} has less than {} propert{}",
                self.instance,
                limit,
                if *limit == 1 { "y" } else { "ies" }
            ),
            ValidationErrorKind::MultipleOf { multiple_of } => {
                write!(f, "{} is not a multiple of {}", self.instance, multiple_of)
            }
            ValidationErrorKind::Not { schema } => {
                write!(f, "{} is not allowed for {}", schema, self.instance)
            }
            ValidationErrorKind::OneOfMultipleValid { valid_indices } => write!(
                f,
                "'{}' is valid under more than one of the given schemas (at indices {})",
                self.instance,
                valid_indices
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            ValidationErrorKind::Pattern { pattern } => {
                write!(f, "'{}' does not match '{}'", self.instance, pattern)
            }
            ValidationErrorKind::Property { property } => write!(
                f,
                "Property '{}' is not valid under the schemas matching it",
                property
            ),
            ValidationErrorKind::Required { property } => {
                write!(f, "'{}' is a required property", property)
            }
            ValidationErrorKind::Type {
                kind: TypeKind::Single(type_),
            } => write!(f, "'{}' is not of type '{}'", self.instance, type_),
            ValidationErrorKind::Type {
                kind: TypeKind::Multiple(types),
            } => write!(
                f,
                "'{}' is not of types {}",
                self.instance,
                types
                    .iter()
                    .map(|type_| format!("'{}'", type_))
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            ValidationErrorKind::UniqueItems => {
                write!(f, "'{}' has non-unique elements", self.instance)
            }
            ValidationErrorKind::UnresolvedReference { reference } => {
                write!(f, "Unresolved reference: {}", reference)
            }
        }
    }
}

impl Serialize for ValidationError<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("message", &self.to_string())?;
        map.serialize_entry("location", &self.instance_path.to_string())?;
        if !self.sub_errors.is_empty() {
            map.serialize_entry("sub_errors", &self.sub_errors)?;
        }
        map.end()
    }
}

/// The collection of violations produced by one validation call, keyed by
/// the location of the offending value within the instance. An empty bag
/// means the instance is valid.
#[derive(Debug, Default)]
pub struct ErrorBag<'a>(AHashMap<String, Vec<ValidationError<'a>>>);

impl<'a> ErrorBag<'a> {
    pub(crate) fn new() -> ErrorBag<'a> {
        ErrorBag(AHashMap::new())
    }

    /// File a violation under its instance location.
    pub(crate) fn add(&mut self, error: ValidationError<'a>) {
        self.0
            .entry(error.instance_path.to_string())
            .or_insert_with(Vec::new)
            .push(error);
    }

    /// Move all violations of `other` into `self`.
    pub(crate) fn merge(&mut self, other: ErrorBag<'a>) {
        for (location, mut errors) in other.0 {
            self.0
                .entry(location)
                .or_insert_with(Vec::new)
                .append(&mut errors);
        }
    }

    /// `true` iff no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of top-level violations.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Violations recorded at the given instance location.
    pub fn get(&self, location: &str) -> Option<&[ValidationError<'a>]> {
        self.0.get(location).map(Vec::as_slice)
    }

    /// Iterate over `(location, violations)` pairs. Iteration order is
    /// unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationError<'a>])> {
        self.0
            .iter()
            .map(|(location, errors)| (location.as_str(), errors.as_slice()))
    }

    /// Iterate over all top-level violations.
    pub fn violations(&self) -> impl Iterator<Item = &ValidationError<'a>> {
        self.0.values().flatten()
    }

    /// Convert all borrowed instance data into owned.
    pub fn into_owned(self) -> ErrorBag<'static> {
        ErrorBag(
            self.0
                .into_iter()
                .map(|(location, errors)| {
                    (
                        location,
                        errors
                            .into_iter()
                            .map(ValidationError::into_owned)
                            .collect(),
                    )
                })
                .collect(),
        )
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let mut locations: Vec<&String> = self.0.keys().collect();
        locations.sort();
        for location in locations {
            for error in &self.0[location] {
                writeln!(
                    f,
                    "{:indent$}{}: {}",
                    "",
                    if location.is_empty() { "<root>" } else { location },
                    error,
                    indent = indent
                )?;
                error.sub_errors.fmt_indented(f, indent + 2)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ErrorBag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl Serialize for ErrorBag<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut locations: Vec<&String> = self.0.keys().collect();
        locations.sort();
        let mut map = serializer.serialize_map(Some(locations.len()))?;
        for location in locations {
            map.serialize_entry(location, &SerializedErrors(&self.0[location]))?;
        }
        map.end()
    }
}

struct SerializedErrors<'a, 'b>(&'b [ValidationError<'a>]);

impl Serialize for SerializedErrors<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for error in self.0 {
            seq.serialize_element(error)?;
        }
        seq.end()
    }
}
