use crate::core::{CountryCode, ValidationError};

use super::dispatch::matching_country;

/// Reusable validator for a national ID field.
///
/// Missing and empty values pass unless [`required`](Self::required) is set.
///
/// ```
/// use nationalid::core::CountryCode;
/// use nationalid::validator::SsnValidator;
///
/// let v = SsnValidator::new(CountryCode::FRANCE).field("nir");
/// assert!(v.validate(Some("190123306030016")).is_ok());
/// assert!(v.validate(None).is_ok());
///
/// let err = v.validate(Some("190123306030011")).unwrap_err();
/// assert_eq!(err.field, "nir");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsnValidator {
    countries: CountryCode,
    field: String,
    required: bool,
}

impl SsnValidator {
    /// Validator accepting the formats of `countries`, reporting on field "ssn".
    pub fn new(countries: CountryCode) -> Self {
        Self {
            countries,
            field: "ssn".into(),
            required: false,
        }
    }

    /// Set the field name used in error messages.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.field = name.into();
        self
    }

    /// Reject missing and empty values (default: accept them).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn countries(&self) -> CountryCode {
        self.countries
    }

    pub fn is_valid(&self, input: Option<&str>) -> bool {
        self.validate(input).is_ok()
    }

    /// Validate one value.
    pub fn validate(&self, input: Option<&str>) -> Result<(), ValidationError> {
        self.check(input, &self.field)
    }

    /// Validate many values, returning every failure (not just the first).
    ///
    /// Field names are suffixed with the value's index, e.g. "ssn[2]".
    pub fn validate_all<'a>(
        &self,
        inputs: impl IntoIterator<Item = Option<&'a str>>,
    ) -> Vec<ValidationError> {
        inputs
            .into_iter()
            .enumerate()
            .filter_map(|(i, input)| {
                self.check(input, &format!("{}[{i}]", self.field)).err()
            })
            .collect()
    }

    fn check(&self, input: Option<&str>, field: &str) -> Result<(), ValidationError> {
        match input {
            None | Some("") if self.required => {
                Err(ValidationError::new(field, "value is required"))
            }
            None | Some("") => Ok(()),
            Some(value) => match matching_country(value, self.countries) {
                Some(_) => Ok(()),
                None => Err(ValidationError::new(
                    field,
                    format!(
                        "not a valid national identification number for {}",
                        self.countries
                    ),
                )),
            },
        }
    }
}

impl Default for SsnValidator {
    fn default() -> Self {
        Self::new(CountryCode::ANY)
    }
}
