//! Non-blank text value objects (names, descriptions, units, raw readings).

use std::str::FromStr;

use crate::error::ValidationError;

/// Declare a newtype over `String` that refuses blank input.
///
/// The generated type serialises as a plain string and re-validates on
/// deserialisation.
macro_rules! non_blank_string {
    ($(#[doc = $doc:expr])* $name:ident, $field:literal) => {
        $(#[doc = $doc])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap `value`, rejecting blank input.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::Empty`](crate::error::ValidationError::Empty)
            /// when `value` is empty or only whitespace.
            pub fn new(value: impl Into<String>) -> Result<Self, crate::error::ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(crate::error::ValidationError::Empty { field: $field });
                }
                Ok(Self(value))
            }

            /// Borrow the wrapped string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = crate::error::ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use non_blank_string;

non_blank_string!(
    /// Human readable description of a sensor or actuator type.
    Description,
    "description"
);

non_blank_string!(
    /// Unit of measure, e.g. `Celsius` or `%`.
    Unit,
    "unit"
);

non_blank_string!(
    /// Display name of a device.
    DeviceName,
    "device name"
);

non_blank_string!(
    /// Commercial model of a device.
    DeviceModel,
    "device model"
);

non_blank_string!(
    /// Display name of a room.
    RoomName,
    "room name"
);

non_blank_string!(
    /// Raw textual value captured by a sensor.
    Reading,
    "reading"
);

impl Reading {
    /// Parse the reading as a number (or any [`FromStr`] type).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNumber`] when the text does not parse.
    pub fn parse<T: FromStr>(&self) -> Result<T, ValidationError> {
        self.0
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidNumber {
                field: "reading",
                value: self.0.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_blank_description() {
        let result = Description::new("   ");
        assert_eq!(
            result,
            Err(ValidationError::Empty {
                field: "description"
            })
        );
    }

    #[test]
    fn should_keep_text_verbatim() {
        let name = RoomName::new("Living Room").unwrap();
        assert_eq!(name.as_str(), "Living Room");
        assert_eq!(name.to_string(), "Living Room");
    }

    #[test]
    fn should_compare_by_wrapped_string() {
        assert_eq!(Unit::new("%").unwrap(), Unit::new("%").unwrap());
        assert_ne!(Unit::new("%").unwrap(), Unit::new("W").unwrap());
    }

    #[test]
    fn should_parse_numeric_reading() {
        let reading = Reading::new("21.5").unwrap();
        let value: f64 = reading.parse().unwrap();
        assert!((value - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_fail_to_parse_non_numeric_reading() {
        let reading = Reading::new("ON").unwrap();
        let result = reading.parse::<i64>();
        assert!(matches!(
            result,
            Err(ValidationError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn should_reject_blank_string_when_deserializing() {
        let result: Result<DeviceName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
