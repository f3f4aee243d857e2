//! Room geometry.

use crate::error::ValidationError;

macro_rules! positive_measure {
    ($(#[doc = $doc:expr])* $name:ident, $field:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            /// # Errors
            ///
            /// Returns [`ValidationError::OutOfRange`] unless `meters` is a
            /// finite number greater than zero.
            pub fn new(meters: f64) -> Result<Self, ValidationError> {
                if meters.is_finite() && meters > 0.0 {
                    Ok(Self(meters))
                } else {
                    Err(ValidationError::OutOfRange {
                        field: $field,
                        value: meters.to_string(),
                    })
                }
            }

            #[must_use]
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

positive_measure!(
    /// Room length in meters.
    Length,
    "length"
);

positive_measure!(
    /// Room width in meters.
    Width,
    "width"
);

positive_measure!(
    /// Room height in meters.
    Height,
    "height"
);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    length: Length,
    width: Width,
    height: Height,
}

impl Dimensions {
    #[must_use]
    pub fn new(length: Length, width: Width, height: Height) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn width(&self) -> Width {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> Height {
        self.height
    }
}

/// Floor a room sits on. Basements are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FloorNumber(i32);

impl FloorNumber {
    #[must_use]
    pub fn new(floor: i32) -> Self {
        Self(floor)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_positive_length() {
        let length = Length::new(4.5).unwrap();
        assert!((length.value() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_reject_zero_width() {
        let result = Width::new(0.0);
        assert_eq!(
            result,
            Err(ValidationError::OutOfRange {
                field: "width",
                value: "0".to_string(),
            })
        );
    }

    #[test]
    fn should_reject_negative_or_infinite_height() {
        assert!(Height::new(-2.0).is_err());
        assert!(Height::new(f64::INFINITY).is_err());
    }

    #[test]
    fn should_allow_basement_floor() {
        assert_eq!(FloorNumber::new(-1).value(), -1);
    }
}
