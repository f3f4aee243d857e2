//! Where a house stands: postal address, zip code and GPS coordinates.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::text::non_blank_string;

non_blank_string!(
    /// Street address of a house.
    Address,
    "address"
);

/// Countries whose postal codes can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Portugal,
    France,
    Usa,
    Canada,
}

static PORTUGAL_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{3}$").expect("valid Portuguese zip pattern"));
static FRANCE_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("valid French zip pattern"));
static USA_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{4}$").expect("valid US zip pattern"));
static CANADA_ZIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]\d[A-Za-z] \d[A-Za-z]\d$").expect("valid Canadian zip pattern")
});

impl Country {
    /// Name used on the wire (`Portugal`, `France`, `USA`, `Canada`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portugal => "Portugal",
            Self::France => "France",
            Self::Usa => "USA",
            Self::Canada => "Canada",
        }
    }

    fn accepts(self, code: &str) -> bool {
        let pattern = match self {
            Self::Portugal => &PORTUGAL_ZIP,
            Self::France => &FRANCE_ZIP,
            Self::Usa => &USA_ZIP,
            Self::Canada => &CANADA_ZIP,
        };
        pattern.is_match(code)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Portugal" => Ok(Self::Portugal),
            "France" => Ok(Self::France),
            "USA" => Ok(Self::Usa),
            "Canada" => Ok(Self::Canada),
            other => Err(ValidationError::UnsupportedCountry(other.to_string())),
        }
    }
}

/// Postal code checked against its country's format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode {
    country: Country,
    code: String,
}

impl ZipCode {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidZipCode`] when `code` does not match
    /// the postal format of `country`.
    pub fn new(country: Country, code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if !country.accepts(&code) {
            return Err(ValidationError::InvalidZipCode {
                country: country.to_string(),
                code,
            });
        }
        Ok(Self { country, code })
    }

    /// Parse the country name then validate the code against it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedCountry`] or
    /// [`ValidationError::InvalidZipCode`].
    pub fn parse(country: &str, code: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(country.parse()?, code)
    }

    #[must_use]
    pub fn country(&self) -> Country {
        self.country
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

fn bounded(field: &'static str, value: f64, limit: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: value.to_string(),
        })
    }
}

/// Degrees north (positive) or south (negative), within `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latitude(f64);

impl Latitude {
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] outside `[-90, 90]`.
    pub fn new(degrees: f64) -> Result<Self, ValidationError> {
        bounded("latitude", degrees, 90.0).map(Self)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Degrees east (positive) or west (negative), within `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude(f64);

impl Longitude {
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] outside `[-180, 180]`.
    pub fn new(degrees: f64) -> Result<Self, ValidationError> {
        bounded("longitude", degrees, 180.0).map(Self)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinates {
    latitude: Latitude,
    longitude: Longitude,
}

impl GpsCoordinates {
    #[must_use]
    pub fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn latitude(&self) -> Latitude {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> Longitude {
        self.longitude
    }
}

/// Full location of a house.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    address: Address,
    zip_code: ZipCode,
    gps: GpsCoordinates,
}

impl Location {
    #[must_use]
    pub fn new(address: Address, zip_code: ZipCode, gps: GpsCoordinates) -> Self {
        Self {
            address,
            zip_code,
            gps,
        }
    }

    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub fn zip_code(&self) -> &ZipCode {
        &self.zip_code
    }

    #[must_use]
    pub fn gps(&self) -> &GpsCoordinates {
        &self.gps
    }
}
