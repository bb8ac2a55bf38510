use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("product id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTitle(String);

impl ProductTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title is required".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative age bound in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeYears(i32);

impl AgeYears {
    pub fn new(value: i32) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::Validation("age cannot be negative".into()));
        }
        Ok(Self(value))
    }

    /// Parse an optional form value; blank means "no bound".
    pub fn parse_optional(field: &str, text: Option<&str>) -> DomainResult<Option<Self>> {
        let Some(text) = text.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(None);
        };
        text.parse::<i32>()
            .ok()
            .filter(|value| *value >= 0)
            .map(|value| Some(Self(value)))
            .ok_or_else(|| {
                DomainError::Validation(format!("{field} must be a non-negative whole number"))
            })
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductType {
    #[default]
    DigitalDownload,
    LiveClass,
    Bundle,
    Physical,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        Self::DigitalDownload,
        Self::LiveClass,
        Self::Bundle,
        Self::Physical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::DigitalDownload => "DIGITAL_DOWNLOAD",
            ProductType::LiveClass => "LIVE_CLASS",
            ProductType::Bundle => "BUNDLE",
            ProductType::Physical => "PHYSICAL",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DIGITAL_DOWNLOAD" => Ok(ProductType::DigitalDownload),
            "LIVE_CLASS" => Ok(ProductType::LiveClass),
            "BUNDLE" => Ok(ProductType::Bundle),
            "PHYSICAL" => Ok(ProductType::Physical),
            other => Err(DomainError::Validation(format!(
                "unknown product type '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductStatus {
    Draft,
    PendingReview,
    #[default]
    Published,
    Archived,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 4] = [
        Self::Draft,
        Self::PendingReview,
        Self::Published,
        Self::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "DRAFT",
            ProductStatus::PendingReview => "PENDING_REVIEW",
            ProductStatus::Published => "PUBLISHED",
            ProductStatus::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(ProductStatus::Draft),
            "PENDING_REVIEW" => Ok(ProductStatus::PendingReview),
            "PUBLISHED" => Ok(ProductStatus::Published),
            "ARCHIVED" => Ok(ProductStatus::Archived),
            other => Err(DomainError::Validation(format!(
                "unknown product status '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_parsing() {
        assert_eq!(AgeYears::parse_optional("ageMin", None).unwrap(), None);
        assert_eq!(AgeYears::parse_optional("ageMin", Some(" ")).unwrap(), None);
        assert_eq!(
            AgeYears::parse_optional("ageMin", Some("8")).unwrap(),
            Some(AgeYears::new(8).unwrap())
        );
        let err = AgeYears::parse_optional("ageMax", Some("-1")).unwrap_err();
        assert!(err.to_string().contains("ageMax"));
        assert!(AgeYears::parse_optional("ageMax", Some("ten")).is_err());
        assert!(AgeYears::parse_optional("ageMax", Some("7.5")).is_err());
    }

    #[test]
    fn enums_parse_only_known_values() {
        for kind in ProductType::ALL {
            assert_eq!(kind.as_str().parse::<ProductType>().unwrap(), kind);
        }
        for status in ProductStatus::ALL {
            assert_eq!(status.as_str().parse::<ProductStatus>().unwrap(), status);
        }
        assert!("EBOOK".parse::<ProductType>().is_err());
        assert!("published".parse::<ProductStatus>().is_err());
    }
}
