//! Asset DTOs
//!
//! Request bodies for the asset endpoints. Values are forwarded to the
//! contract as text; only presence is checked.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::models::asset::{AssetQualityRecord, AssetRecord};

/// A scalar body value in the textual form the contract receives.
///
/// Strings pass through verbatim, booleans become `true`/`false` and numbers
/// are written the way JavaScript's `String(n)` writes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LedgerArg(String);

impl LedgerArg {
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Render a float like JavaScript's `Number.prototype.toString`: no exponent
/// for magnitudes in `[1e-6, 1e21)`, otherwise `<mantissa>e<sign><exp>`.
fn js_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&v.abs()) {
        return v.to_string();
    }

    let formatted = format!("{v:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => formatted,
    }
}

struct LedgerArgVisitor;

impl Visitor<'_> for LedgerArgVisitor {
    type Value = LedgerArg;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(LedgerArg(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(LedgerArg(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(LedgerArg(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(LedgerArg(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(LedgerArg(js_number(v)))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(LedgerArg(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for LedgerArg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LedgerArgVisitor)
    }
}

fn arg(value: Option<LedgerArg>) -> String {
    value.map(LedgerArg::into_inner).unwrap_or_default()
}

/// Body of `POST /`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAssetDto {
    #[validate(required(message = "id is required"))]
    pub id: Option<LedgerArg>,

    #[validate(required(message = "item is required"))]
    pub item: Option<LedgerArg>,

    #[validate(required(message = "weight is required"))]
    pub weight: Option<LedgerArg>,

    #[serde(rename = "packedDate")]
    #[validate(required(message = "packedDate is required"))]
    pub packed_date: Option<LedgerArg>,

    #[serde(rename = "packagedLocation")]
    #[validate(required(message = "packagedLocation is required"))]
    pub packaged_location: Option<LedgerArg>,

    #[validate(required(message = "value is required"))]
    pub value: Option<LedgerArg>,

    #[validate(required(message = "owner is required"))]
    pub owner: Option<LedgerArg>,
}

impl From<CreateAssetDto> for AssetRecord {
    fn from(dto: CreateAssetDto) -> Self {
        Self {
            id: arg(dto.id),
            item: arg(dto.item),
            weight: arg(dto.weight),
            packed_date: arg(dto.packed_date),
            packaged_location: arg(dto.packaged_location),
            value: arg(dto.value),
            owner: arg(dto.owner),
        }
    }
}

/// Body of `PUT /`.
///
/// Reads the date from `packagedDate`, unlike `POST /` which reads
/// `packedDate`. `packedDate` is captured only to warn about the mismatch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAssetDto {
    #[validate(required(message = "id is required"))]
    pub id: Option<LedgerArg>,

    #[validate(required(message = "item is required"))]
    pub item: Option<LedgerArg>,

    #[validate(required(message = "weight is required"))]
    pub weight: Option<LedgerArg>,

    #[serde(rename = "packagedDate")]
    #[validate(required(message = "packagedDate is required"))]
    pub packaged_date: Option<LedgerArg>,

    #[serde(rename = "packedDate")]
    pub packed_date: Option<LedgerArg>,

    #[serde(rename = "packagedLocation")]
    #[validate(required(message = "packagedLocation is required"))]
    pub packaged_location: Option<LedgerArg>,

    #[validate(required(message = "value is required"))]
    pub value: Option<LedgerArg>,

    #[validate(required(message = "owner is required"))]
    pub owner: Option<LedgerArg>,
}

impl UpdateAssetDto {
    /// Body uses the create route's date field name instead of `packagedDate`
    #[must_use]
    pub fn uses_create_date_field(&self) -> bool {
        self.packaged_date.is_none() && self.packed_date.is_some()
    }
}

impl From<UpdateAssetDto> for AssetRecord {
    fn from(dto: UpdateAssetDto) -> Self {
        Self {
            id: arg(dto.id),
            item: arg(dto.item),
            weight: arg(dto.weight),
            packed_date: arg(dto.packaged_date),
            packaged_location: arg(dto.packaged_location),
            value: arg(dto.value),
            owner: arg(dto.owner),
        }
    }
}

/// Body of `DELETE /`; other fields are ignored
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteAssetDto {
    #[validate(required(message = "id is required"))]
    pub id: Option<LedgerArg>,
}

impl DeleteAssetDto {
    #[must_use]
    pub fn into_id(self) -> String {
        arg(self.id)
    }
}

/// Body of `POST /Quality`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAssetQualityDto {
    #[validate(required(message = "id is required"))]
    pub id: Option<LedgerArg>,

    #[validate(required(message = "temperature is required"))]
    pub temperature: Option<LedgerArg>,

    #[validate(required(message = "humidity is required"))]
    pub humidity: Option<LedgerArg>,

    #[validate(required(message = "gas is required"))]
    pub gas: Option<LedgerArg>,
}

impl From<CreateAssetQualityDto> for AssetQualityRecord {
    fn from(dto: CreateAssetQualityDto) -> Self {
        Self {
            id: arg(dto.id),
            temperature: arg(dto.temperature),
            humidity: arg(dto.humidity),
            gas: arg(dto.gas),
        }
    }
}
