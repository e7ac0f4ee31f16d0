//! Asset Domain Models
//!
//! Ledger-owned records. The gateway never interprets their values; each
//! record only knows the order in which its fields become transaction
//! arguments.

/// Contract functions invoked by the gateway
pub mod functions {
    pub const GET_ALL_ASSETS: &str = "GetAllAssets";
    pub const READ_ASSET: &str = "ReadAsset";
    pub const CREATE_ASSET: &str = "CreateAsset";
    pub const UPDATE_ASSET: &str = "UpdateAsset";
    pub const DELETE_ASSET: &str = "DeleteAsset";
    pub const CREATE_ASSET_QUALITY: &str = "CreateAssetQuality";
}

/// The two `GetAllAssets` listings exposed over HTTP.
///
/// The leading arguments are opaque to the gateway; the contract decides
/// what they select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetListing {
    Assets,
    Quality,
}

impl AssetListing {
    #[must_use]
    pub fn args(self) -> Vec<String> {
        let leading = match self {
            Self::Assets => "0",
            Self::Quality => "1",
        };
        vec![leading.to_string(), "0".to_string()]
    }
}

impl std::fmt::Display for AssetListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assets => write!(f, "assets"),
            Self::Quality => write!(f, "quality"),
        }
    }
}

/// Asset record passed to `CreateAsset` / `UpdateAsset`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRecord {
    pub id: String,
    pub item: String,
    pub weight: String,
    pub packed_date: String,
    pub packaged_location: String,
    pub value: String,
    pub owner: String,
}

impl AssetRecord {
    /// Transaction arguments in contract order
    #[must_use]
    pub fn into_args(self) -> Vec<String> {
        vec![
            self.id,
            self.item,
            self.weight,
            self.packed_date,
            self.packaged_location,
            self.value,
            self.owner,
        ]
    }
}

/// Quality reading passed to `CreateAssetQuality`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetQualityRecord {
    pub id: String,
    pub temperature: String,
    pub humidity: String,
    pub gas: String,
}

impl AssetQualityRecord {
    /// Transaction arguments in contract order
    #[must_use]
    pub fn into_args(self) -> Vec<String> {
        vec![self.id, self.temperature, self.humidity, self.gas]
    }
}
