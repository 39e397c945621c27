use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum accepted length of a trim level string, in characters.
pub const TRIM_MAX_LENGTH: usize = 40;

/// Vehicle model enumeration. The wire form is the canonical
/// SCREAMING_SNAKE_CASE name, and parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JeepModel {
    Wrangler,
    Cherokee,
    GrandCherokee,
    Compass,
    Renegade,
    Gladiator,
}

impl JeepModel {
    pub const ALL: [JeepModel; 6] = [
        JeepModel::Wrangler,
        JeepModel::Cherokee,
        JeepModel::GrandCherokee,
        JeepModel::Compass,
        JeepModel::Renegade,
        JeepModel::Gladiator,
    ];

    /// Canonical wire name of the model.
    pub fn as_str(&self) -> &'static str {
        match self {
            JeepModel::Wrangler => "WRANGLER",
            JeepModel::Cherokee => "CHEROKEE",
            JeepModel::GrandCherokee => "GRAND_CHEROKEE",
            JeepModel::Compass => "COMPASS",
            JeepModel::Renegade => "RENEGADE",
            JeepModel::Gladiator => "GLADIATOR",
        }
    }
}

impl std::fmt::Display for JeepModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for JeepModel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WRANGLER" => Ok(JeepModel::Wrangler),
            "CHEROKEE" => Ok(JeepModel::Cherokee),
            "GRAND_CHEROKEE" => Ok(JeepModel::GrandCherokee),
            "COMPASS" => Ok(JeepModel::Compass),
            "RENEGADE" => Ok(JeepModel::Renegade),
            "GLADIATOR" => Ok(JeepModel::Gladiator),
            _ => Err(anyhow::anyhow!("Invalid model: {}", s)),
        }
    }
}

/// A single vehicle configuration.
///
/// The surrogate `id` is assigned by the store and carries no business
/// meaning; comparisons with caller-supplied data use only the remaining
/// attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jeep {
    #[serde(default)]
    pub id: Option<u64>,
    pub model: JeepModel,
    pub trim_level: String,
    pub num_doors: u8,
    pub wheel_size: u8,
    pub base_price: Decimal,
}

impl Jeep {
    pub fn new(
        model: JeepModel,
        trim_level: impl Into<String>,
        num_doors: u8,
        wheel_size: u8,
        base_price: Decimal,
    ) -> Self {
        Self {
            id: None,
            model,
            trim_level: trim_level.into(),
            num_doors,
            wheel_size,
            base_price,
        }
    }

    /// Copy with the surrogate id cleared, for business-attribute comparison.
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }
}

/// Configuration for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Configuration for seed provisioning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Optional JSON file overriding the built-in seed dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}
