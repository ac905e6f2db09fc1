use serde::{Serialize, Deserialize};
use validator::Validate;

/// One prize candidate as configured through the admin panel. The engine
/// expects lists that were already filtered down to `active == true`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct PrizeOption {
    pub id: String,
    pub name: String,
    /// Relative probability mass. Does not need to sum to 100 across the
    /// list; the selector normalizes at draw time.
    #[validate(range(min = 0.0))]
    pub weight: f64,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PrizeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PrizeImage>,
}

/// Per-wedge presentation overrides. Every field is optional; the renderer
/// falls back to its theme when a field is absent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PrizeStyle {
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_weight: Option<String>,
}

/// Image content for a wedge, drawn instead of the prize name once loaded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeImage {
    pub url: String,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    /// Landscape images are kept radial; portrait images are rotated a
    /// quarter turn so they read upright along the wedge.
    #[serde(default)]
    pub landscape: bool,
}

/// Configuration problems that make a prize list unusable. These come from
/// data-entry mistakes upstream and must reach the caller rather than be
/// papered over with a uniform wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoPrizes,
    InactivePrize { id: String },
    NegativeWeight { id: String },
    NoProbabilityMass,
    NotConfigured,
    SpinInProgress,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoPrizes => write!(f, "prize list is empty"),
            ConfigError::InactivePrize { id } => {
                write!(f, "prize '{}' is inactive and must be filtered out before configuring", id)
            }
            ConfigError::NegativeWeight { id } => {
                write!(f, "prize '{}' has an invalid weight", id)
            }
            ConfigError::NoProbabilityMass => {
                write!(f, "prize weights sum to zero; no prize can be drawn")
            }
            ConfigError::NotConfigured => write!(f, "wheel has no prize configuration"),
            ConfigError::SpinInProgress => {
                write!(f, "prize list cannot be replaced while a spin is running")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Checks a prize list against the engine preconditions and returns the
/// total probability mass on success.
pub fn validate_options(options: &[PrizeOption]) -> Result<f64, ConfigError> {
    if options.is_empty() {
        return Err(ConfigError::NoPrizes);
    }
    let mut total = 0.0;
    for prize in options {
        if !prize.active {
            return Err(ConfigError::InactivePrize { id: prize.id.clone() });
        }
        // The derive's range check rejects negative weights; the comparison
        // is written to also reject NaN, which would otherwise slip through
        // every later threshold and poison the total.
        if prize.validate().is_err() || !(prize.weight >= 0.0) {
            return Err(ConfigError::NegativeWeight { id: prize.id.clone() });
        }
        total += prize.weight;
    }
    if total <= 0.0 {
        return Err(ConfigError::NoProbabilityMass);
    }
    Ok(total)
}
