//! Notation configuration as the embedding application supplies it.
//!
//! The application owns the YAML (where it lives, when it reloads); this
//! crate only parses text it is handed and resolves it into a
//! [`PitchTable`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DomainError;
use crate::models::pitch_table::{
    PitchTable, PITCH_CLASSES, STANDARD_LOWER_MARKER, STANDARD_SYMBOLS, STANDARD_UPPER_MARKER,
};

/// Errors from deserializing or resolving a notation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed notation yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("sur '{symbol}' maps to interval {interval}, outside 0..=11")]
    IntervalOutOfRange { symbol: String, interval: u8 },

    #[error("surs '{first}' and '{second}' both map to interval {interval}")]
    DuplicateInterval {
        interval: u8,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Table(#[from] DomainError),
}

/// Saptak suffix markers, one per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaptakMarkers {
    pub lower: char,
    pub upper: char,
}

/// The sur table in its configuration shape: each sur symbol mapped to its
/// semitone interval above Sa, plus the saptak markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotationConfig {
    pub sur_to_interval: BTreeMap<String, u8>,
    pub saptak: SaptakMarkers,
}

impl NotationConfig {
    /// The standard sargam notation.
    pub fn standard() -> NotationConfig {
        let sur_to_interval = STANDARD_SYMBOLS
            .iter()
            .enumerate()
            .map(|(interval, symbol)| (symbol.to_string(), interval as u8))
            .collect();
        NotationConfig {
            sur_to_interval,
            saptak: SaptakMarkers {
                lower: STANDARD_LOWER_MARKER,
                upper: STANDARD_UPPER_MARKER,
            },
        }
    }

    pub fn from_yaml(text: &str) -> Result<NotationConfig, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Resolves the configuration into a lookup table, inverting the
    /// sur-to-interval map. Every interval in `0..=11` must be covered by
    /// exactly one sur.
    pub fn pitch_table(&self) -> Result<PitchTable, ConfigError> {
        let mut slots: Vec<Option<&String>> = vec![None; PITCH_CLASSES];
        for (symbol, &interval) in &self.sur_to_interval {
            if interval as usize >= PITCH_CLASSES {
                return Err(ConfigError::IntervalOutOfRange {
                    symbol: symbol.clone(),
                    interval,
                });
            }
            if let Some(existing) = slots[interval as usize] {
                return Err(ConfigError::DuplicateInterval {
                    interval,
                    first: existing.clone(),
                    second: symbol.clone(),
                });
            }
            slots[interval as usize] = Some(symbol);
        }

        // Missing intervals leave the symbol list short and fail the
        // table's size check.
        let symbols: Vec<String> = slots.into_iter().flatten().cloned().collect();
        let table = PitchTable::new(symbols, self.saptak.upper, self.saptak.lower)?;
        log::debug!(
            "resolved notation config with {} surs into a pitch table",
            self.sur_to_interval.len()
        );
        Ok(table)
    }
}
