//! Error types for the crate boundary
//!
//! The simulation itself never fails: out-of-range values are clamped where
//! they occur. Errors only surface where a caller asked for something that
//! could not happen (a purchase without funds, a third team role) or where
//! startup configuration could not be read.

use crate::stats::StatKind;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the JSON tuning file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons a shop transaction was refused
///
/// A refused transaction never changes any counter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShopError {
    #[error("{0} is not sold in this shop")]
    NotForSale(StatKind),

    #[error("not enough money (price: {price}, available: {available})")]
    InsufficientMoney { price: u32, available: u32 },

    #[error("not enough scrap (cost: {cost}, available: {available})")]
    InsufficientScrap { cost: u32, available: u32 },

    #[error("the house is already at full health")]
    NothingToRepair,
}

/// Reasons the pre-game setup could not move on
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("a team has at most {0} members")]
    TeamFull(usize),

    #[error("pick {required} team members before starting (picked {picked})")]
    TeamIncomplete { required: usize, picked: usize },

    #[error("choose a family to protect first")]
    NoFamily,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_error_messages() {
        let err = ShopError::InsufficientMoney {
            price: 60,
            available: 10,
        };
        assert_eq!(err.to_string(), "not enough money (price: 60, available: 10)");

        let err = ShopError::NotForSale(StatKind::Health);
        assert_eq!(err.to_string(), "Health is not sold in this shop");
    }

    #[test]
    fn test_setup_error_messages() {
        let err = SetupError::TeamIncomplete {
            required: 2,
            picked: 1,
        };
        assert!(err.to_string().contains("picked 1"));
    }
}
