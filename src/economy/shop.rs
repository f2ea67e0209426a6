//! Stat upgrades and house repairs
//!
//! Every transaction either completes fully or leaves every counter exactly
//! as it was. Prices grow by a factor of 1.2 (truncated) after each purchase.

use super::{Materials, Wallet};
use crate::config::{EconomyConfig, UpgradeOffer};
use crate::error::ShopError;
use crate::house::House;
use crate::stats::{StatKind, StatTable};

/// Receipt for a completed upgrade
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub stat: StatKind,
    pub price_paid: u32,
    pub boost: f32,
    pub new_total: f32,
    pub next_price: u32,
}

#[derive(Debug, Clone)]
pub struct Shop {
    offers: Vec<UpgradeOffer>,
    scrap_per_repair_point: u32,
}

impl Shop {
    pub fn new(config: &EconomyConfig) -> Self {
        Shop {
            offers: config.upgrades.clone(),
            scrap_per_repair_point: config.scrap_per_repair_point,
        }
    }

    /// Catalogue in display order with current prices
    pub fn offers(&self) -> &[UpgradeOffer] {
        &self.offers
    }

    pub fn price(&self, stat: StatKind) -> Option<u32> {
        self.offer(stat).map(|offer| offer.price)
    }

    fn offer(&self, stat: StatKind) -> Option<&UpgradeOffer> {
        self.offers.iter().find(|offer| offer.stat == stat)
    }

    /// Buys one level of `stat`
    ///
    /// Charges the current price, adds the catalogue boost to the stat table
    /// and raises the price. The caller pushes `new_total` into whichever
    /// entity owns the stat.
    pub fn upgrade(
        &mut self,
        stat: StatKind,
        wallet: &mut Wallet,
        stats: &mut StatTable,
    ) -> Result<Purchase, ShopError> {
        let offer = self
            .offers
            .iter_mut()
            .find(|offer| offer.stat == stat)
            .ok_or(ShopError::NotForSale(stat))?;

        let price = offer.price;
        if !wallet.spend(price) {
            return Err(ShopError::InsufficientMoney {
                price,
                available: wallet.balance(),
            });
        }

        let new_total = stats.apply_boost(stat, offer.boost);
        offer.price = next_price(price);

        Ok(Purchase {
            stat,
            price_paid: price,
            boost: offer.boost,
            new_total,
            next_price: offer.price,
        })
    }

    /// Scrap needed to bring the house back to full health
    pub fn repair_cost(&self, house: &House) -> u32 {
        house.missing_health().saturating_mul(self.scrap_per_repair_point)
    }

    /// Restores the house to full health for `repair_cost` scrap
    ///
    /// Returns the scrap spent.
    pub fn repair(&self, house: &mut House, materials: &mut Materials) -> Result<u32, ShopError> {
        if house.missing_health() == 0 {
            return Err(ShopError::NothingToRepair);
        }
        let cost = self.repair_cost(house);
        if !materials.spend_scrap(cost) {
            return Err(ShopError::InsufficientScrap {
                cost,
                available: materials.scrap,
            });
        }
        house.repair_full();
        Ok(cost)
    }
}

/// `price * 1.2`, truncated
pub fn next_price(price: u32) -> u32 {
    let grown = u64::from(price) * 6 / 5;
    u32::try_from(grown).unwrap_or(u32::MAX)
}
