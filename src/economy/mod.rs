//! Resources, money and the shop
//!
//! - `Materials`: food, ammo and scrap counts
//! - `Wallet`: money earned from kills
//! - `loot`: weighted quantity rolls for collected drops
//! - `shop`: stat upgrades and house repairs
//!
//! All counters are unsigned and every subtraction is checked first, so no
//! counter can go negative.

pub mod loot;
pub mod shop;

use crate::drops::ResourceKind;

pub use loot::LootTable;
pub use shop::{Purchase, Shop};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Materials {
    pub food: u32,
    pub ammo: u32,
    pub scrap: u32,
}

impl Materials {
    pub fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Food => self.food,
            ResourceKind::Ammo => self.ammo,
            ResourceKind::Scrap => self.scrap,
        }
    }

    pub fn add(&mut self, kind: ResourceKind, amount: u32) {
        let slot = match kind {
            ResourceKind::Food => &mut self.food,
            ResourceKind::Ammo => &mut self.ammo,
            ResourceKind::Scrap => &mut self.scrap,
        };
        *slot = slot.saturating_add(amount);
    }

    /// Uses one round; false when empty
    pub fn consume_ammo(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    /// Removes `amount` scrap if there is enough; false leaves the count alone
    pub fn spend_scrap(&mut self, amount: u32) -> bool {
        if self.scrap < amount {
            return false;
        }
        self.scrap -= amount;
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    money: u32,
}

impl Wallet {
    pub fn new(money: u32) -> Self {
        Wallet { money }
    }

    pub fn balance(&self) -> u32 {
        self.money
    }

    pub fn earn(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    /// Pays `price` if affordable; false leaves the balance alone
    pub fn spend(&mut self, price: u32) -> bool {
        if self.money < price {
            return false;
        }
        self.money -= price;
        true
    }
}
