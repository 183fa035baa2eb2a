use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pricing::{calculate_total, parse_price_amount, plan_amount, BillingPeriod};
use crate::util::errors::{CatalogError, PriceError};

/// A subscription tier. `price` is the monthly quote as shown, e.g. `$9/mo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub icon: Option<String>, // asset reference, e.g. "icon-arcade.svg"
}

impl Plan {
    pub fn new(name: &str, price: &str, icon: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
            icon: icon.map(str::to_string),
        }
    }

    pub fn monthly_amount(&self) -> Result<u32, PriceError> {
        parse_price_amount(&self.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddonId(pub u32);

impl fmt::Display for AddonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An optional extra. `price` is quoted per month, e.g. `+$1/mo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    pub id: AddonId,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl Addon {
    pub fn new(id: u32, name: &str, description: &str, price: &str) -> Self {
        Self {
            id: AddonId(id),
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
        }
    }

    pub fn monthly_amount(&self) -> Result<u32, PriceError> {
        parse_price_amount(&self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub addons: Vec<Addon>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            plans: vec![
                Plan::new("Arcade", "$9/mo", Some("icon-arcade.svg")),
                Plan::new("Advanced", "$12/mo", Some("icon-advanced.svg")),
                Plan::new("Pro", "$15/mo", Some("icon-pro.svg")),
            ],
            addons: vec![
                Addon::new(1, "Online service", "Access to multiplayer games", "+$1/mo"),
                Addon::new(2, "Larger storage", "Extra 1TB of cloud save", "+$2/mo"),
                Addon::new(
                    3,
                    "Customizable Profile",
                    "Custom theme on your profile",
                    "+$2/mo",
                ),
            ],
        }
    }
}

impl Catalog {
    pub fn plan(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.name == name)
    }

    pub fn addon(&self, id: AddonId) -> Option<&Addon> {
        self.addons.iter().find(|addon| addon.id == id)
    }

    /// Rejects catalogs whose prices the calculator could not read or whose
    /// largest total (yearly, every add-on) overflows, so that totals computed
    /// from a validated catalog never fail.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.plans.is_empty() {
            return Err(CatalogError::NoPlans);
        }

        let mut names = HashSet::new();
        for plan in &self.plans {
            if !names.insert(plan.name.as_str()) {
                return Err(CatalogError::DuplicatePlan(plan.name.clone()));
            }
            plan_amount(plan, BillingPeriod::Yearly).map_err(|source| {
                CatalogError::InvalidPrice {
                    item: plan.name.clone(),
                    source,
                }
            })?;
        }

        let mut ids = HashSet::new();
        for addon in &self.addons {
            if !ids.insert(addon.id) {
                return Err(CatalogError::DuplicateAddon(addon.id.0));
            }
            addon
                .monthly_amount()
                .map_err(|source| CatalogError::InvalidPrice {
                    item: addon.name.clone(),
                    source,
                })?;
        }

        for plan in &self.plans {
            calculate_total(Some(plan), &self.addons, BillingPeriod::Yearly).map_err(|source| {
                CatalogError::InvalidPrice {
                    item: plan.name.clone(),
                    source,
                }
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.plans.len(), 3);
        assert_eq!(catalog.addons.len(), 3);
    }

    #[test]
    fn lookup_by_name_and_id() {
        let catalog = Catalog::default();
        assert_eq!(catalog.plan("Pro").map(|p| p.price.as_str()), Some("$15/mo"));
        assert_eq!(
            catalog.addon(AddonId(2)).map(|a| a.name.as_str()),
            Some("Larger storage")
        );
        assert!(catalog.plan("Enterprise").is_none());
        assert!(catalog.addon(AddonId(9)).is_none());
    }

    #[test]
    fn duplicate_addon_ids_are_rejected() {
        let mut catalog = Catalog::default();
        catalog.addons.push(Addon::new(1, "Again", "dup", "+$1/mo"));
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateAddon(1))
        ));
    }

    #[test]
    fn unreadable_price_is_rejected() {
        let mut catalog = Catalog::default();
        catalog.plans[0].price = "free".to_string();
        match catalog.validate() {
            Err(CatalogError::InvalidPrice { item, .. }) => assert_eq!(item, "Arcade"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
