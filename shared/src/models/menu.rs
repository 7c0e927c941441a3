//! Menu Model
//!
//! Closed menu enumerations, the price table and dessert promotion rules.
//! Every price lookup is an exhaustive `match`, so adding a menu item fails
//! to compile until the price table knows about it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Price in whole currency units
pub type Money = i64;

// ============================================================================
// Menu Items
// ============================================================================

/// Entree (主菜) - every placed order has exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Entree {
    Steak,
    Chicken,
    Lobster,
    Pasta,
}

/// Salad (沙拉)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Salad {
    Caesar,
    Green,
}

/// Beverage (饮品)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Beverage {
    Wine,
    Beer,
    MixedDrink,
    Soda,
}

/// Dessert (甜点)
///
/// `None` means no dessert was chosen. `IncludedDessert` is granted by a
/// promotion and is never charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dessert {
    #[default]
    None,
    IncludedDessert,
    Cake,
    Pie,
    Fruit,
}

impl Entree {
    pub const ALL: [Entree; 4] = [Self::Steak, Self::Chicken, Self::Lobster, Self::Pasta];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Steak => "Steak",
            Self::Chicken => "Chicken",
            Self::Lobster => "Lobster",
            Self::Pasta => "Pasta",
        }
    }
}

impl Salad {
    pub const ALL: [Salad; 2] = [Self::Caesar, Self::Green];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Caesar => "Caesar Salad",
            Self::Green => "Green Salad",
        }
    }
}

impl Beverage {
    pub const ALL: [Beverage; 4] = [Self::Wine, Self::Beer, Self::MixedDrink, Self::Soda];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Wine => "Wine",
            Self::Beer => "Beer",
            Self::MixedDrink => "Mixed Drink",
            Self::Soda => "Soda",
        }
    }
}

impl Dessert {
    pub const ALL: [Dessert; 5] = [
        Self::None,
        Self::IncludedDessert,
        Self::Cake,
        Self::Pie,
        Self::Fruit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "No Dessert",
            Self::IncludedDessert => "Included Dessert",
            Self::Cake => "Cake",
            Self::Pie => "Pie",
            Self::Fruit => "Fruit",
        }
    }

    /// Whether a dessert is actually on the order
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }
}

macro_rules! impl_display_by_name {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

impl_display_by_name!(Entree, Salad, Beverage, Dessert);

// ============================================================================
// Price Table
// ============================================================================

/// Entree prices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntreePrices {
    pub steak: Money,
    pub chicken: Money,
    pub lobster: Money,
    pub pasta: Money,
}

/// Salad prices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaladPrices {
    pub caesar: Money,
    pub green: Money,
}

/// Beverage prices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeveragePrices {
    pub wine: Money,
    pub beer: Money,
    pub mixed_drink: Money,
    pub soda: Money,
}

/// Purchasable dessert prices
///
/// `Dessert::None` and `Dessert::IncludedDessert` have no entry, both are free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DessertPrices {
    pub cake: Money,
    pub pie: Money,
    pub fruit: Money,
}

/// Read-only price table (价目表)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub entrees: EntreePrices,
    pub salads: SaladPrices,
    pub beverages: BeveragePrices,
    pub desserts: DessertPrices,
}

impl PriceTable {
    pub fn entree(&self, entree: Entree) -> Money {
        let p = &self.entrees;
        match entree {
            Entree::Steak => p.steak,
            Entree::Chicken => p.chicken,
            Entree::Lobster => p.lobster,
            Entree::Pasta => p.pasta,
        }
    }

    pub fn salad(&self, salad: Salad) -> Money {
        let p = &self.salads;
        match salad {
            Salad::Caesar => p.caesar,
            Salad::Green => p.green,
        }
    }

    pub fn beverage(&self, beverage: Beverage) -> Money {
        let p = &self.beverages;
        match beverage {
            Beverage::Wine => p.wine,
            Beverage::Beer => p.beer,
            Beverage::MixedDrink => p.mixed_drink,
            Beverage::Soda => p.soda,
        }
    }

    pub fn dessert(&self, dessert: Dessert) -> Money {
        let p = &self.desserts;
        match dessert {
            Dessert::None | Dessert::IncludedDessert => 0,
            Dessert::Cake => p.cake,
            Dessert::Pie => p.pie,
            Dessert::Fruit => p.fruit,
        }
    }

    /// Every configured price with a label, for validation and reporting
    pub fn entries(&self) -> Vec<(&'static str, Money)> {
        let mut entries = Vec::new();
        entries.extend(Entree::ALL.iter().map(|e| (e.name(), self.entree(*e))));
        entries.extend(Salad::ALL.iter().map(|s| (s.name(), self.salad(*s))));
        entries.extend(Beverage::ALL.iter().map(|b| (b.name(), self.beverage(*b))));
        entries.extend(
            Dessert::ALL
                .iter()
                .filter(|d| !matches!(d, Dessert::None | Dessert::IncludedDessert))
                .map(|d| (d.name(), self.dessert(*d))),
        );
        entries
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            entrees: EntreePrices {
                steak: 14,
                chicken: 10,
                lobster: 18,
                pasta: 12,
            },
            salads: SaladPrices { caesar: 4, green: 3 },
            beverages: BeveragePrices {
                wine: 6,
                beer: 4,
                mixed_drink: 7,
                soda: 2,
            },
            desserts: DessertPrices {
                cake: 5,
                pie: 4,
                fruit: 3,
            },
        }
    }
}

// ============================================================================
// Promotions
// ============================================================================

/// Qualifying combination for a free dessert (套餐赠送甜点)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DessertPromotion {
    pub entree: Entree,
    pub salad: Salad,
    pub beverage: Beverage,
}

impl DessertPromotion {
    /// Whether the given selections match this combination exactly
    pub fn matches(
        &self,
        entree: Option<Entree>,
        salad: Option<Salad>,
        beverage: Option<Beverage>,
    ) -> bool {
        entree == Some(self.entree) && salad == Some(self.salad) && beverage == Some(self.beverage)
    }
}

/// Menu configuration: prices plus promotion rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub prices: PriceTable,
    #[serde(default)]
    pub promotions: Vec<DessertPromotion>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            promotions: vec![DessertPromotion {
                entree: Entree::Steak,
                salad: Salad::Caesar,
                beverage: Beverage::MixedDrink,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_serde_names() {
        assert_eq!(
            serde_json::to_string(&Beverage::MixedDrink).unwrap(),
            "\"MIXED_DRINK\""
        );
        assert_eq!(
            serde_json::to_string(&Dessert::IncludedDessert).unwrap(),
            "\"INCLUDED_DESSERT\""
        );
        let entree: Entree = serde_json::from_str("\"STEAK\"").unwrap();
        assert_eq!(entree, Entree::Steak);
    }

    #[test]
    fn test_display_uses_menu_name() {
        assert_eq!(Beverage::MixedDrink.to_string(), "Mixed Drink");
        assert_eq!(Salad::Caesar.to_string(), "Caesar Salad");
    }

    #[test]
    fn test_dessert_defaults_to_none() {
        assert_eq!(Dessert::default(), Dessert::None);
        assert!(!Dessert::None.is_some());
        assert!(Dessert::IncludedDessert.is_some());
    }

    #[test]
    fn test_free_desserts_cost_nothing() {
        let prices = PriceTable::default();
        assert_eq!(prices.dessert(Dessert::None), 0);
        assert_eq!(prices.dessert(Dessert::IncludedDessert), 0);
        assert_eq!(prices.dessert(Dessert::Cake), 5);
    }

    #[test]
    fn test_default_prices() {
        let prices = PriceTable::default();
        assert_eq!(prices.entree(Entree::Steak), 14);
        assert_eq!(prices.entree(Entree::Chicken), 10);
        assert_eq!(prices.salad(Salad::Caesar), 4);
        assert_eq!(prices.beverage(Beverage::MixedDrink), 7);
    }

    #[test]
    fn test_entries_cover_purchasable_items() {
        let entries = PriceTable::default().entries();
        assert_eq!(entries.len(), 4 + 2 + 4 + 3);
        assert!(entries.iter().all(|(name, _)| *name != "Included Dessert"));
    }

    #[test]
    fn test_promotion_requires_all_three_fields() {
        let promo = DessertPromotion {
            entree: Entree::Steak,
            salad: Salad::Caesar,
            beverage: Beverage::MixedDrink,
        };
        assert!(promo.matches(
            Some(Entree::Steak),
            Some(Salad::Caesar),
            Some(Beverage::MixedDrink)
        ));
        assert!(!promo.matches(Some(Entree::Steak), Some(Salad::Caesar), None));
        assert!(!promo.matches(
            Some(Entree::Chicken),
            Some(Salad::Caesar),
            Some(Beverage::MixedDrink)
        ));
        assert!(!promo.matches(None, Some(Salad::Caesar), Some(Beverage::MixedDrink)));
    }

    #[test]
    fn test_menu_config_json_roundtrip() {
        let menu = MenuConfig::default();
        let json = serde_json::to_string(&menu).unwrap();
        let parsed: MenuConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, menu);
    }

    #[test]
    fn test_menu_config_promotions_optional() {
        let json = serde_json::json!({ "prices": PriceTable::default() });
        let menu: MenuConfig = serde_json::from_value(json).unwrap();
        assert!(menu.promotions.is_empty());
    }
}
