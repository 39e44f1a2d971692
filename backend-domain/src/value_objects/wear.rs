// Wear value object
// Exterior grade; the joiner passes the Steam tag through verbatim and the
// asset store checks it against this list

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wear {
    #[serde(rename = "崭新出厂")]
    FactoryNew,
    #[serde(rename = "略有磨损")]
    MinimalWear,
    #[serde(rename = "久经沙场")]
    FieldTested,
    #[serde(rename = "破损不堪")]
    WellWorn,
    #[serde(rename = "战痕累累")]
    BattleScarred,
}

impl Wear {
    pub const ALL: [Wear; 5] = [
        Wear::FactoryNew,
        Wear::MinimalWear,
        Wear::FieldTested,
        Wear::WellWorn,
        Wear::BattleScarred,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Wear::FactoryNew => "崭新出厂",
            Wear::MinimalWear => "略有磨损",
            Wear::FieldTested => "久经沙场",
            Wear::WellWorn => "破损不堪",
            Wear::BattleScarred => "战痕累累",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|wear| wear.label() == label)
    }
}
