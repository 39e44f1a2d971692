// Category value object
// Weapon/item family of an asset; `Other` is the catch-all

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "匕首")]
    Knife,
    #[serde(rename = "手套")]
    Gloves,
    #[serde(rename = "步枪")]
    Rifle,
    #[serde(rename = "手枪")]
    Pistol,
    #[serde(rename = "冲锋枪")]
    SubmachineGun,
    #[serde(rename = "霰弹枪")]
    Shotgun,
    #[serde(rename = "机枪")]
    MachineGun,
    #[serde(rename = "印花")]
    Sticker,
    #[serde(rename = "探员")]
    Agent,
    #[default]
    #[serde(rename = "其他")]
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Knife,
        Category::Gloves,
        Category::Rifle,
        Category::Pistol,
        Category::SubmachineGun,
        Category::Shotgun,
        Category::MachineGun,
        Category::Sticker,
        Category::Agent,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Knife => "匕首",
            Category::Gloves => "手套",
            Category::Rifle => "步枪",
            Category::Pistol => "手枪",
            Category::SubmachineGun => "冲锋枪",
            Category::Shotgun => "霰弹枪",
            Category::MachineGun => "机枪",
            Category::Sticker => "印花",
            Category::Agent => "探员",
            Category::Other => "其他",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    /// Maps a localized Steam type tag onto a category. Never fails: anything
    /// unrecognised lands in `Other`, since category is required downstream.
    pub fn from_type_label(type_label: &str) -> Self {
        match type_label {
            "手枪" => Category::Pistol,
            "步枪" | "狙击步枪" => Category::Rifle,
            "微型冲锋枪" | "冲锋枪" => Category::SubmachineGun,
            "霰弹枪" => Category::Shotgun,
            "机枪" => Category::MachineGun,
            "匕首" => Category::Knife,
            "手套" => Category::Gloves,
            "贴纸" | "印花" => Category::Sticker,
            "特工" | "探员" => Category::Agent,
            _ => Category::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_type_labels_collapse_onto_categories() {
        let cases = [
            ("手枪", Category::Pistol),
            ("步枪", Category::Rifle),
            ("狙击步枪", Category::Rifle),
            ("微型冲锋枪", Category::SubmachineGun),
            ("冲锋枪", Category::SubmachineGun),
            ("霰弹枪", Category::Shotgun),
            ("机枪", Category::MachineGun),
            ("匕首", Category::Knife),
            ("手套", Category::Gloves),
            ("贴纸", Category::Sticker),
            ("印花", Category::Sticker),
            ("特工", Category::Agent),
            ("探员", Category::Agent),
        ];
        for (label, expected) in cases {
            assert_eq!(Category::from_type_label(label), expected, "type {label}");
        }
    }

    #[test]
    fn unknown_type_label_falls_back_to_other() {
        for label in ["", "武器箱", "音乐盒", "Pistol"] {
            let category = Category::from_type_label(label);
            assert_eq!(category, Category::Other);
            assert!(!category.label().is_empty());
        }
    }

    #[test]
    fn labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("狙击步枪"), None);
    }
}
