//! Recycling Info
//!
//! Static product recycling sheet shown after a scan.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub name: &'static str,
    pub percentage: u32,
    pub recyclable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub name: &'static str,
    pub recyclable: bool,
    pub notes: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recovery {
    pub material: &'static str,
    pub grams: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecyclingInfo {
    pub product_name: &'static str,
    pub model: &'static str,
    pub manufacturer: &'static str,
    /// 0-100
    pub recyclability_score: u32,
    pub materials: &'static [Material],
    pub components: &'static [Component],
    pub guidance: &'static [&'static str],
    pub estimated_recovery: &'static [Recovery],
    pub disposal_warnings: &'static [&'static str],
}

/// Score bucket used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        if score >= 85 {
            ScoreBand::High
        } else if score >= 60 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ScoreBand::High => "score high",
            ScoreBand::Medium => "score medium",
            ScoreBand::Low => "score low",
        }
    }
}

impl RecyclingInfo {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.recyclability_score)
    }

    /// Share of the device (by listed percentage) that is recyclable
    pub fn recyclable_share(&self) -> u32 {
        self.materials.iter().filter(|m| m.recyclable).map(|m| m.percentage).sum()
    }

    pub fn total_recovery_grams(&self) -> f64 {
        self.estimated_recovery.iter().map(|r| r.grams).sum()
    }
}

pub const IPHONE_17: RecyclingInfo = RecyclingInfo {
    product_name: "iPhone",
    model: "17",
    manufacturer: "Apple",
    recyclability_score: 92,
    materials: &[
        Material { name: "Aluminum enclosure (recycled)", percentage: 48, recyclable: true },
        Material { name: "Glass and ceramics", percentage: 25, recyclable: true },
        Material { name: "Stainless steel / titanium elements", percentage: 6, recyclable: true },
        Material { name: "Lithium-ion battery", percentage: 8, recyclable: true },
        Material { name: "Plastics and adhesives", percentage: 7, recyclable: false },
        Material { name: "Rare earths and trace metals", percentage: 6, recyclable: true },
    ],
    components: &[
        Component { name: "Battery (Li-ion)", recyclable: true, notes: Some("Recycle via e-waste facility; never bin") },
        Component { name: "Display assembly", recyclable: true, notes: Some("Glass recovery possible") },
        Component { name: "Logic board (CPU, memory)", recyclable: true, notes: Some("Precious metal recovery") },
        Component { name: "Cameras and sensors", recyclable: true, notes: None },
        Component { name: "Adhesives and sealants", recyclable: false, notes: Some("Residue handled during processing") },
    ],
    guidance: &[
        "Back up and wipe your data (Settings > General > Transfer or Reset)",
        "Remove SIM and any memory cards before recycling",
        "If the battery is swollen or damaged, do not charge; bring to staffed facility",
        "Use designated e-waste points in Melbourne; avoid kerbside bins",
    ],
    estimated_recovery: &[
        Recovery { material: "Aluminum", grams: 28.0 },
        Recovery { material: "Copper", grams: 15.0 },
        Recovery { material: "Gold, silver, palladium (combined)", grams: 0.2 },
        Recovery { material: "Rare earth elements", grams: 0.5 },
    ],
    disposal_warnings: &[
        "Do not dispose in household bins",
        "Avoid puncturing or crushing the battery",
        "Transport in original box or non-conductive pouch if possible",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::for_score(92), ScoreBand::High);
        assert_eq!(ScoreBand::for_score(85), ScoreBand::High);
        assert_eq!(ScoreBand::for_score(84), ScoreBand::Medium);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Medium);
        assert_eq!(ScoreBand::for_score(59), ScoreBand::Low);
    }

    #[test]
    fn test_static_sheet_totals() {
        let total: u32 = IPHONE_17.materials.iter().map(|m| m.percentage).sum();
        assert_eq!(total, 100);
        assert_eq!(IPHONE_17.recyclable_share(), 93);
        assert!((IPHONE_17.total_recovery_grams() - 43.7).abs() < 1e-9);
        assert_eq!(IPHONE_17.band(), ScoreBand::High);
    }
}
