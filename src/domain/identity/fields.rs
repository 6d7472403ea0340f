//! The identity sheet: required fields grouped by category.

use once_cell::sync::Lazy;
use std::fmt;

/// Field holding the commune name; it keys profiles and answer namespaces.
pub const COMMUNE_NAME_FIELD: &str = "Commune name";

/// Field holding the official contact address of the commune.
pub const OFFICIAL_EMAIL_FIELD: &str = "Official email";

/// Section of the identity sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityCategory {
    GeneralInformation,
    Demographics,
    GeographyAndPlanning,
    EconomyAndServices,
    EnvironmentAndEnergy,
}

impl IdentityCategory {
    /// All categories in sheet order.
    pub const ALL: [IdentityCategory; 5] = [
        IdentityCategory::GeneralInformation,
        IdentityCategory::Demographics,
        IdentityCategory::GeographyAndPlanning,
        IdentityCategory::EconomyAndServices,
        IdentityCategory::EnvironmentAndEnergy,
    ];

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            IdentityCategory::GeneralInformation => "General information",
            IdentityCategory::Demographics => "Demographics",
            IdentityCategory::GeographyAndPlanning => "Geography & urban planning",
            IdentityCategory::EconomyAndServices => "Economy & services",
            IdentityCategory::EnvironmentAndEnergy => "Environment & energy",
        }
    }

    /// Required fields of this category, in sheet order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            IdentityCategory::GeneralInformation => &[
                COMMUNE_NAME_FIELD,
                OFFICIAL_EMAIL_FIELD,
                "INSEE code",
                "Postal code",
                "Department",
                "Region",
                "Current mayor",
                "Number of elected officials",
                "Number of municipal staff",
            ],
            IdentityCategory::Demographics => &[
                "Total population",
                "Density (inhab/km²)",
                "Share under 25 (%)",
                "Share over 65 (%)",
                "Number of households",
            ],
            IdentityCategory::GeographyAndPlanning => &[
                "Total area (ha)",
                "Utilised agricultural area (ha)",
                "Forest area (ha)",
                "Number of dwellings",
                "Share of social housing (%)",
            ],
            IdentityCategory::EconomyAndServices => &[
                "Number of businesses",
                "Unemployment rate (%)",
                "Median taxable income",
                "Number of schools",
                "Sports facilities",
            ],
            IdentityCategory::EnvironmentAndEnergy => &[
                "Energy consumption (MWh)",
                "Renewable share (%)",
                "Waste (t/year)",
                "Sorting rate (%)",
                "Cycle lanes (km)",
                "Green spaces (m²)",
            ],
        }
    }
}

impl fmt::Display for IdentityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Every required field, flattened in sheet order.
pub static REQUIRED_FIELDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    IdentityCategory::ALL
        .iter()
        .flat_map(|category| category.fields().iter().copied())
        .collect()
});

/// Returns true if `field` belongs to the identity sheet.
pub fn is_required_field(field: &str) -> bool {
    REQUIRED_FIELDS.iter().any(|f| *f == field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sheet_has_thirty_unique_fields() {
        assert_eq!(REQUIRED_FIELDS.len(), 30);
        let unique: HashSet<_> = REQUIRED_FIELDS.iter().collect();
        assert_eq!(unique.len(), REQUIRED_FIELDS.len());
    }

    #[test]
    fn commune_name_is_first_field() {
        assert_eq!(REQUIRED_FIELDS[0], COMMUNE_NAME_FIELD);
        assert!(is_required_field(OFFICIAL_EMAIL_FIELD));
        assert!(!is_required_field("Favourite colour"));
    }

    #[test]
    fn every_category_has_fields() {
        for category in IdentityCategory::ALL {
            assert!(!category.fields().is_empty(), "{} is empty", category);
        }
    }
}
