//! Destination catalog shapes
//!
//! Two dataset shapes exist in the wild for the recommendation catalog:
//! a grouped shape with beaches/temples/countries categories, and a flat
//! shape of destinations tagged with country and type labels. Both are
//! supported; shape detection is explicit on the `destinations` key.

use serde::{Deserialize, Serialize};

use crate::error::TravelRecError;
use crate::models::destination::Destination;
use crate::Result;

/// A country grouping its city destinations
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CountryEntry {
    /// Country name, matched against free-text keywords
    pub name: String,
    /// Cities in this country, in dataset order
    #[serde(default)]
    pub cities: Vec<Destination>,
}

/// Grouped catalog shape: top-level beaches, temples and countries categories
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GroupedCatalog {
    #[serde(default)]
    pub beaches: Vec<Destination>,
    #[serde(default)]
    pub temples: Vec<Destination>,
    #[serde(default)]
    pub countries: Vec<CountryEntry>,
}

/// Flat catalog shape: one list of tagged destinations
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FlatCatalog {
    pub destinations: Vec<Destination>,
}

/// A parsed destination catalog, read-only once loaded
#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    Grouped(GroupedCatalog),
    Flat(FlatCatalog),
}

impl Catalog {
    /// Parse a catalog from raw JSON, detecting its shape.
    ///
    /// A top-level `destinations` key selects the flat shape; anything
    /// else is treated as the grouped shape (missing categories default
    /// to empty, as the original dataset allows).
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| TravelRecError::data(format!("Invalid catalog JSON: {e}")))?;

        if value.get("destinations").is_some() {
            let flat: FlatCatalog = serde_json::from_value(value)
                .map_err(|e| TravelRecError::data(format!("Invalid flat catalog: {e}")))?;
            Ok(Catalog::Flat(flat))
        } else {
            let grouped: GroupedCatalog = serde_json::from_value(value)
                .map_err(|e| TravelRecError::data(format!("Invalid grouped catalog: {e}")))?;
            Ok(Catalog::Grouped(grouped))
        }
    }

    /// Total number of destination records in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Catalog::Grouped(grouped) => {
                grouped.beaches.len()
                    + grouped.temples.len()
                    + grouped
                        .countries
                        .iter()
                        .map(|country| country.cities.len())
                        .sum::<usize>()
            }
            Catalog::Flat(flat) => flat.destinations.len(),
        }
    }

    /// Whether the catalog holds no destinations at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_shape_detection() {
        let json = br#"{
            "beaches": [{"name": "Bora Bora, French Polynesia", "imageUrl": "", "description": "Lagoon"}],
            "temples": [],
            "countries": [{"name": "Japan", "cities": [{"name": "Kyoto, Japan", "imageUrl": "", "description": "Temples"}]}]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        match &catalog {
            Catalog::Grouped(grouped) => {
                assert_eq!(grouped.beaches.len(), 1);
                assert_eq!(grouped.countries[0].cities.len(), 1);
            }
            Catalog::Flat(_) => panic!("expected grouped shape"),
        }
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_flat_shape_detection() {
        let json = br#"{
            "destinations": [
                {"name": "Rio de Janeiro", "country": "Brazil", "type": ["city", "beach"], "imageUrl": "", "description": "Carnival"}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(matches!(catalog, Catalog::Flat(_)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_grouped_missing_categories_default_empty() {
        let catalog = Catalog::from_json(br#"{"beaches": []}"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_json_is_data_error() {
        let err = Catalog::from_json(b"not json").unwrap_err();
        assert!(matches!(err, TravelRecError::Data { .. }));
    }
}
