use super::criteria::FilterCriteria;
use super::domain::{ListingRecord, Property};
use super::filter::filter_properties;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read listing catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid listing JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported catalog format '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),
}

/// Immutable snapshot of the listings fetched from the marketplace backend.
#[derive(Debug, Clone, Default)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
}

impl PropertyCatalog {
    /// Normalizes raw records. The first record for an id wins.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ListingRecord>,
    {
        let mut seen = HashSet::new();
        let mut properties = Vec::new();

        for record in records {
            if !seen.insert(record.id) {
                warn!(id = record.id, "skipping duplicate listing id");
                continue;
            }
            properties.push(record.normalize());
        }

        let unlisted = properties.iter().filter(|p| !p.is_listable()).count();
        info!(listings = properties.len(), unlisted, "listing catalog loaded");

        Self { properties }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let records = csv_reader
            .deserialize::<ListingRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_records(records))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<ListingRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Picks the loader from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Self::from_csv_path(path),
            "json" => Self::from_json_path(path),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&Property> {
        filter_properties(&self.properties, criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::{Furnishing, ListingStatus, PropertyKind};
    use std::io::Cursor;

    const CSV: &str = "\
id,location,type,propertyKind,status,lookingTo,bhk,furnishing,priceValue,isFeatured,buildingName,listedOn
1, Vijayawada ,Apartment,Residential,For Sale,,2,semi_furnished,4500000,true,Lakeview Towers,2025-04-01
2,\"Hyderabad, Telangana\",Office Space,Commercial,For Rent,Rent,0,Furnished,90000,false,,
1,\"Duplicate, Nowhere\",Apartment,,,,1,,1,false,,
";

    #[test]
    fn csv_loader_normalizes_rows_and_drops_duplicates() {
        let catalog = PropertyCatalog::from_csv_reader(Cursor::new(CSV)).expect("csv parses");
        assert_eq!(catalog.len(), 2);

        let first = &catalog.properties()[0];
        assert_eq!(first.location, "Vijayawada");
        assert_eq!(first.furnishing, Some(Furnishing::SemiFurnished));
        assert_eq!(first.building_name.as_deref(), Some("Lakeview Towers"));
        assert!(first.listed_on.is_some());

        let second = &catalog.properties()[1];
        assert_eq!(second.location, "Hyderabad, Telangana");
        assert_eq!(second.property_kind, Some(PropertyKind::Commercial));
        assert_eq!(second.status, Some(ListingStatus::ForRent));
        assert!(second.building_name.is_none());
    }

    #[test]
    fn csv_loader_defaults_blank_numeric_cells() {
        let csv = "\
id,location,type,propertyKind,status,bhk,priceValue,isFeatured
1,Amaravati,Plot,Plots,For Sale,,2400000,false
2,Guntur,Apartment,Residential,For Rent,2,,
";
        let catalog = PropertyCatalog::from_csv_reader(Cursor::new(csv)).expect("csv parses");
        assert_eq!(catalog.len(), 2);

        let plot = &catalog.properties()[0];
        assert_eq!(plot.bhk, 0);
        assert_eq!(plot.price_value, 2_400_000);

        let flat = &catalog.properties()[1];
        assert_eq!(flat.bhk, 2);
        assert_eq!(flat.price_value, 0);
        assert!(!flat.is_featured);
    }

    #[test]
    fn unknown_categories_never_match_a_search() {
        let payload = r#"[
            {"id": 1, "location": "Guntur", "type": "Villa", "propertyKind": "Villa"},
            {"id": 2, "location": "Guntur", "type": "Godown", "propertyKind": "Warehouse", "propertyType": "Commercial"}
        ]"#;
        let catalog = PropertyCatalog::from_json_reader(Cursor::new(payload)).expect("json parses");

        for kind in PropertyKind::ordered() {
            assert!(
                catalog.search(&FilterCriteria::for_kind(kind)).is_empty(),
                "{kind} search returned an unclassified listing"
            );
        }
    }

    #[test]
    fn json_loader_accepts_backend_payloads() {
        let payload = r#"[
            {"id": 10, "location": "Tirupati, Andhra Pradesh", "type": "Plot", "propertyType": "Plots", "priceValue": 1800000},
            {"id": 11, "type": "Flat", "priceValue": 10}
        ]"#;
        let catalog = PropertyCatalog::from_json_reader(Cursor::new(payload)).expect("json parses");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.properties()[0].property_kind,
            Some(PropertyKind::Plots)
        );
        assert!(!catalog.properties()[1].is_listable());

        let plots = catalog.search(&FilterCriteria::for_kind(PropertyKind::Plots));
        assert_eq!(plots.len(), 1);
    }

    #[test]
    fn from_path_rejects_unknown_extensions() {
        let error = PropertyCatalog::from_path("listings.xml").expect_err("xml unsupported");
        assert!(matches!(error, CatalogError::UnsupportedFormat(_)));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = PropertyCatalog::from_path("./does-not-exist.csv").expect_err("missing file");
        match error {
            CatalogError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
