use crate::domain::homestay::Homestay;
use crate::domain::pricing::ServiceFeePolicy;
use crate::error::{BookingError, Result};
use crate::ports::catalog::HomestayCatalog;

/// In-memory listing source. Stands in for the backend API this crate
/// deliberately does not have; data lives for the process lifetime only.
pub struct MemoryCatalog {
    homestays: Vec<Homestay>,
}

impl MemoryCatalog {
    pub fn new(homestays: Vec<Homestay>) -> Self {
        Self { homestays }
    }

    /// Catalog seeded with the demo listings.
    pub fn seeded() -> Self {
        Self::new(vec![
            Homestay {
                id: "1".into(),
                title: "Peaceful Cottage in Netarhat".into(),
                location: "Netarhat, Jharkhand".into(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1587061949409-02df41d5e562".into(),
                ),
                rating: Some(4.8),
                review_count: 24,
                price_per_night: 2500,
                cleaning_fee: 500,
                service_fee: Some(ServiceFeePolicy::Fixed { amount: 250 }),
                max_guests: 6,
            },
            Homestay {
                id: "2".into(),
                title: "Hill View Homestay".into(),
                location: "Ranchi, Jharkhand".into(),
                image_url: None,
                rating: Some(4.5),
                review_count: 11,
                price_per_night: 1800,
                cleaning_fee: 300,
                service_fee: None,
                max_guests: 4,
            },
        ])
    }
}

impl HomestayCatalog for MemoryCatalog {
    fn get(&self, id: &str) -> Result<Homestay> {
        self.homestays
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| BookingError::HomestayNotFound { id: id.to_owned() })
    }

    fn list(&self) -> Vec<Homestay> {
        self.homestays.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_serves_cottage() {
        let catalog = MemoryCatalog::seeded();
        let homestay = catalog.get("1").unwrap();
        assert_eq!(homestay.title, "Peaceful Cottage in Netarhat");
        assert_eq!(homestay.price_per_night, 2500);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = MemoryCatalog::seeded();
        assert!(matches!(
            catalog.get("999"),
            Err(BookingError::HomestayNotFound { .. })
        ));
    }

    #[test]
    fn list_returns_all_seeded() {
        let catalog = MemoryCatalog::seeded();
        assert_eq!(catalog.list().len(), 2);
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let catalog = MemoryCatalog::new(vec![]);
        assert!(catalog.list().is_empty());
        assert!(catalog.get("1").is_err());
    }
}
