use crate::domain::homestay::Homestay;
use crate::error::Result;

/// Listing data source. The bundled adapter is an in-memory seed; a real
/// deployment would back this with an API client.
pub trait HomestayCatalog: Send + Sync {
    fn get(&self, id: &str) -> Result<Homestay>;
    fn list(&self) -> Vec<Homestay>;
}
