use serde::{Deserialize, Serialize};

use super::pricing::ServiceFeePolicy;

/// Listing snapshot a booking is taken against. Plain data for the rendering
/// surface; richer listing content (photos, amenities, reviews) lives with
/// the catalog that serves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homestay {
    pub id: String,
    pub title: String,
    pub location: String,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub price_per_night: u32,
    pub cleaning_fee: u32,
    /// Per-listing override; when absent the platform-wide policy applies.
    #[serde(default)]
    pub service_fee: Option<ServiceFeePolicy>,
    pub max_guests: u32,
}

impl std::fmt::Display for Homestay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} (₹{}/night",
            self.title, self.location, self.price_per_night
        )?;
        if let Some(rating) = self.rating {
            write!(f, ", ★{rating:.1} ({} reviews)", self.review_count)?;
        }
        write!(f, ")")
    }
}
