pub mod landing;
pub mod performance;
pub mod valuation;
