// ==========================================
// Flight Movement Dashboard - Repository Layer
// ==========================================
// Data access only; no pipeline logic. All statements are
// parameterized to rule out SQL injection.
// ==========================================

pub mod error;
pub mod flight_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use flight_repo::{FlightImportRepository, FlightImportRepositoryImpl};
