pub mod config;
pub mod import;
pub mod minerals;
pub mod norm;
pub mod oxides;
pub mod paths;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use minerals::{Mineral, MineralResult};
pub use oxides::{Oxide, OxideComposition};
pub use store::{AnalysisRecord, AnalysisStore};
pub use validate::InputError;
