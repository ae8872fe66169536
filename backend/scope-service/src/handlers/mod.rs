pub mod health;
pub mod scope;

pub use health::{health_summary, liveness_check, readiness_summary, service_info};
pub use scope::generate_scope;
