//! Configuration for every Shepherd subsystem.

pub mod defaults;
pub mod fact_check_config;
pub mod monitoring_config;
pub mod observability_config;
pub mod orchestrator_config;
pub mod shepherd_config;

pub use fact_check_config::FactCheckConfig;
pub use monitoring_config::MonitoringConfig;
pub use observability_config::ObservabilityConfig;
pub use orchestrator_config::OrchestratorConfig;
pub use shepherd_config::ShepherdConfig;
