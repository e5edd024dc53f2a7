//! Scaffolds a new plugin by rendering a fixed catalogue of `{placeholder}`
//! templates into files.
//!
//! ```rust,no_run
//! use newplugin::{plugin_catalogue, FileGenerator, ParameterSet};
//!
//! fn scaffold() -> newplugin::Result<()> {
//!     let registry = plugin_catalogue()?;
//!     let params = ParameterSet::plugin("btcm", "market_history");
//!     FileGenerator::new("libraries/plugins/market_history").render(&registry, &params)?;
//!     Ok(())
//! }
//! ```

pub mod catalogue;
pub mod config;
pub mod error;
pub mod generator;
pub mod params;
pub mod registry;
pub mod template;

pub use catalogue::plugin_catalogue;
pub use config::{ConfigError, GeneratorConfig, TemplateSpec};
pub use error::{Result, ScaffoldError};
pub use generator::{FileGenerator, RenderedArtifact};
pub use params::ParameterSet;
pub use registry::{TemplateEntry, TemplateRegistry};
pub use template::{substitute, Template};
