use crate::clustering::{ClusteringParams, Linkage};
use crate::core::float::AggloFloat;
use crate::distances::{
    BinaryHammingDistance, CosineDistance, DistanceMetric, EuclideanDistance, HammingDistance,
    ManhattanDistance,
};
use crate::error::{AggloError, Result};
use log::{error, LevelFilter};
use serde::Deserialize;
use std::{fmt, sync::Arc};

#[derive(Debug, Deserialize)]
pub struct ClusteringConfig {
    pub distance_metric: String, // E.g., "Euclidean"
    pub linkage: String,         // E.g., "Average"
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String, // Log level, e.g., "info", "debug", "warn", "error"
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub clustering: ClusteringConfig,
    pub logging: LoggingConfig,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Clustering:")?;
        writeln!(
            f,
            "    Distance Metric: {}",
            self.clustering.distance_metric
        )?;
        writeln!(f, "    Linkage: {}", self.clustering.linkage)?;
        writeln!(f, "  Logging:")?;
        writeln!(f, "    Level: {}", self.logging.level)?;
        Ok(())
    }
}

impl Config {
    /// Reads the YAML configuration file and returns a `Config` instance.
    pub fn from_file(file_path: &str) -> Result<Self> {
        let file_content =
            std::fs::read_to_string(file_path).map_err(|e| AggloError::Config(e.to_string()))?;
        Self::from_yaml(&file_content)
    }

    /// Parses a `Config` from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(content).map_err(|e| AggloError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        parse_metric::<f64>(&self.clustering.distance_metric)?;
        parse_linkage(&self.clustering.linkage)?;
        Ok(())
    }

    /// Converts the named metric and linkage into `ClusteringParams`.
    pub fn to_params<F: AggloFloat>(&self) -> Result<ClusteringParams<F>> {
        Ok(ClusteringParams {
            metric: parse_metric(&self.clustering.distance_metric)?,
            linkage: parse_linkage(&self.clustering.linkage)?,
        })
    }

    /// Sets up logging based on the logging level in the configuration.
    pub fn setup_logging(&self) {
        let level_filter = match self.logging.level.to_lowercase().as_str() {
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        };

        if let Err(e) = env_logger::Builder::new()
            .filter_level(level_filter)
            .try_init()
        {
            error!("Failed to initialize logger: {}", e);
        }
    }
}

fn parse_metric<F: AggloFloat>(name: &str) -> Result<Arc<dyn DistanceMetric<F>>> {
    match name {
        "Euclidean" => Ok(Arc::new(EuclideanDistance)),
        "Manhattan" => Ok(Arc::new(ManhattanDistance)),
        "Cosine" => Ok(Arc::new(CosineDistance)),
        "Hamming" => Ok(Arc::new(HammingDistance)),
        "BinaryHamming" => Ok(Arc::new(BinaryHammingDistance)),
        _ => Err(AggloError::UnknownMetric(name.to_string())),
    }
}

fn parse_linkage(name: &str) -> Result<Linkage> {
    match name {
        "Single" => Ok(Linkage::Single),
        "Complete" => Ok(Linkage::Complete),
        "Average" => Ok(Linkage::Average),
        "Centroid" => Ok(Linkage::Centroid),
        _ => Err(AggloError::UnknownLinkage(name.to_string())),
    }
}
