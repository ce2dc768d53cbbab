//! Fleet-wide cluster detection.

use tracing::debug;

use fw_core::{ClusterConfig, FleetResult, Severity};
use fw_fleet::Bus;

use crate::analysis::ClusterAnalysis;
use crate::dbscan::dbscan;

/// Every cluster found in one pass, plus the fleet-wide verdict.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterReport {
    /// Clusters in discovery order.
    pub clusters:        Vec<ClusterAnalysis>,
    /// Highest risk over all clusters; `Low` when there are none.
    pub overall_risk:    Severity,
    /// Advice from every cluster, de-duplicated, first occurrence kept.
    pub recommendations: Vec<&'static str>,
}

impl ClusterReport {
    fn from_clusters(clusters: Vec<ClusterAnalysis>) -> Self {
        let overall_risk = clusters.iter().map(|c| c.risk).max().unwrap_or_default();
        let mut recommendations: Vec<&'static str> = Vec::new();
        for advice in clusters.iter().flat_map(|c| c.recommendations.iter().copied()) {
            if !recommendations.contains(&advice) {
                recommendations.push(advice);
            }
        }
        Self { clusters, overall_risk, recommendations }
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// DBSCAN over bus positions with a validated [`ClusterConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ClusterDetector {
    eps_deg:     f64,
    min_samples: usize,
}

impl ClusterDetector {
    /// # Errors
    ///
    /// [`fw_core::FleetError::Config`] when `eps_deg` is not positive or
    /// `min_samples` is zero.
    pub fn new(config: &ClusterConfig) -> FleetResult<Self> {
        config.validate()?;
        Ok(Self { eps_deg: config.eps_deg, min_samples: config.min_samples })
    }

    /// Cluster `buses` and analyse each group.
    pub fn detect(&self, buses: &[Bus]) -> ClusterReport {
        let points: Vec<_> = buses.iter().map(|b| b.position).collect();
        let groups = dbscan(&points, self.eps_deg, self.min_samples);

        let clusters: Vec<ClusterAnalysis> = groups
            .iter()
            .filter_map(|slots| {
                let members: Vec<&Bus> = slots.iter().map(|&i| &buses[i]).collect();
                ClusterAnalysis::of(&members)
            })
            .collect();

        debug!(
            buses = buses.len(),
            clusters = clusters.len(),
            "cluster detection pass"
        );
        ClusterReport::from_clusters(clusters)
    }
}

/// One-shot detection with `config`.
pub fn detect_clusters(buses: &[Bus], config: &ClusterConfig) -> FleetResult<ClusterReport> {
    Ok(ClusterDetector::new(config)?.detect(buses))
}
