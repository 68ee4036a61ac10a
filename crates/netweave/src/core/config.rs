//! Layout configuration
//!
//! Every constant the strategies use lives here with its documented default.
//! All structs deserialize from JSON with per-field defaults, so a config
//! file only needs to name the values it overrides:
//!
//! ```
//! use netweave::core::LayoutConfig;
//!
//! let config = LayoutConfig::from_json(r#"{ "force": { "iterations": 250 } }"#).unwrap();
//! assert_eq!(config.force.iterations, 250);
//! assert_eq!(config.force.repulsion, 5000.0);
//! assert_eq!(config.circular.radius, 300.0);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{LayoutError, Result};

/// Force-directed simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    /// Number of relaxation iterations
    pub iterations: usize,
    /// Inverse-square repulsion constant
    pub repulsion: f64,
    /// Linear spring constant
    pub attraction: f64,
    /// Scale applied to each repulsive push
    pub damping: f64,
    /// Side of the square, centred on the origin, holding the initial positions.
    /// Must be positive.
    pub initial_extent: f64,
    /// Stop early once the largest per-node move in an iteration is below this
    pub convergence_epsilon: Option<f64>,
    /// Seed for the engine-owned random generator (OS entropy when unset)
    pub seed: Option<u64>,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            repulsion: 5000.0,
            attraction: 0.001,
            damping: 0.1,
            initial_extent: 400.0,
            convergence_epsilon: None,
            seed: None,
        }
    }
}

/// Hierarchical (two-ring) layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchicalConfig {
    pub person_radius: f64,
    pub organization_radius: f64,
}

impl Default for HierarchicalConfig {
    fn default() -> Self {
        Self {
            person_radius: 250.0,
            organization_radius: 450.0,
        }
    }
}

/// Circular layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircularConfig {
    pub radius: f64,
}

impl Default for CircularConfig {
    fn default() -> Self {
        Self { radius: 300.0 }
    }
}

/// Grid layout parameters
///
/// Cell `(col, row)` lands at
/// `(col * cell_width - columns * column_offset, row * cell_height - row_offset)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_width: f64,
    pub cell_height: f64,
    pub column_offset: f64,
    pub row_offset: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: 200.0,
            cell_height: 150.0,
            column_offset: 100.0,
            row_offset: 150.0,
        }
    }
}

/// Radial layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialConfig {
    pub person_radius: f64,
    pub organization_radius: f64,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            person_radius: 300.0,
            organization_radius: 500.0,
        }
    }
}

/// Configuration for every layout strategy
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub force: ForceConfig,
    pub hierarchical: HierarchicalConfig,
    pub circular: CircularConfig,
    pub grid: GridConfig,
    pub radial: RadialConfig,
}

impl LayoutConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON; missing fields keep their defaults
    pub fn from_json(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the number of force iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.force.iterations = iterations;
        self
    }

    /// Set the force repulsion and attraction constants
    pub fn with_force_constants(mut self, repulsion: f64, attraction: f64) -> Self {
        self.force.repulsion = repulsion;
        self.force.attraction = attraction;
        self
    }

    /// Seed the force simulation
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.force.seed = Some(seed);
        self
    }

    /// Enable the convergence stop for the force simulation
    pub fn with_convergence_epsilon(mut self, epsilon: f64) -> Self {
        self.force.convergence_epsilon = Some(epsilon);
        self
    }

    /// Check that every numeric parameter is usable
    pub fn validate(&self) -> Result<()> {
        let checks: [(&str, f64); 14] = [
            ("force.repulsion", self.force.repulsion),
            ("force.attraction", self.force.attraction),
            ("force.damping", self.force.damping),
            ("force.initial_extent", self.force.initial_extent),
            (
                "force.convergence_epsilon",
                self.force.convergence_epsilon.unwrap_or(0.0),
            ),
            ("hierarchical.person_radius", self.hierarchical.person_radius),
            (
                "hierarchical.organization_radius",
                self.hierarchical.organization_radius,
            ),
            ("circular.radius", self.circular.radius),
            ("grid.cell_width", self.grid.cell_width),
            ("grid.cell_height", self.grid.cell_height),
            ("grid.column_offset", self.grid.column_offset),
            ("grid.row_offset", self.grid.row_offset),
            ("radial.person_radius", self.radial.person_radius),
            ("radial.organization_radius", self.radial.organization_radius),
        ];

        for (name, value) in checks {
            if !value.is_finite() {
                return Err(LayoutError::invalid_config(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        // Zero extent stacks every node on the origin, where repulsion has no direction
        if self.force.initial_extent <= 0.0 {
            return Err(LayoutError::invalid_config(
                "force.initial_extent must be positive",
            ));
        }
        if self.force.convergence_epsilon.is_some_and(|eps| eps < 0.0) {
            return Err(LayoutError::invalid_config(
                "force.convergence_epsilon must not be negative",
            ));
        }
        Ok(())
    }
}
