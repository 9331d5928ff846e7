//! Application controller and coordination layer
//!
//! The controller turns UI events into outcomes the windows can display.
//! It owns the stable configuration; per-window state is passed in by the
//! caller so every calculator window keeps its own result.

use crate::app::state::CalculatorState;
use crate::config::AppConfig;
use crate::domain::area::{self, AreaError};
use crate::domain::ontology::{OntologyError, OntologyQuery};
use tracing::{error, info, warn};

/// What the "Query Ontology" button should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Rendered report for an information popup
    Results(String),
    /// Message for an error popup
    Failure { message: String },
}

/// Main application controller
#[derive(Debug, Clone)]
pub struct AppController {
    config: AppConfig,
}

impl AppController {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handles "Calculate Triangle Area"
    ///
    /// On error the state is left as it was and the error carries the
    /// message the UI shows.
    pub fn calculate_triangle(
        &self,
        base: &str,
        height: &str,
        state: &mut CalculatorState,
    ) -> Result<(), AreaError> {
        match area::triangle_area(base, height) {
            Ok(result) => {
                info!("Triangle area for base={:?} height={:?}: {}", base, height, result.area);
                state.show(&result);
                Ok(())
            }
            Err(err) => {
                warn!("Rejected triangle input: {:?}", err);
                Err(err)
            }
        }
    }

    /// Handles "Calculate Square Area"
    pub fn calculate_square(&self, side: &str, state: &mut CalculatorState) -> Result<(), AreaError> {
        match area::square_area(side) {
            Ok(result) => {
                info!("Square area for side={:?}: {}", side, result.area);
                state.show(&result);
                Ok(())
            }
            Err(err) => {
                warn!("Rejected square input: {:?}", err);
                Err(err)
            }
        }
    }

    /// Handles "Query Ontology": load, query, render
    pub fn query_ontology(&self) -> QueryOutcome {
        let query = OntologyQuery::new(self.config.ontology_path());
        info!("Querying ontology at {}", query.path().display());

        match query.run() {
            Ok(report) => QueryOutcome::Results(report.render()),
            Err(err @ OntologyError::NotFound(_)) => QueryOutcome::Failure {
                message: err.to_string(),
            },
            Err(err) => {
                error!("Ontology query failed: {}", err);
                QueryOutcome::Failure {
                    message: format!("Error in executing ontology query: {}", err),
                }
            }
        }
    }
}
