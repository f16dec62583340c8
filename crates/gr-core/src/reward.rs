//! Reward shaping over the graph statistics.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ALPHA_TARGET_DEFAULT, D_TARGET_DEFAULT, LAMBDA_ALPHA_DEFAULT, LAMBDA_D_DEFAULT,
    LAMBDA_SE_DEFAULT,
};
use crate::graph::ReasoningGraph;

/// Tunable reward-shaping parameters.
///
/// Always replaced as a whole group; missing fields in a deserialized
/// config fall back to the defaults, which still yields one atomic
/// replacement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardParams {
    /// Target critical discovery parameter
    pub d_target: f64,
    /// Target surprising-edge fraction
    pub alpha_target: f64,
    /// Weight of the discovery-parameter term
    pub lambda_d: f64,
    /// Weight of the semantic-entropy term
    pub lambda_se: f64,
    /// Weight of the surprising-edge term
    pub lambda_alpha: f64,
}

impl Default for RewardParams {
    fn default() -> Self {
        Self {
            d_target: D_TARGET_DEFAULT,
            alpha_target: ALPHA_TARGET_DEFAULT,
            lambda_d: LAMBDA_D_DEFAULT,
            lambda_se: LAMBDA_SE_DEFAULT,
            lambda_alpha: LAMBDA_ALPHA_DEFAULT,
        }
    }
}

/// Shape the three graph statistics into one scalar.
///
/// The discovery parameter is pulled quadratically toward its target.
/// Semantic entropy earns a linear bonus, while the surprise fraction
/// earns a tent function peaking at its own target.
pub fn shaped_reward(
    discovery: f64,
    semantic_entropy: f64,
    surprising_fraction: f64,
    params: &RewardParams,
) -> f64 {
    -params.lambda_d * (discovery - params.d_target).powi(2)
        + params.lambda_se * semantic_entropy
        + params.lambda_alpha * (1.0 - (surprising_fraction - params.alpha_target).abs())
}

impl ReasoningGraph {
    /// Scalar reward for the current graph state under the current
    /// parameters. Pure: repeated calls with no intervening mutation
    /// return bit-identical values.
    pub fn compute_reward(&mut self) -> f64 {
        let discovery = self.critical_discovery_parameter();
        let semantic_entropy = self.semantic_entropy();
        let surprising_fraction = self.surprising_edge_fraction();
        shaped_reward(
            discovery,
            semantic_entropy,
            surprising_fraction,
            self.reward_params(),
        )
    }
}
