//! Configuration types for tournament play

use std::fmt;
use std::str::FromStr;

use c4arena_core::{Heuristics, Score, SearchConfig, MAX_JITTER, MAX_WEIGHT};
use c4arena_rollout::{RolloutConfig, RolloutScoring};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from invalid strategy or tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} search depth must be at least 1")]
    ZeroDepth(StrategyKind),

    #[error("rollout sample count must be at least 1")]
    ZeroSamples,

    #[error("jitter must be non-negative, got {0}")]
    NegativeJitter(Score),

    #[error("jitter {0} exceeds the maximum of {max}", max = MAX_JITTER)]
    JitterTooLarge(Score),

    #[error("heuristic weight {0} exceeds the maximum magnitude of {max}", max = MAX_WEIGHT)]
    WeightTooLarge(Score),

    #[error("unknown strategy '{0}' (expected minimax, alpha-beta, rollout or random)")]
    UnknownStrategy(String),

    #[error("invalid strategy spec '{spec}': {reason}")]
    Parse { spec: String, reason: String },
}

/// Move-selection algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Exhaustive minimax to a fixed depth
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
    /// Flat Monte-Carlo rollouts per candidate move
    Rollout,
    /// Uniformly random legal move
    Random,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Minimax => "minimax",
            StrategyKind::AlphaBeta => "alpha-beta",
            StrategyKind::Rollout => "rollout",
            StrategyKind::Random => "random",
        };
        f.write_str(name)
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" | "mm" => Ok(StrategyKind::Minimax),
            "alpha-beta" | "alphabeta" | "ab" => Ok(StrategyKind::AlphaBeta),
            "rollout" | "mc" => Ok(StrategyKind::Rollout),
            "random" => Ok(StrategyKind::Random),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

fn default_depth() -> u32 {
    5
}

fn default_samples() -> u32 {
    100
}

/// Strategy configuration for one agent, fixed for a whole tournament
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub kind: StrategyKind,
    /// Search depth for minimax / alpha-beta
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Playouts per candidate move for rollout
    #[serde(default = "default_samples")]
    pub samples: u32,
    /// Heuristic leaf jitter for minimax / alpha-beta
    #[serde(default)]
    pub jitter: Option<Score>,
    #[serde(default)]
    pub scoring: RolloutScoring,
    #[serde(default)]
    pub heuristics: Heuristics,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            kind: StrategyKind::AlphaBeta,
            depth: default_depth(),
            samples: default_samples(),
            jitter: None,
            scoring: RolloutScoring::Wins,
            heuristics: Heuristics::default(),
        }
    }
}

impl StrategyConfig {
    pub fn minimax(depth: u32) -> Self {
        Self {
            kind: StrategyKind::Minimax,
            depth,
            ..Default::default()
        }
    }

    pub fn alpha_beta(depth: u32) -> Self {
        Self {
            kind: StrategyKind::AlphaBeta,
            depth,
            ..Default::default()
        }
    }

    pub fn rollout(samples: u32) -> Self {
        Self {
            kind: StrategyKind::Rollout,
            samples,
            ..Default::default()
        }
    }

    pub fn random() -> Self {
        Self {
            kind: StrategyKind::Random,
            ..Default::default()
        }
    }

    pub fn with_jitter(mut self, jitter: Score) -> Self {
        self.jitter = Some(jitter);
        self
    }

    pub fn with_scoring(mut self, scoring: RolloutScoring) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Reject configurations that could not choose a move
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.kind {
            StrategyKind::Minimax | StrategyKind::AlphaBeta => {
                if self.depth == 0 {
                    return Err(ConfigError::ZeroDepth(self.kind));
                }
                match self.jitter {
                    Some(j) if j < 0 => return Err(ConfigError::NegativeJitter(j)),
                    Some(j) if j > MAX_JITTER => return Err(ConfigError::JitterTooLarge(j)),
                    _ => {}
                }
                if !self.heuristics.is_bounded() {
                    return Err(ConfigError::WeightTooLarge(self.heuristics.max_weight()));
                }
            }
            StrategyKind::Rollout => {
                if self.samples == 0 {
                    return Err(ConfigError::ZeroSamples);
                }
            }
            StrategyKind::Random => {}
        }
        Ok(())
    }

    /// Search parameters for minimax / alpha-beta kinds
    pub fn search_config(&self) -> Option<SearchConfig> {
        let pruning = match self.kind {
            StrategyKind::Minimax => false,
            StrategyKind::AlphaBeta => true,
            _ => return None,
        };
        Some(SearchConfig {
            depth: self.depth,
            pruning,
            jitter: self.jitter,
            heuristics: self.heuristics.clone(),
        })
    }

    /// Rollout parameters for the rollout kind
    pub fn rollout_config(&self) -> Option<RolloutConfig> {
        match self.kind {
            StrategyKind::Rollout => Some(RolloutConfig::new(self.samples).with_scoring(self.scoring)),
            _ => None,
        }
    }

    /// Short human-readable description, e.g. `alpha-beta(depth=5)`
    pub fn label(&self) -> String {
        match self.kind {
            StrategyKind::Minimax | StrategyKind::AlphaBeta => match self.jitter {
                Some(j) => format!("{}(depth={}, jitter={})", self.kind, self.depth, j),
                None => format!("{}(depth={})", self.kind, self.depth),
            },
            StrategyKind::Rollout => match self.scoring {
                RolloutScoring::Wins => format!("rollout(samples={})", self.samples),
                RolloutScoring::NetOutcome => format!("rollout(samples={}, net)", self.samples),
            },
            StrategyKind::Random => "random".to_string(),
        }
    }
}

/// Parses `kind[:n][:option...]`, where `n` is the depth for search kinds or
/// the sample count for rollout, and options are `jitter=N` or `net`.
///
/// Examples: `alpha-beta:5`, `minimax:4:jitter=1`, `rollout:200:net`, `random`.
impl FromStr for StrategyConfig {
    type Err = ConfigError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: String| ConfigError::Parse {
            spec: spec.to_string(),
            reason,
        };

        let mut parts = spec.trim().split(':');
        let kind: StrategyKind = parts.next().unwrap_or_default().parse()?;
        let mut config = match kind {
            StrategyKind::Minimax => StrategyConfig::minimax(default_depth()),
            StrategyKind::AlphaBeta => StrategyConfig::alpha_beta(default_depth()),
            StrategyKind::Rollout => StrategyConfig::rollout(default_samples()),
            StrategyKind::Random => StrategyConfig::random(),
        };

        for (i, part) in parts.enumerate() {
            if i == 0 {
                if let Ok(n) = part.parse::<u32>() {
                    match kind {
                        StrategyKind::Minimax | StrategyKind::AlphaBeta => config.depth = n,
                        StrategyKind::Rollout => config.samples = n,
                        StrategyKind::Random => {
                            return Err(parse_err("random takes no parameters".to_string()))
                        }
                    }
                    continue;
                }
            }

            if let Some(value) = part.strip_prefix("jitter=") {
                let jitter = value
                    .parse::<Score>()
                    .map_err(|e| parse_err(format!("bad jitter '{}': {}", value, e)))?;
                config.jitter = Some(jitter);
            } else if part == "net" {
                config.scoring = RolloutScoring::NetOutcome;
            } else {
                return Err(parse_err(format!("unrecognized option '{}'", part)));
            }
        }

        config.validate()?;
        Ok(config)
    }
}

/// How the starting side of each game is chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartPolicy {
    /// Coin flip per game from the tournament RNG
    #[default]
    Random,
    /// Strategy A starts even-numbered games
    Alternate,
}

/// Tournament configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Number of games to play
    pub games: usize,
    #[serde(default)]
    pub start_policy: StartPolicy,
    /// Random seed for reproducibility (None = entropy)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Whether to run games in parallel
    #[serde(default)]
    pub parallel: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games: 100,
            start_policy: StartPolicy::Random,
            seed: None,
            parallel: false,
        }
    }
}

impl TournamentConfig {
    pub fn new(games: usize) -> Self {
        Self {
            games,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start_policy(mut self, start_policy: StartPolicy) -> Self {
        self.start_policy = start_policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_defaults() {
        let config = StrategyConfig::default();
        assert_eq!(config.kind, StrategyKind::AlphaBeta);
        assert_eq!(config.depth, 5);
        assert_eq!(config.samples, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_search_config_mapping() {
        let mm = StrategyConfig::minimax(4).search_config().unwrap();
        assert!(!mm.pruning);
        assert_eq!(mm.depth, 4);

        let ab = StrategyConfig::alpha_beta(6).with_jitter(1).search_config().unwrap();
        assert!(ab.pruning);
        assert_eq!(ab.jitter, Some(1));

        assert!(StrategyConfig::rollout(10).search_config().is_none());
        assert!(StrategyConfig::random().search_config().is_none());
    }

    #[test]
    fn test_rollout_config_mapping() {
        let config = StrategyConfig::rollout(250)
            .with_scoring(RolloutScoring::NetOutcome)
            .rollout_config()
            .unwrap();
        assert_eq!(config.samples_per_move, 250);
        assert_eq!(config.scoring, RolloutScoring::NetOutcome);
        assert!(StrategyConfig::alpha_beta(3).rollout_config().is_none());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            StrategyConfig::minimax(0).validate(),
            Err(ConfigError::ZeroDepth(StrategyKind::Minimax))
        );
        assert_eq!(StrategyConfig::rollout(0).validate(), Err(ConfigError::ZeroSamples));
        assert_eq!(
            StrategyConfig::alpha_beta(3).with_jitter(-1).validate(),
            Err(ConfigError::NegativeJitter(-1))
        );
        assert!(StrategyConfig::alpha_beta(3).with_jitter(MAX_JITTER).validate().is_ok());
        assert_eq!(
            StrategyConfig::minimax(2).with_jitter(MAX_JITTER + 1).validate(),
            Err(ConfigError::JitterTooLarge(MAX_JITTER + 1))
        );
        assert_eq!(
            StrategyConfig::minimax(2).with_jitter(Score::MAX).validate(),
            Err(ConfigError::JitterTooLarge(Score::MAX))
        );
        // Depth is irrelevant to rollout and random
        let mut random = StrategyConfig::random();
        random.depth = 0;
        assert!(random.validate().is_ok());
    }

    #[test]
    fn test_parse_specs() {
        assert_eq!("alpha-beta:5".parse::<StrategyConfig>().unwrap(), StrategyConfig::alpha_beta(5));
        assert_eq!("minimax:3".parse::<StrategyConfig>().unwrap(), StrategyConfig::minimax(3));
        assert_eq!("ab".parse::<StrategyConfig>().unwrap(), StrategyConfig::alpha_beta(5));
        assert_eq!("random".parse::<StrategyConfig>().unwrap(), StrategyConfig::random());
        assert_eq!(
            "minimax:4:jitter=1".parse::<StrategyConfig>().unwrap(),
            StrategyConfig::minimax(4).with_jitter(1)
        );
        assert_eq!(
            "rollout:200:net".parse::<StrategyConfig>().unwrap(),
            StrategyConfig::rollout(200).with_scoring(RolloutScoring::NetOutcome)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "negamax:4".parse::<StrategyConfig>(),
            Err(ConfigError::UnknownStrategy(_))
        ));
        assert!(matches!(
            "minimax:4:bogus".parse::<StrategyConfig>(),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            "random:3".parse::<StrategyConfig>(),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(
            "rollout:0".parse::<StrategyConfig>(),
            Err(ConfigError::ZeroSamples)
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(StrategyConfig::alpha_beta(5).label(), "alpha-beta(depth=5)");
        assert_eq!(StrategyConfig::minimax(2).with_jitter(1).label(), "minimax(depth=2, jitter=1)");
        assert_eq!(StrategyConfig::rollout(100).label(), "rollout(samples=100)");
        assert_eq!(StrategyConfig::random().label(), "random");
    }

    #[test]
    fn test_tournament_config() {
        let config = TournamentConfig::default();
        assert_eq!(config.games, 100);
        assert_eq!(config.start_policy, StartPolicy::Random);
        assert!(!config.parallel);

        let config = TournamentConfig::new(10)
            .with_seed(7)
            .with_start_policy(StartPolicy::Alternate)
            .with_parallel(true);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.start_policy, StartPolicy::Alternate);
        assert!(config.parallel);
    }

    #[test]
    fn test_unbounded_weights_rejected() {
        let heavy = Heuristics {
            four: 5 * MAX_WEIGHT,
            ..Default::default()
        };
        assert_eq!(
            StrategyConfig::alpha_beta(4).with_heuristics(heavy).validate(),
            Err(ConfigError::WeightTooLarge(5 * MAX_WEIGHT))
        );

        let json = r#"{ "kind": "minimax", "depth": 2,
            "heuristics": { "center_weight": 3, "four": 100, "three": 5, "two": 2,
                            "opponent_three": -9000000000 } }"#;
        let config: StrategyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::WeightTooLarge(9_000_000_000)));
    }

    #[test]
    fn test_parse_rejects_large_jitter() {
        assert!(matches!(
            "alpha-beta:4:jitter=5000000000".parse::<StrategyConfig>(),
            Err(ConfigError::JitterTooLarge(5_000_000_000))
        ));
    }

    #[test]
    fn test_strategy_config_json() {
        let json = r#"{ "kind": "rollout", "samples": 40, "scoring": "net-outcome" }"#;
        let config: StrategyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, StrategyConfig::rollout(40).with_scoring(RolloutScoring::NetOutcome));
    }
}
