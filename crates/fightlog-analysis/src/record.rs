//! Fight record schema
//!
//! One JSON document per simulated fight, written by the simulator at the end
//! of each run. Only the `endLog` object is consumed by the analysis; the
//! rest of the document (initial state, per-timestep logs) is ignored.
//!
//! # Serialization
//!
//! Field names are camelCase in the JSON:
//!
//! ```json
//! {
//!   "endLog": {
//!     "winner": 2,
//!     "totalTimeSteps": 412,
//!     "totalActions": 96,
//!     "totalDamageOut": 1530,
//!     "player1DamageOut": 820,
//!     "player1TotalActions": 51,
//!     "player2DamageOut": 710,
//!     "player2TotalActions": 45
//!   }
//! }
//! ```

use serde::Deserialize;

/// A single fight-log document.
///
/// Deserialization fails if `endLog` or any of its metric fields is missing,
/// which the corpus loader treats as a skip.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightRecord {
    /// End-of-fight metrics captured by the simulator
    pub end_log: EndLog,
}

/// End-state metrics of one simulated fight.
///
/// `winner` is absent when the run ended without a winner; the simulator's
/// JSON writer drops null fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndLog {
    /// Winning player number, if any
    #[serde(default)]
    pub winner: Option<u32>,
    /// Number of simulation time steps until the fight ended
    pub total_time_steps: f64,
    /// Total actions executed by both players
    pub total_actions: f64,
    /// Total damage dealt by both players
    pub total_damage_out: f64,
    /// Damage dealt by player 1
    pub player1_damage_out: f64,
    /// Actions executed by player 1
    pub player1_total_actions: f64,
    /// Damage dealt by player 2
    pub player2_damage_out: f64,
    /// Actions executed by player 2
    pub player2_total_actions: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        // Extra top-level keys (timestep logs etc.) must be ignored.
        let json = r#"{
            "initialLog": { "seed": 1234 },
            "timeStepLog": [],
            "endLog": {
                "winner": 1,
                "totalTimeSteps": 412,
                "totalActions": 96,
                "totalDamageOut": 1530,
                "player1DamageOut": 820,
                "player1TotalActions": 51,
                "player2DamageOut": 710,
                "player2TotalActions": 45
            }
        }"#;

        let record: FightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.end_log.winner, Some(1));
        assert_eq!(record.end_log.total_time_steps, 412.0);
        assert_eq!(record.end_log.player2_total_actions, 45.0);
    }

    #[test]
    fn test_winner_is_optional() {
        let json = r#"{
            "endLog": {
                "totalTimeSteps": 10,
                "totalActions": 2,
                "totalDamageOut": 30,
                "player1DamageOut": 30,
                "player1TotalActions": 2,
                "player2DamageOut": 0,
                "player2TotalActions": 0
            }
        }"#;

        let record: FightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.end_log.winner, None);
    }

    #[test]
    fn test_missing_end_log_is_an_error() {
        let json = r#"{ "initialLog": {} }"#;
        assert!(serde_json::from_str::<FightRecord>(json).is_err());
    }

    #[test]
    fn test_missing_metric_field_is_an_error() {
        let json = r#"{ "endLog": { "totalTimeSteps": 10 } }"#;
        assert!(serde_json::from_str::<FightRecord>(json).is_err());
    }
}
