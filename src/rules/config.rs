//! Rule variant configuration

use serde::{Deserialize, Serialize};

use crate::board::{Board, DEFAULT_BOARD_SIZE};
use crate::error::ConfigError;

/// Smallest board [`RulesConfig::validate`] accepts: three home rows per side
/// with an empty row between the armies
pub const MIN_RULES_BOARD_SIZE: u8 = 7;

/// Largest board [`RulesConfig::validate`] accepts
pub const MAX_RULES_BOARD_SIZE: u8 = 16;

/// Which capture sequences are legal when several exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapturePriority {
    /// Any capture sequence
    #[default]
    Any,
    /// Only sequences taking the most pieces
    Max,
}

/// Rule variant switches.
///
/// `Default` is the Filipino ruleset: flying kings, men capture backward,
/// mandatory capture with no maximum rule, promotion at the end of the turn.
///
/// Serializes with camelCase field names; missing fields take their default:
///
/// ```
/// use dama::rules::{CapturePriority, RulesConfig};
///
/// let cfg = RulesConfig::from_json_str(r#"{ "capturePriority": "max" }"#).unwrap();
/// assert_eq!(cfg.capture_priority, CapturePriority::Max);
/// assert!(cfg.flying_kings);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesConfig {
    pub board_size: u8,
    pub mandatory_capture: bool,
    /// Kings slide any distance on empty diagonals instead of one step
    pub flying_kings: bool,
    /// Men capture in all four directions (they still only step forward)
    pub men_capture_backward: bool,
    pub capture_priority: CapturePriority,
    /// A man reaching the back rank mid-chain continues the chain as a king
    pub promote_mid_turn: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            mandatory_capture: true,
            flying_kings: true,
            men_capture_backward: true,
            capture_priority: CapturePriority::Any,
            promote_mid_turn: false,
        }
    }
}

impl RulesConfig {
    /// Parse a (possibly partial) JSON rules document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the board size is one the initial layout supports
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_RULES_BOARD_SIZE..=MAX_RULES_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
                min: MIN_RULES_BOARD_SIZE,
                max: MAX_RULES_BOARD_SIZE,
            });
        }
        Ok(())
    }

    /// Starting position for this board size
    pub fn initial_board(&self) -> Board {
        Board::initial(self.board_size)
    }

    #[must_use]
    pub fn with_board_size(mut self, size: u8) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_mandatory_capture(mut self, on: bool) -> Self {
        self.mandatory_capture = on;
        self
    }

    #[must_use]
    pub fn with_flying_kings(mut self, on: bool) -> Self {
        self.flying_kings = on;
        self
    }

    #[must_use]
    pub fn with_men_capture_backward(mut self, on: bool) -> Self {
        self.men_capture_backward = on;
        self
    }

    #[must_use]
    pub fn with_capture_priority(mut self, priority: CapturePriority) -> Self {
        self.capture_priority = priority;
        self
    }

    #[must_use]
    pub fn with_promote_mid_turn(mut self, on: bool) -> Self {
        self.promote_mid_turn = on;
        self
    }
}
