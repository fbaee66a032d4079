use serde::{Deserialize, Serialize};

use crate::GameError;

/// The phases of a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Players place their starter cards and choose secret objectives.
    Init,
    /// The current player must place a card.
    Placing,
    /// The current player must draw a card.
    Drawing,
    End,
}

/// Something that happened in the match and may move it to another phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    AllObjectivesChosen,
    CardPlaced,
    /// The turn went to the next player. `game_over` is set when that
    /// completed the last round.
    TurnPassed { game_over: bool },
    TooFewPlayers,
}

impl Phase {
    /// The phase after `trigger`, or an error if it cannot happen in this phase.
    pub fn transition(self, trigger: Trigger) -> Result<Phase, GameError> {
        match (self, trigger) {
            (Phase::Init, Trigger::AllObjectivesChosen) => Ok(Phase::Placing),
            (Phase::Placing, Trigger::CardPlaced) => Ok(Phase::Drawing),
            // From Placing only when the current player leaves
            (Phase::Placing | Phase::Drawing, Trigger::TurnPassed { game_over }) => {
                Ok(if game_over { Phase::End } else { Phase::Placing })
            }
            (Phase::Init | Phase::Placing | Phase::Drawing, Trigger::TooFewPlayers) => Ok(Phase::End),
            (phase, _) => Err(GameError::IncorrectPhase { phase }),
        }
    }

    /// Fails unless this is the `expected` phase.
    pub fn require(self, expected: Phase) -> Result<(), GameError> {
        if self == expected {
            Ok(())
        } else {
            Err(GameError::IncorrectPhase { phase: self })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASES: [Phase; 4] = [Phase::Init, Phase::Placing, Phase::Drawing, Phase::End];
    const TRIGGERS: [Trigger; 5] = [
        Trigger::AllObjectivesChosen,
        Trigger::CardPlaced,
        Trigger::TurnPassed { game_over: false },
        Trigger::TurnPassed { game_over: true },
        Trigger::TooFewPlayers,
    ];

    #[test]
    fn every_transition() {
        use Phase::*;
        for phase in PHASES {
            for trigger in TRIGGERS {
                let expected = match (phase, trigger) {
                    (Init, Trigger::AllObjectivesChosen) => Some(Placing),
                    (Placing, Trigger::CardPlaced) => Some(Drawing),
                    (Placing | Drawing, Trigger::TurnPassed { game_over: false }) => Some(Placing),
                    (Placing | Drawing, Trigger::TurnPassed { game_over: true }) => Some(End),
                    (Init | Placing | Drawing, Trigger::TooFewPlayers) => Some(End),
                    _ => None,
                };
                match expected {
                    Some(next) => assert_eq!(phase.transition(trigger), Ok(next)),
                    None => assert_eq!(
                        phase.transition(trigger),
                        Err(GameError::IncorrectPhase { phase })
                    ),
                }
            }
        }
    }

    #[test]
    fn end_is_terminal() {
        for trigger in TRIGGERS {
            assert!(Phase::End.transition(trigger).is_err());
        }
    }
}
