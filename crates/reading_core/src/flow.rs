//! Stage machine of a reading.

use serde::Serialize;

use crate::error::ReadingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    PreDraw,
    Drawing,
    QuestionTime,
    InterpretationReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// Fresh shuffle; from `QuestionTime` this is the reshuffle.
    Start,
    SpreadComplete,
    InterpretationReceived,
    Reset,
}

impl Stage {
    pub fn transition(self, event: FlowEvent) -> Result<Stage, ReadingError> {
        match (self, event) {
            (_, FlowEvent::Reset) => Ok(Stage::PreDraw),
            (Stage::PreDraw | Stage::QuestionTime, FlowEvent::Start) => Ok(Stage::Drawing),
            (Stage::Drawing, FlowEvent::SpreadComplete) => Ok(Stage::QuestionTime),
            (Stage::QuestionTime, FlowEvent::InterpretationReceived) => {
                Ok(Stage::InterpretationReady)
            }
            (stage, event) => Err(ReadingError::invalid_state(format!(
                "cannot apply {event:?} while in {stage:?}"
            ))),
        }
    }
}
