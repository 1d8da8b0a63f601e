use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use shared::{
    domain::{DrawnCard, Position},
    error::ErrorNotice,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    deck::Deck,
    error::{InterpretationError, ReadingError},
    flow::{FlowEvent, Stage},
    interpretation::Interpreter,
};

/// Everything the presentation layer needs to render a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingSnapshot {
    pub stage: Stage,
    pub cursor: usize,
    pub drawn: Vec<DrawnCard>,
    pub question: String,
    pub interpretation: Option<String>,
    pub error: Option<ErrorNotice>,
    pub loading: bool,
    pub credential_unusable: bool,
    pub next_position: Option<Position>,
    pub can_request_interpretation: bool,
}

struct Reading {
    stage: Stage,
    deck: Deck,
    cursor: usize,
    drawn: Vec<DrawnCard>,
    question: String,
    interpretation: Option<String>,
    error: Option<ErrorNotice>,
    loading: bool,
    credential_unusable: bool,
    // Bumped by start/reset; in-flight results from an older generation are dropped.
    generation: u64,
    rng: StdRng,
}

impl Reading {
    fn new(rng: StdRng, credential_unusable: bool) -> Self {
        Self {
            stage: Stage::PreDraw,
            deck: Deck::default(),
            cursor: 0,
            drawn: Vec::with_capacity(Position::COUNT),
            question: String::new(),
            interpretation: None,
            error: None,
            loading: false,
            credential_unusable,
            generation: 0,
            rng,
        }
    }

    fn clear_spread(&mut self) {
        self.cursor = 0;
        self.drawn.clear();
        self.question.clear();
        self.interpretation = None;
        self.error = None;
        self.generation += 1;
    }

    fn fail<T>(&mut self, err: ReadingError) -> Result<T, ReadingError> {
        if err.is_rejection() {
            debug!(code = ?err.code(), stage = ?self.stage, error = %err, "reading: operation rejected");
        } else {
            warn!(code = ?err.code(), stage = ?self.stage, error = %err, "reading: interpretation failed");
        }
        self.error = Some(err.notice());
        Err(err)
    }

    fn snapshot(&self) -> ReadingSnapshot {
        let next_position = match self.stage {
            Stage::Drawing => Position::from_index(self.cursor),
            _ => None,
        };
        ReadingSnapshot {
            stage: self.stage,
            cursor: self.cursor,
            drawn: self.drawn.clone(),
            question: self.question.clone(),
            interpretation: self.interpretation.clone(),
            error: self.error.clone(),
            loading: self.loading,
            credential_unusable: self.credential_unusable,
            next_position,
            can_request_interpretation: self.stage == Stage::QuestionTime
                && !self.loading
                && !self.credential_unusable
                && self.drawn.len() == Position::COUNT,
        }
    }
}

/// Drives one reading at a time through `PreDraw → Drawing → QuestionTime → InterpretationReady`.
///
/// Every rejected operation is also recorded in the reading's error slot so a
/// front end can render it without inspecting the returned error.
pub struct ReadingController {
    inner: Mutex<Reading>,
    interpreter: Arc<dyn Interpreter>,
}

impl ReadingController {
    pub fn new(interpreter: Arc<dyn Interpreter>) -> Self {
        let credential_unusable = !interpreter.has_credential();
        Self {
            inner: Mutex::new(Reading::new(StdRng::from_os_rng(), credential_unusable)),
            interpreter,
        }
    }

    /// Reproducible shuffles for the lifetime of this controller.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.inner.get_mut().rng = StdRng::seed_from_u64(seed);
        self
    }

    pub async fn snapshot(&self) -> ReadingSnapshot {
        self.inner.lock().await.snapshot()
    }

    pub async fn stage(&self) -> Stage {
        self.inner.lock().await.stage
    }

    /// Shuffles a fresh deck and begins drawing. From `QuestionTime` this is the reshuffle.
    pub async fn start(&self) -> Result<(), ReadingError> {
        let mut reading = self.inner.lock().await;
        if reading.loading {
            return reading.fail(ReadingError::invalid_state(
                "cannot reshuffle while an interpretation is in progress",
            ));
        }
        let next = match reading.stage.transition(FlowEvent::Start) {
            Ok(next) => next,
            Err(err) => return reading.fail(err),
        };

        let deck = Deck::shuffled(&mut reading.rng);
        reading.deck = deck;
        reading.clear_spread();
        reading.stage = next;
        info!(generation = reading.generation, "reading: deck shuffled");
        Ok(())
    }

    pub async fn reshuffle(&self) -> Result<(), ReadingError> {
        self.start().await
    }

    pub async fn draw_next(&self) -> Result<DrawnCard, ReadingError> {
        let mut reading = self.inner.lock().await;
        let cursor = reading.cursor;
        let drawn = match (
            reading.stage,
            Position::from_index(cursor),
            reading.deck.card_at(cursor),
        ) {
            (Stage::Drawing, Some(position), Some(card)) => DrawnCard { position, card },
            _ => {
                return reading.fail(ReadingError::invalid_state(
                    "no more cards to draw or deck not initialized",
                ))
            }
        };

        reading.drawn.push(drawn);
        reading.cursor = cursor + 1;
        reading.error = None;
        info!(
            cursor = reading.cursor,
            position = drawn.position.label(),
            card = drawn.card.name,
            "reading: card drawn"
        );

        if reading.cursor == Position::COUNT {
            let next = match reading.stage.transition(FlowEvent::SpreadComplete) {
                Ok(next) => next,
                Err(err) => return reading.fail(err),
            };
            reading.stage = next;
            info!("reading: spread complete");
        }
        Ok(drawn)
    }

    /// Blank questions are accepted here and rejected by `request_interpretation`.
    pub async fn set_question(&self, text: impl Into<String>) {
        self.inner.lock().await.question = text.into();
    }

    pub async fn request_interpretation(&self) -> Result<String, ReadingError> {
        let (generation, spread, question) = {
            let mut reading = self.inner.lock().await;
            if reading.stage != Stage::QuestionTime {
                let stage = reading.stage;
                return reading.fail(ReadingError::invalid_state(format!(
                    "interpretation is not available while in {stage:?}"
                )));
            }
            if reading.loading {
                return reading.fail(ReadingError::invalid_state(
                    "an interpretation is already in progress",
                ));
            }
            if reading.question.trim().is_empty() {
                return reading.fail(ReadingError::Validation(
                    "Please enter your question.".to_string(),
                ));
            }
            if !self.interpreter.has_credential() {
                reading.credential_unusable = true;
                return reading.fail(InterpretationError::CredentialMissing.into());
            }
            if reading.credential_unusable {
                return reading.fail(InterpretationError::CredentialInvalid.into());
            }

            reading.loading = true;
            reading.error = None;
            reading.interpretation = None;
            (
                reading.generation,
                reading.drawn.clone(),
                reading.question.clone(),
            )
        };

        info!(generation, "reading: interpretation requested");
        let result = self.interpreter.interpret(&spread, &question).await;

        let mut reading = self.inner.lock().await;
        if reading.generation != generation {
            debug!(
                generation,
                current = reading.generation,
                "reading: discarding interpretation for a superseded reading"
            );
            return Err(ReadingError::invalid_state(
                "reading was reset while the interpretation was in flight",
            ));
        }
        reading.loading = false;

        match result {
            Ok(text) => {
                let next = match reading.stage.transition(FlowEvent::InterpretationReceived) {
                    Ok(next) => next,
                    Err(err) => return reading.fail(err),
                };
                reading.stage = next;
                reading.error = None;
                reading.interpretation = Some(text.clone());
                info!(generation, "reading: interpretation ready");
                Ok(text)
            }
            Err(err) => {
                let err = ReadingError::from(err);
                if err.code().is_credential_failure() {
                    reading.credential_unusable = true;
                }
                reading.fail(err)
            }
        }
    }

    /// Clears the reading and re-checks whether the credential is usable.
    pub async fn reset(&self) {
        let mut reading = self.inner.lock().await;
        reading.clear_spread();
        reading.deck = Deck::default();
        reading.loading = false;
        reading.credential_unusable = !self.interpreter.has_credential();
        reading.stage = Stage::PreDraw;
        info!(generation = reading.generation, "reading: reset");
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
