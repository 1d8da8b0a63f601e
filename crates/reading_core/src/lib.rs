//! Celtic Cross reading flow and the interpretation client it calls.

mod controller;
pub mod deck;
pub mod error;
pub mod flow;
pub mod interpretation;
pub mod prompt;

pub use controller::{ReadingController, ReadingSnapshot};
pub use error::{InterpretationError, ReadingError};
pub use flow::{FlowEvent, Stage};
pub use interpretation::{InterpretationClient, InterpretationConfig, Interpreter};
