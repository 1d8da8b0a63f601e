//! Interactive commands read from stdin.

use reading_core::Stage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Draw,
    Question(String),
    Read,
    Reshuffle,
    Reset,
    Status,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  start              shuffle the deck and begin drawing
  draw               draw the next card
  question <text>    set your question
  read               ask for the interpretation
  reshuffle          reshuffle and draw all ten cards again
  reset              clear the reading and start over
  status             show the current reading
  help               show this list
  quit               leave
an empty line does the next natural step; in the question stage any text other than a bare command is taken as your question";

/// An empty line advances the flow, so pressing enter repeatedly walks a whole reading.
pub fn parse_command(line: &str, stage: Stage) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return match stage {
            Stage::PreDraw => Command::Start,
            Stage::Drawing => Command::Draw,
            Stage::QuestionTime => Command::Read,
            Stage::InterpretationReady => Command::Reset,
        };
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word.to_ascii_lowercase(), rest.trim()),
        None => (line.to_ascii_lowercase(), ""),
    };
    if matches!(word.as_str(), "question" | "ask") {
        return Command::Question(rest.to_string());
    }
    // In the question stage only a bare keyword is a command, so
    // "Quit my job or stay?" stays a question.
    if !rest.is_empty() && stage == Stage::QuestionTime {
        return Command::Question(line.to_string());
    }
    match word.as_str() {
        "start" | "begin" => Command::Start,
        "draw" => Command::Draw,
        "read" | "reading" => Command::Read,
        "reshuffle" => Command::Reshuffle,
        "reset" | "new" => Command::Reset,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ if stage == Stage::QuestionTime => Command::Question(line.to_string()),
        _ => Command::Unknown(line.to_string()),
    }
}
