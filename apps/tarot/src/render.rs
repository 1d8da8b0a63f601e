use reading_core::{interpretation::paragraphs, ReadingSnapshot, Stage};
use shared::domain::{DrawnCard, Position};

pub fn render_drawn(drawn: &DrawnCard) -> String {
    format!("{} {}: {}", drawn.position.index() + 1, drawn.position, drawn.card.name)
}

pub fn render_spread(snapshot: &ReadingSnapshot) -> String {
    let mut out = String::new();
    for position in Position::ALL {
        let line = match snapshot.drawn.get(position.index()) {
            Some(drawn) => render_drawn(drawn),
            None if snapshot.next_position == Some(position) => {
                format!("{} {}: (next to draw)", position.index() + 1, position)
            }
            None => format!("{} {}: (empty)", position.index() + 1, position),
        };
        out.push_str(&format!("  {line}\n"));
    }
    out
}

pub fn render_snapshot(snapshot: &ReadingSnapshot) -> String {
    let mut out = String::new();
    match snapshot.stage {
        Stage::PreDraw => {
            out.push_str("Welcome to the Celtic Cross. Hold your question in mind; the cards are drawn one by one.\n");
            out.push_str("Press enter (or type `start`) to begin.\n");
            if snapshot.credential_unusable {
                out.push_str(
                    "Note: no API key is configured. Drawing works, but interpretations will fail.\n",
                );
            }
        }
        Stage::Drawing => {
            if let Some(next) = snapshot.next_position {
                out.push_str(&format!(
                    "Drawing card {} of {}. Next card: {next}\n",
                    snapshot.cursor + 1,
                    Position::COUNT
                ));
            }
            out.push_str(&render_spread(snapshot));
        }
        Stage::QuestionTime => {
            out.push_str("All 10 cards have been drawn.\n");
            out.push_str(&render_spread(snapshot));
            if snapshot.question.trim().is_empty() {
                out.push_str("Type your question, then press enter to get your reading.\n");
            } else {
                out.push_str(&format!("Question: {}\n", snapshot.question));
                out.push_str("Press enter to get your reading, or type a new question.\n");
            }
            if snapshot.credential_unusable {
                out.push_str("Cannot get reading: API key is missing or invalid. Reset after fixing the configuration.\n");
            }
        }
        Stage::InterpretationReady => {
            out.push_str(&format!("Your question: {}\n", snapshot.question));
            out.push_str("Drawn cards:\n");
            out.push_str(&render_spread(snapshot));
            out.push_str("Interpretation:\n");
            if let Some(text) = &snapshot.interpretation {
                for paragraph in paragraphs(text) {
                    out.push_str(&format!("\n{paragraph}\n"));
                }
            }
            out.push_str("\nPress enter for a new reading.\n");
        }
    }
    if let Some(error) = &snapshot.error {
        out.push_str(&format!("error: {}\n", error.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{
        catalog::TAROT_DECK,
        error::{ErrorCode, ErrorNotice},
    };

    fn snapshot(stage: Stage, drawn: usize) -> ReadingSnapshot {
        let drawn: Vec<DrawnCard> = Position::ALL
            .iter()
            .zip(TAROT_DECK.iter())
            .take(drawn)
            .map(|(position, card)| DrawnCard {
                position: *position,
                card: *card,
            })
            .collect();
        ReadingSnapshot {
            stage,
            cursor: drawn.len(),
            next_position: match stage {
                Stage::Drawing => Position::from_index(drawn.len()),
                _ => None,
            },
            drawn,
            question: String::new(),
            interpretation: None,
            error: None,
            loading: false,
            credential_unusable: false,
            can_request_interpretation: false,
        }
    }

    #[test]
    fn drawing_shows_progress_and_placeholders() {
        let out = render_snapshot(&snapshot(Stage::Drawing, 2));
        assert!(out.contains("Drawing card 3 of 10. Next card: Distant Past/Root"));
        assert!(out.contains("1 Present Situation: The Fool"));
        assert!(out.contains("3 Distant Past/Root: (next to draw)"));
        assert!(out.contains("10 Final Outcome: (empty)"));
    }

    #[test]
    fn interpretation_is_split_into_paragraphs() {
        let mut snap = snapshot(Stage::InterpretationReady, 10);
        snap.question = "What should I focus on?".into();
        snap.interpretation = Some("First paragraph.\\nSecond paragraph.".into());
        let out = render_snapshot(&snap);
        assert!(out.contains("Your question: What should I focus on?"));
        assert!(out.contains("\nFirst paragraph.\n"));
        assert!(out.contains("\nSecond paragraph.\n"));
        assert!(!out.contains("\\n"));
    }

    #[test]
    fn errors_and_credential_warning_are_shown() {
        let mut snap = snapshot(Stage::QuestionTime, 10);
        snap.credential_unusable = true;
        snap.error = Some(ErrorNotice::new(
            ErrorCode::CredentialInvalid,
            "invalid API key; check the API_KEY configuration",
        ));
        let out = render_snapshot(&snap);
        assert!(out.contains("API key is missing or invalid"));
        assert!(out.contains("error: invalid API key"));
    }
}
