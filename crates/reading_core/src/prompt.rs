use shared::domain::DrawnCard;

const PREAMBLE: &str = "You are a tarot reader conducting a Celtic Cross reading. \
Your tone should be insightful, balanced, and empathetic.\n\
The following 10 cards have been randomly drawn for the user:";

const RULES: [&str; 10] = [
    "Address each card and its position systematically. For each card, begin with \"For the [Position Name] - [Card Name]:\".",
    "Include BOTH positive and challenging aspects of each card as it relates to its position and the overall question.",
    "Don't sugarcoat difficult cards or overly dramatize positive ones. Maintain a neutral, objective tone.",
    "Acknowledge when cards seem contradictory or unclear in the context of the question or other cards.",
    "Present multiple possible interpretations where relevant, especially for nuanced cards or complex interactions.",
    "Avoid definitive predictions. Focus on energies, potentials, influences, and areas for reflection or action. Use phrases like \"This suggests...\", \"This could indicate...\", \"Consider how this energy might manifest as...\".",
    "If a card doesn't seem to directly fit the question, acknowledge this honestly and explore how its general energy might still offer insight or a broader perspective.",
    "Conclude with a brief summary (2-3 sentences) that synthesizes the key themes of the reading in relation to the question, without making predictions.",
    "Format your response clearly. Use newlines for paragraph breaks to ensure readability. Do not use markdown lists or bolding, just plain text paragraphs.",
    "Do not add any introductory or concluding remarks beyond the interpretation itself. Stick to the card analysis and the brief summary.",
];

/// `"{n}. {position} - {card}"`, one line per drawn card.
pub fn spread_lines(spread: &[DrawnCard]) -> Vec<String> {
    spread
        .iter()
        .enumerate()
        .map(|(i, drawn)| format!("{}. {} - {}", i + 1, drawn.position.label(), drawn.card.name))
        .collect()
}

/// Callers pass the full ten-card spread in position order.
pub fn compose_prompt(spread: &[DrawnCard], question: &str) -> String {
    let mut prompt = String::with_capacity(2048);
    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");
    prompt.push_str(&spread_lines(spread).join("\n"));
    prompt.push_str("\n\nThe user's question is: \"");
    prompt.push_str(question);
    prompt.push_str("\"\n\n");
    prompt.push_str(
        "Please provide an unbiased interpretation of these cards in relation to the user's question. \
Follow these rules strictly for your entire response:\n",
    );
    for (i, rule) in RULES.iter().enumerate() {
        prompt.push_str(&format!("{}. {rule}\n", i + 1));
    }
    prompt
}
