use rand::{seq::SliceRandom, Rng};
use shared::{catalog::TAROT_DECK, domain::Card};

/// One shuffled permutation of the catalog, consumed by index.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Uniform in-place Fisher-Yates shuffle of all 78 cards.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = TAROT_DECK.to_vec();
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};
    use shared::catalog::DECK_SIZE;

    use super::*;

    #[test]
    fn shuffled_deck_is_a_permutation_of_the_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);

        let ids: HashSet<_> = (0..deck.len())
            .filter_map(|i| deck.card_at(i))
            .map(|card| card.id)
            .collect();
        let catalog: HashSet<_> = TAROT_DECK.iter().map(|card| card.id).collect();
        assert_eq!(ids, catalog);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let a = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        let b = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        let c = Deck::shuffled(&mut StdRng::seed_from_u64(43));
        let order = |deck: &Deck| (0..deck.len()).filter_map(|i| deck.card_at(i)).collect::<Vec<_>>();
        assert_eq!(order(&a), order(&b));
        assert_ne!(order(&a), order(&c));
    }

    #[test]
    fn default_deck_is_empty() {
        let deck = Deck::default();
        assert!(deck.is_empty());
        assert_eq!(deck.card_at(0), None);
    }

    #[test]
    fn first_card_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut fool_first = 0;
        let trials = 7_800;
        for _ in 0..trials {
            if Deck::shuffled(&mut rng).card_at(0).map(|c| c.id.0) == Some(1) {
                fool_first += 1;
            }
        }
        // expected 100 hits
        assert!((50..=150).contains(&fool_first), "fool first {fool_first} times");
    }
}
