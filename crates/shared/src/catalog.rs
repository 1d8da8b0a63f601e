//! The fixed 78-card catalog.

use crate::domain::{Card, Suit};

pub const DECK_SIZE: usize = 78;

pub const TAROT_DECK: [Card; DECK_SIZE] = [
    // Major Arcana
    Card::major(1, "The Fool"),
    Card::major(2, "The Magician"),
    Card::major(3, "The High Priestess"),
    Card::major(4, "The Empress"),
    Card::major(5, "The Emperor"),
    Card::major(6, "The Hierophant"),
    Card::major(7, "The Lovers"),
    Card::major(8, "The Chariot"),
    Card::major(9, "Strength"),
    Card::major(10, "The Hermit"),
    Card::major(11, "Wheel of Fortune"),
    Card::major(12, "Justice"),
    Card::major(13, "The Hanged Man"),
    Card::major(14, "Death"),
    Card::major(15, "Temperance"),
    Card::major(16, "The Devil"),
    Card::major(17, "The Tower"),
    Card::major(18, "The Star"),
    Card::major(19, "The Moon"),
    Card::major(20, "The Sun"),
    Card::major(21, "Judgement"),
    Card::major(22, "The World"),
    // Wands
    Card::minor(23, "Ace of Wands", Suit::Wands),
    Card::minor(24, "Two of Wands", Suit::Wands),
    Card::minor(25, "Three of Wands", Suit::Wands),
    Card::minor(26, "Four of Wands", Suit::Wands),
    Card::minor(27, "Five of Wands", Suit::Wands),
    Card::minor(28, "Six of Wands", Suit::Wands),
    Card::minor(29, "Seven of Wands", Suit::Wands),
    Card::minor(30, "Eight of Wands", Suit::Wands),
    Card::minor(31, "Nine of Wands", Suit::Wands),
    Card::minor(32, "Ten of Wands", Suit::Wands),
    Card::minor(33, "Page of Wands", Suit::Wands),
    Card::minor(34, "Knight of Wands", Suit::Wands),
    Card::minor(35, "Queen of Wands", Suit::Wands),
    Card::minor(36, "King of Wands", Suit::Wands),
    // Cups
    Card::minor(37, "Ace of Cups", Suit::Cups),
    Card::minor(38, "Two of Cups", Suit::Cups),
    Card::minor(39, "Three of Cups", Suit::Cups),
    Card::minor(40, "Four of Cups", Suit::Cups),
    Card::minor(41, "Five of Cups", Suit::Cups),
    Card::minor(42, "Six of Cups", Suit::Cups),
    Card::minor(43, "Seven of Cups", Suit::Cups),
    Card::minor(44, "Eight of Cups", Suit::Cups),
    Card::minor(45, "Nine of Cups", Suit::Cups),
    Card::minor(46, "Ten of Cups", Suit::Cups),
    Card::minor(47, "Page of Cups", Suit::Cups),
    Card::minor(48, "Knight of Cups", Suit::Cups),
    Card::minor(49, "Queen of Cups", Suit::Cups),
    Card::minor(50, "King of Cups", Suit::Cups),
    // Swords
    Card::minor(51, "Ace of Swords", Suit::Swords),
    Card::minor(52, "Two of Swords", Suit::Swords),
    Card::minor(53, "Three of Swords", Suit::Swords),
    Card::minor(54, "Four of Swords", Suit::Swords),
    Card::minor(55, "Five of Swords", Suit::Swords),
    Card::minor(56, "Six of Swords", Suit::Swords),
    Card::minor(57, "Seven of Swords", Suit::Swords),
    Card::minor(58, "Eight of Swords", Suit::Swords),
    Card::minor(59, "Nine of Swords", Suit::Swords),
    Card::minor(60, "Ten of Swords", Suit::Swords),
    Card::minor(61, "Page of Swords", Suit::Swords),
    Card::minor(62, "Knight of Swords", Suit::Swords),
    Card::minor(63, "Queen of Swords", Suit::Swords),
    Card::minor(64, "King of Swords", Suit::Swords),
    // Pentacles
    Card::minor(65, "Ace of Pentacles", Suit::Pentacles),
    Card::minor(66, "Two of Pentacles", Suit::Pentacles),
    Card::minor(67, "Three of Pentacles", Suit::Pentacles),
    Card::minor(68, "Four of Pentacles", Suit::Pentacles),
    Card::minor(69, "Five of Pentacles", Suit::Pentacles),
    Card::minor(70, "Six of Pentacles", Suit::Pentacles),
    Card::minor(71, "Seven of Pentacles", Suit::Pentacles),
    Card::minor(72, "Eight of Pentacles", Suit::Pentacles),
    Card::minor(73, "Nine of Pentacles", Suit::Pentacles),
    Card::minor(74, "Ten of Pentacles", Suit::Pentacles),
    Card::minor(75, "Page of Pentacles", Suit::Pentacles),
    Card::minor(76, "Knight of Pentacles", Suit::Pentacles),
    Card::minor(77, "Queen of Pentacles", Suit::Pentacles),
    Card::minor(78, "King of Pentacles", Suit::Pentacles),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::Arcana;

    #[test]
    fn catalog_has_78_unique_cards() {
        let ids: HashSet<_> = TAROT_DECK.iter().map(|card| card.id).collect();
        let names: HashSet<_> = TAROT_DECK.iter().map(|card| card.name).collect();
        assert_eq!(TAROT_DECK.len(), 78);
        assert_eq!(ids.len(), 78);
        assert_eq!(names.len(), 78);
    }

    #[test]
    fn ids_are_sequential_from_one() {
        for (index, card) in TAROT_DECK.iter().enumerate() {
            assert_eq!(usize::from(card.id.0), index + 1, "{}", card.name);
        }
    }

    #[test]
    fn catalog_bounds_are_fool_and_king_of_pentacles() {
        assert_eq!(TAROT_DECK.first().map(|c| c.name), Some("The Fool"));
        assert_eq!(
            TAROT_DECK.last().map(|c| c.name),
            Some("King of Pentacles")
        );
    }

    #[test]
    fn arcana_split_is_22_major_and_14_per_suit() {
        let major = TAROT_DECK
            .iter()
            .filter(|card| card.arcana == Arcana::Major)
            .count();
        assert_eq!(major, 22);
        for suit in [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles] {
            let count = TAROT_DECK
                .iter()
                .filter(|card| card.arcana == Arcana::Minor(suit))
                .count();
            assert_eq!(count, 14, "{suit:?}");
        }
    }
}
