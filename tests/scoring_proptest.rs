/// Property-based tests for hand scoring and dealing using proptest.
use bjarcade::{Card, Deck, Hand, Point, Suit};
use proptest::prelude::*;
use std::collections::HashSet;

fn card_strategy() -> impl Strategy<Value = Card> {
    (1u8..=13, 0usize..4).prop_map(|(rank, suit)| Card::new(Suit::ALL[suit], rank))
}

fn cards_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), 0..=8)
}

// Every ace counted as 1, faces as 10.
fn hard_total(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.rank.min(10))).sum()
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for card in cards {
        hand.add_card(*card);
    }
    hand
}

proptest! {
    #[test]
    fn score_is_best_total_not_over_21(cards in cards_strategy()) {
        let score = u32::from(hand_of(&cards).score());
        let hard = hard_total(&cards);
        let aces = u32::try_from(cards.iter().filter(|c| c.is_ace()).count()).unwrap();

        if hard > 21 {
            prop_assert_eq!(score, hard, "no ace can help a hard bust");
        } else {
            prop_assert!(score <= 21);
            prop_assert!(score >= hard);
            prop_assert_eq!((score - hard) % 10, 0);
            // Only one ace can ever count as 11.
            prop_assert!(score - hard <= 10 * aces.min(1));
            if aces > 0 && hard + 10 <= 21 {
                prop_assert_eq!(score, hard + 10);
            }
        }
    }

    #[test]
    fn face_down_cards_do_not_count(cards in cards_strategy(), hidden in card_strategy()) {
        let visible = hand_of(&cards).score();
        let mut hand = hand_of(&cards);
        let mut hidden = hidden;
        hidden.face_down = true;
        hand.add_card(hidden);

        prop_assert_eq!(hand.score(), visible);

        hand.reveal();
        let mut all = cards.clone();
        hidden.face_down = false;
        all.push(hidden);
        prop_assert_eq!(hand.score(), hand_of(&all).score());
    }

    #[test]
    fn any_seed_deals_a_full_distinct_deck(seed in any::<u64>()) {
        let mut deck = Deck::new(seed, Point::new(500.0, -120.0));
        let mut hand = Hand::new();
        let mut seen = HashSet::new();

        while let Some(card) = deck.deal_card(&mut hand, Point::new(0.0, 0.0), false) {
            prop_assert!(seen.insert((card.suit, card.rank)));
        }

        prop_assert_eq!(seen.len(), 52);
        prop_assert_eq!(deck.len(), 52);
    }
}
