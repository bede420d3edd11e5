use std::collections::HashSet;

use twentyone_engine::cards::Card;
use twentyone_engine::deck::Deck;

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_is_a_permutation_of_the_catalog() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();
    let mut dealt: Vec<Card> = (0..52).map(|_| deck.deal_card().unwrap()).collect();
    dealt.sort();
    let mut catalog = twentyone_engine::cards::full_deck();
    catalog.sort();
    assert_eq!(dealt, catalog, "shuffle must keep the same card multiset");
}

#[test]
fn remaining_tracks_dealt_cards() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    deck.deal_card().unwrap();
    deck.deal_card().unwrap();
    assert_eq!(deck.remaining(), 50);
}
