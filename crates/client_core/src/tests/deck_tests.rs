use super::*;

#[test]
fn mock_deck_has_three_candidates_with_unique_ids() {
    let deck = CandidateDeck::mock();
    assert_eq!(deck.len(), 3);
    assert_ne!(deck.get(0).id, deck.get(1).id);
    assert_ne!(deck.get(1).id, deck.get(2).id);
    assert_eq!(deck.get(0).name, "John Doe");
}

#[test]
fn next_index_wraps_around_the_deck() {
    let deck = CandidateDeck::mock();
    assert_eq!(deck.next_index(0), 1);
    assert_eq!(deck.next_index(2), 0);
    assert_eq!(deck.peek_next(2).name, deck.get(0).name);
}

#[test]
#[should_panic(expected = "non-empty")]
fn empty_deck_is_rejected() {
    let _ = CandidateDeck::new(Vec::new());
}
