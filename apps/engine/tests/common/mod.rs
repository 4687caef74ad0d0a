//! Shared setup for engine integration tests.
#![allow(dead_code)]

use engine::domain::try_parse_cards;
use engine::Card;

#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}
