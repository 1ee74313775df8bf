//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{AssetOptions, Card, GameState, Hand, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let assets = AssetOptions::default();

    let mut state = GameState::new(&mut rng);

    loop {
        print_table(&state, &assets);
        println!("{}", format_actions(&state));

        let action = prompt_line("Action: ");
        let result = match action.as_str() {
            "h" | "hit" => state.hit(),
            "s" | "stand" => state.stand(),
            "r" | "reset" => Ok(GameState::new(&mut rng)),
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(next) => state = next,
            Err(err) => println!("Action error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState, assets: &AssetOptions) {
    println!("\nThere are {} cards left in deck", state.cards_remaining());

    println!(
        "\nPlayer: {} ({})",
        format_hand(state.player_hand()),
        format_score(state.player_hand())
    );

    let dealer_view = state
        .dealer_view()
        .iter()
        .map(|slot| slot.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    if state.visible_dealer_score().is_some() {
        println!(
            "Dealer: {dealer_view} ({})",
            format_score(state.dealer_hand())
        );
    } else {
        println!("Dealer: {dealer_view}");
    }

    let images = state
        .dealer_view()
        .iter()
        .map(|slot| assets.slot_path(slot.as_ref()))
        .collect::<Vec<_>>();
    log::debug!("dealer images: {images:?}");

    println!("\n{}", state.status());
}

fn format_actions(state: &GameState) -> String {
    let allowed = state.is_player_turn();
    let parts = [
        format_action("hit", "h", allowed),
        format_action("stand", "s", allowed),
        format_action("reset", "r", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_score(hand: &Hand) -> String {
    if hand.is_soft() {
        format!("soft {}", hand.score())
    } else {
        format!("score {}", hand.score())
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => other.number().to_string(),
    };

    let colored_rank = if card.rank.is_face() || card.is_ace() {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}
