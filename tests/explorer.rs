use std::io::Cursor;

use detective_quest::engine::{END_OF_EXPLORATION, QUIT_TEXT};
use detective_quest::world::Room;
use detective_quest::{EndReason, Explorer, Outcome, mansion, run};

/// Feed `input` to a fresh explorer over the mansion; returns where it stopped and the transcript.
fn play(input: &str) -> (String, EndReason, String) {
    play_bytes(input.as_bytes())
}

fn play_bytes(input: &[u8]) -> (String, EndReason, String) {
    let hall = mansion();
    let mut reader = Cursor::new(input.to_vec());
    let mut transcript = Vec::new();
    let Outcome { room, reason } = run(Explorer::new(&hall), &mut reader, &mut transcript).unwrap();
    (
        room.to_string(),
        reason,
        String::from_utf8(transcript).unwrap(),
    )
}

#[test]
fn left_left_left_reaches_library() {
    let (room, reason, transcript) = play("e\ne\ne\n");
    assert_eq!(room, "Biblioteca");
    assert_eq!(reason, EndReason::LeafReached);
    assert!(transcript.contains("VOCÊ ESTÁ EM: Biblioteca"));
    assert!(transcript.contains(END_OF_EXPLORATION));
}

#[test]
fn leaf_stops_reading_input() {
    // "s" after the leaf is never consumed
    let (room, reason, transcript) = play("e\ne\ne\ns\n");
    assert_eq!(room, "Biblioteca");
    assert_eq!(reason, EndReason::LeafReached);
    assert!(!transcript.contains(QUIT_TEXT));
}

#[test]
fn right_right_right_hits_the_garden_wall() {
    let (room, reason, transcript) = play("d\nd\nd\n");
    assert_eq!(room, "Jardim");
    assert_eq!(reason, EndReason::InputClosed);
    assert!(transcript.contains("--- ERRO: Não há caminho à direita neste cômodo! ---"));
}

#[test]
fn no_left_door_in_the_master_bedroom() {
    let (room, reason, transcript) = play("e\ne\nd\ne\n");
    assert_eq!(room, "Quarto Principal");
    assert_eq!(reason, EndReason::InputClosed);
    assert!(transcript.contains("--- ERRO: Não há caminho à esquerda neste cômodo! ---"));
}

#[test]
fn non_utf8_line_is_an_invalid_choice() {
    // 0xE9 is a Latin-1 "é"
    let (room, reason, transcript) = play_bytes(b"\xE9\ns\n");
    assert_eq!(room, "Hall de Entrada");
    assert_eq!(reason, EndReason::Quit);
    assert_eq!(transcript.matches("ESCOLHA INVÁLIDA").count(), 1);
    assert!(transcript.contains(QUIT_TEXT));
}

#[test]
fn garden_leads_to_the_pool() {
    let (room, reason, transcript) = play("d\nd\nd\ne\n");
    assert_eq!(room, "Piscina");
    assert_eq!(reason, EndReason::LeafReached);
    assert!(transcript.contains("VOCÊ ESTÁ EM: Piscina"));
}

#[test]
fn quit_in_the_garden() {
    let (room, reason, transcript) = play("d\nd\ns\n");
    assert_eq!(room, "Jardim");
    assert_eq!(reason, EndReason::Quit);
    assert!(transcript.contains(QUIT_TEXT));
    assert!(!transcript.contains(END_OF_EXPLORATION));
}

#[test]
fn uppercase_and_noise() {
    let (room, reason, transcript) = play("E\n\n   \nx\nE\nD\nD\n");
    assert_eq!(room, "Banheiro Privativo");
    assert_eq!(reason, EndReason::LeafReached);
    assert_eq!(transcript.matches("ESCOLHA INVÁLIDA").count(), 1);
}

#[test]
fn blank_lines_print_nothing() {
    let (_, _, with_blanks) = play("\n\n\ne\ns\n");
    let (_, _, without) = play("e\ns\n");
    assert_eq!(with_blanks, without);
}

#[test]
fn end_of_input_is_a_normal_stop() {
    let (room, reason, transcript) = play("");
    assert_eq!(room, "Hall de Entrada");
    assert_eq!(reason, EndReason::InputClosed);
    assert!(transcript.contains("  [e] Esquerda -> Sala de Estar"));
    assert!(transcript.contains("  [d] Direita -> Cozinha"));
    assert!(transcript.contains("Sua escolha (e/d/s): "));
}

#[test]
fn every_leaf_of_a_custom_tree_ends_the_run() {
    let root = Room::new("A")
        .with_left(Room::new("B"))
        .with_right(Room::new("C").with_right(Room::new("D")));

    for (input, leaf) in [("e\n", "B"), ("d\nd\n", "D")] {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut sink = Vec::new();
        let outcome = run(Explorer::new(&root), &mut reader, &mut sink).unwrap();
        assert_eq!(outcome.room, leaf);
        assert_eq!(outcome.reason, EndReason::LeafReached);
    }
}
