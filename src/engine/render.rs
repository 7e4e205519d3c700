use crate::engine::output::Output;
use crate::world::Room;

pub const PROMPT: &str = "Sua escolha (e/d/s): ";
pub const END_OF_EXPLORATION: &str = "-- FIM DA EXPLORAÇÃO --";
pub const LEAF_TEXT: &str = "Você encontrou um cômodo sem mais caminhos. A exploração termina aqui.";
pub const QUIT_TEXT: &str = "Saindo do Detective Quest. Volte sempre!";

/// Renders one iteration of the explorer: the room, then either the end of
/// the exploration (leaf) or its exits and the prompt.
pub fn render_room(out: &mut Output, room: &Room) {
    out.title(room.name());

    if room.is_leaf() {
        out.event(END_OF_EXPLORATION);
        out.say(LEAF_TEXT);
        return;
    }

    let mut exits: Vec<String> = room
        .exits()
        .map(|(dir, child)| format!("  [{}] {} -> {}", dir.key(), dir.label(), child.name()))
        .collect();
    exits.push("  [s] Sair do jogo".to_string());

    out.set_exits(exits);
    out.prompt(PROMPT);
}
