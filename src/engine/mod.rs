mod command;
mod encounter;
mod enemies;
mod items;
mod movement;
mod objective;
mod output;
mod render;
mod state;

pub use command::{Command, Verb, parse_command};

pub use encounter::{EncounterPolicy, roll_encounter};
pub use enemies::{handle_kill, try_handle_examine_enemy};
pub use items::{handle_examine, handle_inventory, handle_take};

pub use movement::handle_go;
pub use objective::{check_objective, objective_met};
pub use output::{Output, OutputBlock};
pub use render::render_room;

pub use state::{Ending, Inventory, Phase, Player};
