pub mod engine;
pub mod world;

use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use engine::{
    Command, EncounterPolicy, Output, Phase, Player, check_objective, handle_examine, handle_go,
    handle_inventory, handle_kill, handle_take, parse_command, render_room,
};
use world::World;

pub use engine::Ending;
pub use world::{LoadError, WorldFormat, load_world_from_file, load_world_from_str, validate_world};

/// Knobs the session needs that do not come from the world file.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub encounter_policy: EncounterPolicy,
    /// Fixed RNG seed for reproducible encounters; entropy when `None`.
    pub seed: Option<u64>,
}

/// One play session: the world, the player and the dice, owned together and
/// handed to each resolver explicitly.
pub struct Game {
    world: World,
    player: Player,
    rng: StdRng,
    config: GameConfig,
}

impl Game {
    pub fn new(world: World, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let player = Player::new(world.start_room.clone());

        Game {
            world,
            player,
            rng,
            config,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn phase(&self) -> &Phase {
        self.player.phase()
    }

    pub fn is_over(&self) -> bool {
        self.player.is_game_over()
    }

    /// The description shown before the first prompt.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        render_room(
            &mut out,
            &self.world,
            &self.player.current_room,
            &self.player.inventory,
        );
        out
    }

    /// Process a single line of player input.
    pub fn step(&mut self, input: &str) -> Output {
        let mut out = Output::new();
        if self.is_over() {
            return out;
        }

        let command = parse_command(input);
        debug!(?command, room = %self.player.current_room, "turn");

        match &command {
            Command::Quit => self.player.end(Ending::Quit),
            Command::Look => render_room(
                &mut out,
                &self.world,
                &self.player.current_room,
                &self.player.inventory,
            ),
            Command::LookAt(target) => handle_examine(
                &mut out,
                &self.world,
                &self.player.current_room,
                &self.player.inventory,
                target,
            ),
            Command::Take(target) => {
                handle_take(
                    &mut out,
                    &self.world,
                    &self.player.current_room,
                    &mut self.player.inventory,
                    target,
                );
            }
            Command::Go(direction) => {
                handle_go(
                    &mut out,
                    &self.world,
                    &mut self.player,
                    direction,
                    self.config.encounter_policy,
                    &mut self.rng,
                );
            }
            Command::Kill(target) => {
                handle_kill(&mut out, &mut self.world, &self.player.current_room, target);
            }
            Command::Inventory => handle_inventory(&mut out, &self.player.inventory),
            Command::Incomplete(verb) => out.say(verb.prompt()),
            Command::Invalid => out.say("Invalid command. Try again."),
        }

        if command.mutates() && !self.is_over() {
            check_objective(&mut out, &self.world, &mut self.player);
        }

        // a winning take ends the game before the inventory is shown
        if matches!(command, Command::Take(_)) && !self.is_over() {
            handle_inventory(&mut out, &self.player.inventory);
        }

        if let Phase::Terminated(ending) = self.player.phase() {
            info!(?ending, "game over");
            out.event("Game Over");
        }

        out
    }

    /// Blocking terminal loop: prompt, read a line, step, print, until the game
    /// ends. Running out of input counts as `quit`. Broken-world messages go to
    /// `errors`.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
        errors: &mut E,
    ) -> io::Result<()> {
        self.initialize().write_to(output, errors)?;

        while !self.is_over() {
            write!(output, ">")?;
            output.flush()?;

            let mut line = String::new();
            let out = if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                self.step("quit")
            } else {
                self.step(&line)
            };
            out.write_to(output, errors)?;
        }

        errors.flush()?;
        output.flush()
    }
}
