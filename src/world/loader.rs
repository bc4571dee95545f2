use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use super::model::{Enemy, Object, Objective, ObjectiveKind, Room, World};
use super::registry::Registry;

/// Why a world file could not be turned into a [`World`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read world file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("world file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("world file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}

/// On-disk encoding of a world file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WorldFormat {
    Json,
    Toml,
}

impl WorldFormat {
    /// `.toml` files are TOML, everything else is treated as the JSON map format.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => WorldFormat::Toml,
            _ => WorldFormat::Json,
        }
    }
}

////////////////////////
/// DOCUMENT STRUCTS ///
////////////////////////

// Field names follow the JSON map format; the aliases are for TOML authors,
// where `[[room]]` reads better than `[[rooms]]`.

#[derive(Deserialize)]
struct WorldFile {
    #[serde(default)]
    player: PlayerConfig,
    #[serde(default, alias = "room")]
    rooms: Vec<RoomConfig>,
    #[serde(default, alias = "object")]
    objects: Vec<ObjectConfig>,
    #[serde(default, alias = "enemy")]
    enemies: Vec<EnemyConfig>,
    #[serde(default)]
    objective: Option<ObjectiveConfig>,
}

#[derive(Deserialize, Default)]
struct PlayerConfig {
    #[serde(default, alias = "initial_room")]
    initialroom: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    #[serde(default, alias = "description")]
    desc: String,
    #[serde(default)]
    exits: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize)]
struct ObjectConfig {
    id: String,
    #[serde(default, alias = "description")]
    desc: String,
    #[serde(default, alias = "initial_room")]
    initialroom: String,
}

#[derive(Deserialize)]
struct EnemyConfig {
    id: String,
    #[serde(default, alias = "description")]
    desc: String,
    #[serde(default, alias = "initial_room")]
    initialroom: String,
    #[serde(default)]
    aggressiveness: i64,
    #[serde(default, alias = "intro_message")]
    intro_msg: String,
    #[serde(default, alias = "kill_msg")]
    successful_kill_msg: Option<String>,
}

#[derive(Deserialize)]
struct ObjectiveConfig {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default, alias = "targets")]
    what: Vec<String>,
}

////////////////////
/// LOADER API   ///
////////////////////

/// Load a world from disk, picking the codec from the file extension unless
/// `format` overrides it.
pub fn load_world_from_file(path: &Path, format: Option<WorldFormat>) -> Result<World, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = format.unwrap_or_else(|| WorldFormat::from_path(path));
    debug!(path = %path.display(), ?format, "loading world file");
    load_world_from_str(&contents, format)
}

pub fn load_world_from_str(contents: &str, format: WorldFormat) -> Result<World, LoadError> {
    let world_file: WorldFile = match format {
        WorldFormat::Json => serde_json::from_str(contents)?,
        WorldFormat::Toml => toml::from_str(contents)?,
    };
    build_world(world_file)
}

fn build_world(world_file: WorldFile) -> Result<World, LoadError> {
    let mut rooms: HashMap<String, Room> = HashMap::new();
    for rc in world_file.rooms {
        if rooms.contains_key(&rc.id) {
            return Err(LoadError::DuplicateId {
                kind: "room",
                id: rc.id,
            });
        }
        rooms.insert(
            rc.id.clone(),
            Room {
                id: rc.id,
                desc: normalize_multiline_desc(&rc.desc),
                exits: rc.exits,
            },
        );
    }

    let mut objects = Registry::new();
    for oc in world_file.objects {
        let object = Object {
            id: oc.id,
            desc: normalize_multiline_desc(&oc.desc),
            initial_room: oc.initialroom,
        };
        objects.insert(object).map_err(|dup| LoadError::DuplicateId {
            kind: "object",
            id: dup.id,
        })?;
    }

    let mut enemies = Registry::new();
    for ec in world_file.enemies {
        let enemy = Enemy {
            aggressiveness: ec.aggressiveness.clamp(i64::from(i16::MIN), 100) as i16,
            id: ec.id,
            desc: normalize_multiline_desc(&ec.desc),
            initial_room: ec.initialroom,
            intro_msg: normalize_multiline_desc(&ec.intro_msg),
            kill_msg: ec.successful_kill_msg.map(|s| normalize_multiline_desc(&s)),
        };
        enemies.insert(enemy).map_err(|dup| LoadError::DuplicateId {
            kind: "enemy",
            id: dup.id,
        })?;
    }

    let objective = world_file
        .objective
        .and_then(|oc| match ObjectiveKind::parse(&oc.kind) {
            Some(kind) => Some(Objective {
                kind,
                targets: oc.what,
            }),
            None => {
                warn!(kind = %oc.kind, "unknown objective type, objective disabled");
                None
            }
        });

    debug!(
        rooms = rooms.len(),
        objects = objects.len(),
        enemies = enemies.len(),
        "world loaded"
    );

    Ok(World {
        start_room: world_file.player.initialroom,
        rooms,
        objects,
        enemies,
        objective,
    })
}

/// Fold author-side line wrapping out of a description.
///
/// A single newline becomes a space, one blank line becomes a newline and two
/// or more blank lines become a paragraph break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut blanks = 0usize;

    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            blanks += 1;
            continue;
        }
        if !result.is_empty() {
            result.push_str(match blanks {
                0 => " ",
                1 => "\n",
                _ => "\n\n",
            });
        }
        result.push_str(line);
        blanks = 0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP_JSON: &str = r#"{
        "rooms": [
            {"id": "cell", "desc": "A damp cell.", "exits": {"north": "corridor"}},
            {"id": "corridor", "desc": "A long corridor."}
        ],
        "objects": [
            {"id": "spoon", "desc": "A bent spoon.", "initialroom": "cell"}
        ],
        "enemies": [
            {"id": "rat", "desc": "A fat rat.", "aggressiveness": 250,
             "initialroom": "corridor", "intro_msg": "A rat squeaks.",
             "successful_kill_msg": "squeals one last time."}
        ],
        "player": {"initialroom": "cell"},
        "objective": {"type": "kill", "what": ["rat"]}
    }"#;

    const MAP_TOML: &str = r#"
        [player]
        initial_room = "cell"

        [[room]]
        id = "cell"
        description = """
            A damp
            cell.
        """
        exits = { north = "corridor" }

        [[object]]
        id = "spoon"
        initial_room = "cell"

        [objective]
        type = "collect"
        targets = ["spoon"]
    "#;

    #[test]
    fn loads_json_map_format() {
        let world = load_world_from_str(MAP_JSON, WorldFormat::Json).unwrap();

        assert_eq!(world.start_room, "cell");
        assert_eq!(world.room("cell").unwrap().exit("north"), Some("corridor"));
        assert!(world.room("corridor").unwrap().exits.is_none());

        let rat = world.enemy("rat").unwrap();
        assert_eq!(rat.aggressiveness, 100);
        assert_eq!(rat.kill_msg.as_deref(), Some("squeals one last time."));

        let objective = world.objective.unwrap();
        assert_eq!(objective.kind, ObjectiveKind::Kill);
        assert_eq!(objective.targets, vec!["rat"]);
    }

    #[test]
    fn loads_toml_with_aliases() {
        let world = load_world_from_str(MAP_TOML, WorldFormat::Toml).unwrap();

        assert_eq!(world.start_room, "cell");
        assert_eq!(world.room("cell").unwrap().desc, "A damp cell.");
        assert_eq!(world.object("spoon").unwrap().initial_room, "cell");
        assert!(world.object("spoon").unwrap().desc.is_empty());
        assert_eq!(world.objective.unwrap().kind, ObjectiveKind::Collect);
    }

    #[test]
    fn duplicate_enemy_is_fatal() {
        let doc = r#"{"enemies": [{"id": "rat"}, {"id": "rat"}]}"#;
        let err = load_world_from_str(doc, WorldFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId { kind: "enemy", .. }));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            load_world_from_str("{ not json", WorldFormat::Json),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(
            load_world_from_str("[[room]\nid=", WorldFormat::Toml),
            Err(LoadError::Toml(_))
        ));
    }

    #[test]
    fn unknown_objective_type_disables_objective() {
        let doc = r#"{"objective": {"type": "dance", "what": []}}"#;
        let world = load_world_from_str(doc, WorldFormat::Json).unwrap();
        assert!(world.objective.is_none());
    }

    #[test]
    fn objective_without_type_is_disabled_not_fatal() {
        let doc = r#"{"rooms": [{"id": "a"}], "objective": {"what": ["a"]}}"#;
        let world = load_world_from_str(doc, WorldFormat::Json).unwrap();
        assert!(world.room("a").is_some());
        assert!(world.objective.is_none());
    }

    #[test]
    fn negative_aggressiveness_is_kept() {
        let doc = r#"{"enemies": [{"id": "imp", "aggressiveness": -5}]}"#;
        let world = load_world_from_str(doc, WorldFormat::Json).unwrap();
        let imp = world.enemy("imp").unwrap();
        assert_eq!(imp.aggressiveness, -5);
        assert!(!imp.is_peaceful());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_world_from_file(Path::new("/no/such/world.json"), None).unwrap_err();
        assert!(err.to_string().contains("/no/such/world.json"));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(WorldFormat::from_path(Path::new("a.TOML")), WorldFormat::Toml);
        assert_eq!(WorldFormat::from_path(Path::new("a.json")), WorldFormat::Json);
        assert_eq!(WorldFormat::from_path(Path::new("map")), WorldFormat::Json);
    }

    #[test]
    fn normalize_folds_wrapping() {
        assert_eq!(normalize_multiline_desc("  a\n  b\n\n c\n\n\n d "), "a b\nc\n\nd");
        assert_eq!(normalize_multiline_desc(""), "");
    }
}
