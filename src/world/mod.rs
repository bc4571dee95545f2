mod loader;
mod model;
mod registry;
mod validator;

pub use loader::{LoadError, WorldFormat, load_world_from_file, load_world_from_str};

pub use model::{Enemy, Object, Objective, ObjectiveKind, Room, World};
pub use registry::{Keyed, Registry};
pub use validator::{ValidationError, validate_world};
