/// Verbs that need an argument before they can do anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Take,
    Go,
    Kill,
}

/// One line of player input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// `look` / `look around`
    Look,
    LookAt(String),
    Take(String),
    Go(String),
    Kill(String),
    Inventory,
    /// A known verb typed without its argument.
    Incomplete(Verb),
    Invalid,
}

impl Verb {
    pub fn prompt(self) -> &'static str {
        match self {
            Verb::Take => "What do you want to take?",
            Verb::Go => "Where are you going?",
            Verb::Kill => "What do you want to kill?",
        }
    }
}

impl Command {
    /// Whether this command can change the world or the player, and so needs an
    /// objective check afterwards.
    pub fn mutates(&self) -> bool {
        matches!(self, Command::Take(_) | Command::Go(_) | Command::Kill(_))
    }
}

/// Verbs are matched exactly and case-sensitively against the start of the
/// line. The argument is whatever follows the single space after the verb.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);

    match line {
        "quit" => return Command::Quit,
        "look" | "look around" => return Command::Look,
        "inventory" | "i" => return Command::Inventory,
        _ => {}
    }

    if let Some(arg) = argument_after(line, "look") {
        return Command::LookAt(arg.to_string());
    }

    let verbs: [(&str, Verb); 3] = [("take", Verb::Take), ("go", Verb::Go), ("kill", Verb::Kill)];
    for (word, verb) in verbs {
        let Some(arg) = argument_after(line, word) else {
            continue;
        };
        if arg.is_empty() {
            return Command::Incomplete(verb);
        }
        let arg = arg.to_string();
        return match verb {
            Verb::Take => Command::Take(arg),
            Verb::Go => Command::Go(arg),
            Verb::Kill => Command::Kill(arg),
        };
    }

    Command::Invalid
}

/// `Some("")` for the bare verb, `Some(arg)` for `"verb arg"`, `None` when the
/// line starts with some other word ("goat" is not "go").
fn argument_after<'a>(line: &'a str, verb: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(verb)?;
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix(' ')
}
