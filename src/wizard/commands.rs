//! Slash commands available at every prompt of the form

/// Form command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Back,
    Reset,
    History { limit: Option<usize> },
    Clear,
    Exit,
    Unknown { input: String },
}

/// Parse input string into a command
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Unknown { input: input.to_string() };
    };

    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.is_empty() {
        return Command::Unknown { input: input.to_string() };
    }

    match parts[0].to_lowercase().as_str() {
        "help" | "h" => Command::Help,
        "back" | "b" => Command::Back,
        "reset" | "new" => Command::Reset,
        "history" => {
            let limit = parts.get(1).and_then(|s| s.parse().ok());
            Command::History { limit }
        }
        "clear" | "cls" => Command::Clear,
        "exit" | "quit" | "q" => Command::Exit,
        _ => Command::Unknown { input: input.to_string() },
    }
}

/// Check if input is a command (starts with /)
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// Command names and descriptions for the help screen
pub fn help_entries() -> [(&'static str, &'static str); 6] {
    [
        ("/help, /h", "Show this help message"),
        ("/back, /b", "Go back one step"),
        ("/reset, /new", "Clear all fields and start a new prediction"),
        ("/history [n]", "Show the last n predictions (default: 10)"),
        ("/clear, /cls", "Clear screen"),
        ("/exit, /quit, /q", "Exit"),
    ]
}
