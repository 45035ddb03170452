/// A discrete player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl Command {
    /// Horizontal shift for movement commands.
    pub fn dx(self) -> Option<i32> {
        match self {
            Command::MoveLeft => Some(-1),
            Command::MoveRight => Some(1),
            Command::SoftDrop | Command::Rotate => None,
        }
    }
}
