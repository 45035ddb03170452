use std::time::Duration;

pub const BOARD_WIDTH: usize = 12;
pub const BOARD_HEIGHT: usize = 20;

// Upper bound keeps the board drawable in a sane terminal
pub const MAX_BOARD_SIDE: usize = 64;

pub const DROP_INTERVAL: Duration = Duration::from_millis(1000);
pub const FRAME_PERIOD: Duration = Duration::from_millis(16);

// Letter pieces spawned before random ones unless `--no-spell` is given
pub const DEFAULT_WORD: &str = "STACKMOXIE";
