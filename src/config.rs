use crate::ship::ShipDef;

pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("carrier", 5),
    ShipDef::new("battleship", 4),
    ShipDef::new("cruiser", 3),
    ShipDef::new("submarine", 3),
    ShipDef::new("destroyer", 2),
];

/// Largest board, in cells, accepted by `BoardSize::try_new`.
pub const MAX_BOARD_CELLS: usize = 1 << 16;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Environment variable read by `init_logging` for the log level.
pub const LOG_ENV_VAR: &str = "BATTLESHIP_LOG";

/// Look up a standard fleet definition by name.
pub fn ship_def(name: &str) -> Option<ShipDef> {
    FLEET.iter().copied().find(|def| def.name() == name)
}
