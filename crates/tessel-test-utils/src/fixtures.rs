//! Small reference grids.
//!
//! - [`BLINKER_HORIZONTAL`] / [`BLINKER_VERTICAL`]: the two phases of the
//!   period-2 blinker on a 5x5 grid.
//! - [`BLOCK`]: a 2x2 still life centred on a 4x4 grid.

pub const BLINKER_HORIZONTAL: &str = "
    .....
    .....
    .###.
    .....
    .....
";

pub const BLINKER_VERTICAL: &str = "
    .....
    ..#..
    ..#..
    ..#..
    .....
";

pub const BLOCK: &str = "
    ....
    .##.
    .##.
    ....
";
