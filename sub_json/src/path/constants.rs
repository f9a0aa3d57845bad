pub const PERIOD: char = '.';
pub const OPEN_SQUARE_BRACKET: char = '[';
pub const CLOSE_SQUARE_BRACKET: char = ']';
