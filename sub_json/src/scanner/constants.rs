pub const OPEN_BRACE: u8 = b'{';
pub const CLOSE_BRACE: u8 = b'}';
pub const OPEN_SQUARE_BRACKET: u8 = b'[';
pub const CLOSE_SQUARE_BRACKET: u8 = b']';

pub const DOUBLE_QUOTE: u8 = b'"';
pub const ESCAPE: u8 = b'\\';
pub const COMMA: u8 = b',';
pub const COLON: u8 = b':';

/// Closing delimiter for an opening `{` or `[`.
pub fn closing_bracket(open: u8) -> Option<u8> {
    match open {
        OPEN_BRACE => Some(CLOSE_BRACE),
        OPEN_SQUARE_BRACKET => Some(CLOSE_SQUARE_BRACKET),
        _ => None,
    }
}

/// Bytes that may continue a bare scalar: numbers, and the letters needed for
/// `true`, `false` and `null`. Other bare words in that range pass through too.
pub fn is_scalar_byte(b: u8) -> bool {
    matches!(b, b'-'..=b'9' | b'a'..=b'u' | b'+' | b'E')
}
