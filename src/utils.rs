pub mod format_decimal;
pub use format_decimal::{format_decimal, round_to};

pub mod format_square_feet;
pub use format_square_feet::{format_signed_square_feet, parse_reference_number};

pub mod format_thousands;
pub use format_thousands::format_thousands;

pub mod normalize_text;
pub use normalize_text::{collapse_whitespace, normalize_hyphens};
