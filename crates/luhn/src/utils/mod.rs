mod digits;
mod logs;
mod rng;

pub use self::digits::is_digit_string;
pub use self::logs::init_logger;
pub use self::rng::{ProcessDigitSource, SeededDigitSource};
