mod calculator;
mod generator;
mod luhn;
mod validator;

pub use self::calculator::calculate;
pub use self::generator::LuhnGenerator;
pub use self::luhn::LuhnService;
pub use self::validator::{is_valid, validate};
