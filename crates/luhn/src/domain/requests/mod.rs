mod generate;

pub use self::generate::GenerateRequest;
