use crate::{
    domain::{requests::GenerateRequest, responses::CheckDigitResponse},
    errors::LuhnError,
};
use std::sync::Arc;

pub type DynLuhnService = Arc<dyn LuhnServiceTrait + Send + Sync>;

pub trait LuhnServiceTrait {
    fn validate(&self, digits: &str) -> Result<(), LuhnError>;
    fn calculate(&self, number: &str) -> Result<CheckDigitResponse, LuhnError>;
    fn generate(&self, length: usize) -> Result<String, LuhnError>;
    fn generate_with_prefix(&self, prefix: &str, length: usize) -> Result<String, LuhnError>;
    fn generate_from_request(&self, req: &GenerateRequest) -> Result<String, LuhnError>;
}
