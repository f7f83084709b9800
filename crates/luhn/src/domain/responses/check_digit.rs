use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckDigitResponse {
    pub check_digit: char,
    pub full_number: String,
}
