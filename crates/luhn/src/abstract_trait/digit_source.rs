use std::sync::Arc;

pub type DynDigitSource = Arc<dyn DigitSourceTrait + Send + Sync>;

/// Supplies uniformly distributed decimal digits in `0..=9`.
pub trait DigitSourceTrait {
    fn next_digit(&self) -> u8;

    fn fill_digits(&self, out: &mut String, count: usize) {
        out.reserve(count);
        for _ in 0..count {
            out.push(char::from(b'0' + self.next_digit()));
        }
    }
}
