use core::fmt;

/// A byte rendered as exactly eight `'0'`/`'1'` digits, most significant first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binary8(pub u8);

impl Binary8 {
    /// ASCII digits of the byte.
    pub fn digits(&self) -> [u8; 8] {
        let mut out = [b'0'; 8];
        for (i, digit) in out.iter_mut().enumerate() {
            if self.0 & (1 << (7 - i)) != 0 {
                *digit = b'1';
            }
        }
        out
    }
}

impl fmt::Display for Binary8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            fmt::Write::write_char(f, digit as char)?;
        }
        Ok(())
    }
}
