//! Output targets shared by the allocating and caller-buffer code paths.

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Returned when a sink runs out of room.
#[derive(Debug)]
pub(crate) struct Overflow;

pub(crate) trait Sink {
    fn push_str(&mut self, s: &str) -> Result<(), Overflow>;

    fn push_char(&mut self, c: char) -> Result<(), Overflow> {
        let mut utf8 = [0u8; 4];
        self.push_str(c.encode_utf8(&mut utf8))
    }

    /// Writes `\` followed by an ASCII escape letter.
    fn push_escape(&mut self, letter: u8) -> Result<(), Overflow> {
        self.push_char('\\')?;
        self.push_char(char::from(letter))
    }
}

#[cfg(feature = "alloc")]
impl Sink for String {
    fn push_str(&mut self, s: &str) -> Result<(), Overflow> {
        String::push_str(self, s);
        Ok(())
    }

    fn push_char(&mut self, c: char) -> Result<(), Overflow> {
        self.push(c);
        Ok(())
    }
}

/// A cursor-based writer into a caller-provided byte buffer.
pub(crate) struct SliceSink<'buf> {
    buf: &'buf mut [u8],
    pos: usize,
}

impl<'buf> SliceSink<'buf> {
    pub(crate) fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes written so far.
    pub(crate) fn written(&self) -> usize {
        self.pos
    }
}

impl Sink for SliceSink<'_> {
    fn push_str(&mut self, s: &str) -> Result<(), Overflow> {
        let data = s.as_bytes();
        if self.pos + data.len() > self.buf.len() {
            return Err(Overflow);
        }
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }
}
