
/// Record encoding, decoding and fixture writing errors
#[derive(Debug)]
pub enum Error {
    ValueOutOfRange,
    InvalidRecordLength,
    PrematureEndOfInput,
    BufferOverflow,
    BufferUnderflow,
    Io(std::io::Error),
}

impl Error {
    fn descr(&self) -> &str {
        match self {
            Error::ValueOutOfRange => "value does not fit into a signed 4-byte record",
            Error::InvalidRecordLength => "record buffer is not exactly one record long",
            Error::PrematureEndOfInput => "premature end of input",
            Error::BufferOverflow => "encoding buffer overflow",
            Error::BufferUnderflow => "encoding buffer underflow",
            Error::Io(_) => "i/o error",
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{}: {}", self.descr(), e),
            _ => f.write_str(self.descr()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
