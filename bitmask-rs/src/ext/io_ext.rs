use std::io;
use std::io::Read;
use std::io::Write;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

/// A trait that reads length-prefixed names from any `Read` type.
pub(crate) trait NameReadExt: Read {
    /// Reads a `u8` length followed by that many bytes of UTF-8.
    fn read_name(&mut self) -> io::Result<String>;

    /// Reads either a `u32` or a `u64` little-endian value.
    fn read_value(&mut self, compact: bool) -> io::Result<u64>;
}

impl<T> NameReadExt for T
where
    T: Read,
{
    fn read_name(&mut self) -> io::Result<String> {
        let len = self.read_u8()? as usize;
        let mut buf = vec![0u8; len];
        self.read_exact(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "Invalid UTF-8"))
    }

    fn read_value(&mut self, compact: bool) -> io::Result<u64> {
        if compact {
            Ok(self.read_u32::<LittleEndian>()? as u64)
        } else {
            self.read_u64::<LittleEndian>()
        }
    }
}

/// A trait that writes length-prefixed names to any `Write` type.
pub(crate) trait NameWriteExt: Write {
    /// Writes a `u8` length followed by the name's bytes.
    fn write_name(&mut self, name: &str) -> io::Result<()>;

    /// Writes `value` as a `u32` when `compact` is set, otherwise as a `u64`.
    fn write_value(&mut self, value: u64, compact: bool) -> io::Result<()>;
}

impl<T> NameWriteExt for T
where
    T: Write,
{
    fn write_name(&mut self, name: &str) -> io::Result<()> {
        let len = u8::try_from(name.len()).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "Name longer than 255 bytes")
        })?;
        self.write_u8(len)?;
        self.write_all(name.as_bytes())
    }

    fn write_value(&mut self, value: u64, compact: bool) -> io::Result<()> {
        if compact {
            let value = u32::try_from(value)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Value exceeds u32"))?;
            self.write_u32::<LittleEndian>(value)
        } else {
            self.write_u64::<LittleEndian>(value)
        }
    }
}
