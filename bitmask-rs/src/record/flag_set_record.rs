use std::io::{self, Cursor, Read, Write};

use base64::prelude::*;
use tracing::debug;

use crate::{
    error::{FlagSetError, Result},
    ext::io_ext::{NameReadExt, NameWriteExt},
    flag_set::FlagSet,
    record::{enumeration_registry::EnumerationRegistry, record_flags::RecordFlags},
};

/// Marker used in digests for flag sets without an enumeration.
const UNBOUND_DIGEST: &str = "-";

/// A flag set reduced to its enumeration name and raw value.
///
/// Records are how a flag set is reconstructed programmatically: the binary
/// layout is a [`RecordFlags`] header byte, the enumeration name (only when
/// bound) prefixed by its `u8` length, and the value as a little-endian `u32`
/// or `u64`.
///
/// ```rust
/// use bitmask_rs::{flag_enum, flag_set};
/// use bitmask_rs::record::{enumeration_registry::EnumerationRegistry, flag_set_record::FlagSetRecord};
///
/// flag_enum! {
///     pub enum Desc {
///         SMALL = 1,
///         SONAR = 1 << 4,
///     }
/// }
///
/// let set = flag_set![Desc::SONAR];
/// let token = FlagSetRecord::from(&set).to_token().unwrap();
///
/// let registry = EnumerationRegistry::new().with::<Desc>();
/// let restored = FlagSetRecord::from_token(&token).unwrap().restore(&registry).unwrap();
/// assert_eq!(restored, set);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSetRecord {
    /// Name of the bound enumeration, if any.
    pub enumeration: Option<String>,
    /// The raw bit pattern.
    pub value: u64,
}

impl From<&FlagSet> for FlagSetRecord {
    fn from(set: &FlagSet) -> Self {
        Self {
            enumeration: set.enumeration().map(|e| e.name().to_string()),
            value: set.value(),
        }
    }
}

/// Truncated or malformed input is bad data rather than an I/O failure.
fn map_codec_error(err: io::Error) -> FlagSetError {
    match err.kind() {
        io::ErrorKind::UnexpectedEof => FlagSetError::InvalidData("Truncated record".to_string()),
        io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => {
            FlagSetError::InvalidData(err.to_string())
        }
        _ => FlagSetError::Io(err),
    }
}

impl FlagSetRecord {
    fn header(&self) -> RecordFlags {
        let mut flags = RecordFlags::empty();
        if self.enumeration.is_some() {
            flags |= RecordFlags::BOUND;
        }
        if self.value <= u32::MAX as u64 {
            flags |= RecordFlags::COMPACT;
        }
        flags
    }

    /// Writes the binary layout to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let header = self.header();
        let mut buf = vec![header.bits()];
        if let Some(name) = &self.enumeration {
            buf.write_name(name).map_err(map_codec_error)?;
        }
        buf.write_value(self.value, header.contains(RecordFlags::COMPACT))
            .map_err(map_codec_error)?;
        writer.write_all(&buf)?;
        debug!(
            enumeration = self.enumeration.as_deref(),
            value = self.value,
            len = buf.len(),
            "wrote flag set record"
        );
        Ok(())
    }

    /// Reads one record from `reader`, leaving any following bytes unread.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut header = [0u8; 1];
        reader.read_exact(&mut header).map_err(map_codec_error)?;
        let header = RecordFlags::from_bits(header[0]).ok_or_else(|| {
            FlagSetError::InvalidData(format!("Unknown record header bits {:#04x}", header[0]))
        })?;

        let enumeration = if header.contains(RecordFlags::BOUND) {
            Some(reader.read_name().map_err(map_codec_error)?)
        } else {
            None
        };
        let value = reader
            .read_value(header.contains(RecordFlags::COMPACT))
            .map_err(map_codec_error)?;

        debug!(enumeration = enumeration.as_deref(), value, "read flag set record");
        Ok(Self { enumeration, value })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    /// Decodes exactly one record; trailing bytes are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        let record = Self::read_from(&mut cursor)?;
        if cursor.position() != bytes.len() as u64 {
            return Err(FlagSetError::InvalidData(format!(
                "{} trailing bytes after record",
                bytes.len() as u64 - cursor.position()
            )));
        }
        Ok(record)
    }

    /// Encodes the binary layout as standard base64.
    pub fn to_token(&self) -> Result<String> {
        Ok(BASE64_STANDARD.encode(self.to_bytes()?))
    }

    pub fn from_token(token: &str) -> Result<Self> {
        let bytes = BASE64_STANDARD
            .decode(token)
            .map_err(|e| FlagSetError::InvalidData(format!("Invalid base64 token: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Human-readable `Name:0000000000000010` form, with `-` as the name of an
    /// unbound set.
    pub fn to_digest(&self) -> String {
        let name = self.enumeration.as_deref().unwrap_or(UNBOUND_DIGEST);
        format!("{name}:{}", hex::encode(self.value.to_be_bytes()))
    }

    pub fn from_digest(digest: &str) -> Result<Self> {
        let (name, value) = digest
            .rsplit_once(':')
            .ok_or_else(|| FlagSetError::InvalidData(format!("Missing ':' in digest {digest:?}")))?;

        let mut bytes = [0u8; 8];
        hex::decode_to_slice(value, &mut bytes)
            .map_err(|e| FlagSetError::InvalidData(format!("Invalid digest value {value:?}: {e}")))?;

        let enumeration = match name {
            UNBOUND_DIGEST => None,
            "" => return Err(FlagSetError::InvalidData("Empty enumeration name".to_string())),
            name => Some(name.to_string()),
        };
        Ok(Self {
            enumeration,
            value: u64::from_be_bytes(bytes),
        })
    }

    /// Rebuilds a flag set, looking the enumeration up in `registry`.
    ///
    /// The value is assigned as-is, without checking it against the
    /// enumeration's members.
    pub fn restore(&self, registry: &EnumerationRegistry) -> Result<FlagSet> {
        let mut set = match &self.enumeration {
            Some(name) => {
                let enumeration = registry
                    .get(name)
                    .ok_or_else(|| FlagSetError::UnknownEnumeration(name.clone()))?;
                FlagSet::bound(enumeration)
            }
            None => FlagSet::new(),
        };
        set.set_value(self.value)?;
        Ok(set)
    }
}
