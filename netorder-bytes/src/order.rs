use byteorder::ByteOrder;

use crate::{BE, LE};
use crate::endian::Endian;
use crate::error::Error;

pub trait Order: ByteOrder + Send + Sync + 'static {
    const ENDIAN: Endian;
    const NATIVE: bool;
}

impl Order for BE {
    const ENDIAN: Endian = Endian::Big;
    const NATIVE: bool = cfg!(target_endian = "big");
}

impl Order for LE {
    const ENDIAN: Endian = Endian::Little;
    const NATIVE: bool = cfg!(target_endian = "little");
}

/// Decodes a 32-bit word stored in `O` order at the start of `buf`.
pub fn read_word<O: Order>(buf: &[u8]) -> Result<u32, Error> {
    if buf.len() < 4 {
        return Err(Error::ShortBuffer { expected: 4, actual: buf.len() })
    }
    Ok(O::read_u32(&buf[..4]))
}
