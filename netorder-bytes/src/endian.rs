use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum Endian {
    Big,
    Little,
}

impl Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_big() { "BE" } else { "LE" })
    }
}

impl Endian {
    /// Byte order of the machine executing this code.
    #[cfg(target_endian = "big")]
    pub const HOST: Self = Self::Big;
    #[cfg(target_endian = "little")]
    pub const HOST: Self = Self::Little;

    /// Most significant byte first.
    pub const NETWORK: Self = Self::Big;

    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Self::Little)
    }

    pub fn is_host(&self) -> bool {
        *self == Self::HOST
    }
}
