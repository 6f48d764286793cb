use netorder_bytes::{ByteCast, ByteOrderConverter, Endian};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Repr {
    Host,
    Network,
}

impl Repr {
    pub fn endian(&self) -> Endian {
        match self {
            Self::Host => Endian::HOST,
            Self::Network => Endian::NETWORK,
        }
    }
}

/// A 32-bit value together with the byte order it is held in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    value: u32,
    repr: Repr,
}

impl Word {
    pub const SIZEOF: usize = <u32 as ByteCast>::SIZEOF;

    pub fn host(value: u32) -> Self {
        Self { value, repr: Repr::Host }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn repr(&self) -> Repr {
        self.repr
    }

    pub fn is_network(&self) -> bool {
        matches!(self.repr, Repr::Network)
    }

    pub fn to_network<C>(&self, conv: &C) -> Self
    where C: ByteOrderConverter + ?Sized {
        match self.repr {
            Repr::Network => *self,
            Repr::Host => Self {
                value: conv.to_network_order(self.value),
                repr: Repr::Network,
            },
        }
    }

    pub fn to_host<C>(&self, conv: &C) -> Self
    where C: ByteOrderConverter + ?Sized {
        match self.repr {
            Repr::Host => *self,
            Repr::Network => Self::host(conv.from_network_order(self.value)),
        }
    }
}
