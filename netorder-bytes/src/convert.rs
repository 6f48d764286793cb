//! Host to network byte-order conversion.
//!
//! A [`ByteOrderConverter`] turns a word held in host order into the word
//! whose in-memory representation is the same value stored most significant
//! byte first. The host's converter is fixed at build time through [`NE`] and
//! handed out at startup by [`host_converter`].

use std::marker::PhantomData;

use crate::order::Order;
use crate::traits::reorder;
use crate::{BE, NE};

pub trait ByteOrderConverter: Send + Sync {
    fn to_network_order(&self, word: u32) -> u32;

    /// Converting is self-inverse: either the identity or a full reversal.
    fn from_network_order(&self, word: u32) -> u32 {
        self.to_network_order(word)
    }
}

/// Uses the platform's native conversion primitive.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Native;

impl ByteOrderConverter for Native {
    fn to_network_order(&self, word: u32) -> u32 {
        word.to_be()
    }
}

/// Converts as a host storing words in `O` order would, without relying on
/// a native primitive: `Ordered<LE>` reverses all four bytes and
/// `Ordered<BE>` leaves the word untouched.
pub struct Ordered<O: Order>(PhantomData<O>);

impl<O: Order> Ordered<O> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<O: Order> Default for Ordered<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Order> std::fmt::Debug for Ordered<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ordered<{}>", O::ENDIAN)
    }
}

impl<O: Order> ByteOrderConverter for Ordered<O> {
    fn to_network_order(&self, word: u32) -> u32 {
        reorder::<u32, BE, O>(word)
    }
}

pub type HostOrder = Ordered<NE>;

static HOST: HostOrder = HostOrder::new();

pub fn host_converter() -> &'static dyn ByteOrderConverter {
    log::debug!("using {:?} converter for host", HOST);
    &HOST
}

/// Converts `word` from host to network order on the executing machine.
pub fn to_network_order(word: u32) -> u32 {
    HOST.to_network_order(word)
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::LE;

    #[test]
    fn test_little_endian_host() {
        let conv = Ordered::<LE>::new();
        assert_eq!(conv.to_network_order(1), 16777216);
        assert_eq!(conv.to_network_order(64), 1073741824);
        assert_eq!(conv.to_network_order(0x1234_5678), 0x7856_3412);
        assert_eq!(conv.to_network_order(0), 0);
    }

    #[test]
    fn test_big_endian_host() {
        let conv = Ordered::<BE>::new();
        assert_eq!(conv.to_network_order(1), 1);
        assert_eq!(conv.to_network_order(64), 64);
        assert_eq!(conv.to_network_order(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_host_selection() {
        let expected = if cfg!(target_endian = "little") { 0x4000_0000 } else { 64 };
        assert_eq!(to_network_order(64), expected);
        assert_eq!(host_converter().to_network_order(64), expected);
        assert_eq!(Native.to_network_order(64), expected);
        assert_eq!(format!("{:?}", HostOrder::new()), format!("Ordered<{}>", crate::Endian::HOST));
    }

    #[test]
    fn test_zero_on_any_host() {
        assert_eq!(Native.to_network_order(0), 0);
        assert_eq!(Ordered::<LE>::new().to_network_order(0), 0);
        assert_eq!(Ordered::<BE>::new().to_network_order(0), 0);
    }

    proptest! {
        #[test]
        fn conversion_is_self_inverse(x in any::<u32>()) {
            prop_assert_eq!(to_network_order(to_network_order(x)), x);
            let le = Ordered::<LE>::new();
            prop_assert_eq!(le.from_network_order(le.to_network_order(x)), x);
        }

        #[test]
        fn palindromic_words_are_fixed(a in any::<u8>(), b in any::<u8>()) {
            let x = u32::from_be_bytes([a, b, b, a]);
            prop_assert_eq!(to_network_order(x), x);
            prop_assert_eq!(Ordered::<LE>::new().to_network_order(x), x);
        }

        #[test]
        fn native_agrees_with_host_order(x in any::<u32>()) {
            prop_assert_eq!(Native.to_network_order(x), HostOrder::new().to_network_order(x));
        }

        #[test]
        fn network_bytes_are_most_significant_first(x in any::<u32>()) {
            let n = to_network_order(x);
            prop_assert_eq!(n.to_ne_bytes(), x.to_be_bytes());
        }
    }
}
