use paste::paste;

use crate::order::Order;

pub trait ByteCast: Copy {
    const SIZEOF: usize;

    fn from_bytes<O: Order>(buf: &[u8]) -> Self;
    fn into_bytes<O: Order>(&self, buf: &mut [u8]);
}

macro_rules! impl_for {
    ($t:ident, $read:ident, $write:ident) => {
        impl ByteCast for $t {
            const SIZEOF: usize = std::mem::size_of::<$t>();

            fn from_bytes<O: Order>(buf: &[u8]) -> Self {
                O::$read(buf)
            }

            fn into_bytes<O: Order>(&self, buf: &mut [u8]) {
                O::$write(buf, *self)
            }
        }
    };
}

macro_rules! impls_for {
    ([$($tname:ident),*]) => {
        $(
            paste! {
                impl_for!($tname, [<read_ $tname>], [<write_ $tname>]);
            }
        )*
    };
}

impls_for! { [i16, i32, i64] }
impls_for! { [u16, u32, u64] }

/// Writes `value` in `F` order and reads the same bytes back in `T` order.
///
/// `reorder::<_, BE, NE>` is the host to network conversion for any width;
/// when `F` and `T` agree the value is returned unchanged.
pub fn reorder<V: ByteCast, F: Order, T: Order>(value: V) -> V {
    let mut buf = [0u8; 8];
    let buf = &mut buf[..V::SIZEOF];
    value.into_bytes::<F>(buf);
    V::from_bytes::<T>(buf)
}
