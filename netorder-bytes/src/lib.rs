pub use byteorder::{BE, LE};
pub use byteorder::NativeEndian as NE;

pub mod convert;
pub use convert::{host_converter, to_network_order, ByteOrderConverter, HostOrder, Native, Ordered};

pub mod endian;
pub use endian::Endian;

pub mod error;
pub use error::Error;

pub mod order;
pub use order::{read_word, Order};

pub mod traits;
pub use traits::{reorder, ByteCast};
