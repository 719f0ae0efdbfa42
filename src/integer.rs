use core::mem::size_of;

mod private {
    pub trait Sealed {}
}

/// Fixed-width integers that can be written to and read from a stream.
///
/// The byte representation is the native in-memory layout of the
/// platform. Data written on a little-endian machine reads back
/// differently on a big-endian one.
pub trait Integer: Copy + private::Sealed {
    /// Byte representation, `[u8; size_of::<Self>()]`
    type Bytes: AsRef<[u8]>;

    const SIZE: usize;

    fn to_native_bytes(self) -> Self::Bytes;

    /// Reinterprets exactly `Self::SIZE` bytes.
    ///
    /// # Panics
    ///
    /// If `bytes.len() != Self::SIZE`.
    fn from_native_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Integer for $t {
                type Bytes = [u8; size_of::<$t>()];

                const SIZE: usize = size_of::<$t>();

                fn to_native_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                fn from_native_bytes(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(raw)
                }
            }
        )*
    };
}

impl_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
