#![no_std]

//! `MemoryStream`: a seekable read/write stream over an owned byte region.
//!
//! The stream behaves like an in-memory file handle. Writes go to the
//! cursor and overwrite what is there, extending the data when they end
//! past it. Reads return views into the storage without copying. The
//! cursor moves by absolute, relative or end-relative offsets.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Storage Modes
//!
//! - `MemoryStream::new()`: expandable, nothing allocated until the first write
//! - `MemoryStream::with_reserved_capacity(n)`: expandable, `n` bytes allocated up front
//! - `MemoryStream::with_capacity(n)`: fixed, writes past `n` bytes fail
//!
//! Expandable streams grow to the smallest power of two that is at least
//! 256 and fits the write. Other growth policies can be plugged in with
//! `MemoryStream::with_growth_policy`.
//!
//! # Invariants
//!
//! - `position() <= count() <= allocated()`
//! - `count()` grows only when a write ends past it
//! - growth keeps all valid bytes unchanged
//! - a failed operation changes nothing
//!
//! # Reading and Writing
//!
//! ```
//! # use memstream::{MemoryStream, SeekOrigin};
//! let mut stream = MemoryStream::new();
//!
//! assert_eq!(stream.write(&[1, 2, 3, 4]).unwrap(), 4);
//! assert_eq!(stream.count(), 4);
//! assert!(stream.is_eof());
//!
//! stream.seek(1, SeekOrigin::Begin).unwrap();
//! assert_eq!(stream.read_slice(2).unwrap(), &[2, 3]);
//! assert_eq!(stream.remain(), 1);
//!
//! // Best-effort reads never fail
//! assert_eq!(stream.read_up_to(10), &[4]);
//! assert_eq!(stream.read_up_to(10), &[] as &[u8]);
//! ```
//!
//! A view returned by `read_slice` or `read_up_to` borrows the stream, so
//! the next write cannot happen while the view is alive:
//!
//! ```compile_fail
//! # use memstream::MemoryStream;
//! let mut stream = MemoryStream::new();
//! stream.write(&[1, 2]).unwrap();
//! stream.rewind();
//!
//! let view = stream.read_slice(1).unwrap();
//! stream.write(&[3]).unwrap(); // ERROR: stream is still borrowed by `view`
//! assert_eq!(view, &[1]);
//! ```
//!
//! Moving the cursor is a mutation too:
//!
//! ```compile_fail
//! # use memstream::MemoryStream;
//! let mut stream = MemoryStream::new();
//! stream.write(&[1, 2]).unwrap();
//! stream.rewind();
//!
//! let view = stream.read_slice(1).unwrap();
//! stream.rewind(); // ERROR: stream is still borrowed by `view`
//! assert_eq!(view, &[1]);
//! ```
//!
//! Copy the bytes out (or use `read_into`) to keep them across mutations:
//!
//! ```
//! # use memstream::MemoryStream;
//! let mut stream = MemoryStream::new();
//! stream.write(&[1, 2]).unwrap();
//! stream.rewind();
//!
//! let kept = stream.read_slice(1).unwrap().to_vec();
//! stream.write(&[3]).unwrap();
//! assert_eq!(kept, [1u8]);
//! assert_eq!(stream.buffer(), &[1, 3]);
//! ```
//!
//! # Fixed Capacity
//!
//! ```
//! # use memstream::{MemoryStream, StreamError};
//! let mut stream = MemoryStream::with_capacity(4);
//!
//! assert_eq!(stream.write(&[1, 2]).unwrap(), 2);
//! assert_eq!(stream.write(&[3, 4, 5]), Err(StreamError::NotEnoughSpace));
//! assert_eq!(stream.count(), 2);
//! ```
//!
//! # Integers
//!
//! Fixed-width integers are written in the native byte order of the
//! platform. The data is not portable between machines of different
//! endianness.
//!
//! ```
//! # use memstream::{MemoryStream, SeekOrigin, StreamError};
//! let mut stream = MemoryStream::new();
//!
//! stream.write_integer(0x0102_0304_0506_0708_u64).unwrap();
//! stream.write_integer(-1_i16).unwrap();
//! stream.rewind();
//!
//! assert_eq!(stream.read_integer::<u64>().unwrap(), 0x0102_0304_0506_0708);
//! assert_eq!(stream.read_integer::<i16>().unwrap(), -1);
//! assert_eq!(stream.read_integer::<u8>(), Err(StreamError::InsufficientData));
//! ```
//!
//! # Capabilities
//!
//! Code that needs only part of the stream can depend on the
//! `InputStream`, `OutputStream` or `Seekable` traits. `MemoryStream`
//! also implements the `embedded-io` traits and, with the `std` feature,
//! the `std::io` traits:
//!
//! ```toml
//! [dependencies]
//! memstream = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
mod growth;
mod integer;
mod io;
mod memory_stream;
mod storage;
mod stream;

// Re-export public types and traits
pub use config::StreamConfig;
pub use error::StreamError;
pub use growth::{GrowthPolicy, Linear, PowerOfTwo, MIN_CAPACITY};
pub use integer::Integer;
pub use memory_stream::MemoryStream;
pub use stream::{InputStream, OutputStream, SeekOrigin, Seekable, Stream};
