use memstream::{MemoryStream, SeekOrigin, StreamConfig, StreamError};

#[test]
fn test_initial_state() {
    let stream = MemoryStream::new();

    assert_eq!(stream.allocated(), 0);
    assert_eq!(stream.position(), 0);
    assert_eq!(stream.remain(), 0);
    assert_eq!(stream.count(), 0);
    assert!(stream.is_eof());
    assert!(stream.is_expandable());
}

#[test]
fn test_reserved_capacity() {
    let stream = MemoryStream::with_reserved_capacity(100);

    assert_eq!(stream.allocated(), 100);
    assert_eq!(stream.count(), 0);
    assert!(stream.is_expandable());
}

#[test]
fn test_fixed_capacity_is_not_expandable() {
    let stream = MemoryStream::with_capacity(4);

    assert_eq!(stream.allocated(), 4);
    assert!(!stream.is_expandable());
}

#[test]
fn test_with_config() {
    assert_eq!(MemoryStream::with_config(StreamConfig::default()).allocated(), 0);
    assert_eq!(MemoryStream::with_config(StreamConfig::Reserve(32)).allocated(), 32);

    let fixed = MemoryStream::with_config(StreamConfig::Fixed(8));
    assert_eq!(fixed.allocated(), 8);
    assert!(!fixed.is_expandable());
}

#[test]
fn test_write_empty() {
    let mut stream = MemoryStream::new();

    assert_eq!(stream.write(&[]), Ok(0));
    assert_eq!(stream.allocated(), 0);
    assert_eq!(stream.count(), 0);
}

#[test]
fn test_write_empty_into_full_fixed_stream() {
    let mut stream = MemoryStream::with_capacity(0);

    assert_eq!(stream.write(&[]), Ok(0));
}

#[test]
fn test_read_empty() {
    let mut stream = MemoryStream::new();
    let mut buffer = [0u8; 10];

    assert_eq!(stream.read_into(&mut buffer), 0);
    assert_eq!(stream.read_up_to(10), &[] as &[u8]);
    assert_eq!(stream.read_slice(0), Ok(&[] as &[u8]));
    assert_eq!(stream.read_slice(1), Err(StreamError::InsufficientData));
}

#[test]
fn test_write_sequence() {
    let mut stream = MemoryStream::new();

    assert_eq!(stream.write(&[1, 2, 3, 4]), Ok(4));
    assert_eq!(stream.count(), 4);
    assert_eq!(stream.position(), 4);
    assert_eq!(stream.remain(), 0);
}

#[test]
fn test_write_overwrites() {
    let mut stream = MemoryStream::new();
    let data = [1u8, 2, 3, 4];

    stream.write(&data).unwrap();
    let mut buffer = [0u8; 4];
    stream.rewind();
    assert_eq!(stream.read_into(&mut buffer), 4);
    assert_eq!(buffer, [1, 2, 3, 4]);

    stream.rewind();
    assert_eq!(stream.write(&[9, 9]), Ok(2));
    assert_eq!(stream.count(), 4);
    assert_eq!(stream.position(), 2);
    assert_eq!(stream.buffer(), &[9, 9, 3, 4]);

    stream.seek(0, SeekOrigin::End).unwrap();
    assert_eq!(stream.write(&data[2..]), Ok(2));
    assert_eq!(stream.count(), 6);
    assert_eq!(stream.buffer(), &[9, 9, 3, 4, 3, 4]);
}

#[test]
fn test_write_past_end_extends_count() {
    let mut stream = MemoryStream::new();

    stream.write(&[1, 2, 3, 4]).unwrap();
    stream.seek(2, SeekOrigin::Begin).unwrap();
    stream.write(&[7, 8, 9, 10]).unwrap();

    assert_eq!(stream.count(), 6);
    assert_eq!(stream.position(), 6);
    assert_eq!(stream.buffer(), &[1, 2, 7, 8, 9, 10]);
}

#[test]
fn test_read_into_partial() {
    let mut stream = MemoryStream::new();
    stream.write(&[1, 2, 3, 4]).unwrap();
    stream.rewind();

    let mut buffer = [0u8; 4];
    assert_eq!(stream.read_into(&mut buffer[..2]), 2);
    assert_eq!(buffer, [1, 2, 0, 0]);
    assert_eq!(stream.position(), 2);
    assert_eq!(stream.remain(), 2);
    assert_eq!(stream.count(), 4);

    assert_eq!(stream.read_into(&mut buffer[2..]), 2);
    assert_eq!(buffer, [1, 2, 3, 4]);
    assert_eq!(stream.position(), 4);
    assert_eq!(stream.remain(), 0);
    assert!(stream.is_eof());
}

#[test]
fn test_read_into_larger_destination() {
    let mut stream = MemoryStream::new();
    stream.write(&[5, 6, 7]).unwrap();
    stream.rewind();

    let mut buffer = [0u8; 8];
    assert_eq!(stream.read_into(&mut buffer), 3);
    assert_eq!(buffer, [5, 6, 7, 0, 0, 0, 0, 0]);
    assert_eq!(stream.read_into(&mut buffer), 0);
}

#[test]
fn test_read_slice_is_atomic() {
    let mut stream = MemoryStream::new();
    stream.write(&[1, 2, 3]).unwrap();
    stream.seek(1, SeekOrigin::Begin).unwrap();

    assert_eq!(stream.read_slice(3), Err(StreamError::InsufficientData));
    assert_eq!(stream.position(), 1);
    assert_eq!(stream.count(), 3);

    assert_eq!(stream.read_slice(2), Ok(&[2u8, 3][..]));
    assert!(stream.is_eof());
}

#[test]
fn test_read_up_to_clamps() {
    let mut stream = MemoryStream::new();
    stream.write(&[1, 2, 3, 4, 5]).unwrap();
    stream.rewind();

    assert_eq!(stream.read_up_to(2), &[1, 2]);
    assert_eq!(stream.read_up_to(100), &[3, 4, 5]);
    assert_eq!(stream.read_up_to(100), &[] as &[u8]);
    assert_eq!(stream.position(), 5);
}

#[test]
fn test_reallocate() {
    let mut stream = MemoryStream::new();
    let data = [1u8, 2, 3, 4, 5, 6, 7, 8];

    stream.write(&data).unwrap();
    assert_eq!(stream.allocated(), 256);
    assert_eq!(stream.position(), 8);
    assert_eq!(stream.count(), 8);

    let data300 = [111u8; 300];
    stream.write(&data300).unwrap();
    assert_eq!(stream.allocated(), 512);
    assert_eq!(stream.position(), 308);
    assert_eq!(stream.remain(), 0);
    assert_eq!(stream.count(), 308);

    let mut buffer = vec![0u8; 308];
    stream.rewind();
    assert_eq!(stream.read_into(&mut buffer), 308);

    let mut expected = data.to_vec();
    expected.extend_from_slice(&data300);
    assert_eq!(buffer, expected);
    assert_eq!(stream.allocated(), 512);
    assert_eq!(stream.count(), 308);
}

#[test]
fn test_reserved_capacity_grows_past_reservation() {
    let mut stream = MemoryStream::with_reserved_capacity(4);

    stream.write(&[1, 2, 3, 4]).unwrap();
    assert_eq!(stream.allocated(), 4);

    stream.write(&[5]).unwrap();
    assert_eq!(stream.allocated(), 256);
    assert_eq!(stream.buffer(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_capacity() {
    let mut stream = MemoryStream::with_capacity(4);
    let data = [1u8, 2, 3, 4];

    assert_eq!(stream.write(&data[..2]), Ok(2));
    assert_eq!(stream.write(&data), Err(StreamError::NotEnoughSpace));
    assert_eq!(stream.position(), 2);
    assert_eq!(stream.count(), 2);
    assert_eq!(stream.allocated(), 4);
    assert_eq!(stream.buffer(), &[1, 2]);
}

#[test]
fn test_capacity_exact_fit() {
    let mut stream = MemoryStream::with_capacity(4);

    assert_eq!(stream.write(&[1, 2, 3, 4]), Ok(4));
    assert_eq!(stream.write(&[5]), Err(StreamError::NotEnoughSpace));

    stream.seek(-1, SeekOrigin::End).unwrap();
    assert_eq!(stream.write(&[9]), Ok(1));
    assert_eq!(stream.buffer(), &[1, 2, 3, 9]);
}

#[test]
fn test_buffer_snapshot() {
    let mut stream = MemoryStream::with_capacity(4);

    stream.write(&[1, 2, 3, 4]).unwrap();
    assert_eq!(stream.buffer(), &[1, 2, 3, 4]);

    stream.rewind();
    let mut buffer = [0u8; 1];
    assert_eq!(stream.read_into(&mut buffer), 1);
    assert_eq!(stream.buffer(), &[1, 2, 3, 4]);
}

#[test]
fn test_buffer_excludes_unwritten_capacity() {
    let mut stream = MemoryStream::with_reserved_capacity(64);

    stream.write(&[1, 2]).unwrap();
    assert_eq!(stream.buffer().len(), 2);
    assert_eq!(stream.allocated(), 64);
}

#[test]
fn test_into_inner() {
    let mut stream = MemoryStream::new();
    stream.write(b"hello").unwrap();
    stream.seek(1, SeekOrigin::Begin).unwrap();

    assert_eq!(stream.into_inner(), b"hello".to_vec());
    assert!(MemoryStream::new().into_inner().is_empty());
}

#[test]
fn test_round_trip_at_offsets() {
    let mut stream = MemoryStream::new();
    stream.write(&[0u8; 16]).unwrap();

    for (offset, payload) in [
        (0isize, &b"abc"[..]),
        (7, &b"defgh"[..]),
        (14, &b"ijklmn"[..]),
    ] {
        stream.seek(offset, SeekOrigin::Begin).unwrap();
        stream.write(payload).unwrap();
        stream.seek(offset, SeekOrigin::Begin).unwrap();
        assert_eq!(stream.read_slice(payload.len()), Ok(payload));
    }
    assert_eq!(stream.count(), 20);
}

#[test]
fn test_debug_output() {
    let mut stream = MemoryStream::new();
    stream.write(&[1, 2, 3]).unwrap();

    let debug = format!("{stream:?}");
    assert!(debug.contains("position: 3"));
    assert!(debug.contains("count: 3"));
    assert!(debug.contains("allocated: 256"));
}
