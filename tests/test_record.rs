use gridraw::{record, BytesReader, Error, ReadBytes};

// test values, few normal ones plus corner cases
const V_I32: &[i32] = &[i32::min_value(), 0, 1, 10, 65000, 999999,
    -1, -10, -65000, -999999, i32::max_value()];

#[test]
fn roundtrip_single_records() {
    for val in V_I32 {
        let rec = record::encode_record(i64::from(*val)).unwrap();
        assert_eq!(record::decode_record(&rec).unwrap(), *val);
    }
}

#[test]
fn roundtrip_reader_writer() {
    let mut buf = Vec::new();
    for val in V_I32 {
        record::serialize_record(&mut buf, i64::from(*val)).unwrap();
    }
    assert_eq!(buf.len(), V_I32.len() * record::RECORD_LEN);
    let mut r = BytesReader::new(&buf);
    for val in V_I32 {
        assert_eq!(record::deserialize_record(&mut r).unwrap(), *val);
    }
    r.is_complete().unwrap();
}

#[test]
fn byte_order() {
    assert_eq!(record::encode_record(1).unwrap(), [0x01, 0x00, 0x00, 0x00]);
    assert_eq!(record::encode_record(-1).unwrap(), [0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(record::encode_record(10).unwrap(), [0x0A, 0x00, 0x00, 0x00]);
    assert_eq!(record::encode_record(0x0102_0304).unwrap(), [0x04, 0x03, 0x02, 0x01]);
    assert_eq!(record::decode_record(&[0x04, 0x03, 0x02, 0x01]).unwrap(), 0x0102_0304);
}

#[test]
fn range_limits() {
    assert_eq!(record::encode_record(i64::from(i32::max_value())).unwrap(),
        [0xFF, 0xFF, 0xFF, 0x7F]);
    assert_eq!(record::encode_record(i64::from(i32::min_value())).unwrap(),
        [0x00, 0x00, 0x00, 0x80]);
    assert!(matches!(record::encode_record(1_i64 << 31), Err(Error::ValueOutOfRange)));
    assert!(matches!(record::encode_record(-(1_i64 << 31) - 1), Err(Error::ValueOutOfRange)));
    assert!(matches!(record::encode_record(i64::max_value()), Err(Error::ValueOutOfRange)));
    assert!(matches!(record::encode_record(i64::min_value()), Err(Error::ValueOutOfRange)));
}

#[test]
fn record_length() {
    assert!(matches!(record::decode_record(&[1, 0, 0]), Err(Error::InvalidRecordLength)));
    assert!(matches!(record::decode_record(&[1, 0, 0, 0, 0]), Err(Error::InvalidRecordLength)));
    assert!(matches!(record::decode_record(&[]), Err(Error::InvalidRecordLength)));
}

#[test]
fn window_decode() {
    let src = [1_u8, 0, 0, 0, 5, 0, 0, 0, 9, 10];
    assert_eq!(record::decode_record_at(&src, 0).unwrap(), 1);
    assert_eq!(record::decode_record_at(&src, 1).unwrap(), 5);
    assert!(matches!(record::decode_record_at(&src, 2), Err(Error::PrematureEndOfInput)));
    assert!(matches!(record::decode_record_at(&[], 0), Err(Error::PrematureEndOfInput)));
    assert!(matches!(record::decode_record_at(&src, usize::max_value()),
        Err(Error::PrematureEndOfInput)));
}

#[test]
fn stream_decode() {
    let buf = gridraw::encode_records(vec![1, 5, 9]).unwrap();
    assert_eq!(record::decode_records(&buf).unwrap(), vec![1, 5, 9]);

    let mut trailing = buf;
    trailing.extend_from_slice(&[9, 10]);
    assert!(matches!(record::decode_records(&trailing), Err(Error::InvalidRecordLength)));
    assert_eq!(record::decode_records(&[]).unwrap(), Vec::<i32>::new());
}

#[test]
fn short_read() {
    let mut r = BytesReader::new(&[1, 0, 0]);
    assert!(matches!(record::deserialize_record(&mut r), Err(Error::PrematureEndOfInput)));
}
