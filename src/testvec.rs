//! Reference encodings shared by the codec tests.

pub struct Case {
    pub data: Vec<u8>,
    pub blob: Vec<u8>,
}

fn case(data: &[u8], blob: &[u8]) -> Case {
    Case {
        data: data.to_vec(),
        blob: blob.to_vec(),
    }
}

// Patterned payload of n bytes behind the expected header.
fn big(n: usize, hdr: &[u8]) -> Case {
    let data: Vec<u8> = (0..n).map(|i| (i % 251) as u8).collect();
    let mut blob = hdr.to_vec();
    blob.extend_from_slice(&data);
    Case { data, blob }
}

pub fn cases() -> Vec<Case> {
    vec![
        // empty blob
        case(&[], &[0x80]),
        // 1-byte content
        case(&[0x00], &[0x00]),
        case(&[0x01], &[0x01]),
        case(&[0x7E], &[0x7E]),
        case(&[0x7F], &[0x7F]),
        case(&[0x80], &[0x81, 0x80]),
        case(&[0x81], &[0x81, 0x81]),
        case(&[0xFE], &[0x81, 0xFE]),
        case(&[0xFF], &[0x81, 0xFF]),
        // 2-byte content
        case(&[0x00, 0x00], &[0x82, 0x00, 0x00]),
        case(&[0xAB, 0xCD], &[0x82, 0xAB, 0xCD]),
        case(&[0xFF, 0xFF], &[0x82, 0xFF, 0xFF]),
        // 3-, 4- and 8-byte content
        case(&[0xAB, 0xCD, 0xEF], &[0x83, 0xAB, 0xCD, 0xEF]),
        case(&[0xDE, 0xAD, 0xBE, 0xEF], &[0x84, 0xDE, 0xAD, 0xBE, 0xEF]),
        case(
            &[0xDE, 0xAD, 0xBE, 0xEF, 0x4B, 0xAD, 0xF0, 0x0D],
            &[0x88, 0xDE, 0xAD, 0xBE, 0xEF, 0x4B, 0xAD, 0xF0, 0x0D],
        ),
        // 1-byte header boundary
        big(63, &[0xBF]),
        // 2-byte header range
        big(64, &[0xC0, 0x00]),
        big(204, &[0xC0, 0x8C]),
        big(778, &[0xC2, 0xCA]),
        big(4096, &[0xCF, 0xC0]),
        big(16_384, &[0xFF, 0xC0]),
        big(16_447, &[0xFF, 0xFF]),
        // 4-byte header range
        big(16_448, &[0x81, 0x00, 0x00, 0x00]),
        big(32_768, &[0x81, 0x00, 0x3F, 0xC0]),
        big(4_210_750, &[0x81, 0x3F, 0xFF, 0xFE]),
        // largest content that still fits in one chunk
        big(4_210_751, &[0x81, 0x3F, 0xFF, 0xFF]),
    ]
}
