use imgdims::{ImageSize, SNIFF_LEN, get_dimensions, get_dimensions_from_bytes};
use proptest::prelude::*;
use std::io::{self, Read};

fn png_1x1() -> Vec<u8> {
    let mut png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    png.extend_from_slice(&[0x00, 0x00, 0x00, 0x0D]);
    png.extend_from_slice(b"IHDR");
    png.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01]);
    png.extend_from_slice(&[0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89]);
    png
}

fn gif_320x200() -> Vec<u8> {
    b"GIF89a\x40\x01\xC8\x00\xF7\x00\x00".to_vec()
}

fn bmp_640x_neg480() -> Vec<u8> {
    let mut bmp = b"BM".to_vec();
    bmp.extend_from_slice(&[0x00; 12]);
    bmp.extend_from_slice(&40u32.to_le_bytes());
    bmp.extend_from_slice(&640i32.to_le_bytes());
    bmp.extend_from_slice(&(-480i32).to_le_bytes());
    bmp
}

fn jpeg_64x48() -> Vec<u8> {
    vec![
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0x00, 0x00, 0xFF, 0xC0, 0x00, 0x0B, 0x08, 0x00, 0x30,
        0x00, 0x40, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xD9,
    ]
}

/// Header bytes each sample needs before its size is known.
fn samples() -> Vec<(Vec<u8>, usize, ImageSize)> {
    vec![
        (png_1x1(), 24, ImageSize::new(1, 1)),
        (gif_320x200(), 10, ImageSize::new(320, 200)),
        (bmp_640x_neg480(), 26, ImageSize::new(640, 480)),
        (jpeg_64x48(), 17, ImageSize::new(64, 48)),
    ]
}

/// Reader that fails the test if pulled past `limit` bytes.
struct Bounded<'a> {
    data: &'a [u8],
    limit: usize,
    served: usize,
}

impl Read for Bounded<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let allowed = self.limit.saturating_sub(self.served).min(buf.len());
        let n = self.data.read(&mut buf[..allowed])?;
        self.served += n;
        Ok(n)
    }
}

#[test]
fn test_png_one_by_one() {
    assert_eq!(get_dimensions_from_bytes(&png_1x1()), ImageSize::new(1, 1));
}

#[test]
fn test_gif_logical_screen() {
    assert_eq!(get_dimensions_from_bytes(&gif_320x200()), ImageSize::new(320, 200));
}

#[test]
fn test_bmp_negative_height() {
    let size = get_dimensions_from_bytes(&bmp_640x_neg480());
    assert!(size.is_valid());
    assert_eq!(size.width(), 640);
    assert_eq!(size.height(), 480);
}

#[test]
fn test_empty_stream() {
    assert!(!get_dimensions_from_bytes(&[]).is_valid());
}

#[test]
fn test_soi_eoi_only() {
    assert!(!get_dimensions_from_bytes(&[0xFF, 0xD8, 0xFF, 0xD9]).is_valid());
}

#[test]
fn test_samples_round_trip() {
    for (data, _, expected) in samples() {
        assert_eq!(get_dimensions(&mut data.as_slice()), expected);
    }
}

#[test]
fn test_samples_read_only_header() {
    for (data, header_len, expected) in samples() {
        let mut reader = Bounded {
            data: &data,
            limit: header_len.max(SNIFF_LEN),
            served: 0,
        };
        assert_eq!(get_dimensions(&mut reader), expected);
    }
}

#[test]
fn test_truncated_samples_are_invalid() {
    for (data, header_len, _) in samples() {
        for len in 0..header_len {
            assert_eq!(
                get_dimensions_from_bytes(&data[..len]),
                ImageSize::invalid(),
                "{len}-byte prefix of {:02X?}",
                &data[..4]
            );
        }
    }
}

#[test]
fn test_unknown_format_reads_only_prefix() {
    let data = [b'R', b'I', b'F', b'F', 0, 0, 0, 0, b'W', b'E', b'B', b'P', 0, 0, 0, 0];
    let mut reader = Bounded {
        data: &data,
        limit: SNIFF_LEN,
        served: 0,
    };
    assert!(!get_dimensions(&mut reader).is_valid());
    assert!(reader.served <= SNIFF_LEN);
}

#[test]
fn test_probing_in_parallel() {
    let handles: Vec<_> = samples()
        .into_iter()
        .map(|(data, _, expected)| {
            std::thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(get_dimensions_from_bytes(&data), expected);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

proptest! {
    #[test]
    fn prop_arbitrary_bytes_never_panic(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let size = get_dimensions_from_bytes(&data);
        if let Some((w, h)) = size.dimensions() {
            prop_assert!(w > 0 && h > 0);
        }
    }

    #[test]
    fn prop_jpeg_bodies_never_panic(body in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut data = vec![0xFF, 0xD8];
        data.extend(body);
        let _ = get_dimensions_from_bytes(&data);
    }

    #[test]
    fn prop_header_prefix_is_invalid(index in 0usize..4, cut in 0usize..32) {
        let (data, header_len, _) = samples().swap_remove(index);
        let len = cut % header_len;
        prop_assert!(!get_dimensions_from_bytes(&data[..len]).is_valid());
    }
}
