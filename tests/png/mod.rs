use png_datastream::{png::*, ErrorKind, PngError, RGB8};
use proptest::prelude::*;
use walkdir::WalkDir;

#[test]
fn test_RawChunkIter_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    for _ in RawChunkIter::new(&v) {
      //
    }
    if let Ok(it) = RawChunkIter::from_png_bytes(&v) {
      for _ in it {
        //
      }
    }
  }
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in RawChunkIter::new(&v) {
      //
    }
  }
}

#[test]
fn test_Datastream_random_bytes_no_panics() {
  for _ in 0..100 {
    let v = super::rand_bytes(256);
    let _ = Datastream::from_bytes(&v);
    // with a good signature the random bytes reach the chunk decoder.
    let mut with_sig = PNG_SIGNATURE.to_vec();
    with_sig.extend_from_slice(&v);
    let _ = Datastream::from_bytes(&with_sig);
  }
}

#[test]
fn test_fixtures_round_trip() {
  let mut seen = 0;
  for entry in WalkDir::new("tests/fixtures").into_iter().filter_map(|e| e.ok()) {
    if !entry.file_type().is_file() {
      continue;
    }
    let name = entry.file_name().to_string_lossy().into_owned();
    let bytes = std::fs::read(entry.path()).unwrap();
    let result = Datastream::from_bytes(&bytes);
    if name.starts_with("ok_") {
      let ds = result.unwrap_or_else(|e| panic!("{name}: {e}"));
      assert_eq!(ds.to_bytes().unwrap(), bytes, "{name} didn't re-encode to the same bytes");
    } else {
      assert!(result.is_err(), "{name} should fail to decode");
    }
    seen += 1;
  }
  assert!(seen >= 8, "only found {seen} fixtures");
}

#[test]
fn test_bad_fixtures() {
  let decode = Datastream::from_bytes;
  assert!(matches!(
    decode(include_bytes!("../fixtures/bad_checksum.png")),
    Err(PngError::ChecksumMismatch { offset: 29, .. })
  ));
  assert_eq!(
    decode(include_bytes!("../fixtures/bad_trailing_data.png")),
    Err(PngError::TrailingData { offset: 67, remaining: 1 })
  );
  let err = decode(include_bytes!("../fixtures/bad_missing_iend.png")).unwrap_err();
  assert!(matches!(err, PngError::Truncated { offset: 55, .. }));
  assert_eq!(err.kind(), ErrorKind::Structural);
  assert_eq!(decode(include_bytes!("../fixtures/bad_signature.png")), Err(PngError::BadSignature));
  let err = decode(include_bytes!("../fixtures/bad_unknown_critical.png")).unwrap_err();
  assert_eq!(err.offset(), Some(33));
  assert_eq!(err.root(), &PngError::UnknownCriticalChunk { chunk_type: "ABCD".parse().unwrap() });
  assert_eq!(err.kind(), ErrorKind::UnknownCriticalChunk);
}

#[test]
fn test_indexed_fixture_contents() {
  let ds = Datastream::from_bytes(include_bytes!("../fixtures/ok_indexed_2x2_meta.png")).unwrap();
  assert_eq!(ds.len(), 10);

  let ihdr = ds.header().unwrap();
  assert_eq!((ihdr.width(), ihdr.height(), ihdr.bit_depth()), (2, 2, 8));
  assert_eq!(ihdr.color_type(), PngColorType::Index);
  assert!(!ihdr.is_interlaced());

  let palette = ds.palette().unwrap();
  assert_eq!(palette.entries(), &[RGB8::new(255, 0, 0), RGB8::new(0, 0, 255)]);

  let texts: Vec<(&str, &str)> = ds.text_entries().map(|t| (t.keyword(), t.text())).collect();
  assert_eq!(texts, [("Title", "checkerboard"), ("Comment", "café")]);

  let time = ds.time().unwrap();
  assert_eq!(
    (time.year(), time.month(), time.day(), time.hour(), time.minute(), time.second()),
    (2023, 6, 15, 12, 30, 0)
  );

  assert!((ds.gamma().unwrap().gamma() - 0.45455).abs() < 1e-9);
  let chrm = ds.chromaticities().unwrap();
  assert!((chrm.white.x() - 0.3127).abs() < 1e-9);
  assert!((chrm.white.y() - 0.329).abs() < 1e-9);
  assert!((chrm.red.x() - 0.64).abs() < 1e-9);
  assert!((chrm.blue.y() - 0.06).abs() < 1e-9);

  // the two IDATs together are one zlib stream of filtered scanlines.
  assert_eq!(ds.image_data().count(), 2);
  let zlib: Vec<u8> = ds.image_data().flatten().copied().collect();
  let scanlines = miniz_oxide::inflate::decompress_to_vec_zlib(&zlib).unwrap();
  assert_eq!(scanlines, [0, 0, 1, 0, 1, 0]);
}

#[test]
fn test_unknown_ancillary_fixture() {
  let bytes = include_bytes!("../fixtures/ok_rgba_unknown_ancillary.png");
  let ds = Datastream::from_bytes(bytes).unwrap();
  let generics: Vec<&GenericChunk> = ds.chunks().iter().filter_map(PngChunk::to_generic).collect();
  assert_eq!(generics.len(), 2);
  assert_eq!(generics[0].chunk_type().as_str(), "prVt");
  assert_eq!(generics[0].data(), b"\x01\x02\x03private");
  assert_eq!(generics[1].chunk_type().as_str(), "zzZz");
  assert!(generics[1].data().is_empty());
  assert_eq!(ds.to_bytes().unwrap(), bytes);
}

#[test]
fn test_encode_compressed_image() {
  // 3x2 RGB, every scanline with filter type 0
  let scanlines = [0, 255, 0, 0, 0, 255, 0, 0, 0, 255, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
  let zlib = miniz_oxide::deflate::compress_to_vec_zlib(&scanlines, 6);
  let (a, b) = zlib.split_at(zlib.len() / 2);
  let ds: Datastream = [
    PngChunk::from(IHDR::new(3, 2, 8, PngColorType::RGB, 0, 0, 0).unwrap()),
    PngChunk::from(IDAT::new(a.to_vec())),
    PngChunk::from(IDAT::new(b.to_vec())),
    PngChunk::IEND,
  ]
  .into_iter()
  .collect();
  let bytes = ds.to_bytes().unwrap();
  assert_eq!(bytes.len(), 8 + (12 + 13) + (24 + zlib.len()) + 12);

  let decoded = Datastream::from_bytes(&bytes).unwrap();
  assert_eq!(decoded.header().map(IHDR::bits_per_pixel), Some(24));
  let joined: Vec<u8> = decoded.image_data().flatten().copied().collect();
  assert_eq!(joined, zlib);
  assert_eq!(miniz_oxide::inflate::decompress_to_vec_zlib(&joined).unwrap(), scanlines);
}

const COLOR_TYPES: [PngColorType; 5] = [
  PngColorType::Y,
  PngColorType::RGB,
  PngColorType::Index,
  PngColorType::YA,
  PngColorType::RGBA,
];

fn arb_ihdr() -> impl Strategy<Value = IHDR> {
  (
    1..=u32::MAX,
    1..=u32::MAX,
    prop::sample::select(COLOR_TYPES.to_vec()),
    any::<prop::sample::Index>(),
    0..=1_u8,
  )
    .prop_map(|(width, height, color_type, depth, interlace)| {
      let bit_depth = *depth.get(color_type.allowed_bit_depths());
      IHDR::new(width, height, bit_depth, color_type, 0, 0, interlace).unwrap()
    })
}

fn arb_text() -> impl Strategy<Value = tEXt> {
  ("[ -~\\x{A1}-\\x{FF}]{1,79}", "[\\x{01}-\\x{FF}]{0,40}")
    .prop_map(|(keyword, text)| tEXt::new(keyword, text).unwrap())
}

fn arb_time() -> impl Strategy<Value = tIME> {
  (any::<u16>(), 1..=12_u8, 1..=31_u8, 0..=23_u8, 0..=59_u8, 0..=60_u8).prop_map(
    |(year, month, day, hour, minute, second)| {
      tIME::new(year, month, day, hour, minute, second).unwrap()
    },
  )
}

fn fixed(f: u32) -> f64 {
  f64::from(f) / 100_000.0
}

fn arb_gama() -> impl Strategy<Value = gAMA> {
  any::<u32>().prop_map(|f| gAMA::new(fixed(f)).unwrap())
}

fn arb_chrm() -> impl Strategy<Value = cHRM> {
  prop::array::uniform8(any::<u32>()).prop_map(|f| {
    let p = |x: u32, y: u32| ChromaPoint::new(fixed(x), fixed(y)).unwrap();
    cHRM::new(p(f[0], f[1]), p(f[2], f[3]), p(f[4], f[5]), p(f[6], f[7]))
  })
}

fn arb_plte() -> impl Strategy<Value = PLTE> {
  prop::collection::vec(any::<[u8; 3]>(), 0..=256)
    .prop_map(|entries| PLTE::new(entries.into_iter().map(RGB8::from).collect()))
}

fn arb_generic() -> impl Strategy<Value = GenericChunk> {
  ("[a-z][a-zA-Z][A-Z][a-zA-Z]", prop::collection::vec(any::<u8>(), 0..32)).prop_filter_map(
    "chunk type has a typed decoder",
    |(chunk_type, data)| {
      let chunk_type: ChunkType = chunk_type.parse().ok()?;
      if is_known_chunk_type(chunk_type) {
        return None;
      }
      GenericChunk::new(chunk_type, data).ok()
    },
  )
}

fn arb_body_chunk() -> impl Strategy<Value = PngChunk> {
  prop_oneof![
    arb_plte().prop_map(PngChunk::from),
    prop::collection::vec(any::<u8>(), 0..64).prop_map(|data| PngChunk::from(IDAT::new(data))),
    arb_text().prop_map(PngChunk::from),
    arb_time().prop_map(PngChunk::from),
    arb_chrm().prop_map(PngChunk::from),
    arb_gama().prop_map(PngChunk::from),
    arb_generic().prop_map(|g| PngChunk::try_from(g).unwrap()),
  ]
}

fn arb_datastream() -> impl Strategy<Value = Datastream> {
  (arb_ihdr(), prop::collection::vec(arb_body_chunk(), 0..8)).prop_map(|(ihdr, body)| {
    let mut chunks = vec![PngChunk::from(ihdr)];
    chunks.extend(body);
    chunks.push(PngChunk::IEND);
    Datastream::new(chunks)
  })
}

proptest! {
  #[test]
  fn prop_datastream_round_trip(ds in arb_datastream()) {
    let bytes = ds.to_bytes().unwrap();
    let decoded = Datastream::from_bytes(&bytes).unwrap();
    prop_assert_eq!(&decoded, &ds);
    prop_assert_eq!(decoded.to_bytes().unwrap(), bytes);
  }

  #[test]
  fn prop_any_bit_flip_is_caught(
    ds in arb_datastream(),
    which in any::<prop::sample::Index>(),
    bit in any::<prop::sample::Index>(),
  ) {
    let bytes = ds.to_bytes().unwrap();
    // the CRC covers everything in a chunk after its length field.
    let mut spans = Vec::new();
    let mut start = PngSignature::LEN;
    for chunk in ds.chunks() {
      spans.push((start + 4, start + chunk.length()));
      start += chunk.length();
    }
    let (lo, hi) = *which.get(&spans);
    let bit = bit.index((hi - lo) * 8);
    let mut damaged = bytes.clone();
    damaged[lo + bit / 8] ^= 1 << (bit % 8);
    let err = Datastream::from_bytes(&damaged).unwrap_err();
    prop_assert!(matches!(err, PngError::ChecksumMismatch { .. }), "{:?}", err);
    prop_assert_eq!(err.kind(), ErrorKind::Integrity);
  }
}
