#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: i32, height: i32, compression: u32, info_size: u32, masks: bool) -> Vec<u8> {
    let offset: u32 = 14 + 40 + if masks { 16 } else { 0 };
    let pixels = (width.unsigned_abs() * height.unsigned_abs() * 4) as usize;
    let mut bmp = vec![0u8; offset as usize + pixels];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(bmp.len() as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&offset.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&info_size.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&32u16.to_le_bytes()); // bpp
    bmp[30..34].copy_from_slice(&compression.to_le_bytes());
    if masks {
        bmp[54..58].copy_from_slice(&0x00FF_0000u32.to_le_bytes());
        bmp[58..62].copy_from_slice(&0x0000_FF00u32.to_le_bytes());
        bmp[62..66].copy_from_slice(&0x0000_00FFu32.to_le_bytes());
        bmp[66..70].copy_from_slice(&0xFF00_0000u32.to_le_bytes());
    }
    for (i, b) in bmp[offset as usize..].iter_mut().enumerate() {
        *b = i as u8;
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bitfields_2x2_topdown.bmp"), header(2, -2, 3, 56, true)).unwrap();
    fs::write(format!("{dir}/bitfields_3x1.bmp"), header(3, 1, 3, 56, true)).unwrap();
    fs::write(format!("{dir}/rgb_1x1.bmp"), header(1, 1, 0, 40, false)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut no_masks = header(1, 1, 3, 56, true);
    no_masks.truncate(60);
    fs::write(format!("{dir}/bitfields_cut_masks.bin"), no_masks).unwrap();

    println!("Generated seed corpus in {dir}/");
}
