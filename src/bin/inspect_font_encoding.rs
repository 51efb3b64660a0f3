//! Diagnostic tool to inspect how a TrueType font encodes text
//!
//! Loads a font, prints its encoder summary, then shows the Identity-H
//! bytes, glyph names and decoded round trip for a sample string.
//!
//! Usage:
//!   cargo run --bin inspect_font_encoding -- <font.ttf> [text]
//!   RUST_LOG=debug cargo run --bin inspect_font_encoding -- font.ttf "Grüße"

use pdf_textenc::fonts::truetype_parser::load_glyph_table;
use pdf_textenc::{Result, TextEncoder, TrueTypeFontEncoder};
use std::env;
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <font_file> [text]", args[0]);
        eprintln!("Example: {} DejaVuSans.ttf \"Hello, World\"", args[0]);
        std::process::exit(1);
    }

    let font_path = &args[1];
    let text = args.get(2).map(String::as_str).unwrap_or("Hello, World");

    let data = fs::read(font_path)?;
    let table = load_glyph_table(&data)?;

    println!("{}", "=".repeat(80));
    println!("FONT ENCODING INSPECTOR");
    println!("{}", "=".repeat(80));
    println!("File: {}", font_path);
    println!(
        "PostScript name: {}",
        table.postscript_name.as_deref().unwrap_or("(none)")
    );
    println!("Glyphs: {}", table.num_glyphs);
    println!();

    let encoder = TrueTypeFontEncoder::new(table.runes);
    println!("{}", encoder);
    println!("CMap: {}", encoder.cmap().name());
    println!();

    let bytes = encoder.encode(text);
    print!("Encoded: <");
    for byte in &bytes {
        print!("{:02X}", byte);
    }
    println!(">");
    println!();

    println!(
        "{:<8} {:<10} {:<8} {:<12} {:<12}",
        "Char", "Unicode", "Code", "Rune name", "Code name"
    );
    println!("{}", "-".repeat(80));
    for ch in text.chars() {
        let code = encoder.rune_to_charcode(ch);
        let code_str = code
            .map(|c| format!("{:04X}", c))
            .unwrap_or_else(|| "----".to_string());
        let rune_name = encoder.rune_to_glyph(ch).unwrap_or_default();
        let code_name = code
            .and_then(|c| encoder.charcode_to_glyph(c))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} U+{:<8X} {:<8} {:<12} {:<12}",
            format!("{:?}", ch),
            ch as u32,
            code_str,
            rune_name,
            code_name
        );
    }
    println!();

    let decoded = encoder.decode(&bytes);
    println!("Decoded: {:?}", decoded);
    if decoded == text {
        println!("Round trip: OK");
    } else {
        let missing = text
            .chars()
            .filter(|&ch| encoder.rune_to_charcode(ch).is_none())
            .count();
        println!("Round trip: LOSSY ({} character(s) not in font)", missing);
    }

    Ok(())
}
