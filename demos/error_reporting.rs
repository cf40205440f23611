//! What BMX syntax errors look like.
//!
//! Run with: cargo run --example error_reporting

fn main() {
    let samples = [
        ("unterminated header", "[ config\nwidth = 800\n"),
        ("empty header name", "[   ]\ncontent\n"),
        ("duplicate block name", "[ a ]\nx\n[ a ]\ny\n"),
    ];

    for (label, text) in samples {
        println!("--- {label} ---");
        match bmx::from_str(text) {
            Ok(document) => println!("parsed {} blocks", document.len()),
            Err(err) => {
                if let Some((line, col)) = err.location() {
                    println!("failed at {line}:{col}");
                }
                println!("{err}\n");
            }
        }
    }
}
