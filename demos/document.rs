//! Building and editing documents in code with the bmx! macro.
//!
//! Run with: cargo run --example document

use bmx::bmx;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut document = bmx! {
        "title" => "Weekly report\n",
        "summary" => "All systems nominal.\n",
        "details" => "Nothing to add.\n",
    };

    // Insertion order is iteration order
    println!("blocks: {:?}", document.keys());

    // Updating keeps the block's position
    document.set("summary".to_string(), "One incident, resolved.\n".to_string());
    assert_eq!(document.keys(), vec!["title", "summary", "details"]);

    // Removal keeps the order of the survivors
    document.remove("details")?;
    assert_eq!(document.keys(), vec!["title", "summary"]);

    // Write to any io::Write sink
    let mut buffer = Vec::new();
    bmx::to_writer(&mut buffer, &document)?;
    println!("{}", String::from_utf8(buffer)?);

    Ok(())
}
