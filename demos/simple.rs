//! Basic BMX parsing and serialization.
//!
//! Run with: cargo run --example simple

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "\
[ vertex ]
#version 330 core
void main() { }
[ fragment ]
#version 330 core
out vec4 color;
";

    // Parse into an ordered document
    let mut document = bmx::from_str(text)?;
    println!("blocks: {:?}", document.keys());
    println!("vertex shader:\n{}", document.get("vertex")?);

    // Replace one block's content in place
    document.set(
        "fragment".to_string(),
        "#version 330 core\nout vec4 color;\nvoid main() { color = vec4(1.0); }\n".to_string(),
    );

    // Serialize back to canonical text
    let rendered = bmx::to_string(&document)?;
    println!("serialized:\n{}", rendered);

    let back = bmx::from_str(&rendered)?;
    assert_eq!(back, document);
    println!("✓ Round-trip successful");

    Ok(())
}
