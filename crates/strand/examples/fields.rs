//! Splits a comma-separated line, trims the fields, and prints them with
//! terminal colors.
//!
//! ```sh
//! cargo run --example fields
//! ```

use strand::{Color, Strand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let line = Strand::new(b" Green,Blue , White,,Black ")?;

    let fields = line.split_byte(b',')?;
    let trimmed = fields.map(Strand::trim)?;

    for (i, field) in trimmed.iter().enumerate() {
        let label = if field.is_empty() {
            Strand::colored(b"<empty>", Color::Red)?
        } else {
            Strand::colored(field, Color::Green)?
        };
        println!("field {i}: {label}");
    }

    let separator = Strand::new(b";")?;
    let joined = trimmed.reduce(
        |acc, field| {
            if acc.is_empty() {
                field.try_clone()
            } else {
                acc.concat(&separator)?.concat(field)
            }
        },
        None,
    )?;
    println!("rejoined: {joined}");

    Ok(())
}
