//! Decimal color conversion command

use crate::color::parse_decimal;

pub fn execute(decimal: &str) -> anyhow::Result<()> {
    if let Ok(color) = parse_decimal(decimal) {
        println!("{color} \u{2192} {}", color.to_hex());
    } else {
        println!("Error: '{decimal}' is not a valid number");
        std::process::exit(1);
    }
    Ok(())
}
