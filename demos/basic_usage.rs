// ============================================================================
// Basic Usage Example
// ============================================================================

use alloy_primitives::U256;
use ledger_units::prelude::*;

fn main() {
    println!("=== Ledger Units Example ===\n");

    // Scale a raw on-ledger balance down to display units
    let balance = U256::from(1_234_567_891u64);
    println!("raw balance:     {} smallest units", balance);
    println!("display balance: {} units\n", scale_down(balance));

    // Scale user input back up, from any accepted representation
    println!("Scaling up user input...");
    for input in ["1234.567891", "1.5", "0.000001"] {
        match scale_up(input) {
            Ok(raw) => println!("  {:>12} units -> {} smallest units", input, raw),
            Err(err) => println!("  {:>12} units -> error: {}", input, err),
        }
    }

    // Floats agree with their string form
    let from_float = scale_up(1.5).unwrap();
    let from_text = scale_up("1.5").unwrap();
    assert_eq!(from_float, from_text);
    println!("\nfloat 1.5 and string \"1.5\" agree: {}", from_float);

    // Out-of-range and malformed inputs fail loudly
    println!("\nRejected inputs:");
    for input in ["-1", "not a number"] {
        if let Err(err) = scale_up(input) {
            println!("  {:?}: {}", input, err);
        }
    }
}
