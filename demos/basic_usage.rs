// ============================================================================
// Basic Usage Example
// ============================================================================

use std::sync::Arc;
use strict_decimal::prelude::*;

fn main() {
    println!("=== Strict Decimal Example ===\n");

    // Form input -> DECIMAL(12, 2) column
    println!("Parsing form input for DECIMAL(12, 2)...");
    for raw in ["1.234,56", "1 234,5", ",50", "50,", "  ", "1234.56", "1,234", "12a"] {
        match to_db(Some(raw), 12, 2) {
            Ok(Some(db)) => println!("  {:>10?} -> {}", raw, db),
            Ok(None) => println!("  {:>10?} -> (empty)", raw),
            Err(e) => println!("  {:>10?} -> rejected [{}]: {}", raw, e.kind(), e),
        }
    }

    // Stored value -> display
    println!("\nRendering stored values with scale 2...");
    for (thousands, decimal) in [(".", ","), (" ", ","), ("", ",")] {
        match from_db(Some("-1234567.5"), 2, thousands, decimal) {
            Ok(ui) => println!("  thousands={:?} decimal={:?}: {}", thousands, decimal, ui),
            Err(e) => println!("  rejected: {}", e),
        }
    }

    // Localized messages through a catalog
    println!("\nLocalized errors...");
    let catalog = CatalogTextLookup::new();
    catalog.extend(
        "validation",
        "number_format",
        [
            ("dot_decimal_not_supported", "Bitte ein Komma als Dezimaltrennzeichen verwenden."),
            ("too_many_fraction_digits", "Höchstens %SCALE% Nachkommastellen erlaubt."),
        ],
    );

    let formatter = NumberFormatterBuilder::new()
        .text_lookup(Arc::new(LoggingTextLookup::new(catalog)))
        .build()
        .unwrap();

    for raw in ["1234.56", "0,125"] {
        if let Err(e) = formatter.to_db(Some(raw), 10, 2) {
            println!("  {:?}: {}", raw, e);
        }
    }

    println!("\n=== Example Complete ===");
}
