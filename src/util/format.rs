//! Display formatting helpers for Pokémon data.

use colored::Color;

/// Capitalize the first letter of a name (`pikachu` -> `Pikachu`).
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Zero-padded 3-digit display id (`25` -> `#025`).
pub fn format_id(id: u32) -> String {
    format!("#{:03}", id)
}

/// Height in meters from the API's decimeters.
pub fn format_height(decimeters: u32) -> String {
    format!("{:.1} m", decimeters as f64 / 10.0)
}

/// Weight in kilograms from the API's hectograms.
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", hectograms as f64 / 10.0)
}

/// Canonical color per Pokémon type (the classic palette).
pub fn type_color(type_name: &str) -> Color {
    match type_name.to_lowercase().as_str() {
        "normal" => Color::TrueColor { r: 0xa8, g: 0xa8, b: 0x78 },
        "fire" => Color::TrueColor { r: 0xf0, g: 0x80, b: 0x30 },
        "water" => Color::TrueColor { r: 0x68, g: 0x90, b: 0xf0 },
        "electric" => Color::TrueColor { r: 0xf8, g: 0xd0, b: 0x30 },
        "grass" => Color::TrueColor { r: 0x78, g: 0xc8, b: 0x50 },
        "ice" => Color::TrueColor { r: 0x98, g: 0xd8, b: 0xd8 },
        "fighting" => Color::TrueColor { r: 0xc0, g: 0x30, b: 0x28 },
        "poison" => Color::TrueColor { r: 0xa0, g: 0x40, b: 0xa0 },
        "ground" => Color::TrueColor { r: 0xe0, g: 0xc0, b: 0x68 },
        "flying" => Color::TrueColor { r: 0xa8, g: 0x90, b: 0xf0 },
        "psychic" => Color::TrueColor { r: 0xf8, g: 0x58, b: 0x88 },
        "bug" => Color::TrueColor { r: 0xa8, g: 0xb8, b: 0x20 },
        "rock" => Color::TrueColor { r: 0xb8, g: 0xa0, b: 0x38 },
        "ghost" => Color::TrueColor { r: 0x70, g: 0x58, b: 0x98 },
        "dragon" => Color::TrueColor { r: 0x70, g: 0x38, b: 0xf8 },
        "dark" => Color::TrueColor { r: 0x70, g: 0x58, b: 0x48 },
        "steel" => Color::TrueColor { r: 0xb8, g: 0xb8, b: 0xd0 },
        "fairy" => Color::TrueColor { r: 0xee, g: 0x99, b: 0xac },
        _ => Color::TrueColor { r: 0x77, g: 0x77, b: 0x77 },
    }
}
