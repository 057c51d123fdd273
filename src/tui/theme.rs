//! Terminal colors for destination tints.
//!
//! True-color values follow the iOS system palette. The ANSI fallback maps
//! each tint to the nearest of the 16 named colors.

use ratatui::style::Color;

use crate::core::destination::Tint;

pub fn tint_color(tint: Tint, true_color: bool) -> Color {
    if true_color {
        match tint {
            Tint::Blue => Color::Rgb(0, 122, 255),
            Tint::Indigo => Color::Rgb(88, 86, 214),
            Tint::Yellow => Color::Rgb(255, 204, 0),
            Tint::Purple => Color::Rgb(175, 82, 222),
            Tint::Gray => Color::Rgb(142, 142, 147),
            Tint::Red => Color::Rgb(255, 59, 48),
        }
    } else {
        match tint {
            Tint::Blue => Color::Blue,
            Tint::Indigo => Color::LightBlue,
            Tint::Yellow => Color::Yellow,
            Tint::Purple => Color::Magenta,
            Tint::Gray => Color::Gray,
            Tint::Red => Color::Red,
        }
    }
}

/// Foreground that stays readable on top of `tint`.
pub fn caption_color(tint: Tint) -> Color {
    match tint {
        Tint::Yellow | Tint::Gray => Color::Black,
        _ => Color::White,
    }
}
