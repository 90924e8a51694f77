//! Placeholder substitution for user-configured message & channel name templates.

/// Replaces each `{key}` in `template` with its value.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{}}}", key), value)
        })
}

/// Formats a 1-based channel index in the given numbering style.
///
/// Supported styles are `number`, `letter`, `superscript`, `subscript` and `roman`.
/// Unknown styles fall back to plain numbers.
pub fn format_index(index: u32, style: &str) -> String {
    match style {
        "letter" => letters(index),
        "superscript" => map_digits(index, ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹']),
        "subscript" => map_digits(index, ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉']),
        "roman" => roman(index),
        _ => index.to_string(),
    }
}

fn map_digits(index: u32, digits: [char; 10]) -> String {
    index
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| digits[d as usize]))
        .collect()
}

/// 1 -> A, 26 -> Z, 27 -> AA
fn letters(mut index: u32) -> String {
    let mut out = Vec::new();
    while index > 0 {
        index -= 1;
        out.push((b'A' + (index % 26) as u8) as char);
        index /= 26;
    }
    out.iter().rev().collect()
}

fn roman(mut index: u32) -> String {
    const TABLE: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for (value, symbol) in TABLE {
        while index >= value {
            out.push_str(symbol);
            index -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_placeholders() {
        let text = render(
            "Welcome {user} to {server}, {user}!",
            &[("user", "Ann"), ("server", "Home")],
        );
        assert_eq!(text, "Welcome Ann to Home, Ann!");
    }

    #[test]
    fn leaves_unknown_placeholders() {
        assert_eq!(render("{level} {user}", &[("user", "A")]), "{level} A");
    }

    #[test]
    fn formats_numbering_styles() {
        assert_eq!(format_index(3, "number"), "3");
        assert_eq!(format_index(1, "letter"), "A");
        assert_eq!(format_index(28, "letter"), "AB");
        assert_eq!(format_index(12, "superscript"), "¹²");
        assert_eq!(format_index(40, "subscript"), "₄₀");
        assert_eq!(format_index(14, "roman"), "XIV");
        assert_eq!(format_index(7, "unknown"), "7");
    }
}
