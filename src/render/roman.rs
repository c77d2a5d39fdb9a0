const NUMERALS: &[(usize, &str)] = &[
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

/// Formats a 1-based index as a Roman numeral using subtractive notation.
///
/// Zero yields an empty string.
pub fn to_roman(mut n: usize) -> String {
    let mut out = String::new();
    for &(value, symbol) in NUMERALS {
        while n >= value {
            n -= value;
            out.push_str(symbol);
        }
    }
    out
}
