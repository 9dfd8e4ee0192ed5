//! Indonesian number-to-words ("terbilang").

/// Values at or above this bound are written as plain digits.
pub const SPELLING_LIMIT: u64 = 1_000_000_000;

const UNITS: [&str; 12] = [
    "nol", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
    "sepuluh", "sebelas",
];

/// Spells out a non-negative integer in Indonesian.
///
/// Numbers are decomposed by scale: teens take "belas", tens "puluh",
/// hundreds "ratus" (100-199 use "seratus"), thousands "ribu" (1000-1999 use
/// "seribu") and millions "juta". Values of one billion or more fall back to
/// their decimal digits.
///
/// # Example
///
/// ```
/// use leave_engine::formatting::spell_number;
///
/// assert_eq!(spell_number(0), "nol");
/// assert_eq!(spell_number(11), "sebelas");
/// assert_eq!(spell_number(20), "dua puluh");
/// assert_eq!(spell_number(101), "seratus satu");
/// assert_eq!(spell_number(1000), "seribu");
/// assert_eq!(spell_number(2_500_000), "dua juta lima ratus ribu");
/// ```
pub fn spell_number(n: u64) -> String {
    match n {
        0..=11 => UNITS[n as usize].to_string(),
        12..=19 => format!("{} belas", spell_number(n - 10)),
        20..=99 => compound(spell_number(n / 10) + " puluh", n % 10),
        100..=199 => compound("seratus".to_string(), n - 100),
        200..=999 => compound(spell_number(n / 100) + " ratus", n % 100),
        1_000..=1_999 => compound("seribu".to_string(), n - 1_000),
        2_000..=999_999 => compound(spell_number(n / 1_000) + " ribu", n % 1_000),
        1_000_000..=999_999_999 => {
            compound(spell_number(n / 1_000_000) + " juta", n % 1_000_000)
        }
        _ => n.to_string(),
    }
}

/// Appends the spelled remainder unless it is zero.
fn compound(head: String, remainder: u64) -> String {
    if remainder == 0 {
        head
    } else {
        format!("{} {}", head, spell_number(remainder))
    }
}
