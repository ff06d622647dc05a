/// Maps subtractive representation of numerals to longer additive notation.
/// Ordered to enable swapping largest numbers first; a later entry must never
/// see pieces of an earlier one.
pub const SUBTRACTIVE_TO_ADDITIVE: [(&str, &str); 6] = [
    ("CM", "DCCCC"),
    ("CD", "CCCC"),
    ("XC", "LXXXX"),
    ("XL", "XXXX"),
    ("IX", "VIIII"),
    ("IV", "IIII"),
];

/// Maps additive runs to their single-symbol or subtractive reduction.
/// One reduction can expose another (folding "IIIII" into "V" may enable
/// "VV" into "X"), so these are applied to fixpoint.
pub const REDUCTIONS: [(&str, &str); 9] = [
    ("IIIII", "V"),
    ("VIV", "IX"),
    ("VV", "X"),
    ("XXXXX", "L"),
    ("LXL", "XC"),
    ("LL", "C"),
    ("CCCCC", "D"),
    ("DCD", "CM"),
    ("DD", "M"),
];
