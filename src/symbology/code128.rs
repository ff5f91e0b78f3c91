//! Code 128 encoder.
//!
//! Supports:
//! - Code sets A/B/C with automatic selection and CODE A/B/C switches.
//! - Mod-103 checksum.
//! - STOP pattern and 10-module quiet zones on both sides.
//!
//! Alphabet is ASCII 0..=127. Runs of digits are packed into set C when
//! that saves space: at the start for 4+ digits (or an all-digit value of
//! even length), in the middle for 6+ digits, at the end for 4+ digits.

use super::{Barcode, EncodeError, Symbology};

/// Bar/space widths for symbol values 0..=105, 6 elements summing to 11.
const PATTERNS: [&[u8; 6]; 106] = [
    b"212222", b"222122", b"222221", b"121223", b"121322", b"131222", b"122213", b"122312",
    b"132212", b"221213", b"221312", b"231212", b"112232", b"122132", b"122231", b"113222",
    b"123122", b"123221", b"223211", b"221132", b"221231", b"213212", b"223112", b"312131",
    b"311222", b"321122", b"321221", b"312212", b"322112", b"322211", b"212123", b"212321",
    b"232121", b"111323", b"131123", b"131321", b"112313", b"132113", b"132311", b"211313",
    b"231113", b"231311", b"112133", b"112331", b"132131", b"113123", b"113321", b"133121",
    b"313121", b"211331", b"231131", b"213113", b"213311", b"213131", b"311123", b"311321",
    b"331121", b"312113", b"312311", b"332111", b"314111", b"221411", b"431111", b"111224",
    b"111422", b"121124", b"121421", b"141122", b"141221", b"112214", b"112412", b"122114",
    b"122411", b"142112", b"142211", b"241211", b"221114", b"413111", b"241112", b"134111",
    b"111242", b"121142", b"121241", b"114212", b"124112", b"124211", b"411212", b"421112",
    b"421211", b"212141", b"214121", b"412121", b"111143", b"111341", b"131141", b"114113",
    b"114311", b"411113", b"411311", b"113141", b"114131", b"311141", b"411131", b"211412",
    b"211214", b"211232",
];

/// STOP pattern (7 elements, sum 13).
const STOP: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];

/// Light modules on each side of the symbol.
pub const QUIET_ZONE: usize = 10;

const CODE_C: u8 = 99;
const CODE_B: u8 = 100;
const CODE_A: u8 = 101;
const START_A: u8 = 103;
const START_B: u8 = 104;
const START_C: u8 = 105;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CodeSet {
    A,
    B,
    C,
}

/// The Code 128 symbology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Code128;

impl Symbology for Code128 {
    fn name(&self) -> &'static str {
        "CODE128"
    }

    fn encode(&self, value: &str) -> Result<Barcode, EncodeError> {
        let bytes = validate(value)?;
        let mut symbols = plan_symbols(&bytes);
        symbols.push(checksum(&symbols));

        Ok(Barcode::new(modules_for(&symbols), symbols, value))
    }
}

/// Check the alphabet and return the value as ASCII bytes.
fn validate(value: &str) -> Result<Vec<u8>, EncodeError> {
    if value.is_empty() {
        return Err(EncodeError::Empty);
    }

    value
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            if ch.is_ascii() {
                Ok(ch as u8)
            } else {
                Err(EncodeError::UnsupportedCharacter { ch, position })
            }
        })
        .collect()
}

fn digit_run(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Whether set A is needed for this byte (control characters).
fn needs_a(b: u8) -> bool {
    b < 32
}

/// Whether set B is needed for this byte (lowercase and friends).
fn needs_b(b: u8) -> bool {
    b >= 96
}

fn value_in(set: CodeSet, b: u8) -> u8 {
    match set {
        CodeSet::A if b < 32 => b + 64,
        CodeSet::A | CodeSet::B => b - 32,
        CodeSet::C => unreachable!("set C values are digit pairs"),
    }
}

fn pair_value(hi: u8, lo: u8) -> u8 {
    (hi - b'0') * 10 + (lo - b'0')
}

/// Start code plus data symbols, without checksum.
fn plan_symbols(bytes: &[u8]) -> Vec<u8> {
    let n = bytes.len();
    let mut symbols = Vec::with_capacity(n + 4);

    let leading = digit_run(bytes, 0);
    let mut set = if leading >= 4 || (leading == n && n % 2 == 0) {
        symbols.push(START_C);
        CodeSet::C
    } else if needs_a(bytes[0]) {
        symbols.push(START_A);
        CodeSet::A
    } else {
        symbols.push(START_B);
        CodeSet::B
    };

    let mut i = 0;
    while i < n {
        if set == CodeSet::C {
            if digit_run(bytes, i) >= 2 {
                symbols.push(pair_value(bytes[i], bytes[i + 1]));
                i += 2;
            } else if needs_a(bytes[i]) {
                symbols.push(CODE_A);
                set = CodeSet::A;
            } else {
                symbols.push(CODE_B);
                set = CodeSet::B;
            }
            continue;
        }

        let run = digit_run(bytes, i);
        if run >= 6 || (run >= 4 && i + run == n) {
            if run % 2 == 1 {
                // Odd run: spend one digit in the current set first
                symbols.push(value_in(set, bytes[i]));
                i += 1;
            }
            symbols.push(CODE_C);
            set = CodeSet::C;
            continue;
        }

        let b = bytes[i];
        if set == CodeSet::B && needs_a(b) {
            symbols.push(CODE_A);
            set = CodeSet::A;
        } else if set == CodeSet::A && needs_b(b) {
            symbols.push(CODE_B);
            set = CodeSet::B;
        }
        symbols.push(value_in(set, b));
        i += 1;
    }

    symbols
}

/// Mod-103 checksum: start value plus position-weighted data values.
fn checksum(symbols: &[u8]) -> u8 {
    let sum = symbols
        .iter()
        .enumerate()
        .map(|(i, &v)| u32::from(v) * (i as u32).max(1))
        .sum::<u32>();
    (sum % 103) as u8
}

/// Expand symbol values to a module pattern: quiet + symbols + STOP + quiet.
fn modules_for(symbols: &[u8]) -> Vec<bool> {
    let widths = symbols
        .iter()
        .flat_map(|&v| PATTERNS[usize::from(v)].iter().map(|d| d - b'0'))
        .chain(STOP);

    let mut modules = vec![false; QUIET_ZONE];
    let mut dark = true;
    for w in widths {
        modules.extend(std::iter::repeat_n(dark, usize::from(w)));
        dark = !dark;
    }
    modules.extend(std::iter::repeat_n(false, QUIET_ZONE));
    modules
}
