//! Random decimal input generation.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Leading bytes `str::trim_start` and both custom parsers skip.
const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\x0B', '\x0C', '\r'];

/// Generate `count` decimal strings of 1 to `max_digits` significant digits.
///
/// Lengths are uniform so short and long inputs weigh equally. The
/// significant digits never start with '0', but about one string in sixteen
/// carries a run of leading zeros long enough to span several registers.
/// Others get leading whitespace, a '+' or a '-'.
pub fn generate_corpus(count: usize, max_digits: usize, seed: u64) -> Vec<String> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut corpus = Vec::with_capacity(count);

    for _ in 0..count {
        let digits = rng.gen_range(1..=max_digits);
        let mut text = String::with_capacity(digits + 2);

        match rng.gen_range(0..16) {
            0 | 1 => {
                for _ in 0..rng.gen_range(1..=3) {
                    text.push(WHITESPACE[rng.gen_range(0..WHITESPACE.len())]);
                }
            }
            2 => text.push('+'),
            3 => text.push('-'),
            4 => text.push_str(&"0".repeat(rng.gen_range(1..=40))),
            _ => {}
        }

        let first = if digits == 1 {
            rng.gen_range(b'0'..=b'9')
        } else {
            rng.gen_range(b'1'..=b'9')
        };
        text.push(first as char);
        for _ in 1..digits {
            text.push(rng.gen_range(b'0'..=b'9') as char);
        }

        corpus.push(text);
    }

    corpus
}

/// Inputs every parser must reject, signed or not, one per error kind and
/// position.
pub fn malformed_inputs() -> Vec<&'static str> {
    vec![
        "",
        "   ",
        "\x0B",
        "+",
        "-",
        "--1",
        "+-1",
        "12a",
        "1 2",
        "9/",
        "\x0842",
        "++3",
        "0x10",
        "99999999999999999999",
        "1234567890123456789012345678901234567890",
    ]
}

/// Total number of digit bytes in the corpus.
pub fn count_digits(corpus: &[String]) -> usize {
    corpus
        .iter()
        .map(|s| s.bytes().filter(u8::is_ascii_digit).count())
        .sum()
}
