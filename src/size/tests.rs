use super::*;

struct Case {
    name: &'static str,
    number: &'static str,
    units: &'static [&'static str],
    multiplier: u64,
    bytes: u128,
}

fn compile_cases() -> Vec<Case> {
    vec![
        Case {
            name: "without_unit",
            number: "1024",
            units: &[""],
            multiplier: 1,
            bytes: 1024,
        },
        Case {
            name: "bytes",
            number: "10",
            units: &["b", "B", "bytes", "Bytes"],
            multiplier: 1,
            bytes: 10,
        },
        Case {
            name: "kilo",
            number: "10",
            units: &["k", "kb", "kib", "ki", "K", "KB", "KiB", "KIB", "Ki"],
            multiplier: 1 << 10,
            bytes: 10 << 10,
        },
        Case {
            name: "mega",
            number: "10",
            units: &["m", "mb", "mib", "mi", "M", "MB", "MiB", "MIB", "Mi"],
            multiplier: 1 << 20,
            bytes: 10 << 20,
        },
        Case {
            name: "giga",
            number: "10",
            units: &["g", "gb", "gib", "gi", "G", "GB", "GiB", "GIB", "Gi"],
            multiplier: 1 << 30,
            bytes: 10 << 30,
        },
        Case {
            name: "tera",
            number: "10",
            units: &["t", "tb", "tib", "ti", "T", "TB", "TiB", "TIB", "Ti"],
            multiplier: 1 << 40,
            bytes: 10 << 40,
        },
        Case {
            name: "peta",
            number: "10",
            units: &["p", "pb", "pib", "pi", "P", "PB", "PiB", "PIB", "Pi"],
            multiplier: 1 << 50,
            bytes: 10 << 50,
        },
        Case {
            name: "exa",
            number: "10",
            units: &["e", "eb", "eib", "ei", "E", "EB", "EiB", "EIB", "Ei"],
            multiplier: 1 << 60,
            bytes: 10 << 60,
        },
        Case {
            name: "fractional",
            number: "1000.500",
            units: &["MB"],
            multiplier: 1 << 20,
            bytes: 1000 * (1 << 20) + (1 << 19),
        },
    ]
}

#[test]
fn test_compile_table() {
    for case in compile_cases() {
        for unit in case.units {
            let input = format!("{}{}", case.number, unit);
            let size = compile(&input)
                .unwrap_or_else(|e| panic!("{} ({:?}): unexpected error: {}", case.name, input, e));

            assert_eq!(size.raw_input(), input, "{}", case.name);
            assert_eq!(size.multiplier(), case.multiplier, "{} ({:?})", case.name, input);
            assert_eq!(size.exact_value(), case.bytes, "{} ({:?})", case.name, input);
        }
    }
}

#[test]
fn test_units_without_number_fail() {
    for unit in ["b", "B", "bytes", "Bytes", "KiB"] {
        assert!(compile(unit).is_err(), "{:?}", unit);
    }
}

#[test]
fn test_validate_unit_agrees_with_compile() {
    let tokens = [
        "b", "B", "bytes", "BYTES", "k", "Ki", "KiB", "kb", "i", "MB", "mb", "GiB", "pib", "MBN",
        "Bites", "MMB", "kk", "bi", "x", "iB", "ib ", "KiBB",
    ];

    for token in tokens {
        let input = format!("7{}", token);
        assert_eq!(
            validate_unit(token),
            compile(&input).is_ok(),
            "token {:?}",
            token
        );
    }
}

#[test]
fn test_grammar_membership_matches_compile_outcome() {
    let inputs = [
        "0", "10", "007", ".5", "0.5", "12.75GiB", ".25k", "1bytes", "3Ei", "1i", "", ".", "5.",
        "1..5", "-1", "+1", "1e3", "1_000", "1,5M", "10 MB", "\t10MB", "10MB\n", "MB", "1MiBs",
        "1KiB1", "١٢MB",
    ];

    for input in inputs {
        assert_eq!(
            is_size_expression(input),
            compile(input).is_ok(),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_literals_beyond_decimal_range_are_the_only_grammar_exception() {
    // well-formed, but larger than the 96-bit exact representation
    for input in ["100000000000000000000000000000", "100000000000000000000000000000KB"] {
        assert!(is_size_expression(input), "input {:?}", input);
        assert_eq!(
            compile(input),
            Err(ParseError::InvalidNumber(input.to_string()))
        );
    }

    // in range as a literal, out of range once scaled
    let input = "100000000000E";
    assert!(is_size_expression(input));
    assert_eq!(
        compile(input),
        Err(ParseError::InvalidNumber(input.to_string()))
    );

    // largest integer that still fits
    assert!(compile("79228162514264337593543950335").is_ok());
}

#[test]
fn test_raw_input_round_trip() {
    for input in ["1", "1.50MB", "0007kib", ".5Ei", "3bytes"] {
        assert_eq!(compile(input).unwrap().raw_input(), input);
    }
}

#[test]
fn test_every_multiplier_is_known() {
    for case in compile_cases() {
        for unit in case.units {
            let size = compile(&format!("1{}", unit)).unwrap();
            assert!(UNIT_MULTIPLIERS.contains(&size.multiplier()));
        }
    }
}

#[test]
fn test_format_then_compile_recovers_value() {
    let inputs = ["512", "2MB", "1.5GiB", "3TB", "768P", "7EB", "1536KiB"];

    for input in inputs {
        let original = compile(input).unwrap();
        let rendered = format_size(&original, 3).unwrap();
        let reparsed = compile(&rendered).unwrap();

        // three digits of the rendered unit
        let resolution = reparsed.multiplier() as f64 / 1000.0;
        let delta = (reparsed.exact_value() as f64 - original.exact_value() as f64).abs();
        assert!(
            delta <= resolution,
            "{} -> {} drifted by {}",
            input,
            rendered,
            delta
        );
    }
}
