//! Behavioural contract of selection resolution.

use calc_session::{Batch, Resolution, Resolver};

#[test]
fn can_do_all_arithmetic_operations() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1 + 2"), "3");
    assert_eq!(resolver.resolve_default("1 - 2"), "-1");
    assert_eq!(resolver.resolve_default("3 * 2"), "6");
    assert_eq!(resolver.resolve_default("4 / 2"), "2");
}

#[test]
fn can_omit_whitespace() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1+2"), "3");
    assert_eq!(resolver.resolve_default("1-2"), "-1");
    assert_eq!(resolver.resolve_default("3*2"), "6");
    assert_eq!(resolver.resolve_default("4/2"), "2");
}

#[test]
fn can_have_leading_and_trailing_whitespace() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default(" 1+2 "), "3");
    assert_eq!(resolver.resolve_default("      \n      1+2  \n  \t"), "3");
}

#[test]
fn can_have_internal_newlines() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1+\n2"), "3");
}

#[test]
fn can_use_decimals_in_input() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1.5 * 2"), "3");
    assert_eq!(resolver.resolve_default(".5 + 1."), "1.5");
}

#[test]
fn can_get_decimal_answers() {
    let mut resolver = Resolver::new();
    // at least five places
    assert!(resolver.resolve_default("2 / 3").starts_with("0.66666"));
    assert_eq!(resolver.resolve_default("1 / 8"), "0.125");
}

#[test]
fn precedence_works() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1 + 2 * 3"), "7");
    assert_eq!(resolver.resolve_default("(1 + 2) * 3"), "9");
    assert_eq!(resolver.resolve_default("2 ^ 3 * 2"), "16");
    assert_eq!(resolver.resolve_default("2 ^ 3 ^ 2"), "512");
}

#[test]
fn can_use_previous_result() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("5+9"), "14");
    assert_eq!(resolver.resolve_default("$"), "14");
    assert_eq!(resolver.resolve_default("$+1"), "15");
    assert_eq!(resolver.resolve_default("$+1="), "15+1=16");
}

#[test]
fn can_use_index_of_selection() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve("# * 2", 0), "0");
    assert_eq!(resolver.resolve("# * 2", 1), "2");
    assert_eq!(resolver.resolve("# * 2", 2), "4");
    assert_eq!(resolver.resolve("$", 2), "4");
}

#[test]
fn can_append_result_to_expression() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1 + 1 ="), "1 + 1 =2");
    assert_eq!(resolver.resolve_default("5 * 5 = "), "5 * 5 = 25");
    assert_eq!(resolver.resolve_default("5\t*\t5\t=\n"), "5\t*\t5\t=\n25");
}

#[test]
fn does_not_evaluate_wrong_expression() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1 + 1 = X"), "1 + 1 = X");
    assert_eq!(resolver.resolve_default("2 * 2 X"), "2 * 2 X");
    assert_eq!(resolver.last_result(), "0");
}

#[test]
fn does_not_evaluate_multiple_expressions() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1 + 2 3 + 4"), "1 + 2 3 + 4");
    assert_eq!(resolver.resolve_default("1 + 2\n3 + 4"), "1 + 2\n3 + 4");
    assert_eq!(resolver.resolve_default("1 + 2 = 3 + 4"), "1 + 2 = 3 + 4");
}

#[test]
fn can_evaluate_big_natural_numbers() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1000000000000000+1"), "1000000000000001");
    assert_eq!(resolver.resolve_default("256*256*256*256"), "4294967296");
    assert_eq!(resolver.resolve_default("256*256*256*256*10"), "42949672960");
    assert_eq!(resolver.resolve_default("256^4"), "4294967296");
    assert_eq!(resolver.resolve_default("256*256*256*256*1.1"), "4724464025.6");
}

#[test]
fn hexadecimal_is_not_arithmetic() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("0x100+1"), "0x100+1");
}

#[test]
fn formatting_is_idempotent() {
    let mut resolver = Resolver::new();
    for text in [
        "2 / 3",
        "1 / 8",
        "256 * 1.1",
        "-7 * 3",
        "10 ^ 20",
        "2 ^ 0.5",
        "0.000001 ^ 0.5 / 30",
        "-(3 ^ 0.5) / 7",
        "10 ^ 0.5 * 10 ^ 15",
    ] {
        let answer = resolver.resolve_default(text);
        assert_eq!(resolver.resolve_default(&answer), answer, "re-resolving {:?}", answer);
    }
}

#[test]
fn failed_evaluation_echoes_substituted_text() {
    let mut resolver = Resolver::new();
    resolver.resolve_default("2 * 4");
    assert_eq!(resolver.resolve("($ + #", 1), "(8 + 1");
    assert_eq!(resolver.resolve_default("* 3"), "* 3");
    assert_eq!(resolver.resolve_default("   "), "   ");
    assert_eq!(resolver.last_result(), "8");
}

#[test]
fn negative_previous_result_substitutes_cleanly() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1 - 5"), "-4");
    assert_eq!(resolver.resolve_default("2 - $"), "6");
    assert_eq!(resolver.resolve_default("$ ^ 2"), "36");
}

#[test]
fn detailed_outcomes_classify_inputs() {
    let mut resolver = Resolver::new();
    assert!(matches!(resolver.resolve_detailed("1+1", 0), Resolution::Evaluated { append: false, .. }));
    assert!(matches!(resolver.resolve_detailed("1+1=", 0), Resolution::Evaluated { append: true, .. }));
    assert!(matches!(resolver.resolve_detailed("one", 0), Resolution::Rejected { .. }));
    assert!(matches!(resolver.resolve_detailed("1 1", 0), Resolution::Failed { .. }));
}

#[test]
fn batch_mirrors_an_editor_action() {
    let mut resolver = Resolver::new();
    resolver.resolve_default("99");

    let replacements = {
        let mut batch = Batch::new(&mut resolver);
        batch.resolve_carets([Some("# + 1"), None, Some("$ * 10 ="), Some("total: $")])
    };

    assert_eq!(
        replacements,
        vec![
            Some("1".to_string()),
            None,
            Some("1 * 10 =10".to_string()),
            Some("total: $".to_string()),
        ]
    );
    assert_eq!(resolver.last_result(), "10");
}

#[test]
fn fractional_exponent_answer_fits_the_digit_budget() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("0.000001 ^ 0.5 / 30"), "0.00003333333333333334");
    assert_eq!(resolver.resolve_default("2 ^ 0.5"), "1.4142135623730951");
}

#[test]
fn long_flat_selections_resolve() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default(&vec!["1"; 100_000].join("+")), "100000");
    assert_eq!(resolver.resolve_default(&vec!["$"; 3].join(" - ")), "-100000");
    // 2 / 2^9999 rounds to zero within the digit budget
    assert_eq!(resolver.resolve_default(&vec!["2"; 10_000].join(" / ")), "0");

    let product = format!("{} =", vec!["1.5"; 2_000].join(" * "));
    let output = resolver.resolve_default(&product);
    assert!(output.len() > product.len());
    assert!(output.starts_with(&product));
}

#[test]
fn many_flat_powers_resolve() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default(&vec!["1^2"; 300].join(" + ")), "300");
    assert_eq!(resolver.resolve_default(&vec!["2^-1"; 300].join(" * ")), "0");
    assert_eq!(resolver.resolve_default(&vec!["(2^1^3)"; 300].join(" - ")), "-596");
}

#[test]
fn unicode_whitespace_is_accepted() {
    let mut resolver = Resolver::new();
    assert_eq!(resolver.resolve_default("1\u{a0}+\u{a0}2"), "3");
    assert_eq!(resolver.resolve_default("2\u{3000}*\u{3000}3\u{a0}="), "2\u{3000}*\u{3000}3\u{a0}=6");
}
