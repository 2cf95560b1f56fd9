use bigcalc::calculator::{
    CalcError, Calculator, evaluate, evaluate_strict, format_magnitude, normalize,
};

fn press_all(calc: &mut Calculator, expression: &str) {
    calc.clear();
    calc.append(expression);
}

#[test]
fn test_unit_suffix_expansion() {
    let zeros = [("K", 3), ("M", 6), ("G", 9), ("T", 12), ("P", 15), ("E", 18)];
    for n in [0u64, 1, 7, 42, 999, 12345] {
        for (suffix, count) in zeros {
            let expected = format!("{}{}", n, "0".repeat(count));
            assert_eq!(normalize(&format!("{n}{suffix}")), expected);
            assert_eq!(normalize(&format!("{n}{}", suffix.to_lowercase())), expected);
        }
    }
}

#[test]
fn test_error_classification() {
    assert_eq!(evaluate(&normalize("1/0")), Err(CalcError::DivideByZero));
    assert_eq!(evaluate(&normalize("2+")), Err(CalcError::InvalidInput));
    assert_eq!(evaluate_strict(&normalize("1.5+2")), Err(CalcError::DecimalsInvalid));
}

#[test]
fn test_formatting() {
    assert_eq!(format_magnitude(999.0), "999 ");
    assert_eq!(format_magnitude(1000.0), "1000 ");
    assert_eq!(format_magnitude(1001.0), "1.001 K");
    assert_eq!(format_magnitude(1_500_000.0), "1.5 M");
    assert_eq!(format_magnitude(2000.0), "2 K");
    assert!(format_magnitude(1e22).ends_with(" ?"));
}

#[test]
fn test_dialog_operations() {
    let mut calc = Calculator::new();

    press_all(&mut calc, "7x8");
    assert_eq!(calc.equals(), "56 ");

    press_all(&mut calc, "4");
    assert_eq!(calc.square(), "16 ");

    press_all(&mut calc, "9");
    assert_eq!(calc.square_root(), "3 ");

    press_all(&mut calc, "10÷0");
    assert_eq!(calc.equals(), "Divide By Zero!");

    press_all(&mut calc, "3.5");
    assert_eq!(calc.equals(), "Decimals invalid");
}

#[test]
fn test_square_and_root_allow_decimals() {
    let mut calc = Calculator::new();

    press_all(&mut calc, "2.5");
    assert_eq!(calc.square(), "6.25 ");

    press_all(&mut calc, "2.25");
    assert_eq!(calc.square_root(), "1.5 ");
}

#[test]
fn test_mixed_units() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "1M - 250K");
    assert_eq!(calc.equals(), "750 K");

    press_all(&mut calc, "(2G + 500M) ÷ 5");
    assert_eq!(calc.equals(), "500 M");

    press_all(&mut calc, "10K % 3");
    assert_eq!(calc.equals(), "1 ");
}
