use std::{
    f64::consts::{FRAC_PI_2, PI},
    fs,
};

use alg::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::core::Interpreter,
        options::{Associativity, Options},
    },
    parse, run, run_script, run_script_with,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "alg"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                               panic!("Failed to read {expected_path:?}: {e}")
                                                           });

        let mut interpreter = Interpreter::new();
        let results = run_script(&source, &mut interpreter).unwrap_or_else(|e| {
                                                                panic!("Script {path:?} failed: {e}")
                                                            });
        let output: Vec<String> = results.iter()
                                         .map(|(name, value)| format!("{name} = {value:.6}"))
                                         .collect();
        let expected: Vec<&str> = expected.lines().collect();

        assert_eq!(output, expected, "Unexpected output from {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn eval(line: &str) -> f64 {
    let mut env = Environment::new();
    let statement = parse(line).unwrap_or_else(|e| panic!("Failed to parse {line:?}: {e}"));
    run(&statement, &mut env).unwrap_or_else(|e| panic!("Failed to run {line:?}: {e}"))
}

fn run_lines(lines: &[&str]) -> Interpreter {
    let mut interpreter = Interpreter::new();
    for line in lines {
        let statement = parse(line).unwrap();
        interpreter.run(&statement).unwrap();
    }
    interpreter
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 4.0 * f64::EPSILON * expected.abs().max(1.0);
    assert!((actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}");
}

#[test]
fn literals_round_trip() {
    for literal in ["0", "7", "42.5", "0.125", "1234567.890625", "3."] {
        let expected: f64 = literal.parse().unwrap();
        let mut env = Environment::new();
        run(&parse(&format!("x = {literal}")).unwrap(), &mut env).unwrap();
        assert_eq!(env.get("x").unwrap().to_bits(), expected.to_bits());
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval("x = 5 + 2"), 7.0);
    assert_eq!(eval("x = 5 - 2"), 3.0);
    assert_eq!(eval("x = 5 * 2"), 10.0);
    assert_eq!(eval("x = 5 / 2"), 2.5);
    assert_eq!(eval("x = 5 ^ 2"), 25.0);
}

#[test]
fn precedence_and_parentheses() {
    assert_eq!(eval("x = 2 + 3 * 4"), 14.0);
    assert_eq!(eval("x = (2 + 3) * 4"), 20.0);
    assert_eq!(eval("x = 2 * 3 ^ 2"), 18.0);
    assert_eq!(eval("x = 10 - 4 - 3"), 3.0);
    assert_eq!(eval("z = (10 - 3) * pi / 2 ^ 2"), 7.0 * PI / 4.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(eval("x=(1+2)*3"), 9.0);
    assert_eq!(eval("x =\t 1 +  2 "), 3.0);
}

#[test]
fn unary_minus() {
    assert_eq!(eval("x = -3"), -3.0);
    assert_eq!(eval("x = 4 - -3"), 7.0);
    assert_eq!(eval("x = -(2 + 3)"), -5.0);
    assert_eq!(eval("x = 2 ^ -1"), 0.5);
    assert_eq!(eval("x = -2 ^ 2"), 4.0);
    assert_eq!(eval("x = -pi"), -PI);
}

#[test]
fn power_folds_left_by_default() {
    assert_eq!(eval("x = 2 ^ 3 ^ 2"), 64.0);
}

#[test]
fn power_folds_right_when_configured() {
    let options = Options::default().with_power(Associativity::Right);
    let mut interpreter = Interpreter::with_environment(Environment::new(), options);
    let results = run_script("x = 2 ^ 3 ^ 2", &mut interpreter).unwrap();
    assert_eq!(results, [("x".to_string(), 512.0)]);
}

#[test]
fn trig_snaps_exactly() {
    assert_eq!(eval("x = sin(pi / 2)"), 1.0);
    assert_eq!(eval("x = cos(pi / 2)"), 0.0);
    assert_eq!(eval("x = tan(pi / 2)"), f64::INFINITY);
    assert_eq!(eval("x = tan(-pi / 2)"), f64::NEG_INFINITY);
    assert_eq!(eval("x = sin(0)"), 0.0);
    assert_eq!(eval("x = cos(0)"), 1.0);
    assert_eq!(eval("x = tan(0)"), 0.0);
}

#[test]
fn trig_snapping_can_be_disabled() {
    let options = Options::default().with_snap_trig(false);
    let mut interpreter = Interpreter::with_environment(Environment::new(), options);
    let results = run_script("t = tan(pi / 2)\nc = cos(pi / 2)", &mut interpreter).unwrap();
    assert!(results[0].1.is_finite());
    assert_eq!(results[1].1, FRAC_PI_2.cos());
}

#[test]
fn logarithms() {
    assert_eq!(eval("x = log(10)"), 1.0);
    assert_eq!(eval("x = log(100)"), 2.0);
    assert_eq!(eval("x = ln(e)"), 1.0);
    assert_eq!(eval("x = ln(e ^ 2)"), 2.0);
    assert!(eval("x = ln(-1)").is_nan());
    assert!(eval("x = sqrt(0 - 4)").is_nan());
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(eval("x = 1 / 0"), f64::INFINITY);
    assert!(eval("x = 0 / 0").is_nan());
}

#[test]
fn chained_statements() {
    let interpreter = run_lines(&["x = 3", "y = 2", "z = sin((10 - x) * pi / y ^ 2)"]);
    assert_eq!(interpreter.get("x").unwrap(), 3.0);
    assert_eq!(interpreter.get("y").unwrap(), 2.0);
    assert_close(interpreter.get("z").unwrap(), -(2.0_f64.sqrt()) / 2.0);
}

#[test]
fn bare_name_echoes_the_value() {
    let mut interpreter = run_lines(&["speed = 12.5"]);
    let value = interpreter.run(&parse("speed").unwrap()).unwrap();
    assert_eq!(value, 12.5);

    let error = interpreter.run(&parse("nothing").unwrap()).unwrap_err();
    assert_eq!(error, RuntimeError::UnknownVariable { name: "nothing".to_string() });
}

#[test]
fn constants_cannot_be_assigned() {
    for line in ["pi = 3", "PI = 1 + 1", "e = 2", "E = )", "  pi=x"] {
        assert!(matches!(parse(line), Err(ParseError::AssignToConstant { .. })),
                "{line:?} should be rejected");
    }
}

#[test]
fn seeded_bindings_may_shadow_constants() {
    let env = Environment::with_bindings([("pi".to_string(), 3.0)]);
    let mut interpreter = Interpreter::with_environment(env, Options::default());
    assert_eq!(interpreter.run(&parse("x = pi * 2").unwrap()).unwrap(), 6.0);
    assert_eq!(interpreter.get("PI").unwrap(), PI);
}

#[test]
fn unknown_variable_leaves_the_environment_unmodified() {
    let mut env = Environment::new();
    run(&parse("x = 1").unwrap(), &mut env).unwrap();
    let before = env.clone();

    let error = run(&parse("x = y + 1").unwrap(), &mut env).unwrap_err();
    assert_eq!(error, RuntimeError::UnknownVariable { name: "y".to_string() });
    assert_eq!(env, before);
}

#[test]
fn statements_are_reusable() {
    let statement = parse("b = a * 2 + 1").unwrap();

    let mut first = Environment::with_bindings([("a", 1.0)]);
    let mut second = Environment::with_bindings([("a", 10.0)]);

    assert_eq!(run(&statement, &mut first).unwrap(), 3.0);
    assert_eq!(run(&statement, &mut first).unwrap(), 3.0);
    assert_eq!(run(&statement, &mut second).unwrap(), 21.0);
}

#[test]
fn malformed_input_never_yields_a_value() {
    for line in ["x = 5 +", "x = * 2", "x = (1", "x = 1)", "x = 1.2.3", "x = 2 $ 3", "x ="] {
        assert!(matches!(parse(line),
                         Err(ParseError::InvalidExpression { .. }
                             | ParseError::UnexpectedToken { .. })),
                "{line:?} should fail to parse");
    }
}

#[test]
fn error_messages() {
    assert_eq!(parse("pi = 1").unwrap_err().to_string(),
               "cannot assign to constant 'pi'");
    assert_eq!(parse("x = 1 # 2").unwrap_err().to_string(), "unexpected token '#'");
    assert_eq!(parse("x = 5 +").unwrap_err().to_string(), "invalid expression '5 +'");

    let mut env = Environment::new();
    let error = run(&parse("x = q").unwrap(), &mut env).unwrap_err();
    assert_eq!(error.to_string(), "unknown variable 'q'");
}

#[test]
fn script_parse_errors_run_nothing() {
    let mut interpreter = Interpreter::new();
    let error = run_script("a = 1\n\nb = (", &mut interpreter).unwrap_err();

    assert_eq!(error.to_string(), "line 3: invalid expression '('");
    assert!(!interpreter.environment().contains("a"));
}

#[test]
fn script_runtime_errors_keep_earlier_assignments() {
    let mut interpreter = Interpreter::new();
    let error = run_script("a = 1\nb = c\nd = 4", &mut interpreter).unwrap_err();

    assert!(matches!(error, Error::Line { line: 2, .. }));
    assert!(matches!(error.root(), Error::Runtime(RuntimeError::UnknownVariable { .. })));
    assert_eq!(interpreter.get("a").unwrap(), 1.0);
    assert!(interpreter.get("d").is_err());
}

#[test]
fn script_results_are_reported_before_a_runtime_error() {
    let mut interpreter = Interpreter::new();
    let mut printed = Vec::new();

    let error = run_script_with("a = 1\nb = 2\nc = missing\nd = 4",
                                &mut interpreter,
                                |name, value| printed.push(format!("{name} = {value:.6}")))
        .unwrap_err();

    assert_eq!(printed, ["a = 1.000000", "b = 2.000000"]);
    assert_eq!(error.to_string(), "line 3: unknown variable 'missing'");
    assert!(interpreter.get("d").is_err());
}
