use std::fs;

use recur::{ErrorKind, Interpreter, get_result};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_recur_blocks(&content).into_iter().enumerate() {
            count += 1;
            match get_result(&code, "main", &[]) {
                Ok(1) => {},
                Ok(other) => panic!("Example {} in {:?} returned {other}, expected 1:\n{}",
                                    i + 1,
                                    path,
                                    code),
                Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 code,
                                 e),
            }
        }
    }

    assert!(count > 0, "No recur examples found in book/src");
}

fn extract_recur_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```recur") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_result(src: &str, name: &str, args: &[i64], expected: i64) {
    match get_result(src, name, args) {
        Ok(value) => assert_eq!(value, expected, "{name}{args:?} in:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str, name: &str, args: &[i64], kind: ErrorKind) {
    match get_result(src, name, args) {
        Ok(value) => panic!("Script returned {value} but was expected to fail:\n{src}"),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error: {e}"),
    }
}

#[test]
fn addition_of_arguments() {
    let src = "def f(a, b)\n    return a + b\n";
    for (x, y) in [(0, 0), (1, 2), (-5, 3), (40, -2), (i64::MAX - 1, 1), (i64::MIN, 0)] {
        assert_result(src, "f", &[x, y], x + y);
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_result("def f()\n    return 1 + 2 * 3\n", "f", &[], 7);
    assert_result("def f()\n    return (1 + 2) * 3\n", "f", &[], 9);
    assert_result("def f()\n    return 10 - 3 - 2\n", "f", &[], 5);
    assert_result("def f()\n    return 100 / 10 / 5\n", "f", &[], 2);
    assert_result("def f()\n    return 2 * 3 < 7\n", "f", &[], 1);
}

#[test]
fn division_truncates_toward_zero() {
    let src = "def d(a, b)\n    return a / b\n";
    assert_result(src, "d", &[7, 2], 3);
    assert_result(src, "d", &[-7, 2], -3);
    assert_result(src, "d", &[7, -2], -3);
}

#[test]
fn division_by_zero_is_error() {
    let src = "def d(a, b)\n    return a / b\n";
    assert_failure(src, "d", &[7, 0], ErrorKind::Runtime);
}

#[test]
fn overflow_is_error() {
    let src = "def sq(a)\n    return a * a\n";
    assert_result(src, "sq", &[3_000_000_000], 9_000_000_000_000_000_000);
    assert_failure(src, "sq", &[4_000_000_000], ErrorKind::Runtime);
    assert_failure("def d(a, b)\n    return a / b\n", "d", &[i64::MIN, -1], ErrorKind::Runtime);
}

#[test]
fn comparisons_yield_one_or_zero() {
    let src = "def cmp(a, b)\n    return (a < b) * 100 + (a == b) * 10 + (a != b)\n";
    assert_result(src, "cmp", &[1, 2], 101);
    assert_result(src, "cmp", &[2, 2], 10);
    assert_result(src, "cmp", &[3, 2], 1);
}

#[test]
fn recursion() {
    let src = "def fact(n)\n    return if n < 1 then 1 else n * fact(n - 1)\n";
    assert_result(src, "fact", &[5], 120);
    assert_result(src, "fact", &[0], 1);
    assert_result(src, "fact", &[20], 2_432_902_008_176_640_000);
}

#[test]
fn mutual_recursion_between_top_level_functions() {
    let src = r"
def is_even(n)
    return if n == 0 then 1 else is_odd(n - 1)

def is_odd(n)
    return if n == 0 then 0 else is_even(n - 1)
";
    assert_result(src, "is_even", &[10], 1);
    assert_result(src, "is_odd", &[10], 0);
    assert_result(src, "is_odd", &[7], 1);
}

#[test]
fn ternary_evaluates_only_the_selected_branch() {
    assert_result("def f()\n    return if 1 then 5 else 1 / 0\n", "f", &[], 5);
    assert_result("def f()\n    return if 0 then missing() else 3\n", "f", &[], 3);
    assert_result("def f(c)\n    return if c then 1 else 2\n", "f", &[-4], 1);
}

#[test]
fn binary_operands_are_always_evaluated() {
    assert_failure("def f()\n    return (0 == 1) * (1 / 0)\n", "f", &[], ErrorKind::Runtime);
    assert_failure("def f()\n    return 0 * missing\n", "f", &[], ErrorKind::Name);
}

#[test]
fn evaluation_order() {
    let src = r"
def g(a, b)
    return a + b

def left_first()
    return missing + (1 / 0)

def right_last()
    return (1 / 0) + missing

def arguments_left_to_right()
    return g(missing, 1 / 0)

def arity_before_arguments()
    return g(missing)
";
    assert_failure(src, "left_first", &[], ErrorKind::Name);
    assert_failure(src, "right_last", &[], ErrorKind::Runtime);
    assert_failure(src, "arguments_left_to_right", &[], ErrorKind::Name);
    assert_failure(src, "arity_before_arguments", &[], ErrorKind::Runtime);
}

#[test]
fn each_call_gets_a_fresh_scope() {
    let src = "def outer(a)\n    x = a + 1\n    return x\n";
    let interpreter = Interpreter::new(src).unwrap();
    assert_eq!(interpreter.run("outer", &[1]).unwrap(), 2);
    assert_eq!(interpreter.run("outer", &[10]).unwrap(), 11);

    let src = r"
def probe(a)
    return if a < 1 then x else helper(a)

def helper(a)
    x = a
    return 0
";
    let interpreter = Interpreter::new(src).unwrap();
    assert_eq!(interpreter.run("probe", &[1]).unwrap(), 0);
    assert_eq!(interpreter.run("probe", &[0]).unwrap_err().kind(),
               ErrorKind::Name);
}

#[test]
fn assignment_then_read_observes_the_value() {
    let src = "def f(a)\n    x = a * 2\n    x = x + 1\n    return x\n";
    assert_result(src, "f", &[4], 9);
}

#[test]
fn assignment_never_writes_to_the_caller_scope() {
    let src = r"
def outer()
    x = 1
    y = inner()
    return x * 1000 + y

def inner()
    before = x
    x = 100
    return before + x
";
    assert_result(src, "outer", &[], 1101);
}

#[test]
fn names_resolve_through_the_call_site() {
    let src = r"
def get()
    return x

def with_x(x)
    return get()
";
    assert_result(src, "with_x", &[7], 7);
    assert_failure(src, "get", &[], ErrorKind::Name);
}

#[test]
fn nested_definitions_live_in_the_call_scope() {
    let src = r"
def outer(a)
    def inner(b)
        return a + b
    return inner(10)

def uses_helper()
    def helper()
        return 42
    return caller()

def caller()
    return helper()
";
    assert_result(src, "outer", &[5], 15);
    assert_result(src, "uses_helper", &[], 42);
    assert_failure(src, "inner", &[1], ErrorKind::Name);
    assert_failure(src, "caller", &[], ErrorKind::Name);
}

#[test]
fn nested_definition_shadows_top_level_function() {
    let src = r"
def value()
    return 1

def shadowed()
    def value()
        return 2
    return value()

def plain()
    return value()
";
    assert_result(src, "shadowed", &[], 2);
    assert_result(src, "plain", &[], 1);
}

#[test]
fn later_top_level_definition_wins() {
    let src = "def f()\n    return 1\n\ndef f()\n    return 2\n";
    assert_result(src, "f", &[], 2);
}

#[test]
fn duplicate_parameters_bind_left_to_right() {
    assert_result("def dup(a, a)\n    return a\n", "dup", &[1, 2], 2);
}

#[test]
fn wrong_function_arity_is_error() {
    let src = "def f(x, y)\n    return x + y\n";
    assert_failure(src, "f", &[1], ErrorKind::Runtime);
    assert_failure(src, "f", &[1, 2, 3], ErrorKind::Runtime);

    let src = "def f(x, y)\n    return x + y\n\ndef g()\n    return f(3)\n\ndef h()\n    return f(1, 2, 3)\n";
    assert_failure(src, "g", &[], ErrorKind::Runtime);
    assert_failure(src, "h", &[], ErrorKind::Runtime);
}

#[test]
fn unknown_names_are_errors() {
    assert_failure("def f()\n    return 1\n", "nope", &[], ErrorKind::Name);
    assert_failure("def f()\n    return g()\n", "f", &[], ErrorKind::Name);
    assert_failure("def f()\n    return foo + 1\n", "f", &[], ErrorKind::Name);
}

#[test]
fn missing_return_is_syntax_error() {
    assert_failure("def f(a)\n    x = a\n", "f", &[1], ErrorKind::Syntax);
    assert_failure("def f(a)\n", "f", &[1], ErrorKind::Syntax);
}

#[test]
fn syntax_errors_abort_loading() {
    let broken = "def ok()\n    return 1\n\ndef broken(\n    return 2\n";
    assert!(Interpreter::new(broken).is_err());
    assert_failure(broken, "ok", &[], ErrorKind::Syntax);
    assert_failure("def f()\n    return 1 $ 2\n", "f", &[], ErrorKind::Syntax);
    assert_failure("def f()\n    return 1 ! 2\n", "f", &[], ErrorKind::Syntax);
}

#[test]
fn empty_program_loads() {
    let interpreter = Interpreter::new("\n\n# nothing here\n").unwrap();
    assert!(interpreter.program().functions.is_empty());
    assert_eq!(interpreter.run("main", &[]).unwrap_err().kind(), ErrorKind::Name);
}

#[test]
fn error_messages_name_the_problem() {
    let err = get_result("def d(a)\n    return a / 0\n", "d", &[1]).unwrap_err();
    assert_eq!(err.to_string(), "Division by zero");
    assert_eq!(err.kind().to_string(), "Runtime Error");

    let err = get_result("def f()\n    return y\n", "f", &[]).unwrap_err();
    assert_eq!(err.to_string(), "Undefined variable: y");
    assert_eq!(err.kind().to_string(), "Name Error");

    let err = get_result("def f()\n    return g(1)\n", "f", &[]).unwrap_err();
    assert_eq!(err.to_string(), "Undefined function: g");

    let err = get_result("def f(\n    return 1\n", "f", &[]).unwrap_err();
    assert_eq!(err.to_string(), "Expected parameter name, found newline");
    assert_eq!(err.kind().to_string(), "Syntax Error");
}

#[test]
fn example_file_works() {
    let contents = fs::read_to_string("tests/example.rc").expect("missing file");
    let interpreter = Interpreter::new(&contents).unwrap();

    assert_eq!(interpreter.run("sum_to", &[50]).unwrap(), 1275);
    assert_eq!(interpreter.run("fib", &[15]).unwrap(), 610);
    assert_eq!(interpreter.run("collatz", &[6]).unwrap(), 8);
    assert_eq!(interpreter.run("collatz", &[7]).unwrap(), 16);
    assert_eq!(interpreter.run("ack", &[2, 3]).unwrap(), 9);
    assert_eq!(interpreter.run("gcd", &[48, 18]).unwrap(), 6);
    assert_eq!(interpreter.run("rem", &[7, 3]).unwrap_err().kind(), ErrorKind::Name);
}
