use quill::{
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin::BUILTIN_FUNCTIONS, core::eval_program},
        value::{core::Value, environment::Environment},
    },
    parse,
};

fn run(source: &str) -> Result<Value, RuntimeError> {
    let program =
        parse(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"));
    eval_program(&program, &Environment::new())
}

fn assert_value(source: &str, expected: &Value) {
    match run(source) {
        Ok(value) => assert_eq!(&value, expected, "wrong result for {source:?}"),
        Err(error) => panic!("{source:?} failed: {error}"),
    }
}

fn assert_integer(source: &str, expected: i64) {
    assert_value(source, &Value::Integer(expected));
}

fn assert_bool(source: &str, expected: bool) {
    assert_value(source, &Value::Bool(expected));
}

fn assert_null(source: &str) {
    assert_value(source, &Value::Null);
}

fn assert_error(source: &str, message: &str) {
    match run(source) {
        Ok(value) => panic!("{source:?} evaluated to {value} but was expected to fail"),
        Err(error) => assert_eq!(error.to_string(), message, "wrong error for {source:?}"),
    }
}

fn assert_renders(source: &str, expected: &str) {
    let program =
        parse(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"));
    assert_eq!(program.to_string(), expected);
}

fn assert_parse_errors(source: &str, expected: &[&str]) {
    match parse(source) {
        Ok(program) => panic!("{source:?} parsed cleanly to {program}"),
        Err(errors) => {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            assert_eq!(messages, expected, "wrong errors for {source:?}");
        },
    }
}

#[test]
fn let_statements_parse() {
    let program = parse("let x = 5; let y = 10; let foobar = 838383;").unwrap();
    assert_eq!(program.statements.len(), 3);
    assert_renders("let x = 5; let y = 10; let foobar = 838383;",
                   "let x = 5; let y = 10; let foobar = 838383;");
}

#[test]
fn return_statements_parse() {
    let program = parse("return 5; return 10; return 993322;").unwrap();
    assert_eq!(program.statements.len(), 3);
    assert_renders("return 2 * 3;", "return (2 * 3);");
}

#[test]
fn operator_precedence() {
    let cases = [("a + b * c", "(a + (b * c))"),
                 ("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("3 + 4; -5 * 5", "(3 + 4) ((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in cases {
        assert_renders(source, expected);
    }
}

#[test]
fn if_and_function_literals_parse() {
    assert_renders("if (x < y) { x }", "if ((x < y)) { x }");
    assert_renders("if (x < y) { x } else { y }", "if ((x < y)) { x } else { y }");
    assert_renders("fn(x, y) { x + y; }", "fn(x, y) { (x + y) }");
    assert_renders("fn() { 1 }", "fn() { 1 }");
    assert_renders("\"hello world\"", "\"hello world\"");
}

#[test]
fn printed_programs_reparse_to_equal_trees() {
    let sources = ["let x = 5;",
                   "a + b * c",
                   "if (x < y) { x } else { y }",
                   "let f = fn(a, b) { return a + b; };",
                   "[1, 2, \"three\"][0]",
                   "!true == false",
                   "adder(1, 2)(3)",
                   // Printing collapses these onto one line; the trees must
                   // still compare equal.
                   "let a = 1;\nlet b = 2;",
                   "let adder = fn(x) {\n    fn(y) { x + y }\n};\nadder(2)(3)"];

    for source in sources {
        let first = parse(source).unwrap();
        let second = parse(&first.to_string()).unwrap();
        assert_eq!(first, second, "round trip changed the tree for {source:?}");
    }
}

#[test]
fn parse_errors_are_recorded_in_order() {
    assert_parse_errors("let x 5;", &["expected next token to be =, got INT instead"]);
    assert_parse_errors("let = 10;", &["expected next token to be IDENT, got = instead",
                                       "no prefix parse function for = found"]);
    assert_parse_errors("fn(a, 1) { a }", &["expected next token to be IDENT, got INT instead",
                                            "no prefix parse function for ) found",
                                            "no prefix parse function for { found",
                                            "no prefix parse function for } found"]);
    assert_parse_errors("9223372036854775808",
                        &["Could not parse \"9223372036854775808\" as integer"]);
    assert_parse_errors("let x = @;", &["no prefix parse function for ILLEGAL found",
                                        "no prefix parse function for ; found"]);
}

#[test]
fn parser_recovers_at_statement_boundaries() {
    let mut parser = quill::interpreter::parser::core::Parser::new(
        quill::interpreter::lexer::Lexer::new("let x 5; x + 1;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert!(!program.statements.is_empty());
}

#[test]
fn integer_arithmetic() {
    assert_integer("5", 5);
    assert_integer("-5", -5);
    assert_integer("5 + 5 + 5 + 5 - 10", 10);
    assert_integer("2 * 2 * 2 * 2 * 2", 32);
    assert_integer("-50 + 100 + -50", 0);
    assert_integer("5 * 2 + 10", 20);
    assert_integer("5 + 2 * 10", 25);
    assert_integer("20 + 2 * -10", 0);
    assert_integer("50 / 2 * 2 + 10", 60);
    assert_integer("2 * (5 + 10)", 30);
    assert_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
}

#[test]
fn integer_arithmetic_wraps() {
    assert_integer("9223372036854775806 + 1", i64::MAX);
    assert_integer("9223372036854775807 + 1", i64::MIN);
    assert_integer("0 - 9223372036854775807 - 1", i64::MIN);
    assert_integer("-(0 - 9223372036854775807 - 1)", i64::MIN);
}

#[test]
fn boolean_expressions() {
    assert_bool("true", true);
    assert_bool("false", false);
    assert_bool("1 < 2", true);
    assert_bool("1 > 2", false);
    assert_bool("1 == 1", true);
    assert_bool("1 != 1", false);
    assert_bool("1 == 2", false);
    assert_bool("true == true", true);
    assert_bool("false == false", true);
    assert_bool("true == false", false);
    assert_bool("true != false", true);
    assert_bool("(1 < 2) == true", true);
    assert_bool("(1 > 2) == true", false);
}

#[test]
fn bang_operator_follows_truthiness() {
    assert_bool("!true", false);
    assert_bool("!false", true);
    assert_bool("!5", false);
    assert_bool("!!true", true);
    assert_bool("!!5", true);
    assert_bool("!0", false);
    assert_bool("!\"\"", false);
    assert_bool("!(if (false) { 1 })", true);
}

#[test]
fn if_else_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_null("if (false) { 10 }");
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
}

#[test]
fn return_statements_evaluate() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9;", 10);
    assert_integer("return 2 * 5; 9;", 10);
    assert_integer("9; return 2 * 5; 9;", 10);
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
    assert_integer("let f = fn() { if (true) { if (true) { return 10; } return 1; } }; f()",
                   10);
    assert_integer("let f = fn() { return 1; 2 }; f(); 3", 3);
}

#[test]
fn let_bindings() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
    assert_null("let a = 1;");
    assert_integer("let a = 1; let a = a + 1; a", 2);
}

#[test]
fn function_application() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x; }(5)", 5);
    assert_integer("let add = fn(a, b) { a + b }; add(1, 2 + 3)", 6);
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_integer("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3)",
                   5);
    assert_integer("let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(2);",
                   4);
    // Bindings added to the defining frame after the capture stay visible.
    assert_integer("let f = fn() { lateBound }; let lateBound = 7; f()", 7);
    // The caller's frame is not visible.
    assert_error("let f = fn() { x }; let g = fn() { let x = 9; f() }; g()",
                 "identifier not found: x");
    assert_integer("let fact = fn(n) { if (n < 2) { 1 } else { n * fact(n - 1) } }; fact(5)",
                   120);
}

#[test]
fn call_arity_is_checked() {
    assert_error("let add = fn(a, b) { a + b }; add(1)",
                 "wrong number of arguments. got=1, want=2");
    assert_error("let add = fn(a, b) { a + b }; add(1, 2, 3)",
                 "wrong number of arguments. got=3, want=2");
}

#[test]
fn strings() {
    assert_value("\"Hello\" + \" \" + \"World\"", &Value::from("Hello World"));
    assert_value("\"hey\"", &Value::from("hey"));
    assert_error("\"Hello\" - \"World\"", "unknown operator: STRING - STRING");
    assert_error("\"a\" == \"a\"", "unknown operator: STRING == STRING");
    assert_error("\"a\" < \"b\"", "unknown operator: STRING < STRING");
}

#[test]
fn arrays_and_indexing() {
    assert_value("[1, 2 * 2, 3 + 3]",
                 &Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));
    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("[1, 2, 3][1]", 2);
    assert_integer("let i = 0; [1][i];", 1);
    assert_integer("[1, 2, 3][1 + 1];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[2];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6);
    assert_integer("let a = [1, 2, 3]; a[1] + a[2]", 5);
    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][-1]");
    assert_null("let a = [1, 2, 3]; a[9]");
}

#[test]
fn runtime_error_messages() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foobar", "identifier not found: foobar");
    assert_error("5 / 0", "division by zero");
    assert_error("5(3)", "not a function: INTEGER");
    assert_error("\"str\"[0]", "index operator not supported: STRING");
    assert_error("[1][true]", "index operator not supported: ARRAY");
}

#[test]
fn errors_short_circuit_everything() {
    assert_error("(1 / 0) + 1", "division by zero");
    assert_error("1 + (1 / 0)", "division by zero");
    assert_error("-(1 / 0)", "division by zero");
    assert_error("let f = fn(x) { x }; f(1 / 0)", "division by zero");
    assert_error("[1 / 0]", "division by zero");
    assert_error("(1 / 0)[0]", "division by zero");
    assert_error("[1][1 / 0]", "division by zero");
    assert_error("if (1 / 0) { 1 }", "division by zero");
    assert_error("let x = 1 / 0; x", "division by zero");
    assert_error("return 1 / 0;", "division by zero");
}

#[test]
fn errors_carry_the_source_line() {
    let program = parse("let a = true;\n5 + a;").unwrap();
    let error = eval_program(&program, &Environment::new()).unwrap_err();

    assert_eq!(error.to_string(), "type mismatch: INTEGER + BOOLEAN");
    assert_eq!(error.line(), 2);
}

#[test]
fn comments_are_skipped() {
    assert_integer("// nothing to see\n1 + 2", 3);
    assert_integer("let x = 1; // trailing\nx", 1);
}

#[test]
fn builtin_len() {
    assert_integer("len(\"\")", 0);
    assert_integer("len(\"four\")", 4);
    assert_integer("len(\"hello world\")", 11);
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);
    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error("len(\"one\", \"two\")", "wrong number of arguments. got=2, want=1");
}

#[test]
fn builtin_array_helpers() {
    assert_integer("first([1, 2, 3])", 1);
    assert_null("first([])");
    assert_error("first(1)", "argument to `first` must be ARRAY, got INTEGER");
    assert_integer("last([1, 2, 3])", 3);
    assert_null("last([])");
    assert_value("rest([1, 2, 3])", &Value::from(vec![Value::Integer(2), Value::Integer(3)]));
    assert_null("rest([])");
    assert_value("push([], 1)", &Value::from(vec![Value::Integer(1)]));
    assert_error("push(1, 1)", "argument to `push` must be ARRAY, got INTEGER");
    assert_error("push([1])", "wrong number of arguments. got=1, want=2");
}

#[test]
fn builtins_do_not_mutate_their_arguments() {
    assert_value("let a = [1]; push(a, 2); a", &Value::from(vec![Value::Integer(1)]));
    assert_value("let a = [1, 2]; rest(a); a",
                 &Value::from(vec![Value::Integer(1), Value::Integer(2)]));
}

#[test]
fn bindings_shadow_builtins() {
    assert_integer("let len = fn(x) { 99 }; len([1])", 99);
    assert!(BUILTIN_FUNCTIONS.contains(&"len"));
    assert!(BUILTIN_FUNCTIONS.contains(&"puts"));
}

#[test]
fn puts_yields_null() {
    assert_null("puts(\"hello\", 42)");
}

#[test]
fn inspect_forms() {
    assert_eq!(run("5").unwrap().to_string(), "5");
    assert_eq!(run("true").unwrap().to_string(), "true");
    assert_eq!(run("\"hey\"").unwrap().to_string(), "hey");
    assert_eq!(run("[1, true, \"x\"]").unwrap().to_string(), "[1, true, x]");
    assert_eq!(run("if (false) { 1 }").unwrap().to_string(), "null");
    assert_eq!(run("fn(x) { x + 2 }").unwrap().to_string(), "fn(x) {\n(x + 2)\n}");
    assert_eq!(run("len").unwrap().to_string(), "builtin function");
}

#[test]
fn end_to_end_scenarios() {
    assert_integer("let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };", 10);
    assert_integer(concat!("let map = fn(arr, f) {",
                           "  let iter = fn(arr, acc) {",
                           "    if (len(arr) == 0) { acc }",
                           "    else { iter(rest(arr), push(acc, f(first(arr)))) }",
                           "  };",
                           "  iter(arr, [])",
                           "};",
                           "let double = fn(x) { x * 2 };",
                           "last(map([1, 2, 3], double))"),
                   6);
    assert_integer(concat!("let reduce = fn(arr, initial, f) {",
                           "  let iter = fn(arr, result) {",
                           "    if (len(arr) == 0) { result }",
                           "    else { iter(rest(arr), f(result, first(arr))) }",
                           "  };",
                           "  iter(arr, initial)",
                           "};",
                           "reduce([1, 2, 3, 4], 0, fn(acc, x) { acc + x })"),
                   10);
}
