use std::{
    cell::RefCell,
    fs::{self},
    io,
    rc::Rc,
};

use fortall::{
    ast::Position,
    compile,
    error::{Error, LexicalError, RuntimeError, SemanticError, SyntaxError},
    interpreter::{
        evaluator::{Console, ExecutionPolicy, InputFallback, Interrupt, LoopGuard, ScriptedConsole},
        lexer::tokenize,
        parser::parse,
    },
    run,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "fortall"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();
        let expected = fs::read_to_string(path.with_extension("out")).ok();

        count += 1;
        let mut console = ScriptedConsole::new(input.lines());
        if let Err(e) = run(&source, &mut console, headless()) {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }
        if let Some(expected) = expected {
            assert_eq!(console.output,
                       expected.lines().collect::<Vec<_>>(),
                       "Demo {path:?} printed unexpected output");
        }
    }

    assert!(count > 0, "No demo programs found in demos");
}

/// A policy that never waits for a person.
fn headless() -> ExecutionPolicy {
    ExecutionPolicy { on_loop_limit: LoopGuard::Abort,
                      ..ExecutionPolicy::default() }
}

fn run_scripted(src: &str, input: &[&str], policy: ExecutionPolicy) -> (Result<(), Error>, ScriptedConsole) {
    let mut console = ScriptedConsole::new(input.iter().copied());
    let result = run(src, &mut console, policy);
    (result, console)
}

fn assert_output(src: &str, expected: &[&str]) {
    let (result, console) = run_scripted(src, &[], headless());
    if let Err(e) = result {
        panic!("Program failed: {e}");
    }
    assert_eq!(console.output, expected);
}

fn assert_failure(src: &str) -> Error {
    match run_scripted(src, &[], headless()) {
        (Err(e), _) => e,
        (Ok(()), _) => panic!("Program succeeded but was expected to fail"),
    }
}

fn semantic_errors(src: &str) -> Vec<SemanticError> {
    match compile(src) {
        Err(Error::Semantic(errors)) => errors,
        Err(e) => panic!("expected semantic errors, got {e}"),
        Ok(_) => panic!("program unexpectedly passed semantic analysis"),
    }
}

#[test]
fn sum_of_two_variables() {
    assert_output("program P; var a,b: integer; begin a:=3; b:=4; write(a+b) end.",
                  &["7"]);
}

#[test]
fn division_by_zero_produces_no_output() {
    let (result, console) = run_scripted("program P; var a: integer; begin a:=1/0 end.",
                                         &[],
                                         headless());
    assert!(compile("program P; var a: integer; begin a:=1/0 end.").is_ok());
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert!(console.output.is_empty());
}

#[test]
fn division_by_zero_for_every_sign() {
    for dividend in ["5", "0", "-5"] {
        let err = assert_failure(&format!("program P; begin write({dividend} / 0) end."));
        assert!(err.to_string().ends_with("division by zero"), "{err}");
    }
}

#[test]
fn undeclared_variable_is_reported_once() {
    let errors = semantic_errors("program P; begin write(x) end.");
    assert_eq!(errors,
               [SemanticError::NotDeclared { name:     "x".to_string(),
                                             position: Position::new(1, 24), }]);
}

#[test]
fn semantic_errors_skip_execution() {
    let (result, console) = run_scripted("program P; var a: integer; begin write(1); a := b end.",
                                         &[],
                                         headless());
    assert!(matches!(result, Err(Error::Semantic(_))));
    assert!(console.output.is_empty());
}

#[test]
fn every_independent_violation_is_counted() {
    let errors = semantic_errors("program P;\n\
                                  var a, b: integer;\n\
                                  a: integer;\n\
                                  b: integer;\n\
                                  begin\n\
                                  x := 1;\n\
                                  a := \"s\";\n\
                                  while \"loop\" do read(y)\n\
                                  end.");
    let kinds: Vec<_> = errors.iter()
                              .map(|e| match e {
                                  SemanticError::AlreadyDeclared { .. } => "declared",
                                  SemanticError::NotDeclared { .. } => "undeclared",
                                  SemanticError::IncompatibleTypes { .. } => "assign",
                                  SemanticError::ConditionNotInteger { .. } => "condition",
                                  _ => "other",
                              })
                              .collect();
    assert_eq!(kinds,
               ["declared", "declared", "undeclared", "assign", "condition", "undeclared"]);
    assert_eq!(errors[1].position(), Position::new(4, 1));
}

#[test]
fn semantic_errors_render_as_numbered_list() {
    let err = compile("program P; var a, a: integer; begin b := 1 end.").unwrap_err();
    assert_eq!(err.to_string(),
               "Semantic errors found:\n   \
                1. Semantic error at line 1, column 19: variable 'a' already declared\n   \
                2. Semantic error at line 1, column 37: variable 'b' not declared");
}

#[test]
fn lexical_error_stops_the_pipeline() {
    let err = assert_failure("program P; begin write(1 @ 2) end.");
    assert_eq!(err,
               Error::Lexical(LexicalError::InvalidCharacter { character: '@',
                                                               position:  Position::new(1, 26), }));
    assert_eq!(err.to_string(),
               "Lexical error at line 1, column 26: invalid character '@'");
}

#[test]
fn unterminated_comment_and_string() {
    assert!(matches!(assert_failure("program P; /* no end"),
                     Error::Lexical(LexicalError::UnterminatedComment { .. })));
    assert!(matches!(assert_failure("program P; begin write(\"open) end."),
                     Error::Lexical(LexicalError::UnterminatedString { .. })));
}

#[test]
fn first_syntax_error_wins() {
    let err = assert_failure("program P; begin a := ; b := end.");
    assert_eq!(err.to_string(),
               "Syntax error at line 1, column 23: expected expression, found ';'");
    assert!(matches!(err, Error::Syntax(SyntaxError::Expected { .. })));
}

#[test]
fn parsing_is_deterministic() {
    let source = "program P; var a, b: integer;\nbegin\n  read(a);\n  if a > 0 then b := a * 2 else b := -a;\n  write(\"b = \", b)\nend.";
    let first = parse(&tokenize(source).unwrap()).unwrap();
    let second = parse(&tokenize(source).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn keywords_ignore_case_but_names_do_not() {
    assert_output("PROGRAM P; VAR a: INTEGER; BEGIN a := 2; WRITE(a) END.", &["2"]);
    let errors = semantic_errors("program P; var a: integer; begin A := 1 end.");
    assert!(matches!(errors.as_slice(), [SemanticError::NotDeclared { name, .. }] if name == "A"));
}

#[test]
fn names_may_use_unicode_letters() {
    assert_output("program Média;\u{A0}var média, total2: integer; begin média := 7; total2 := média * 2; write(média, \" \", total2) end.",
                  &["7 14"]);
}

#[test]
fn comments_are_ignored() {
    assert_output("program P; /* a\n multi-line comment */ begin write(/* inline */ 1) end.",
                  &["1"]);
}

#[test]
fn variables_start_at_zero() {
    assert_output("program P; var a: integer; begin write(a) end.", &["0"]);
}

#[test]
fn write_concatenates_without_separators() {
    assert_output("program P; var a: integer; begin a := 5; write(\"a=\", a, \"!\", a * 2) end.",
                  &["a=5!10"]);
    assert_output("program P; begin write(\"tab\\there\", \"\\\\\", \"\\\"q\\\"\") end.",
                  &["tab\there\\\"q\""]);
}

#[test]
fn division_rounds_down() {
    assert_output("program P; begin write(7 / 2, \" \", -7 / 2, \" \", 7 / -2, \" \", -7 / -2) end.",
                  &["3 -4 -4 3"]);
}

#[test]
fn precedence_and_associativity() {
    assert_output("program P; begin write(2 + 3 * 4); write(10 - 4 - 3); write((2 + 3) * 4); write(--5) end.",
                  &["14", "3", "20", "5"]);
}

#[test]
fn comparisons_produce_one_or_zero() {
    assert_output("program P; begin write(3 < 4, 4 < 3, 2 = 2, 2 <> 2, 3 >= 3, 3 <= 2) end.",
                  &["101010"]);
    assert_output("program P; begin write(\"abc\" < \"abd\", \"b\" = \"b\") end.",
                  &["11"]);
}

#[test]
fn nonzero_conditions_are_true() {
    assert_output("program P; begin if -1 then write(\"yes\") else write(\"no\"); if 0 then write(\"yes\") else write(\"no\") end.",
                  &["yes", "no"]);
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    assert_output("program P; begin if 1 then if 0 then write(\"inner\") else write(\"else\") end.",
                  &["else"]);
}

#[test]
fn overflow_is_a_runtime_error() {
    let err = assert_failure("program P; var a: integer; begin a := 9223372036854775807; a := a + 1 end.");
    assert!(matches!(err, Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn output_before_a_failure_is_kept() {
    let (result, console) = run_scripted("program P; begin write(1); write(2, 1 / 0) end.", &[], headless());
    assert!(result.is_err());
    assert_eq!(console.output, ["1"]);
}

#[test]
fn read_prompts_once_per_variable() {
    let (result, console) = run_scripted("program P; var a, b: integer; begin read(a, b); write(a - b) end.",
                                         &[" 10 ", "4"],
                                         headless());
    result.unwrap();
    assert_eq!(console.prompts,
               ["Enter a value for a: ", "Enter a value for b: "]);
    assert_eq!(console.output, ["6"]);
    assert_eq!(console.remaining_input(), 0);
}

#[test]
fn bad_input_reads_as_zero_with_a_warning() {
    let (result, console) = run_scripted("program P; var a, b: integer; begin a := 7; b := 7; read(a, b); write(a, b) end.",
                                         &["abc"],
                                         headless());
    result.unwrap();
    assert_eq!(console.output, ["00"]);
    assert_eq!(console.warnings,
               ["invalid value 'abc', assigning 0 to a", "end of input, assigning 0 to b"]);
}

#[test]
fn input_fallback_is_configurable() {
    let policy = ExecutionPolicy { on_bad_input: InputFallback::Substitute(-1),
                                   ..headless() };
    let (result, console) = run_scripted("program P; var a: integer; begin read(a); write(a) end.",
                                         &["1.5"],
                                         policy);
    result.unwrap();
    assert_eq!(console.output, ["-1"]);

    let policy = ExecutionPolicy { on_bad_input: InputFallback::Fail,
                                   ..headless() };
    let (result, console) = run_scripted("program P; var a: integer; begin read(a); write(a) end.",
                                         &["x"],
                                         policy);
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::InvalidInput { ref name, .. })) if name == "a"));
    assert!(console.output.is_empty());
    assert!(console.warnings.is_empty());
}

#[test]
fn loop_guard_fires_once_per_thousand_iterations() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&calls);
    let policy = ExecutionPolicy { on_loop_limit: LoopGuard::Decide(Box::new(move |n: u64| {
                                                      recorder.borrow_mut().push(n);
                                                      true
                                                  })),
                                   ..ExecutionPolicy::default() };

    let (result, console) = run_scripted("program P; var i: integer; begin while i < 2500 do i := i + 1; write(i) end.",
                                         &[],
                                         policy);
    result.unwrap();
    assert_eq!(console.output, ["2500"]);
    assert_eq!(*calls.borrow(), [1000, 2000]);
}

#[test]
fn declining_the_loop_guard_interrupts_the_run() {
    let policy = ExecutionPolicy { on_loop_limit: LoopGuard::Decide(Box::new(|n: u64| n < 3000)),
                                   ..ExecutionPolicy::default() };
    let (result, console) = run_scripted("program P; var i: integer; begin while 1 do i := i + 1; write(i) end.",
                                         &[],
                                         policy);

    let Err(Error::Runtime(err)) = result else {
        panic!("expected an interruption");
    };
    assert!(err.is_interruption());
    assert_eq!(err,
               RuntimeError::Interrupted { iterations: 3000,
                                           position:   Position::new(1, 34), });
    assert!(console.output.is_empty());
}

#[test]
fn loop_guard_prompts_on_the_console() {
    let (result, console) = run_scripted("program P; var i: integer; begin while 1 do i := i + 1 end.",
                                         &["Y", "no"],
                                         ExecutionPolicy::default());

    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::Interrupted { iterations: 2000, .. }))));
    assert_eq!(console.prompts,
               ["Loop executed 1000 times. Continue? (y/n): ",
                "Loop executed 2000 times. Continue? (y/n): "]);
}

#[test]
fn loop_guard_counts_per_loop_execution() {
    let policy = ExecutionPolicy { on_loop_limit:
                                       LoopGuard::Decide(Box::new(|n: u64| -> bool {
                                           panic!("guard fired after {n} iterations")
                                       })),
                                   ..ExecutionPolicy::default() };
    let source = "program P; var i, j: integer; begin \
                  while j < 3 do begin i := 0; while i < 600 do i := i + 1; j := j + 1 end; \
                  write(i, \" \", j) end.";
    let (result, console) = run_scripted(source, &[], policy);
    result.unwrap();
    assert_eq!(console.output, ["600 3"]);
}

#[test]
fn loop_guard_can_be_disabled() {
    let policy = ExecutionPolicy { loop_limit: None,
                                   ..headless() };
    let (result, console) = run_scripted("program P; var i: integer; begin while i < 5000 do i := i + 1; write(i) end.",
                                         &[],
                                         policy);
    result.unwrap();
    assert_eq!(console.output, ["5000"]);
}

#[test]
fn interrupt_stops_a_running_loop() {
    let interrupt = Interrupt::default();
    let trigger = interrupt.clone();
    let policy = ExecutionPolicy { on_loop_limit: LoopGuard::Decide(Box::new(move |n: u64| {
                                                      if n == 2000 {
                                                          trigger.raise();
                                                      }
                                                      true
                                                  })),
                                   interrupt,
                                   ..ExecutionPolicy::default() };
    let (result, console) = run_scripted("program P; var i: integer; begin while 1 do i := i + 1; write(i) end.",
                                         &[],
                                         policy);

    let Err(Error::Runtime(err)) = result else {
        panic!("expected an interruption");
    };
    assert!(err.is_interruption());
    assert_eq!(err,
               RuntimeError::Aborted { position: Position::new(1, 45), });
    assert_eq!(err.to_string(),
               "Execution interrupted at line 1, column 45: interrupted by user");
    assert!(console.output.is_empty());
}

/// Behaves like a terminal that receives Ctrl-C while waiting for input:
/// the interrupt is raised and the pending read sees end of input.
struct InterruptedTerminal {
    interrupt: Interrupt,
    warnings:  Vec<String>,
}

impl Console for InterruptedTerminal {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.interrupt.raise();
        Ok(None)
    }

    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        self.warnings.push(message.to_string());
        Ok(())
    }
}

#[test]
fn interrupt_during_read_skips_the_fallback() {
    let interrupt = Interrupt::default();
    let mut terminal = InterruptedTerminal { interrupt: interrupt.clone(),
                                             warnings:  Vec::new(), };
    let policy = ExecutionPolicy { interrupt,
                                   ..headless() };
    let result = run("program P; var a: integer; begin read(a); write(a) end.",
                     &mut terminal,
                     policy);

    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::Aborted { position })) if position == Position::new(1, 34)));
    assert!(terminal.warnings.is_empty());
}
