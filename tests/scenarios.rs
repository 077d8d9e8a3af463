//! End-to-end scenario tests: each parses an inline fixture and asserts on the codes the
//! engine reports, driving the crate's public entry points directly rather than shelling out
//! to the binary.

use pyrint::registry::Rule;
use pyrint::resolver;
use rustpython_parser::parser;

fn codes(source: &str) -> Vec<&'static str> {
    let program = parser::parse_program(source, "<test>").expect("fixture must parse");
    resolver::analyze(&program, source).iter().map(|d| d.rule().code()).collect()
}

#[test]
fn scenario_1_break_not_in_loop() {
    let source = "def f():\n    if True:\n        break\n";
    assert_eq!(codes(source), vec!["E0103"]);
}

#[test]
fn scenario_1_continue_not_in_loop() {
    let source = "def f():\n    if True:\n        continue\n";
    let mut found = codes(source);
    found.sort();
    assert_eq!(found, vec!["E0103", "E0116"]);
}

#[test]
fn scenario_2_duplicate_dict_key() {
    let source = "x = {\"a\": 1, \"b\": 2, \"a\": 3}\n";
    assert_eq!(codes(source), vec!["E0109"]);
}

#[test]
fn scenario_3_duplicate_argument() {
    let source = "def f(x, y, x): pass\n";
    assert_eq!(codes(source), vec!["E0108"]);
}

#[test]
fn scenario_4_init_is_generator() {
    let source = "class C:\n    def __init__(self):\n        yield 1\n";
    assert_eq!(codes(source), vec!["E0100"]);
}

#[test]
fn scenario_4_return_in_init() {
    let source = "class C:\n    def __init__(self):\n        return \"v\"\n";
    assert_eq!(codes(source), vec!["E0101"]);
}

#[test]
fn scenario_5_yield_at_module_level() {
    let source = "yield 1\n";
    assert_eq!(codes(source), vec!["E0105"]);
}

#[test]
fn scenario_5_await_at_module_level() {
    let source = "await f()\n";
    let mut found = codes(source);
    found.sort();
    // `f` is also unresolved at module scope.
    assert!(found.contains(&"E1142"));
    assert!(found.contains(&"E0602"));
}

#[test]
fn scenario_6_possibly_used_before_assignment() {
    let source = "def f():\n    if cond:\n        x = 1\n    return x\n";
    let found = codes(source);
    assert!(found.contains(&"E0606"));
}

#[test]
fn scenario_6_both_branches_assign_is_clean() {
    let source = "def f():\n    if cond:\n        x = 1\n    else:\n        x = 2\n    return x\n";
    let found = codes(source);
    assert!(!found.contains(&"E0606"));
}

#[test]
fn scenario_7_nonlocal_and_global() {
    let source = "def outer():\n    x = 1\n    def inner():\n        global x\n        nonlocal x\n";
    let found = codes(source);
    assert!(found.contains(&"E0115"));
}

#[test]
fn scenario_8_used_prior_global_declaration() {
    let source = "def f():\n    print(x)\n    global x\n    x = 1\n";
    let found = codes(source);
    assert!(found.contains(&"E0118"));
}

#[test]
fn scenario_9_raise_notimplemented() {
    let source = "class C:\n    def add(self, other):\n        raise NotImplemented\n";
    assert_eq!(codes(source), vec!["E0711"]);
}

#[test]
fn scenario_9_return_notimplemented_in_dunder_is_clean() {
    let source = "class C:\n    def __add__(self, other):\n        return NotImplemented\n";
    assert!(codes(source).is_empty());
}

#[test]
fn scenario_10_comprehension_target_not_reported_but_iterable_is() {
    let source = "result = [x for x in y]\n";
    let found = codes(source);
    assert_eq!(found, vec!["E0602"]);
}

#[test]
fn determinism_same_input_same_output() {
    let source = "def f(x, y, x): pass\n";
    assert_eq!(codes(source), codes(source));
}

#[test]
fn sort_order_is_non_decreasing_after_finalize() {
    use pyrint::message::{finalize, Message};
    use std::path::PathBuf;

    let source = "def f(x, x):\n    pass\ndef f(y, y):\n    pass\n";
    let program = parser::parse_program(source, "<test>").unwrap();
    let diagnostics = resolver::analyze(&program, source);
    let messages: Vec<Message> =
        diagnostics.into_iter().map(|d| Message::new(PathBuf::from("f.py"), d)).collect();
    let finalized = finalize(messages);
    let positions: Vec<_> = finalized.iter().map(|m| (m.diagnostic.range.start.line, m.diagnostic.range.start.column)).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn finalize_drops_exact_duplicates() {
    use pyrint::message::{finalize, Message};
    use std::path::PathBuf;

    let source = "def f(x, x):\n    pass\n";
    let program = parser::parse_program(source, "<test>").unwrap();
    let diagnostics = resolver::analyze(&program, source);
    let count = diagnostics.len();
    let doubled: Vec<Message> = diagnostics
        .iter()
        .chain(diagnostics.iter())
        .cloned()
        .map(|d| Message::new(PathBuf::from("f.py"), d))
        .collect();
    assert_eq!(finalize(doubled).len(), count);
}

#[test]
fn class_scope_does_not_leak_into_methods() {
    let source = "class C:\n    secret = 1\n    def f(self):\n        return secret\n";
    let found = codes(source);
    assert!(found.contains(&"E0602"));
}

#[test]
fn self_attribute_access_is_not_undefined() {
    let source = "class C:\n    secret = 1\n    def f(self):\n        return self.secret\n";
    assert!(codes(source).is_empty());
}

#[test]
fn no_self_argument_flagged() {
    let source = "class C:\n    def f(this):\n        pass\n";
    assert!(codes(source).contains(&"E0213"));
}

#[test]
fn no_method_argument_flagged() {
    let source = "class C:\n    def f():\n        pass\n";
    assert!(codes(source).contains(&"E0211"));
}

#[test]
fn staticmethod_is_exempt_from_self_rules() {
    let source = "class C:\n    @staticmethod\n    def f():\n        pass\n";
    assert!(codes(source).is_empty());
}

#[test]
fn reversed_of_int_literal_flagged() {
    let source = "reversed(5)\n";
    assert!(codes(source).contains(&"E0111"));
}

#[test]
fn format_on_int_literal_flagged() {
    let source = "(5).format()\n";
    assert!(codes(source).contains(&"E0119"));
}

#[test]
fn too_many_star_expressions_flagged() {
    let source = "a, *b, *c = [1, 2, 3]\n";
    assert!(codes(source).contains(&"E0112"));
}

#[test]
fn reversed_operator_flagged() {
    let source = "x = 1\nx =+ 1\n";
    assert!(codes(source).contains(&"E0107"));
}

#[test]
fn function_redefined_without_guard_flagged() {
    let source = "def f():\n    pass\ndef f():\n    pass\n";
    assert!(codes(source).contains(&"E0102"));
}

#[test]
fn function_redefined_under_version_guard_is_clean() {
    let source = "import sys\nif sys.version_info >= (3, 8):\n    def f():\n        pass\nelse:\n    def f():\n        pass\n";
    assert!(!codes(source).contains(&"E0102"));
}

#[test]
fn forward_reference_within_function_resolves() {
    let source = "def f():\n    return g()\ndef g():\n    return 1\n";
    assert!(codes(source).is_empty());
}

#[test]
fn star_import_suppresses_undefined_variable() {
    let source = "from os import *\nprint(path)\n";
    assert!(codes(source).is_empty());
}

#[test]
fn star_import_suppresses_undefined_variable_in_nested_scope() {
    let source = "from os import *\ndef f():\n    return path\n";
    assert!(codes(source).is_empty());
}

#[test]
fn exec_suppresses_undefined_variable() {
    let source = "def f():\n    exec(\"x = 1\")\n    return x\n";
    assert!(codes(source).is_empty());
}

#[test]
fn locals_mutation_suppresses_undefined_variable() {
    let source = "def f():\n    locals()[\"x\"] = 1\n    return x\n";
    assert!(codes(source).is_empty());
}

#[test]
fn forward_reference_within_module_resolves() {
    let source = "def f():\n    return 1\nf()\n";
    assert!(codes(source).is_empty());
}

#[test]
fn global_assignment_inside_function_creates_module_binding() {
    let source = "def f():\n    global x\n    x = 1\n    return x\n";
    assert!(codes(source).is_empty());
}

#[test]
fn global_lazy_init_pattern_is_clean() {
    let source = "def setup():\n    global c\n    c = {}\ndef use():\n    global c\n    return c\n";
    assert!(codes(source).is_empty());
}
