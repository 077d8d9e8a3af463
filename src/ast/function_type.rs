//! Classify a function definition by what kind of method (if any) it is.
//!
//! This engine does not track import aliasing or cross-file call-path resolution, so
//! decorators are matched by their simple or dotted source name instead of a resolved call
//! path.

use rustpython_parser::ast::{Expr, ExprKind};

const CLASS_METHOD_NAMES: [&str; 3] = ["__new__", "__init_subclass__", "__class_getitem__"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionType {
    Function,
    Method,
    ClassMethod,
    StaticMethod,
}

/// Render a decorator expression's callee name, e.g. `@staticmethod` -> `"staticmethod"`,
/// `@abc.abstractmethod` -> `"abc.abstractmethod"`, `@app.route(...)` -> `"app.route"`.
fn decorator_name(expr: &Expr) -> Option<String> {
    fn dotted(expr: &Expr) -> Option<String> {
        match &expr.node {
            ExprKind::Name { id, .. } => Some(id.clone()),
            ExprKind::Attribute { value, attr, .. } => {
                dotted(value).map(|base| format!("{base}.{attr}"))
            }
            _ => None,
        }
    }
    match &expr.node {
        ExprKind::Call { func, .. } => dotted(func),
        _ => dotted(expr),
    }
}

/// Classify a method defined directly in a class body. `in_class` is `false` for any
/// function not directly nested in a class (those are always [`FunctionType::Function`]).
pub fn classify(name: &str, decorator_list: &[Expr], in_class: bool) -> FunctionType {
    if !in_class {
        return FunctionType::Function;
    }
    let decorators: Vec<String> = decorator_list.iter().filter_map(decorator_name).collect();
    if decorators.iter().any(|d| d == "staticmethod") {
        FunctionType::StaticMethod
    } else if CLASS_METHOD_NAMES.contains(&name) || decorators.iter().any(|d| d == "classmethod") {
        FunctionType::ClassMethod
    } else {
        FunctionType::Method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_method_needs_self() {
        assert_eq!(classify("run", &[], true), FunctionType::Method);
    }

    #[test]
    fn dunder_new_is_a_class_method() {
        assert_eq!(classify("__new__", &[], true), FunctionType::ClassMethod);
    }

    #[test]
    fn module_level_function_is_never_a_method() {
        assert_eq!(classify("run", &[], false), FunctionType::Function);
    }
}
