//! The closed set of names available without declaration in every scope.
//!
//! A flat `&[&str]` consulted by the scope resolver before reporting an unresolved name.
//! Extending this set is a configuration concern out of scope here, so it stays a plain
//! constant rather than something pluggable.

pub const BUILTINS: &[&str] = &[
    "print", "len", "range", "str", "int", "float", "bool", "bytes", "bytearray", "complex",
    "list", "dict", "set", "frozenset", "tuple", "object",
    "isinstance", "issubclass", "callable", "hasattr", "getattr", "setattr", "delattr",
    "open", "input", "repr", "format", "vars", "dir", "id", "hash", "iter", "next",
    "reversed", "enumerate", "zip", "map", "filter", "sorted", "slice",
    "abs", "min", "max", "sum", "round", "pow", "divmod",
    "any", "all", "chr", "ord", "hex", "oct", "bin", "ascii",
    "type", "super", "staticmethod", "classmethod", "property",
    "globals", "locals", "eval", "exec", "compile", "__import__",
    "memoryview", "NotImplemented", "Ellipsis", "None", "True", "False",
    "Exception", "BaseException", "ValueError", "TypeError", "NameError", "KeyError",
    "IndexError", "AttributeError", "ZeroDivisionError", "NotImplementedError",
    "StopIteration", "StopAsyncIteration", "RuntimeError", "OverflowError",
    "ImportError", "ModuleNotFoundError", "FileNotFoundError", "OSError", "IOError",
    "ArithmeticError", "AssertionError", "GeneratorExit", "KeyboardInterrupt",
    "LookupError", "MemoryError", "RecursionError", "ReferenceError", "SyntaxError",
    "IndentationError", "SystemError", "SystemExit", "UnboundLocalError",
    "UnicodeError", "UnicodeDecodeError", "UnicodeEncodeError", "Warning",
    "DeprecationWarning", "FutureWarning", "UserWarning",
    "__name__", "__file__", "__doc__", "__package__", "__builtins__", "__debug__",
];

pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_core_names() {
        assert!(is_builtin("print"));
        assert!(is_builtin("NotImplementedError"));
        assert!(!is_builtin("frobnicate"));
    }
}
