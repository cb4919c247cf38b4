use gqlengine_core::coercion::Variables;
use gqlengine_core::gqlengine_parser::ast;
use gqlengine_core::Value;

/// Whether a selection carrying `directives` is part of the result.
///
/// `@skip(if: true)` excludes it regardless of `@include`; otherwise
/// `@include(if: false)` excludes it. A variable condition without a bound
/// value counts as `false`.
pub fn should_include(directives: &[ast::DirectiveAnnotation], variables: &Variables) -> bool {
    if condition(directives, "skip", variables) == Some(true) {
        return false;
    }
    condition(directives, "include", variables) != Some(false)
}

fn condition(
    directives: &[ast::DirectiveAnnotation],
    directive_name: &str,
    variables: &Variables,
) -> Option<bool> {
    let directive = directives.iter().find(|d| d.name == directive_name)?;
    let value = directive.argument("if").map(|arg| &arg.value);
    Some(match value {
        Some(ast::Value::Boolean(b)) => b.value,
        Some(ast::Value::Variable(var)) => {
            matches!(variables.get(&var.name), Some(Value::Boolean(true)))
        },
        _ => false,
    })
}
