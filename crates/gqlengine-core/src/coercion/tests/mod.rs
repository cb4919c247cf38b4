mod argument_coercion_tests;
mod variable_coercion_tests;
