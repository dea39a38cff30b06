use recur::{
    ast::{Expr, FunctionDef},
    interpreter::{environment::Environment, value::Value},
};

fn constant(name: &str, value: i64) -> FunctionDef {
    FunctionDef { name:        name.to_string(),
                  params:      vec![],
                  body:        vec![],
                  return_expr: Expr::Number { value }, }
}

#[test]
fn lookups_walk_outwards() {
    let mut globals = Environment::new();
    globals.define_variable("a", Value::Integer(1));
    globals.define_function("f", constant("f", 10));

    let mut middle = globals.create_child();
    middle.define_variable("b", Value::Integer(2));

    let inner = middle.create_child();

    assert_eq!(inner.get_variable("a"), Some(&Value::Integer(1)));
    assert_eq!(inner.get_variable("b"), Some(&Value::Integer(2)));
    assert_eq!(inner.get_variable("c"), None);
    assert_eq!(inner.get_function("f").map(FunctionDef::arity), Some(0));
    assert!(inner.get_function("g").is_none());
}

#[test]
fn definitions_stay_in_their_scope() {
    let mut globals = Environment::new();
    globals.define_variable("x", Value::Integer(1));

    {
        let mut child = globals.create_child();
        child.define_variable("x", Value::Integer(2));
        child.define_variable("y", Value::Integer(3));
        child.define_function("f", constant("f", 4));

        assert_eq!(child.get_variable("x"), Some(&Value::Integer(2)));
    }

    assert_eq!(globals.get_variable("x"), Some(&Value::Integer(1)));
    assert_eq!(globals.get_variable("y"), None);
    assert!(globals.get_function("f").is_none());
}

#[test]
fn redefinition_replaces_in_place() {
    let mut env = Environment::new();
    env.define_variable("x", Value::Integer(1));
    env.define_variable("x", Value::Integer(5));
    env.define_function("f", constant("f", 1));
    env.define_function("f", constant("f", 2));

    assert_eq!(env.get_variable("x"), Some(&Value::Integer(5)));
    assert_eq!(env.get_function("f").map(|f| f.return_expr.clone()),
               Some(Expr::Number { value: 2 }));
}

#[test]
fn siblings_are_isolated() {
    let globals = Environment::new();

    let mut first = globals.create_child();
    first.define_variable("x", Value::Integer(1));

    let second = globals.create_child();
    assert_eq!(second.get_variable("x"), None);
    assert_eq!(first.get_variable("x"), Some(&Value::Integer(1)));
}

#[test]
fn depth_counts_the_chain() {
    let globals = Environment::new();
    let child = globals.create_child();
    let grandchild = child.create_child();

    assert_eq!(globals.depth(), 1);
    assert_eq!(child.depth(), 2);
    assert_eq!(grandchild.depth(), 3);
}

#[test]
fn values() {
    assert!(Value::Integer(-1).is_truthy());
    assert!(!Value::Integer(0).is_truthy());
    assert_eq!(Value::from(true), Value::Integer(1));
    assert_eq!(Value::from(false), Value::Integer(0));
    assert_eq!(Value::from(7).as_integer(), 7);
    assert_eq!(Value::Integer(-3).to_string(), "-3");
}
