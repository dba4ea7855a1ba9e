use numora::{
    ast::{Expr, Statement},
    interpreter::{evaluator::core::Context, parser::core::parse_program, scope::ScopeArena, value::core::Value},
};

#[test]
fn lookup_walks_outward_and_bind_stays_local() {
    let mut arena = ScopeArena::new();
    let outer = arena.allocate(None);
    let middle = arena.allocate(Some(outer));
    let inner = arena.allocate(Some(middle));

    arena.bind(outer, "x", Value::from(1.0));
    arena.bind(middle, "y", Value::from(2.0));

    assert_eq!(arena.lookup(inner, "x"), Some(&Value::from(1.0)));
    assert_eq!(arena.lookup(inner, "y"), Some(&Value::from(2.0)));
    assert_eq!(arena.lookup(outer, "y"), None);
    assert_eq!(arena.get_local(inner, "x"), None);

    arena.bind(inner, "x", Value::from(3.0));
    assert_eq!(arena.lookup(inner, "x"), Some(&Value::from(3.0)));
    assert_eq!(arena.lookup(middle, "x"), Some(&Value::from(1.0)));
    assert_eq!(arena.parent(inner), Some(middle));
    assert_eq!(arena.parent(outer), None);
}

#[test]
fn released_scopes_are_reused_empty() {
    let mut arena = ScopeArena::new();
    let root = arena.allocate(None);
    let child = arena.allocate(Some(root));
    arena.bind(child, "x", Value::from(1.0));
    assert_eq!(arena.live_count(), 2);

    arena.release(child);
    arena.release(child);
    assert_eq!(arena.live_count(), 1);

    let reused = arena.allocate(Some(root));
    assert_eq!(reused, child);
    assert_eq!(arena.get_local(reused, "x"), None);
    assert_eq!(arena.live_count(), 2);
}

#[test]
fn fresh_context_has_constants_and_root() {
    let context = Context::new();
    assert_eq!(context.scopes.live_count(), 2);
    assert_eq!(context.scopes.parent(context.root()), Some(context.constants()));
    assert!(context.scopes.get_local(context.constants(), "pi").is_some());
    assert!(context.scopes.get_local(context.root(), "pi").is_none());
}

#[test]
fn blocks_allocate_nested_scopes_at_parse_time() {
    let mut context = Context::new();
    let program = context.parse("{ a = 1; { b = a } }").unwrap();

    assert_eq!(program.scopes.len(), 2);
    assert_eq!(context.scopes.live_count(), 4);
    assert_eq!(context.scopes.parent(program.scopes[0]), Some(context.root()));
    assert_eq!(context.scopes.parent(program.scopes[1]), Some(program.scopes[0]));

    let Statement::Expression { expr: Expr::ScopedBlock { scope, statements, .. }, .. } = &program.statements[0] else {
        panic!("expected a block statement");
    };
    assert_eq!(*scope, program.scopes[0]);
    assert!(matches!(&statements[0], Statement::Assignment { scope, .. } if *scope == program.scopes[0]));

    context.execute(&program).unwrap();
    assert_eq!(context.scopes.get_local(program.scopes[1], "b"), Some(&Value::from(1.0)));
    assert_eq!(context.scopes.get_local(program.scopes[0], "b"), None);

    context.discard(program);
    assert_eq!(context.scopes.live_count(), 2);
}

#[test]
fn run_releases_program_scopes() {
    let mut context = Context::new();
    for _ in 0..10 {
        context.run("{ x = 1; { y = 2 } }; { z = 3 }").unwrap();
    }
    assert_eq!(context.scopes.live_count(), 2);

    assert!(context.run("{ x = undefined_name }").is_err());
    assert_eq!(context.scopes.live_count(), 2);
}

#[test]
fn parse_errors_release_scopes() {
    let mut context = Context::new();
    assert!(context.parse("{ a = 1 }; { { b = 2 }; c = # }").is_err());
    assert_eq!(context.scopes.live_count(), 2);

    assert!(context.parse("{ a = 1 }; 1 +").is_err());
    assert_eq!(context.scopes.live_count(), 2);
}

#[test]
fn root_bindings_persist_between_runs() {
    let mut context = Context::new();
    context.run("x = 2").unwrap();
    context.run("{ x = 100 }").unwrap();
    assert_eq!(context.run("x").unwrap(), Some(Value::from(2.0)));
    assert_eq!(context.scopes.get_local(context.root(), "$"), Some(&Value::from(2.0)));
}

#[test]
fn a_program_parsed_under_its_own_scope_stays_isolated() {
    let mut context = Context::new();
    context.run("x = 1").unwrap();

    let own = context.scopes.allocate(Some(context.root()));
    let program = parse_program("x = x + 1; y = x", &mut context.scopes, own).unwrap();
    assert_eq!(context.execute(&program).unwrap(), Some(Value::from(2.0)));
    context.discard(program);
    context.scopes.release(own);

    assert_eq!(context.scopes.live_count(), 2);
    assert_eq!(context.run("x").unwrap(), Some(Value::from(1.0)));
    assert!(context.run("y").is_err());
}
