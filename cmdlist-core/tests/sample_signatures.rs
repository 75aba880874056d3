use std::cell::RefCell;

use cmdlist_core::CommandList;

thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn calls() -> Vec<&'static str> {
    CALLS.with(|c| c.borrow().clone())
}

fn function1() {
    CALLS.with(|c| c.borrow_mut().push("function1"));
}

fn function2() {
    CALLS.with(|c| c.borrow_mut().push("function2"));
}

fn function3() {
    CALLS.with(|c| c.borrow_mut().push("function3"));
}

/// User-defined return type.
#[derive(Clone, Copy, Debug, Default)]
struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

type SevenArgs<'a> = (char, char, f64, f32, f32, i16, &'a str);

fn build_vector(c1: char, c2: char, n: f64, n1: f32, n2: f32, s1: i16, label: &str) -> Vector3 {
    CALLS.with(|c| c.borrow_mut().push("build_vector"));
    assert_eq!((c1, c2, s1, label), ('x', 'c', 2, "hello"));
    Vector3 {
        x: n as f32,
        y: n1,
        z: n2,
    }
}

#[test]
fn seven_parameter_signature_runs_without_buffer() {
    let label = String::from("hello");
    let mut list = CommandList::<Vector3, SevenArgs<'_>>::new();
    list.register(build_vector, ('x', 'c', 2.3, 2.3, 2.3, 2, label.as_str()))
        .expect("register");

    assert_eq!(list.execute(), 1);
    assert_eq!(calls(), vec!["build_vector"]);
}

#[test]
fn seven_parameter_signature_collects_struct() {
    let mut list = CommandList::<Vector3, SevenArgs<'static>>::new();
    list.register(build_vector, ('x', 'c', 1.0, 2.0, 3.0, 2, "hello"))
        .expect("register");

    let mut out = [Vector3::default(); 1];
    list.execute_into(&mut out).expect("execute");
    let Vector3 { x, y, z } = out[0];
    assert_eq!((x, y, z), (1.0, 2.0, 3.0));
}

#[test]
fn sixteen_no_argument_commands_past_default_capacity() {
    let order: [fn(); 16] = [
        function1, function3, function2, function1, function1, function2, function1, function3,
        function1, function3, function2, function1, function1, function2, function1, function3,
    ];
    let mut list = CommandList::<(), ()>::new();
    for command in order {
        list.register(command, ()).expect("register");
    }
    assert_eq!(list.pending(), 16);
    assert_eq!(list.capacity(), 19);

    assert_eq!(list.execute(), 16);
    assert_eq!(
        calls(),
        vec![
            "function1", "function3", "function2", "function1", "function1", "function2",
            "function1", "function3", "function1", "function3", "function2", "function1",
            "function1", "function2", "function1", "function3",
        ]
    );
}

fn add(a: i32, b: i32) -> i32 {
    a + b
}

#[test]
fn add_results_land_in_buffer() {
    let mut add_list = CommandList::<i32, (i32, i32)>::new();
    add_list.register(add, (2, 3)).expect("register");
    add_list.register(add, (5, 6)).expect("register");

    let mut nums = [0; 2];
    add_list.execute_into(&mut nums).expect("execute");
    assert_eq!(nums, [5, 11]);
}
