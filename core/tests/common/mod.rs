// Shared fixtures for the integration tests.
#![allow(dead_code)]

use compressor_core::{Complex, Value};

pub struct BaseCase {
    pub name: &'static str,
    pub arg: Value,
    pub want_err: bool,
}

/// One case per shape, mirroring what callers pass in practice.
pub fn init_test_cases() -> Vec<BaseCase> {
    let (tx, _rx) = crossbeam::channel::unbounded::<i32>();

    vec![
        BaseCase { name: "String", arg: "test".into(), want_err: false },
        BaseCase { name: "Int", arg: 123.into(), want_err: false },
        BaseCase { name: "Uint", arg: 123u32.into(), want_err: false },
        BaseCase { name: "Float", arg: 3.1.into(), want_err: false },
        BaseCase { name: "Bool", arg: true.into(), want_err: false },
        BaseCase { name: "Complex", arg: Complex::new(3.1, 1.0).into(), want_err: false },
        BaseCase {
            name: "Slice",
            arg: Value::sequence(vec![Value::from(123), Value::from(12.23), Value::from("test")]),
            want_err: false,
        },
        BaseCase { name: "Map", arg: Value::mapping([("test", 123)]), want_err: false },
        BaseCase { name: "Pointer", arg: Value::pointer(1), want_err: false },
        BaseCase { name: "Bytes", arg: b"Hello world".to_vec().into(), want_err: false },
        BaseCase { name: "Nil Pointer", arg: None::<i32>.into(), want_err: true },
        BaseCase { name: "Chan", arg: tx.into(), want_err: true },
    ]
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
