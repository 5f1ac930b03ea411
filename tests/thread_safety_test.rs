//! Tests for sharing schemas and forms across threads.

use std::sync::Arc;
use std::thread;

use inquest::{field, parse_int, success, Form, Schema};

fn score() -> Schema<i64> {
    field("score", parse_int().check_int_less_than(100), success)
}

#[test]
fn test_concurrent_runs_share_schema() {
    let schema = Arc::new(score());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let result = Form::new((*schema).clone()).add_int("score", i * 20).run();
                assert_eq!(result.is_success(), i * 20 < 100);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_failed_form_moves_between_threads() {
    let failed = Form::new(score())
        .add_string("score", "lots")
        .run()
        .into_result()
        .unwrap_err();

    let handle = thread::spawn(move || {
        let fixed = failed.add_int("score", 42);
        fixed.run().into_result().unwrap()
    });

    assert_eq!(handle.join().unwrap(), 42);
}
