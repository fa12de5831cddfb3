/*
 * fixture.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Shared test tree: nested lists of numbers.
 */

use crate::cursor::Cursor;
use crate::shape::TreeShape;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Num(i64),
    List(Vec<Value>),
}

pub(crate) struct ListShape;

impl TreeShape<Value> for ListShape {
    fn is_branch(&self, node: &Value) -> bool {
        matches!(node, Value::List(_))
    }

    fn children(&self, node: &Value) -> Vec<Value> {
        match node {
            Value::List(items) => items.clone(),
            Value::Num(_) => Vec::new(),
        }
    }

    fn build(&self, _original: &Value, children: Vec<Value>) -> Value {
        Value::List(children)
    }
}

pub(crate) fn num(n: i64) -> Value {
    Value::Num(n)
}

pub(crate) fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

/// `[1, [2, 3], 4]`
pub(crate) fn sample() -> Value {
    list(vec![num(1), list(vec![num(2), num(3)]), num(4)])
}

pub(crate) fn cursor(root: Value) -> Cursor<Value> {
    Cursor::new(root, ListShape)
}
