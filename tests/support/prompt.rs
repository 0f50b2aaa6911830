//! Scripted prompt for driving decryption without a terminal.

use std::cell::RefCell;
use std::collections::VecDeque;

use opencrypt::core::domain::Field;
use opencrypt::core::prompt::Prompt;
use opencrypt::error::{Result, ValidationError};

/// Answers prompts from a fixed list and remembers what was asked.
#[derive(Default)]
pub struct Scripted {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<Field>>,
}

impl Scripted {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Fields asked for, in order.
    pub fn asked(&self) -> Vec<Field> {
        self.asked.borrow().clone()
    }
}

impl Prompt for Scripted {
    fn ask(&self, field: Field) -> Result<String> {
        self.asked.borrow_mut().push(field);
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ValidationError::MissingValue(field).into())
    }
}
