//! # Built-in Training Examples
//!
//! File: cli/src/intent/dataset.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! The eight labeled phrases the classifier is trained on. The set is fixed
//! for the lifetime of the process; each row also carries the canned response
//! that feeds the reply table.
//!

/// One labeled training row: an example utterance, its intent and the
/// response associated with that row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    pub pattern: String,
    pub intent: String,
    pub response: String,
}

impl TrainingExample {
    pub fn new(pattern: &str, intent: &str, response: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            intent: intent.to_string(),
            response: response.to_string(),
        }
    }
}

/// Returns the built-in training set, in declaration order.
///
/// Order matters for the reply table: when an intent appears on several rows,
/// the first row's response is the one that is kept.
pub fn builtin_examples() -> Vec<TrainingExample> {
    vec![
        TrainingExample::new("hi", "greeting", "Hello! How are you feeling today? 😊"),
        TrainingExample::new("hello", "greeting", "Hi there! I am here to listen. 🌸"),
        TrainingExample::new("bye", "goodbye", "Goodbye! Take care of yourself. 🌸"),
        TrainingExample::new("goodbye", "goodbye", "Bye! Hope to see you soon. 🌸"),
        TrainingExample::new(
            "i feel sad",
            "sad",
            "I am sorry you are feeling sad. Want to talk about it?",
        ),
        TrainingExample::new("i feel happy", "happy", "That is wonderful! Keep smiling! 🌸"),
        TrainingExample::new(
            "i am anxious",
            "anxious",
            "Take a deep breath. Try to focus on positive thoughts. 🌸",
        ),
        TrainingExample::new(
            "thank you",
            "thanks",
            "You are welcome! I am always here to help. 🌸",
        ),
    ]
}
