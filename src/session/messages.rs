//! Fixed message catalog for the interactive session
//!
//! Every user-facing string lives here so the controllers stay free of
//! literals; the functions cover messages that interpolate a value.

pub const GREETING: &str = "Hi! I'm your personal assistant.";
pub const ASK_NAME: &str = "What's your name? ";
pub const DEFAULT_NAME: &str = "friend";
pub const ASK_AGE: &str = "How old are you? ";
pub const MINOR: &str = "You're still a minor.";
pub const ADULT: &str = "You're an adult.";

pub fn nice_to_meet(name: &str) -> String {
    format!("Nice to meet you, {}!", name)
}

pub fn farewell(name: &str) -> String {
    format!("Bye, {}! See you soon.", name)
}

pub const MAIN_MENU: &str = "\nWhat would you like to do?\n  1 - Mood check-in\n  2 - Get some advice\n  3 - Mini calculator (addition)\n  4 - Task list (to-do)\n  5 - Exit\n  6 - Ask the assistant";
pub const CHOOSE: &str = "Pick a number: ";
pub const UNRECOGNIZED_MAIN: &str = "Didn't catch that. Enter 1, 2, 3, 4, 5 or 6.";

pub const ASK_MOOD: &str = "How is your mood (1-10)? ";
pub const ADVICE: &str = "My advice: study in regular 20-30 minute sessions - it beats rare marathons.";
pub const ASK_FIRST_NUMBER: &str = "Enter the first number: ";
pub const ASK_SECOND_NUMBER: &str = "Enter the second number: ";

pub fn mood_ack(mood: i64) -> String {
    format!("Got it. Mood: {}/10. Thanks for sharing!", mood)
}

pub fn sum_line(a: i64, b: i64) -> String {
    format!("Result: {} + {} = {}", a, b, a + b)
}

pub const TASK_MENU: &str = "\nTask list:\n  1 - Show tasks\n  2 - Add a task\n  3 - Remove a task by number\n  4 - Back";
pub const UNRECOGNIZED_TASK: &str = "Didn't catch that. Enter 1, 2, 3 or 4.";
pub const TASKS_EMPTY: &str = "The task list is empty.";
pub const TASKS_HEADER: &str = "Your tasks:";
pub const ASK_TASK: &str = "Enter the task: ";
pub const TASK_ADDED: &str = "Added.";
pub const TASK_EMPTY_REJECTED: &str = "An empty task is not worth keeping.";
pub const NOTHING_TO_REMOVE: &str = "The list is empty - nothing to remove.";
pub const ASK_REMOVE_INDEX: &str = "Task number to remove: ";

pub fn task_item(index: usize, text: &str) -> String {
    format!("{}. {}", index, text)
}

pub fn task_removed(text: &str) -> String {
    format!("Removed: {}", text)
}

pub fn could_not_save(action: &str) -> String {
    format!("Could not save the task list, the {} was not applied.", action)
}

pub const NOT_AN_INTEGER: &str = "Please enter a whole number (like 30 or -2).";

pub fn at_least(min: i64) -> String {
    format!("Enter a number no less than {}.", min)
}

pub fn at_most(max: i64) -> String {
    format!("Enter a number no greater than {}.", max)
}

pub const ASK_QUESTION: &str = "What would you like to ask? ";
pub const EMPTY_QUESTION: &str = "No question, no answer.";
pub const ASSISTANT_FAILED: &str = "The assistant is unavailable right now. Try again later.";

pub fn missing_credential(env_var: &str) -> String {
    format!(
        "No API key configured. Set the {} environment variable or run: companion config --set-api-key YOUR_KEY",
        env_var
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_line_with_negative_operand() {
        assert_eq!(sum_line(4, -9), "Result: 4 + -9 = -5");
    }

    #[test]
    fn test_task_item_is_one_based() {
        assert_eq!(task_item(1, "buy milk"), "1. buy milk");
    }

    #[test]
    fn test_missing_credential_names_the_variable() {
        let msg = missing_credential("OPENROUTER_API_KEY");
        assert!(msg.contains("OPENROUTER_API_KEY"));
        assert!(msg.contains("--set-api-key"));
    }
}
