use rand::seq::SliceRandom;

const THINKING_MESSAGES: &[&str] = &[
    "Thinking",
    "Pondering",
    "Consulting the model",
    "Sharpening the quill",
    "Gathering thoughts",
    "Drafting an answer",
    "Checking the numbers",
    "Choosing words",
];

pub fn get_random_thinking_message() -> &'static str {
    THINKING_MESSAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Thinking")
}
