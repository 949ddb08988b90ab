use crate::research::{research_prompt, DEFAULT_TOPIC};

pub fn print_prompt(topic: Option<&str>) {
    println!("{}", research_prompt(topic.unwrap_or(DEFAULT_TOPIC)));
}
