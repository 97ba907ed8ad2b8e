use anyhow::Result;
use murmur_graph::mentioned_users;

use crate::config::Config;
use crate::ui;

pub fn run(text: &str, config: &Config) -> Result<()> {
    let mut handles: Vec<String> = mentioned_users(text).into_iter().collect();
    handles.sort();

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&handles)?);
        return Ok(());
    }

    if handles.is_empty() {
        ui::info("No mentions.");
        return Ok(());
    }

    for handle in &handles {
        ui::success(&format!("@{}", handle));
    }

    Ok(())
}
