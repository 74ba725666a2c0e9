//! The `kabuki init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create kabuki.toml
    if std::path::Path::new("kabuki.toml").exists() {
        println!("kabuki.toml already exists, skipping.");
    } else {
        std::fs::write("kabuki.toml", SAMPLE_CONFIG)?;
        println!("Created kabuki.toml");
    }

    // Create example quiz
    std::fs::create_dir_all("quizzes")?;
    let example_path = std::path::Path::new("quizzes/example.json");
    if example_path.exists() {
        println!("quizzes/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: kabuki validate --quizzes quizzes");
    println!("  2. Run: kabuki play");
    println!("  3. Read your transcript in ./results");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# kabuki configuration

quizzes_dir = "./quizzes"
results_dir = "./results"
# user = "your name"
catalog_order = "file_name"
clear_screen = true
"#;

const EXAMPLE_QUIZ: &str = r#"{
    "quiz_id": "example",
    "name": "Example Quiz",
    "description": "One question of each kind",
    "image": "",
    "questions": [
        {
            "prompt": "Which planet is closest to the sun?",
            "image": "",
            "type": "single_choice",
            "choices": ["Venus", "Mercury", "Mars"],
            "answer": "Mercury",
            "time_limit": 30,
            "points": 10
        },
        {
            "prompt": "Select the two largest planets, largest first.",
            "image": "",
            "type": "select_two",
            "choices": ["Earth", "Saturn", "Jupiter", "Neptune"],
            "answer": ["Jupiter", "Saturn"],
            "time_limit": 45,
            "points": 20
        },
        {
            "prompt": "What is the name of Earth's natural satellite?",
            "image": "",
            "type": "free_response",
            "choices": [],
            "answer": ["The Moon", "Moon", "Luna"],
            "time_limit": 30,
            "points": 5
        }
    ]
}
"#;
