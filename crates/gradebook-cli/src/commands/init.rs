//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create gradebook.toml
    if std::path::Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    // Create example roster
    std::fs::create_dir_all("rosters")?;
    let example_path = std::path::Path::new("rosters/example.toml");
    if example_path.exists() {
        println!("rosters/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_ROSTER)?;
        println!("Created rosters/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit rosters/example.toml with your students");
    println!("  2. Run: gradebook validate --roster rosters/example.toml");
    println!("  3. Run: gradebook report --roster rosters/example.toml --format html");
    println!("  4. Or explore interactively: gradebook shell --roster rosters/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

report_title = "Student Grade Report"
chart_title = "Student Averages"

# One of: name, average-desc, average-asc, highest-desc, lowest-asc
# default_sort = "average-desc"

output_dir = "./gradebook-reports"

# Any of: text, json, html, svg
formats = ["text", "html"]
"#;

const EXAMPLE_ROSTER: &str = r#"[roster]
name = "Example Class"

# Grades are comma separated integers; negative values are stored as 0.

[[students]]
name = "Alice"
grades = "85, 92, 78"

[[students]]
name = "Bob"
grades = "70, 66, 77"

[[students]]
name = "Charlie"
grades = "95, 90, 93"

[[students]]
name = "Dana"
grades = "58, 64, 70"
"#;
