use clap::Args;
use name_match::error::AppError;
use name_match::matching::{compare, ComparisonResult, SAMPLE_PAIRS};

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// First company name
    pub(crate) name1: String,
    /// Second company name
    pub(crate) name2: String,
    /// Print the raw comparison record as JSON instead of the report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let CompareArgs { name1, name2, json } = args;
    let result = compare(&name1, &name2);

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Comparison payload unavailable: {err}"),
        }
    } else {
        println!("{}", render_report(&result));
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Name match debugger demo");
    for (index, (name1, name2)) in SAMPLE_PAIRS.iter().enumerate() {
        let result = compare(name1, name2);
        println!("\n[{}] {:?} vs {:?}", index + 1, name1, name2);
        println!("{}", render_report(&result));
    }
    Ok(())
}

pub(crate) fn render_report(result: &ComparisonResult) -> String {
    let mut lines = vec![
        "Normalized Names".to_string(),
        format!("  {}", result.normalized_name1),
        format!("  {}", result.normalized_name2),
        String::new(),
        "Similarity Score".to_string(),
        format!("  Score (0-1): {:.3}", result.score),
        String::new(),
        "Normalization Steps Applied".to_string(),
    ];

    if result.normalization_applied.is_empty() {
        lines.push("  none".to_string());
    } else {
        for rule in &result.normalization_applied {
            lines.push(format!("  - {} ({})", rule.id(), rule.label()));
        }
    }

    lines.push(String::new());
    lines.push("Difference Categories".to_string());
    if result.difference_categories.is_empty() {
        lines.push("  none".to_string());
    } else {
        for category in &result.difference_categories {
            lines.push(format!("  - {}", category.id()));
        }
    }

    lines.push(String::new());
    lines.push("Explanation".to_string());
    for sentence in result.explanation() {
        lines.push(format!("  {sentence}"));
    }

    lines.join("\n")
}
