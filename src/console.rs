// Console rendering of extraction progress

use crate::event::ExtractMsg;
use crate::pipeline::RunSummary;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Lines to print for one message.
pub fn render(msg: &ExtractMsg) -> Vec<String> {
    match msg {
        ExtractMsg::Started => vec!["Cutting geocache icons".to_string(), rule()],
        ExtractMsg::SpriteFound(path) => vec![format!("✓ Sprite found: {}", path.display())],
        ExtractMsg::OutputDirReady(path) => {
            vec![format!("✓ Output directory: {}", path.display())]
        }
        ExtractMsg::SpriteLoaded { width, height } => {
            vec![format!("✓ Sprite loaded: {}x{} pixels", width, height)]
        }
        ExtractMsg::CuttingStarted(total) => {
            vec![String::new(), format!("Cutting {} icons...", total)]
        }
        ExtractMsg::IconWritten {
            name,
            x,
            y,
            file_name,
        } => vec![format!("   ✓ {}.png ({}, {}) -> {}", name, x, y, file_name)],
        ExtractMsg::IconFailed { name, error } => {
            vec![format!("   ✗ Error with {}: {}", name, error)]
        }
        ExtractMsg::Completed(summary) => render_summary(summary),
        ExtractMsg::Failed { message, hint, .. } => {
            let mut lines = vec![format!("✗ Error: {}", message)];
            if let Some(hint) = hint {
                lines.push(String::new());
                lines.push(hint.clone());
            }
            lines
        }
    }
}

fn render_summary(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        rule(),
        format!("Done! {}/{} icons created", summary.succeeded, summary.total),
        String::new(),
    ];

    if summary.all_succeeded() {
        lines.push("All icons were cut successfully!".to_string());
    } else {
        lines.push(format!("{} icon(s) could not be created", summary.failed()));
    }

    lines.push(String::new());
    lines.push("Icons saved in:".to_string());
    lines.push(format!("   {}", summary.output_dir.display()));
    lines
}

/// Errors go to stderr, everything else to stdout.
pub fn is_error(msg: &ExtractMsg) -> bool {
    matches!(msg, ExtractMsg::IconFailed { .. } | ExtractMsg::Failed { .. })
}

pub fn print(msg: &ExtractMsg) {
    for line in render(msg) {
        if is_error(msg) {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}
