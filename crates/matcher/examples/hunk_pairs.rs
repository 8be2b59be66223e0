use std::collections::HashSet;

use anyhow::Result;
use line_matcher::{find_common_anchor, find_line_pairs};
use similar::{ChangeTag, TextDiff};

fn main() -> Result<()> {
    env_logger::init();

    let old_text = "\
struct Config {
    verbose: bool,
    maxRetries: u32,
}

fn load_config(path: &str) -> Config {
    let raw = read_file(path);
    parse_config(&raw)
}
";
    let new_text = "\
struct Config {
    verbose: bool,
    max_retries: u32,
    timeout_ms: u64,
}

fn load_config(path: &Path) -> Config {
    let raw = read_file(path);
    parse_config(&raw)
}
";

    let diff = TextDiff::from_lines(old_text, new_text);

    // Collect each run of consecutive changes into one hunk and pair its
    // removed lines with its added lines
    let mut removed: Vec<String> = Vec::new();
    let mut added: Vec<String> = Vec::new();

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => removed.push(change.value().trim_end().to_string()),
            ChangeTag::Insert => added.push(change.value().trim_end().to_string()),
            ChangeTag::Equal => {
                print_hunk_pairs(&removed, &added);
                removed.clear();
                added.clear();
            }
        }
    }
    print_hunk_pairs(&removed, &added);

    Ok(())
}

fn print_hunk_pairs(removed: &[String], added: &[String]) {
    if removed.is_empty() && added.is_empty() {
        return;
    }

    println!("=== Hunk: {} removed, {} added ===", removed.len(), added.len());

    let removed_refs: Vec<&str> = removed.iter().map(String::as_str).collect();
    let added_refs: Vec<&str> = added.iter().map(String::as_str).collect();
    let pairs = find_line_pairs(|line: &&str| line.to_string(), &removed_refs, &added_refs);

    for (removed_line, added_line) in &pairs {
        println!("- {}", removed_line);
        println!("+ {}", added_line);

        match find_common_anchor(removed_line, added_line) {
            Some(anchor) => println!("  anchor: {}", anchor),
            None => println!("  anchor: none"),
        }
    }

    // Lines the matcher left unpaired stay plain removals/additions
    let paired_removed: HashSet<&str> = pairs.iter().map(|(removed_line, _)| *removed_line).collect();
    let paired_added: HashSet<&str> = pairs.iter().map(|(_, added_line)| *added_line).collect();
    for line in &removed_refs {
        if !paired_removed.contains(line) {
            println!("- {} (unpaired)", line);
        }
    }
    for line in &added_refs {
        if !paired_added.contains(line) {
            println!("+ {} (unpaired)", line);
        }
    }

    println!();
}
