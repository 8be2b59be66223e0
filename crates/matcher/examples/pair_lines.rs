use anyhow::Result;
use line_matcher::{find_common_anchor, find_line_pairs};

fn main() -> Result<()> {
    // One hunk's removed and added lines, as a diff tool would hand them
    // to the highlighter
    let removed = [
        "fn checksum(data: &[u8]) -> u32 {",
        "    let mut state = 0u32;",
        "    state",
    ];
    let added = [
        "fn checksum(bytes: &[u8]) -> u32 {",
        "    let mut state = 1u32;",
        "    state ^ SEED",
    ];

    let pairs = find_line_pairs(|line: &&str| line.to_string(), &removed, &added);

    println!("=== Line pairs ===");
    for (removed_line, added_line) in &pairs {
        println!("- {}", removed_line);
        println!("+ {}", added_line);

        match find_common_anchor(removed_line, added_line) {
            Some(anchor) => println!("  anchor: {}", anchor),
            None => println!("  anchor: none"),
        }
        println!();
    }

    Ok(())
}
