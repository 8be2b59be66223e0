use anyhow::Result;
use line_matcher::find_line_pairs;
use ropey::Rope;

/// A line handle into one of the two rope buffers. The matcher never
/// sees the text directly; it reads it back through the accessor.
#[derive(Clone, Copy)]
struct LineRef<'a> {
    buffer: &'a Rope,
    line: usize,
}

fn main() -> Result<()> {
    let old = Rope::from_str(
        "let total = price * count;\nprintln!(\"total: {total}\");\nreturn total;\n",
    );
    let new = Rope::from_str(
        "let grand_total = price * count + tax;\nreturn grand_total;\n",
    );

    let removed: Vec<LineRef> = (0..old.len_lines().saturating_sub(1))
        .map(|line| LineRef { buffer: &old, line })
        .collect();
    let added: Vec<LineRef> = (0..new.len_lines().saturating_sub(1))
        .map(|line| LineRef { buffer: &new, line })
        .collect();

    let pairs = find_line_pairs(
        |line_ref: &LineRef| line_ref.buffer.line(line_ref.line).to_string(),
        &removed,
        &added,
    );

    for (removed_ref, added_ref) in pairs {
        println!(
            "old line {} -> new line {}",
            removed_ref.line + 1,
            added_ref.line + 1
        );
        print!("- {}", old.line(removed_ref.line));
        print!("+ {}", new.line(added_ref.line));
        println!();
    }

    Ok(())
}
