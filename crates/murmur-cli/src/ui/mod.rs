use console::style;

/// Print success message
pub fn success(msg: &str) {
    println!("{} {}", style("✔").green(), msg);
}

/// Print error message
pub fn error(msg: &str) {
    println!("{} {}", style("✖").red(), msg);
}

/// Print info message (indented)
pub fn info(msg: &str) {
    println!("  {}", msg);
}

/// Print a header/title
pub fn header(msg: &str) {
    println!();
    println!("  {}", style(msg).bold());
    println!();
}

/// Print one ranking row: position, handle, and optionally its follower count
pub fn rank_row(position: usize, handle: &str, followers: Option<usize>) {
    let position = style(format!("{:>3}.", position)).dim();
    match followers {
        Some(count) => println!(
            "  {} {} {}",
            position,
            style(handle).cyan(),
            style(format!("({} followers)", count)).dim()
        ),
        None => println!("  {} {}", position, style(handle).cyan()),
    }
}

/// Print a handle with the handles it points at
pub fn edge_row(handle: &str, targets: &[&str]) {
    if targets.is_empty() {
        println!("  {} {}", style(handle).cyan(), style("→ (nobody)").dim());
    } else {
        println!("  {} → {}", style(handle).cyan(), targets.join(", "));
    }
}
