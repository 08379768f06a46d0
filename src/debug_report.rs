use libris::{LookupPath, LookupTrace, Query, ReplyVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(query: &Query, res: &ReplyVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("📚 {}: \"{}\"", res.details.intent, query.text), ansi::CYAN))
    );

    println!("\n{}", palette.paint("━━━ Parameters ━━━", ansi::GRAY));
    print_params(query, &palette);

    println!("\n{}", palette.paint("━━━ Lookups ━━━", ansi::GRAY));
    if res.details.trace.lookups.is_empty() {
        println!("{}", palette.dim("  No table lookups"));
    } else {
        for lookup in &res.details.trace.lookups {
            print_lookup(lookup, &palette);
        }
    }

    println!("\n{}", palette.paint("━━━ Reply ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("rule:"), palette.paint(res.details.trace.rule.unwrap_or("-"), ansi::CYAN));
    for (idx, message) in res.reply.messages.iter().enumerate() {
        let mut lines = message.lines();
        if let Some(first) = lines.next() {
            println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), palette.bold(first));
        }
        for line in lines {
            println!("      {}", line);
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", res.details.elapsed), ansi::GREEN));
    println!();
}

fn print_params(query: &Query, palette: &ansi::Palette) {
    let mut any = false;
    for (param, value) in query.params.iter() {
        any = true;
        println!(
            "  {} {}",
            palette.paint(format!("{:<11}", param.name()), ansi::BLUE),
            palette.paint(format!("{value:?}"), ansi::YELLOW)
        );
    }
    if !any {
        println!("{}", palette.dim("  None"));
    }
}

fn print_lookup(lookup: &LookupTrace, palette: &ansi::Palette) {
    let outcome = match (&lookup.key, lookup.path) {
        (Some(key), LookupPath::Direct) => palette.paint(format!("✓ {key}"), ansi::GREEN),
        (Some(key), _) => palette.paint(format!("~ {key}"), ansi::YELLOW),
        (None, _) => palette.dim("✗ unresolved"),
    };

    println!(
        "  {} {} {} {}",
        palette.paint(lookup.table, ansi::BLUE),
        palette.paint(format!("{:?}", lookup.input), ansi::YELLOW),
        palette.dim("→"),
        outcome
    );
    println!(
        "      {} {}  {} {}",
        palette.dim("path:"),
        palette.paint(lookup.path.as_str(), ansi::CYAN),
        palette.dim("│ normalized:"),
        palette.dim(format!("{:?}", lookup.normalized))
    );

    if !lookup.candidates.is_empty() {
        println!("      {} {}", palette.dim("candidates:"), lookup.candidates.join(", "));
    }
}
