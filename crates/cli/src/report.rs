use kernel::FinalStandings;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Render a ranked table: title, underline, header, then one row per entry
/// with its 1-based position.
pub fn render_table(title: &str, ranked: &[(&str, u32)]) -> String {
    let mut table = String::new();
    // writing into a String cannot fail
    let _ = writeln!(table, "\n{title}");
    let _ = writeln!(table, "{}", "-".repeat(title.len()));
    let _ = writeln!(table, "{:<10} {:<25} {:<10}", "Position", "Name/Team", "Points");
    for (position, (name, points)) in ranked.iter().enumerate() {
        let _ = writeln!(table, "{:<10} {:<25} {:<10}", position + 1, name, points);
    }
    table
}

/// Write the driver table followed by the constructor table.
pub fn write_standings(out: &mut impl Write, standings: &FinalStandings) -> io::Result<()> {
    out.write_all(render_table("Driver Standings", &standings.ranked_drivers()).as_bytes())?;
    out.write_all(
        render_table("Constructor Standings", &standings.ranked_constructors()).as_bytes(),
    )?;
    out.flush()
}
