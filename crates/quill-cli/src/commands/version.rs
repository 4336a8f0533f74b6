use anyhow::Result;
use console::style;

pub fn execute() -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "{} - version {}",
        style("Quill").bold().blue(),
        style(version).bold()
    );
    Ok(())
}
