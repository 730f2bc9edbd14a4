//! Cache inspection commands

use crate::cli::CommandContext;
use crate::error::Result;

pub fn stats(ctx: &CommandContext) -> Result<()> {
    match ctx.cache().stats()? {
        Some(stats) => {
            println!("Entries:  {}", stats.total_entries);
            println!("Fresh:    {}", stats.fresh_entries);
            println!("Stale:    {}", stats.stale_entries);
            println!("Size:     {} bytes", stats.total_size_bytes);
        }
        None => println!("Cache is disabled."),
    }
    Ok(())
}

pub fn clear(ctx: &CommandContext) -> Result<()> {
    let stats = ctx.cache().clear_all()?;
    println!("Removed {} cache entries.", stats.entries_removed);
    Ok(())
}
