//! Configuration commands
//!
//! These run before the command context is built: `set-url` is the way out
//! of the no-API-origin state that every other command errors on.

use crate::config::Config;
use crate::error::Result;

pub fn show(config_path: Option<&str>) -> Result<()> {
    let config = Config::load_at(config_path)?;

    match config.api_url() {
        Ok(url) => println!("API origin: {}", url),
        Err(_) => println!("API origin: <not configured>"),
    }
    println!("Page size:  {}", config.preferences.page_size);
    if let Some(ref format) = config.preferences.format {
        println!("Format:     {}", format);
    }
    Ok(())
}

pub fn set_url(config_path: Option<&str>, url: String) -> Result<()> {
    let mut config = Config::load_at(config_path)?;
    config.api_url = Some(url);
    config.save_at(config_path)?;
    println!("API origin saved.");
    Ok(())
}
