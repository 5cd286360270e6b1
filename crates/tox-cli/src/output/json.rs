use serde::Serialize;
use tox_core::error::ToxError;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), ToxError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
