//! Scripted keypad session
//!
//! Run with: `cargo run -p keypad-calc --example keypad_session`

use keypad_calc::prelude::*;

fn main() -> Result<(), CalcError> {
    println!("{}\n", Keypad::new().render_text());

    let mut driver = RecordingDriver::new();
    driver.press_str("12+7=")?;
    driver.press_str("*2=")?;
    driver.press_str("C3+-2=")?;
    driver.press_str("C7.5*2=")?;

    for step in driver.steps() {
        match &step.detail {
            Some(detail) => println!("{:>2}  {:<10} {:<12} ({detail})", step.key, step.outcome, step.display),
            None => println!("{:>2}  {:<10} {}", step.key, step.outcome, step.display),
        }
    }

    println!("\nHistory:\n{}", driver.controller().history().export_formatted());
    Ok(())
}
