//! Manager driver - single-command scenarios against an [`OrderManager`]
//!
//! Each command exercises one manager operation with a fixed order:
//!
//! | Command | Scenario |
//! |---------|----------|
//! | `P` | place Steak at table 1, seat 1 |
//! | `G` | place Chicken at table 2, seat 2, print the table 2 total |
//! | `C` | clear table 1 |
//! | `A` | build Steak / Caesar / Mixed Drink and add the included dessert |

use crate::orders::OrderManager;
use shared::error::AppError;
use shared::models::{Beverage, Entree, Salad};
use shared::order::OrderInput;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "P=PlaceOrder C=ClearTable G=GetCheckTotal A=AddIncludedDessert : ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCommand {
    PlaceOrder,
    ClearTable,
    GetCheckTotal,
    AddIncludedDessert,
}

impl DriverCommand {
    /// Parse the first non-blank character, case-insensitive
    ///
    /// Anything unrecognised yields `None`, which the driver treats as "do nothing".
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim_start().chars().next()?.to_ascii_uppercase() {
            'P' => Some(Self::PlaceOrder),
            'C' => Some(Self::ClearTable),
            'G' => Some(Self::GetCheckTotal),
            'A' => Some(Self::AddIncludedDessert),
            _ => None,
        }
    }
}

/// Show the prompt and read one line
pub fn read_command(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<String> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Run one scenario
///
/// Manager failures are logged with their error code and do not abort the
/// driver; only output errors are returned.
pub fn run_command(
    manager: &OrderManager,
    command: DriverCommand,
    out: &mut impl Write,
) -> io::Result<()> {
    tracing::info!(?command, "Running driver command");
    let result = match command {
        DriverCommand::PlaceOrder => manager.place_order(1, 1, OrderInput::new(Entree::Steak)),
        DriverCommand::GetCheckTotal => {
            match manager
                .place_order(2, 2, OrderInput::new(Entree::Chicken))
                .and_then(|()| manager.get_check_total(2))
            {
                Ok(total) => {
                    writeln!(out, "The Total is {}", total)?;
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        DriverCommand::ClearTable => {
            manager.clear_table(1);
            Ok(())
        }
        DriverCommand::AddIncludedDessert => {
            let mut order = OrderInput::new(Entree::Steak)
                .with_salad(Salad::Caesar)
                .with_beverage(Beverage::MixedDrink);
            let applied = manager.add_included_dessert(&mut order);
            tracing::info!(applied, dessert = %order.dessert, "Included dessert checked");
            Ok(())
        }
    };

    if let Err(err) = result {
        let err = AppError::from(err);
        tracing::warn!(code = %err.code, error = %err, "Driver command failed");
    }
    Ok(())
}
