use std::io::{BufRead, Write};

use crate::console;
use crate::errors::{DeskError, DeskResult};
use crate::handlers::{bookings, rooms};
use crate::inventory::Inventory;

/// Runs the operator menu until Exit is chosen or the input closes.
pub async fn run<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    input: &mut R,
    out: &mut W,
) -> DeskResult<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "1. Book Room")?;
        writeln!(out, "2. View Available Rooms")?;
        writeln!(out, "3. Cancel Booking")?;
        writeln!(out, "4. Search Booking by Customer")?;
        writeln!(out, "5. List All Rooms")?;
        writeln!(out, "6. Exit")?;

        match console::prompt_i64(input, out, "Choice: ")? {
            1 => bookings::book_room(inventory, input, out).await?,
            2 => rooms::view_available(inventory, out)?,
            3 => note_unsupported(bookings::cancel_booking(), out)?,
            4 => note_unsupported(bookings::search_booking_by_customer(), out)?,
            5 => rooms::list_all(inventory, out)?,
            6 => {
                writeln!(out, "Thank you for using Serenity Suites!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Try again.")?,
        }
    }
}

/// Unsupported menu actions tell the operator and keep the session going.
/// Anything else still ends the loop.
fn note_unsupported<W: Write>(result: DeskResult<()>, out: &mut W) -> DeskResult<()> {
    match result {
        Err(err @ DeskError::Unsupported(_)) => {
            writeln!(out, "{}", err)?;
            Ok(())
        }
        other => other,
    }
}
