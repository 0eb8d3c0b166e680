use std::io::{BufRead, Write};

use crate::console;
use crate::errors::{DeskError, DeskResult};
use crate::handlers::rooms;
use crate::inventory::Inventory;
use crate::models::booking::Booking;
use crate::models::customer::Customer;

pub async fn book_room<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    input: &mut R,
    out: &mut W,
) -> DeskResult<()> {
    // 1. Collect the customer details, raw text as entered.
    let name = console::prompt_line(input, out, "Enter customer name: ")?;
    let contact = console::prompt_line(input, out, "Enter contact: ")?;
    let address = console::prompt_line(input, out, "Enter address: ")?;
    let email = console::prompt_line(input, out, "Enter email: ")?;

    // 2. Show what can still be booked.
    rooms::view_available(inventory, out)?;

    // 3. Select rooms until the operator enters 0.
    let mut booked = Vec::new();
    let mut total = 0.0;
    loop {
        let number =
            console::prompt_i64(input, out, "Enter room number to book (or 0 to finish): ")?;
        if number == 0 {
            break;
        }
        match inventory.book(number).await {
            Some(price) => {
                booked.push(number);
                total += price;
                writeln!(out, "Room {} booked successfully.", number)?;
            }
            None => {
                writeln!(out, "Room not available or invalid room number.")?;
            }
        }
    }

    if booked.is_empty() {
        writeln!(out, "No rooms booked.")?;
        return Ok(());
    }

    // 4. Persist the booking and settle the bill.
    let customer = Customer::new(name, contact, address, email);
    inventory.save_booking(&Booking::new(customer, booked)).await;

    writeln!(out)?;
    writeln!(out, "Booking Complete!")?;
    writeln!(out, "Total Amount: {:.1}", total)?;
    Ok(())
}

pub fn cancel_booking() -> DeskResult<()> {
    Err(DeskError::Unsupported("cancel booking"))
}

pub fn search_booking_by_customer() -> DeskResult<()> {
    Err(DeskError::Unsupported("search booking by customer"))
}
