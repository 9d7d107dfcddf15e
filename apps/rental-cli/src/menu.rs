//! # Interactive Menu
//!
//! Line-oriented text menu driving the commands.
//!
//! ```text
//! ===== Car Rental System =====
//! 1. View Available Cars
//! 2. Rent a Car
//! 3. Return a Car
//! 4. View Rental History
//! 5. View Rental Log
//! 6. Add a Car
//! 7. Add a Customer
//! 8. Exit
//! Enter your choice:
//! ```
//!
//! Bad input prints a message and shows the menu again. End of input ends
//! the session like "Exit" does.

use std::io::{self, BufRead, Write};

use rental_core::{Money, RentalDay, RentalStatus};

use crate::commands::{car, customer, rental};
use crate::error::ApiError;
use crate::state::{ConfigState, LedgerState};

/// What the loop does after an option ran.
enum Flow {
    Continue,
    Quit,
}

/// Reads one answer or quits the session on end of input.
macro_rules! ask {
    ($menu:expr, $label:expr) => {
        match $menu.prompt($label)? {
            Some(answer) => answer,
            None => return Ok(Flow::Quit),
        }
    };
}

/// A menu session over any line reader and writer.
pub struct Menu<'a, R, W> {
    ledger: &'a LedgerState,
    config: &'a ConfigState,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(ledger: &'a LedgerState, config: &'a ConfigState, input: R, output: W) -> Self {
        Menu {
            ledger,
            config,
            input,
            output,
        }
    }

    /// Shows the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let flow = match choice.trim().parse::<u32>() {
                Ok(1) => self.view_available_cars()?,
                Ok(2) => self.rent_car()?,
                Ok(3) => self.return_car()?,
                Ok(4) => self.view_rental_history()?,
                Ok(5) => self.view_rental_log()?,
                Ok(6) => self.add_car()?,
                Ok(7) => self.add_customer()?,
                Ok(8) => Flow::Quit,
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(
            self.output,
            "Thank you for using the {}!",
            self.config.system_name
        )?;
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n===== {} =====", self.config.system_name)?;
        writeln!(self.output, "1. View Available Cars")?;
        writeln!(self.output, "2. Rent a Car")?;
        writeln!(self.output, "3. Return a Car")?;
        writeln!(self.output, "4. View Rental History")?;
        writeln!(self.output, "5. View Rental Log")?;
        writeln!(self.output, "6. Add a Car")?;
        writeln!(self.output, "7. Add a Customer")?;
        writeln!(self.output, "8. Exit")
    }

    // =========================================================================
    // Options
    // =========================================================================

    fn view_available_cars(&mut self) -> io::Result<Flow> {
        let brand = ask!(self, "Enter car brand to filter: ");
        let max_price = ask!(self, "Enter max price per day: ");
        let max_price = match max_price.parse::<Money>() {
            Ok(price) => price,
            Err(e) => return self.report(ApiError::from(e)),
        };
        let day = ask!(self, "Enter the rental day to quote (blank for current prices): ");
        let day = (!day.trim().is_empty()).then(|| RentalDay::new(day.trim()));

        let listings = car::list_available_cars(self.ledger, &brand, max_price, day.as_ref());

        writeln!(self.output, "\nAvailable Cars (Filtered):")?;
        if listings.is_empty() {
            writeln!(self.output, "No matching cars.")?;
        }
        for listing in listings {
            writeln!(
                self.output,
                "{} - {} {} ({}/day)",
                listing.id,
                listing.brand,
                listing.model,
                self.config.format_currency(listing.price_per_day)
            )?;
        }
        Ok(Flow::Continue)
    }

    fn rent_car(&mut self) -> io::Result<Flow> {
        let customer_id = ask!(self, "Enter your customer ID: ");
        let car_id = ask!(self, "Enter the car ID to rent: ");
        let days = ask!(self, "Enter rental days: ");
        let days = match days.trim().parse::<u32>() {
            Ok(days) => days,
            Err(_) => return self.report(ApiError::validation("days must be a whole number")),
        };
        let day = ask!(self, "Enter the rental day (e.g., Monday, Saturday; blank for today): ");
        let day = if day.trim().is_empty() {
            RentalDay::today()
        } else {
            RentalDay::new(day.trim())
        };

        match rental::rent_car(self.ledger, car_id.trim(), customer_id.trim(), days, &day) {
            Ok(outcome) => {
                writeln!(
                    self.output,
                    "Car rented successfully! Total price: {}",
                    self.config.format_currency(outcome.total_price)
                )?;
                writeln!(self.output, "Loyalty Points: {}", outcome.loyalty_points)?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn return_car(&mut self) -> io::Result<Flow> {
        let car_id = ask!(self, "Enter the car ID to return: ");

        match rental::return_car(self.ledger, car_id.trim()) {
            Ok(_) => {
                writeln!(self.output, "Car returned successfully.")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn view_rental_history(&mut self) -> io::Result<Flow> {
        let history = rental::list_rental_history(self.ledger);

        writeln!(self.output, "\nRental History:")?;
        if history.is_empty() {
            writeln!(self.output, "No active rentals.")?;
        }
        for row in history {
            writeln!(
                self.output,
                "Customer: {} | Car: {} {} | Days: {} | Total Price: {}",
                row.customer_name,
                row.brand,
                row.model,
                row.days,
                self.config.format_currency(row.total_price)
            )?;
        }
        Ok(Flow::Continue)
    }

    fn view_rental_log(&mut self) -> io::Result<Flow> {
        let log = rental::list_rental_log(self.ledger);

        writeln!(self.output, "\nRental Log:")?;
        if log.is_empty() {
            writeln!(self.output, "No rentals yet.")?;
        }
        for entry in log {
            let status = match entry.status {
                RentalStatus::Active => "active",
                RentalStatus::Returned => "returned",
            };
            let r = &entry.rental;
            writeln!(
                self.output,
                "[{}] {} | Customer: {} | Car: {} {} ({}) | From: {} | Days: {} | Total Price: {}",
                status,
                r.rented_at().format("%Y-%m-%d %H:%M"),
                r.customer_name(),
                r.brand(),
                r.model(),
                r.car_id(),
                r.rental_day(),
                r.days(),
                self.config.format_currency(r.total_price())
            )?;
        }
        Ok(Flow::Continue)
    }

    fn add_car(&mut self) -> io::Result<Flow> {
        let id = ask!(self, "Enter the new car ID: ");
        let brand = ask!(self, "Enter brand: ");
        let model = ask!(self, "Enter model: ");
        let price = ask!(self, "Enter base price per day: ");
        let price = match price.parse::<Money>() {
            Ok(price) => price,
            Err(e) => return self.report(ApiError::from(e)),
        };

        match car::add_car(self.ledger, &id, &brand, &model, price) {
            Ok(()) => {
                writeln!(self.output, "Car added successfully.")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn add_customer(&mut self) -> io::Result<Flow> {
        let id = ask!(self, "Enter the new customer ID: ");
        let name = ask!(self, "Enter customer name: ");

        match customer::add_customer(self.ledger, &id, &name) {
            Ok(()) => {
                writeln!(self.output, "Customer added successfully.")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    // =========================================================================
    // I/O Helpers
    // =========================================================================

    /// Prints `label`, then reads one line without its line ending.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn report(&mut self, err: ApiError) -> io::Result<Flow> {
        writeln!(self.output, "{}", err.message)?;
        Ok(Flow::Continue)
    }
}
