//! The interactive menu loop.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::common::{Error, ProductId, Result};
use crate::inventory::Inventory;
use crate::report::{ExportOutcome, Listing};
use crate::storage::record::{Product, ProductUpdate};
use crate::storage::RewriteOutcome;

use super::prompt::{parse_int, Prompter};
use super::table;

const BANNER: &str = "\
=====================================================
||                                                 ||
||         WELCOME TO INVENTORY MANAGEMENT         ||
||                                                 ||
||      Manage Products | Suppliers | Reports      ||
||                                                 ||
=====================================================
";

const MENU: &str = "\
=== Inventory Management System ===
1. Add Product
2. View Products
3. Search Product
4. Edit Product
5. Delete Product
6. Low Stock Report
7. Export To CSV
8. Exit
";

/// One numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Edit,
    Delete,
    LowStock,
    Export,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::View),
            3 => Some(MenuChoice::Search),
            4 => Some(MenuChoice::Edit),
            5 => Some(MenuChoice::Delete),
            6 => Some(MenuChoice::LowStock),
            7 => Some(MenuChoice::Export),
            8 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Drives an [`Inventory`] from line-based input.
///
/// Failures of inventory operations are printed and the loop continues.
/// Only a closed input (normal end) or a broken terminal ends `run`.
pub struct Session<R, W> {
    inventory: Inventory,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            prompt: Prompter::new(input, output),
        }
    }

    /// Run the menu until Exit is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        match self.menu_loop() {
            Err(Error::InputClosed) => {
                debug!("input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            write!(self.prompt.out(), "{}\n{}", BANNER, MENU)?;
            let answer = self.prompt.line("Enter choice: ")?;

            let Some(number) = parse_int(&answer) else {
                writeln!(self.prompt.out(), "Invalid choice! Try again.")?;
                continue;
            };

            match MenuChoice::from_number(number) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.prompt.out(), "Exiting program...")?;
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.prompt.out(), "Invalid choice! Try again.")?,
            }

            self.prompt.pause()?;
            writeln!(self.prompt.out())?;
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        debug!(?choice, "menu action");
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::View => self.view(),
            MenuChoice::Search => self.search(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::LowStock => self.low_stock(),
            MenuChoice::Export => self.export(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add(&mut self) -> Result<()> {
        let name = self.prompt.line("Enter product name: ")?;
        let id = self.prompt.int("Enter product id: ")?;
        let category = self.prompt.line("Enter product category: ")?;
        let quantity = self.prompt.int("Enter Quantity: ")?;
        let price = self.prompt.price("Enter Price: ")?;
        let supplier = self.prompt.line("Enter Supplier Name: ")?;

        let product = Product::new(id, name, category, quantity, price, supplier);
        match self.inventory.add(&product) {
            Ok(()) => writeln!(self.prompt.out(), "\nProduct added successfully.")?,
            Err(e) => writeln!(self.prompt.out(), "Write failed! Record not saved. ({})", e)?,
        }
        Ok(())
    }

    fn view(&mut self) -> Result<()> {
        match self.inventory.list() {
            Ok(Listing::NoInventory) => writeln!(self.prompt.out(), "No inventory data found.")?,
            Ok(Listing::Products(products)) => {
                let out = self.prompt.out();
                writeln!(out, "\n{}", table::inventory_header())?;
                for product in &products {
                    writeln!(out, "{}", table::inventory_row(product))?;
                }
            }
            Err(e) => writeln!(self.prompt.out(), "Error reading inventory: {}", e)?,
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        if !self.inventory.store().exists() {
            writeln!(self.prompt.out(), "No inventory data found.")?;
            return Ok(());
        }

        let id = ProductId::new(self.prompt.int("Enter product ID to search: ")?);
        match self.inventory.find(id) {
            Ok(Some(product)) => {
                writeln!(self.prompt.out(), "\nProduct Found:\n{}", table::details(&product))?
            }
            Ok(None) => writeln!(self.prompt.out(), "Product with ID {} not found.", id)?,
            Err(e) => writeln!(self.prompt.out(), "Error reading inventory: {}", e)?,
        }
        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        if !self.inventory.store().exists() {
            writeln!(self.prompt.out(), "No inventory data found.")?;
            return Ok(());
        }

        let id = ProductId::new(self.prompt.int("Enter product ID to edit: ")?);
        match self.inventory.find(id) {
            Ok(Some(_)) => {}
            Ok(None) => {
                writeln!(self.prompt.out(), "Product ID {} not found.", id)?;
                return Ok(());
            }
            Err(e) => {
                writeln!(self.prompt.out(), "Error reading inventory: {}", e)?;
                return Ok(());
            }
        }

        writeln!(self.prompt.out(), "Editing product {}...", id)?;
        let update = ProductUpdate {
            name: Some(self.prompt.line("Enter new name: ")?),
            category: Some(self.prompt.line("Enter new category: ")?),
            quantity: Some(self.prompt.int("Enter new quantity: ")?),
            price: Some(self.prompt.price("Enter new price: ")?),
            supplier: Some(self.prompt.line("Enter new supplier: ")?),
        };

        let result = self.inventory.edit(id, &update);
        self.report_rewrite(result, id, "edit", "Product updated successfully!")
    }

    fn delete(&mut self) -> Result<()> {
        if !self.inventory.store().exists() {
            writeln!(self.prompt.out(), "No inventory data found.")?;
            return Ok(());
        }

        let id = ProductId::new(self.prompt.int("Enter product ID to delete: ")?);
        let result = self.inventory.delete(id);
        if matches!(result, Ok(RewriteOutcome::Applied)) {
            writeln!(self.prompt.out(), "Deleting product ID {}...", id)?;
        }
        self.report_rewrite(result, id, "delete", "Product deleted successfully!")
    }

    fn report_rewrite(
        &mut self,
        result: Result<RewriteOutcome>,
        id: ProductId,
        action: &str,
        success: &str,
    ) -> Result<()> {
        let out = self.prompt.out();
        match result {
            Ok(RewriteOutcome::Applied) => writeln!(out, "{}", success)?,
            Ok(RewriteOutcome::NotFound) => writeln!(out, "Product ID {} not found.", id)?,
            Ok(RewriteOutcome::NoInventory) => writeln!(out, "No inventory data found.")?,
            Err(Error::Finalize { staged, source, .. }) => {
                writeln!(out, "Failed to finalize {}: {}", action, source)?;
                if let Some(path) = staged {
                    writeln!(out, "Updated inventory was kept at {}", path.display())?;
                }
            }
            Err(e) => writeln!(out, "Write failed during {}! ({})", action, e)?,
        }
        Ok(())
    }

    fn low_stock(&mut self) -> Result<()> {
        let listing = match self.inventory.low_stock() {
            Ok(listing) => listing,
            Err(e) => {
                writeln!(self.prompt.out(), "Error reading inventory: {}", e)?;
                return Ok(());
            }
        };

        let out = self.prompt.out();
        match listing {
            Listing::NoInventory => writeln!(out, "No records found!")?,
            Listing::Products(products) => {
                writeln!(out, "\n*** Low Stock Report (Quantity < 10) ***")?;
                writeln!(out, "{}", table::low_stock_header())?;
                for product in &products {
                    writeln!(out, "{}", table::low_stock_row(product))?;
                }
                if products.is_empty() {
                    writeln!(out, "All good. No low-stock items.")?;
                }
            }
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let result = self.inventory.export_csv();
        let target = self.inventory.export_path().display().to_string();
        let out = self.prompt.out();
        match result {
            Ok(ExportOutcome::Exported { .. }) => {
                writeln!(out, "Inventory exported successfully to {}", target)?
            }
            Ok(ExportOutcome::NoInventory) => writeln!(out, "No records found!")?,
            Err(e) => writeln!(out, "Error exporting CSV file: {}", e)?,
        }
        Ok(())
    }
}
