//! Liskov Substitution Principle
//!
//! If `S` stands in for `T`, every property a caller can observe through `T`
//! must still hold. A square that pretends to be a rectangle breaks the
//! rectangle contract: setting the height also changes the width.
//!
//! There is no implementation inheritance here. `Rectangle` and `Square` are
//! independent types behind one trait, and the violation comes purely from
//! `Square`'s setters.
//!
//! Run with: cargo run --bin solid_03_lsp

use colored::Colorize;

trait Rectangular {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    /// Changes the height only; the width stays as it was.
    fn set_height(&mut self, height: u32);

    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Rectangular for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Square {
    side: u32,
}

impl Square {
    fn new(side: u32) -> Self {
        Self { side }
    }
}

// Both setters move both dimensions, which is what breaks substitutability.
impl Rectangular for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }

    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AreaCheck {
    expected: u64,
    actual: u64,
}

impl AreaCheck {
    fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

/// Code written against the rectangle contract: keep the width, change the
/// height, and predict the new area.
fn stretch_height(shape: &mut dyn Rectangular, new_height: u32) -> AreaCheck {
    let width = shape.width();
    shape.set_height(new_height);
    AreaCheck {
        expected: u64::from(width) * u64::from(new_height),
        actual: shape.area(),
    }
}

fn report(label: &str, check: AreaCheck) {
    let line = format!("{label}: expected {}, got {}", check.expected, check.actual);
    if check.holds() {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
}

fn main() {
    println!("=== Liskov Substitution Principle ===\n");

    let mut rectangle = Rectangle::new(10, 10);
    report("Rectangle", stretch_height(&mut rectangle, 20));

    // LSP violated: a square cannot honour the rectangle contract.
    let mut square = Square::new(10);
    report("Square as rectangle", stretch_height(&mut square, 20));

    square.set_width(4);
    println!(
        "Square after set_width(4): {}x{}",
        square.width(),
        square.height()
    );
}
