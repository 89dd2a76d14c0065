//! Open/Closed Principle
//!
//! Code should be open for extension but closed for modification. Filtering
//! products by a new criterion should mean writing a new specification, not
//! editing the filter.
//!
//! Run with: cargo run --bin solid_02_ocp

use colored::Colorize;
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Size {
    Small,
    Medium,
    Large,
    Giant,
}

impl Size {
    const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::Giant];
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
            Size::Giant => "giant",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
    White,
}

impl Color {
    const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Black,
        Color::White,
    ];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Black => "black",
            Color::White => "white",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Product {
    name: String,
    size: Size,
    color: Color,
}

impl Product {
    fn new(name: impl Into<String>, size: Size, color: Color) -> Self {
        Self {
            name: name.into(),
            size,
            color,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// The wrong way: one method per criterion, and one per combination
// =============================================================================

struct ProductFilter;

impl ProductFilter {
    fn by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        products.iter().filter(|p| p.size == size).collect()
    }

    fn by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        products.iter().filter(|p| p.color == color).collect()
    }

    // Every new combination grows another method here.
    fn by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| p.size == size && p.color == color)
            .collect()
    }
}

// =============================================================================
// The better way: specifications plus one generic filter
// =============================================================================

trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

/// Satisfied when both inner specifications are.
struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

// Lets boxed specifications be combined like concrete ones.
impl<T, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

trait Filter<T> {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}

struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| spec.is_satisfied(item))
            .collect()
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Bike", Size::Small, Color::Blue),
        Product::new("Motorcycle", Size::Small, Color::Green),
        Product::new("Car", Size::Medium, Color::Green),
        Product::new("Truck", Size::Large, Color::Red),
        Product::new("Train", Size::Large, Color::Yellow),
    ]
}

fn print_names(title: &str, products: &[&Product]) {
    println!("\n--{title}:");
    if products.is_empty() {
        println!("(none)");
    } else {
        println!("{}", products.iter().map(|p| p.name()).join("\n"));
    }
}

fn main() {
    println!("=== Open/Closed Principle ===\n");
    let products = sample_products();

    println!("{}", "--- The wrong way to filter things ---".red());
    let wrong_filter = ProductFilter;
    let small_things = wrong_filter.by_size(&products, Size::Small);
    print_names("Small things", &small_things);
    let green_things = wrong_filter.by_color(&products, Color::Green);
    print_names("Green things", &green_things);
    let (large, yellow) = (Size::Large, Color::Yellow);
    let large_yellow_things = wrong_filter.by_size_and_color(&products, large, yellow);
    print_names("Large and yellow things", &large_yellow_things);

    println!("\n{}", "--- The right way to filter things ---".green());
    let filter = BetterFilter;

    let small = SizeSpecification::new(Size::Small);
    print_names("Small things", &filter.filter(&products, &small));

    let green = ColorSpecification::new(Color::Green);
    print_names("Green things", &filter.filter(&products, &green));

    let large_and_yellow = AndSpecification::new(
        SizeSpecification::new(Size::Large),
        ColorSpecification::new(Color::Yellow),
    );
    let large_yellow_things = filter.filter(&products, &large_and_yellow);
    print_names("Large and yellow things", &large_yellow_things);

    let giant = SizeSpecification::new(Size::Giant);
    print_names("Giant things", &filter.filter(&products, &giant));

    println!("\n--Things per color:");
    for color in Color::ALL {
        let spec = ColorSpecification::new(color);
        let count = filter.filter(&products, &spec).len();
        println!("{color}: {count}");
    }
}
