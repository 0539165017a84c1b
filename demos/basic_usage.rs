//! Basic usage example for the evariste library.
//!
//! This example walks through prime field arithmetic, extension field
//! construction, inversion, and random generator search.

use evariste::{Element, Field, Polynomial};

fn main() {
    println!("Evariste Library - Basic Usage Example\n");

    // Prime field arithmetic in GF(7)
    println!("Constructing GF(7)...");
    let gf7 = Field::prime(7).expect("7 is prime");
    let a = Element::from_integer(&gf7, 3);
    let b = Element::from_integer(&gf7, 5);

    println!("  a = {a}");
    println!("  b = {b}");
    println!("  a + b = {}", a.add(&b).expect("same field"));
    println!("  a * b = {}", a.mul(&b).expect("same field"));
    println!("  a / b = {}", a.div(&b).expect("b is nonzero"));
    println!("  a^(-1) = {}", a.inv().expect("a is nonzero"));
    println!();

    // The extension field GF(2^3) = GF(2)[x] / (x^3 + x + 1)
    println!("Constructing GF(2^3) mod x^3+x+1...");
    let gf2 = Field::prime(2).expect("2 is prime");
    let irr = Polynomial::new(&[1, 1, 0, 1], &gf2);
    let gf8 = Field::extension(2, 3, irr).expect("valid field parameters");

    let x = Element::new(Polynomial::new(&[0, 1], &gf2), &gf8).expect("degree fits");
    let x_inv = x.inv().expect("x is nonzero");
    println!("  x = {x}");
    println!("  x^(-1) = {x_inv}");
    println!("  x * x^(-1) = {}", x.mul(&x_inv).expect("same field"));
    println!();

    // Every element's multiplicative order divides |GF(8)*| = 7
    println!("Multiplicative orders in GF(2^3):");
    for e in gf8.units() {
        println!("  ord({e}) = {}", e.generated_subgroup().len());
    }
    println!();

    // Random generator search
    println!("Drawing a generator of GF(2^3)*...");
    let mut rng = rand::thread_rng();
    let g = Element::draw_generator(&gf8, Some(1000), &mut rng).expect("generators are plentiful");
    println!("  generator: {g}");

    let subgroup = g.generated_subgroup();
    println!("  it generates all {} units", subgroup.len());
}
