//! Closed-form approximations of an ellipse's circumference.
//!
//! Every function takes the major and minor semi-axes `(a, b)` and is
//! symmetric in them. None of them guard their inputs: negative or zero axes
//! produce whatever the arithmetic yields, NaN included.
//!
//! Inputs, results and the `h`/`s` intermediates are `f32`. Square roots,
//! powers and every product with [`PI`] are taken in `f64` and narrowed on
//! return, so the printed table reproduces the reference tool's digits.

use crate::domain::model::Formula;

/// Truncated value of π shared by every formula.
pub const PI: f64 = 3.14159;

/// Ratio `(a - b)² / (a + b)²` used by the Ramanujan II and Hudson formulas.
fn h_ratio(a: f32, b: f32) -> f32 {
    (f64::from(a - b).powi(2) / f64::from(a + b).powi(2)) as f32
}

/// `(aˢ/2 + bˢ/2)^(1/s)` with the reciprocal taken in `f32`.
fn power_mean(a: f32, b: f32, s: f32) -> f64 {
    let exponent = f64::from(s);
    (f64::from(a).powf(exponent) / 2.0 + f64::from(b).powf(exponent) / 2.0)
        .powf(f64::from(1.0 / s))
}

pub fn ramanujan_first(a: f32, b: f32) -> f32 {
    let linear = 3.0 * (a + b);
    let root = f64::from((3.0 * a + b) * (a + b * 3.0)).sqrt();
    (PI * (f64::from(linear) - root)) as f32
}

pub fn ramanujan_second(a: f32, b: f32) -> f32 {
    let h = h_ratio(a, b);
    let root = f64::from(4.0 - 3.0 * h).powf(0.5);
    (PI * f64::from(a + b) * (1.0 + f64::from(3.0 * h) / (10.0 + root))) as f32
}

pub fn muir(a: f32, b: f32) -> f32 {
    let s: f32 = 1.5;
    (2.0 * PI * power_mean(a, b, s)) as f32
}

/// `1 / (1 - h/4)` is unguarded and diverges at `h = 4`.
pub fn hudson(a: f32, b: f32) -> f32 {
    let h = h_ratio(a, b);
    let bracket = (a + b) * (3.0 * (1.0 + h / 4.0) + 1.0 / (1.0 - h / 4.0));
    (0.25 * PI * f64::from(bracket)) as f32
}

pub fn holder(a: f32, b: f32) -> f32 {
    let s = (2f64.ln() / (PI / 2.0).ln()) as f32;
    let exponent = f64::from(s);
    (4.0 * (f64::from(a).powf(exponent) + f64::from(b).powf(exponent)).powf(f64::from(1.0 / s)))
        as f32
}

pub fn david_cantrell(a: f32, b: f32) -> f32 {
    let s = 0.825056_f64 as f32;
    let linear = f64::from(4.0 * (a + b));
    (linear - 2.0 * (4.0 - PI) * f64::from(a) * f64::from(b) / power_mean(a, b, s)) as f32
}

/// All formulas in report order.
pub static FORMULAS: [Formula; 6] = [
    Formula {
        key: "ramanujan1",
        name: "Ramanujan's First Approximation",
        evaluate: ramanujan_first,
    },
    Formula {
        key: "ramanujan2",
        name: "Ramanujan's Second Approximation",
        evaluate: ramanujan_second,
    },
    Formula {
        key: "muir",
        name: "Muir's Formula",
        evaluate: muir,
    },
    Formula {
        key: "hudson",
        name: "Hudson's Formula",
        evaluate: hudson,
    },
    Formula {
        key: "holder",
        name: "Holder's Mean",
        evaluate: holder,
    },
    Formula {
        key: "cantrell",
        name: "David Cantrell's Formula",
        evaluate: david_cantrell,
    },
];

/// Looks a formula up by short key or display name, ignoring ASCII case.
pub fn find_formula(name: &str) -> Option<&'static Formula> {
    let wanted = name.trim();
    FORMULAS.iter().find(|formula| {
        formula.key.eq_ignore_ascii_case(wanted) || formula.name.eq_ignore_ascii_case(wanted)
    })
}
