pub mod complex;
pub mod is_zero;
pub mod linear;
pub mod quadratic;

#[cfg(test)]
mod test_roots;
