/// Vector dot product.
#[must_use]
pub fn dot(left: &[f64], right: &[f64]) -> f64 {
    left.iter()
        .zip(right)
        .map(|(left, right)| left * right)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_ok() {
        assert!((dot(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]) - 34.0).abs() < f64::EPSILON);
    }
}
