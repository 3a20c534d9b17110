use num::cast;

/// Cast with loss of precision, explicitly clamping out of bounds values instead
/// of panicking (also shuts up clippy 📎)
pub(crate) fn usize_to_f64(x: usize) -> f64 {
    cast(x).unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod test {
    use super::usize_to_f64;

    #[test]
    fn exact_for_small_values() {
        assert_eq!(usize_to_f64(3), 3.0);
        assert_eq!(usize_to_f64(1 << 52), 4_503_599_627_370_496.0);
    }
}
