use crate::Complex;

/// Full discrete convolution, which is exactly polynomial multiplication on
/// coefficient vectors
pub(crate) fn convolve_1d(input: &[Complex], kernel: &[Complex]) -> Vec<Complex> {
    let input_len = input.len();
    let kernel_len = kernel.len();

    if input_len == 0 || kernel_len == 0 {
        return vec![];
    }
    let output_len = input_len + kernel_len - 1;

    let mut output = vec![Complex::new(0.0, 0.0); output_len];
    for (i, a) in input.iter().enumerate() {
        for (j, b) in kernel.iter().enumerate() {
            output[i + j] += *a * *b;
        }
    }
    output
}
