//! Numeric helpers for discrete distributions

/// Largest `n` for which `C(n, k)` is built exactly in `u128`.
///
/// The running product `C(n, i) * (n - i)` stays below `u128::MAX` up to here.
const EXACT_CHOOSE_LIMIT: u64 = 120;

/// Natural log of the gamma function (Lanczos approximation, g = 7)
pub fn gamma_ln(x: f64) -> f64 {
    if x <= 0.0 {
        return f64::INFINITY;
    }

    const COEFFS: [f64; 8] = [
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];

    let g = 7.0;
    let z = x - 1.0;

    let mut sum = 0.99999999999980993;
    for (i, &c) in COEFFS.iter().enumerate() {
        sum += c / (z + i as f64 + 1.0);
    }

    let t = z + g + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (z + 0.5) * t.ln() - t + sum.ln()
}

/// Exact binomial coefficient, or `None` when `n` is too large for `u128`
pub fn choose_exact(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    if n > EXACT_CHOOSE_LIMIT {
        return None;
    }
    let k = k.min(n - k);
    let mut c: u128 = 1;
    for i in 0..k {
        // C(n, i+1) = C(n, i) * (n - i) / (i + 1), always integral
        c = c * (n - i) as u128 / (i + 1) as u128;
    }
    Some(c)
}

/// log(C(n, k)) via log-gamma. Callers guarantee `k <= n`.
pub fn ln_choose(n: u64, k: u64) -> f64 {
    // Widen before adding one so n = u64::MAX cannot overflow
    gamma_ln(n as f64 + 1.0) - gamma_ln(k as f64 + 1.0) - gamma_ln((n - k) as f64 + 1.0)
}

/// Binomial PMF without argument validation. Callers guarantee `p ∈ [0, 1]`.
pub fn binom_pmf_f64(k: u64, n: u64, p: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    if p == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }

    match choose_exact(n, k) {
        Some(coef) => {
            let q = 1.0 - p;
            coef as f64 * p.powi(k as i32) * q.powi((n - k) as i32)
        }
        None => {
            // log(PMF) = log(C(n,k)) + k*log(p) + (n-k)*log(1-p)
            let log_prob = (k as f64) * p.ln() + ((n - k) as f64) * (1.0 - p).ln();
            (ln_choose(n, k) + log_prob).exp().min(1.0)
        }
    }
}
