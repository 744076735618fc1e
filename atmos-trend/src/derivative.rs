//! Derivadas numéricas com passo uniforme

/// Gradiente de diferenças centrais com passo `h`
///
/// Pontos internos usam `(y[i+1] − y[i−1]) / 2h`; as bordas usam
/// diferenças de um lado, `(y[1] − y[0]) / h` e `(y[n−1] − y[n−2]) / h`.
/// Com menos de 2 valores devolve um vetor vazio.
pub fn gradient(values: &[f64], h: f64) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n);
    out.push((values[1] - values[0]) / h);
    for i in 1..n - 1 {
        out.push((values[i + 1] - values[i - 1]) / (2.0 * h));
    }
    out.push((values[n - 1] - values[n - 2]) / h);
    out
}

/// Passo médio entre amostras consecutivas
///
/// Com espaçamento irregular é uma aproximação: todas as derivadas usam
/// este passo único, não o intervalo real de cada par.
pub fn mean_step(times: &[f64]) -> Option<f64> {
    if times.len() < 2 {
        return None;
    }
    let span = times[times.len() - 1] - times[0];
    Some(span / (times.len() - 1) as f64)
}
